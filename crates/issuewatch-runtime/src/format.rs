//! Notification text.

use std::borrow::Cow;
use std::time::Duration;

use issuewatch_github::Issue;

/// First line of every polling alert.
pub const NEW_ISSUE_PREFIX: &str = "NEW ISSUE!";

/// Telegram rejects longer messages.
pub const MAX_MESSAGE_CHARS: usize = 4096;

const ELLIPSIS: &str = "…";

/// `title`, `body` and link, separated by blank lines.
pub fn issue_message(issue: &Issue) -> String {
    compose(None, issue)
}

/// [`issue_message`] prefixed with [`NEW_ISSUE_PREFIX`].
pub fn new_issue_alert(issue: &Issue) -> String {
    compose(Some(NEW_ISSUE_PREFIX), issue)
}

/// Short human form of a window, e.g. `5m` or `1h 30m`.
pub fn describe_window(window: Duration) -> String {
    let secs = window.as_secs();
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);

    let parts: Vec<String> = [(h, "h"), (m, "m"), (s, "s")]
        .iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{}{}", n, unit))
        .collect();

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}

fn compose(prefix: Option<&str>, issue: &Issue) -> String {
    let head = match prefix {
        Some(p) => format!("{}\n\n{}", p, issue.title),
        None => issue.title.clone(),
    };
    let link = issue.link();

    // Only the body gives way when the message is too long.
    let overhead = head.chars().count() + link.chars().count() + 4;
    let body = truncate_chars(issue.body(), MAX_MESSAGE_CHARS.saturating_sub(overhead));

    let text = format!("{}\n\n{}\n\n{}", head, body, link);
    truncate_chars(&text, MAX_MESSAGE_CHARS).into_owned()
}

fn truncate_chars(s: &str, max: usize) -> Cow<'_, str> {
    if s.chars().count() <= max {
        return Cow::Borrowed(s);
    }
    if max == 0 {
        return Cow::Borrowed("");
    }
    let keep = max - ELLIPSIS.chars().count();
    let end = s.char_indices().nth(keep).map(|(i, _)| i).unwrap_or(s.len());
    Cow::Owned(format!("{}{}", &s[..end], ELLIPSIS))
}
