//! Utility functions for GitHub operations

/// Join URL fragments with a single `/` between them
///
/// Leading and trailing slashes of each fragment are dropped before joining,
/// except the leading part of the first fragment, so absolute URLs survive.
/// Empty fragments are skipped.
///
/// # Example
/// ```rust
/// use ghfeed_github::urijoin;
///
/// let url = urijoin(&["https://api.github.com/", "users", "octocat", "events"]);
/// assert_eq!(url, "https://api.github.com/users/octocat/events");
/// ```
pub fn urijoin(parts: &[&str]) -> String {
    let mut joined = String::new();

    for (i, part) in parts.iter().enumerate() {
        let part = if i == 0 {
            part.trim_end_matches('/')
        } else {
            part.trim_matches('/')
        };

        if part.is_empty() {
            continue;
        }

        if !joined.is_empty() {
            joined.push('/');
        }
        joined.push_str(part);
    }

    joined
}
