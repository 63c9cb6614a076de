//! Logging helpers.

/// Maximum number of characters of a response body echoed into the debug log.
const LOG_BODY_LIMIT: usize = 500;

/// Truncate a response body for logging.
///
/// Certificate blobs and long command texts would otherwise flood the log.
#[must_use]
pub fn truncate_for_log(body: &str) -> String {
    if body.chars().count() <= LOG_BODY_LIMIT {
        return body.to_string();
    }
    let head: String = body.chars().take(LOG_BODY_LIMIT).collect();
    format!("{head}... ({} bytes total)", body.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log("{\"code\":0}"), "{\"code\":0}");
    }

    #[test]
    fn long_body_truncated() {
        let body = "x".repeat(2000);
        let out = truncate_for_log(&body);
        assert!(out.starts_with(&"x".repeat(500)));
        assert!(out.ends_with("(2000 bytes total)"));
    }
}
