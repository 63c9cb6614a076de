//! Transient operator notifications.

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// An operation completed.
    Success,
    /// An operation failed; the message names the failure.
    Error,
}

/// A transient, dismissible notification.
///
/// At most one is shown at a time; a new notice replaces the previous
/// one. Raising a notice never touches any other UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Text shown to the operator.
    pub message: String,
    /// Presentation kind.
    pub severity: Severity,
}

impl Notice {
    /// A success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// An error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}
