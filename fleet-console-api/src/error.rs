use serde::{Deserialize, Serialize};

/// Unified error type for all fleet-management API operations.
///
/// Exactly two failure families exist at the console boundary:
///
/// - [`Application`](Self::Application) — the server answered with a
///   non-zero envelope code; the message is server-supplied and shown to
///   the operator verbatim.
/// - Transport errors ([`Network`](Self::Network), [`Timeout`](Self::Timeout),
///   [`Decode`](Self::Decode), [`Serialization`](Self::Serialization)) —
///   the request failed before, during, or after transport; the message
///   is synthesized locally and carries a prefix so it cannot be mistaken
///   for a server message.
///
/// No variant is retried automatically; recovery is always a manual
/// re-trigger of the originating action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ApiError {
    /// The server processed the request and rejected it (envelope `code != 0`).
    Application {
        /// Application status code from the response envelope.
        code: i64,
        /// Server-supplied message, or a per-endpoint fallback when empty.
        message: String,
    },

    /// A network-level error occurred (connection refused, DNS failure,
    /// connection reset mid-body, etc.).
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The response body could not be decoded into the endpoint's envelope
    /// shape. Shape mismatch fails closed into this variant rather than
    /// being partially interpreted.
    Decode {
        /// Details about the decode failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ApiError {
    /// 是否为预期行为（服务器明确拒绝），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Application { .. })
    }

    /// Whether this is a transport-class failure (everything that is not
    /// an application-level rejection).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::Application { .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Application { message, .. } => {
                write!(f, "{message}")
            }
            Self::Network { detail } => {
                write!(f, "Request error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::Decode { detail } => {
                write!(f, "Response decode error: {detail}")
            }
            Self::Serialization { detail } => {
                write!(f, "Request encode error: {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_application_uses_server_message() {
        let e = ApiError::Application {
            code: 5,
            message: "duplicate address".to_string(),
        };
        assert_eq!(e.to_string(), "duplicate address");
    }

    #[test]
    fn display_network_is_prefixed() {
        let e = ApiError::Network {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Request error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = ApiError::Timeout {
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "Request timeout: 30s elapsed");
    }

    #[test]
    fn display_decode() {
        let e = ApiError::Decode {
            detail: "missing field `total`".to_string(),
        };
        assert_eq!(e.to_string(), "Response decode error: missing field `total`");
    }

    #[test]
    fn display_serialization() {
        let e = ApiError::Serialization {
            detail: "key must be a string".to_string(),
        };
        assert_eq!(e.to_string(), "Request encode error: key must be a string");
    }

    #[test]
    fn application_is_expected() {
        let e = ApiError::Application {
            code: 1,
            message: "nope".to_string(),
        };
        assert!(e.is_expected());
        assert!(!e.is_transport());
    }

    #[test]
    fn transport_variants_are_unexpected() {
        let variants = vec![
            ApiError::Network {
                detail: "x".to_string(),
            },
            ApiError::Timeout {
                detail: "x".to_string(),
            },
            ApiError::Decode {
                detail: "x".to_string(),
            },
            ApiError::Serialization {
                detail: "x".to_string(),
            },
        ];
        for e in &variants {
            assert!(!e.is_expected(), "unexpected classification: {e:?}");
            assert!(e.is_transport(), "unexpected classification: {e:?}");
        }
    }

    #[test]
    fn serialize_json_round_trip() {
        let original = ApiError::Application {
            code: 5,
            message: "duplicate address".to_string(),
        };
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"kind\":\"Application\""));
        let back: ApiError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), original.to_string());
    }
}
