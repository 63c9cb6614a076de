//! The `{code, message, data}` response envelope.
//!
//! Every endpoint of the fleet-management API wraps its payload in the
//! same envelope. `code == 0` signals success; any other value is an
//! application-level failure whose `message` must reach the operator.
//! Each endpoint decodes `data` into its own typed payload; a success
//! envelope missing the payload fails closed as a decode error.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Universal response envelope of the fleet-management API.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Application status code; `0` means success.
    pub code: i64,
    /// Server-supplied message, normally empty on success.
    #[serde(default)]
    pub message: String,
    /// Endpoint-specific payload; absent on mutation acknowledgements.
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap a data-carrying envelope.
    ///
    /// # Arguments
    /// * `fallback` - message used when the server rejects without one
    ///
    /// # Returns
    /// * `Ok(data)` - `code == 0` and the payload is present
    /// * `Err(ApiError::Application)` - non-zero code
    /// * `Err(ApiError::Decode)` - `code == 0` but `data` is missing
    pub fn into_data(self, fallback: &str) -> Result<T> {
        self.check_code(fallback)?;
        self.data.ok_or_else(|| ApiError::Decode {
            detail: "missing data in success response".to_string(),
        })
    }

    /// Unwrap an acknowledgement envelope, ignoring any payload.
    pub fn into_ack(self, fallback: &str) -> Result<()> {
        self.check_code(fallback)
    }

    fn check_code(&self, fallback: &str) -> Result<()> {
        if self.code == 0 {
            return Ok(());
        }
        Err(ApiError::Application {
            code: self.code,
            message: if self.message.is_empty() {
                fallback.to_string()
            } else {
                self.message.clone()
            },
        })
    }
}

/// Decode a raw response body into a typed envelope.
///
/// Shape mismatch (non-JSON body, wrong payload type) fails closed as
/// [`ApiError::Decode`]; the body is never partially interpreted.
pub fn decode<T>(body: &str) -> Result<Envelope<T>>
where
    T: DeserializeOwned + Default,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("envelope decode failed: {e}");
        ApiError::Decode {
            detail: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BotPage;

    #[test]
    fn success_with_data() {
        let env: Envelope<BotPage> = decode(
            r#"{"code":0,"message":"","data":{"list":[{"id":1,"address":"10.0.0.1:9000","status":"online","create_time":1,"update_time":1}],"total":1}}"#,
        )
        .unwrap();
        let page = env.into_data("Failed to fetch bots").unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.list[0].address, "10.0.0.1:9000");
    }

    #[test]
    fn failure_surfaces_server_message() {
        let env: Envelope<BotPage> = decode(r#"{"code":5,"message":"duplicate address"}"#).unwrap();
        let err = env.into_data("Failed to fetch bots").unwrap_err();
        assert_eq!(err.to_string(), "duplicate address");
        assert!(err.is_expected());
    }

    #[test]
    fn failure_with_empty_message_uses_fallback() {
        let env: Envelope<String> = decode(r#"{"code":2}"#).unwrap();
        let err = env.into_data("Failed to fetch command config").unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch command config");
    }

    #[test]
    fn success_without_data_fails_closed() {
        let env: Envelope<String> = decode(r#"{"code":0,"message":""}"#).unwrap();
        let err = env.into_data("fallback").unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }), "got: {err:?}");
    }

    #[test]
    fn ack_ignores_missing_data() {
        let env: Envelope<serde_json::Value> = decode(r#"{"code":0,"message":"ok"}"#).unwrap();
        assert!(env.into_ack("Failed to save bot").is_ok());
    }

    #[test]
    fn non_json_body_is_decode_error() {
        let result: Result<Envelope<String>> = decode("<html>bad gateway</html>");
        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }

    #[test]
    fn shape_mismatch_is_decode_error() {
        // data is a string here, but the endpoint expects a page object
        let result: Result<Envelope<BotPage>> = decode(r#"{"code":0,"data":"oops"}"#);
        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }
}
