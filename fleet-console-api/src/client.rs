//! HTTP client for the fleet-management API.
//!
//! Wraps the five fleet endpoints plus the two structured-config
//! endpoints behind [`FleetApi`] and [`ConfigApi`]. One request maps to
//! one method; there is no retry, de-duplication, or cancellation — a
//! failed request surfaces its error to the caller, which decides
//! whether to re-trigger.

use async_trait::async_trait;
use reqwest::RequestBuilder;

use crate::envelope::{self, Envelope};
use crate::error::{ApiError, Result};
use crate::traits::{ConfigApi, FleetApi};
use crate::types::{BotDraft, BotPage, ConfigFields, ConfigUpdateRequest, ListQuery};
use crate::util::truncate_for_log;

/// Client for one fleet-management server.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FleetClient {
    http: reqwest::Client,
    base_url: String,
}

impl FleetClient {
    /// Create a client for the given base URL (scheme + authority, with or
    /// without a trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The configured base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Performs an HTTP request and returns the response body text.
    ///
    /// Unified processing: sending the request, logging, mapping transport
    /// failures. Envelope interpretation is left to the caller.
    async fn execute(&self, request: RequestBuilder, method: &str, path: &str) -> Result<String> {
        log::debug!("[fleet-api] {method} {path}");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ApiError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("[fleet-api] response status: {status}");

        let body = response.text().await.map_err(|e| ApiError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("[fleet-api] response body: {}", truncate_for_log(&body));

        Ok(body)
    }

    /// Serialize a JSON request body by hand so encoding failures surface
    /// as [`ApiError::Serialization`] before anything hits the wire.
    fn json_body<B: serde::Serialize>(body: &B) -> Result<String> {
        serde_json::to_string(body).map_err(|e| ApiError::Serialization {
            detail: e.to_string(),
        })
    }

    async fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<String> {
        let payload = Self::json_body(body)?;
        let request = self
            .http
            .post(self.url(path))
            .header("Content-Type", "application/json; charset=utf-8")
            .body(payload);
        self.execute(request, "POST", path).await
    }
}

/// Build the list endpoint path with the query string.
///
/// The address filter goes through URL encoding and is otherwise passed
/// unescaped; page and page size are plain integers.
pub(crate) fn list_path(query: &ListQuery) -> String {
    format!(
        "/bot/list?page={}&page_size={}&address={}",
        query.page,
        query.page_size,
        urlencoding::encode(&query.address)
    )
}

#[async_trait]
impl FleetApi for FleetClient {
    async fn list_bots(&self, query: &ListQuery) -> Result<BotPage> {
        let path = list_path(query);
        let body = self.execute(self.http.get(self.url(&path)), "GET", &path).await?;
        let env: Envelope<BotPage> = envelope::decode(&body)?;
        env.into_data("Failed to fetch bots")
    }

    async fn create_bot(&self, draft: &BotDraft) -> Result<()> {
        let body = self.post_json("/bot/create", draft).await?;
        let env: Envelope<serde_json::Value> = envelope::decode(&body)?;
        env.into_ack("Failed to save bot")
    }

    async fn update_bot(&self, draft: &BotDraft) -> Result<()> {
        let body = self.post_json("/bot/update", draft).await?;
        let env: Envelope<serde_json::Value> = envelope::decode(&body)?;
        env.into_ack("Failed to save bot")
    }

    async fn delete_bot(&self, id: u64) -> Result<()> {
        let path = format!("/bot/delete?id={id}");
        let body = self
            .execute(self.http.delete(self.url(&path)), "DELETE", &path)
            .await?;
        let env: Envelope<serde_json::Value> = envelope::decode(&body)?;
        env.into_ack("Failed to delete bot")
    }

    async fn fetch_command(&self, id: u64) -> Result<String> {
        let path = format!("/bot/command/get?id={id}");
        let body = self.execute(self.http.get(self.url(&path)), "GET", &path).await?;
        let env: Envelope<String> = envelope::decode(&body)?;
        env.into_data("Failed to fetch command config")
    }
}

#[async_trait]
impl ConfigApi for FleetClient {
    async fn fetch_config(&self, id: u64) -> Result<ConfigFields> {
        let path = format!("/bot/config/get?id={id}");
        let body = self.execute(self.http.get(self.url(&path)), "GET", &path).await?;
        let env: Envelope<ConfigFields> = envelope::decode(&body)?;
        env.into_data("Failed to fetch config")
    }

    async fn save_config(&self, id: u64, fields: &ConfigFields) -> Result<()> {
        let request = ConfigUpdateRequest {
            id,
            config: fields.clone(),
        };
        let body = self.post_json("/bot/config/update", &request).await?;
        let env: Envelope<serde_json::Value> = envelope::decode(&body)?;
        env.into_ack("Failed to save config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_stripped() {
        let client = FleetClient::new("http://127.0.0.1:8080/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
        assert_eq!(client.url("/bot/list"), "http://127.0.0.1:8080/bot/list");
    }

    #[test]
    fn list_path_encodes_filter() {
        let query = ListQuery {
            page: 2,
            page_size: 10,
            address: "10.0.0.1:9000".to_string(),
        };
        assert_eq!(
            list_path(&query),
            "/bot/list?page=2&page_size=10&address=10.0.0.1%3A9000"
        );
    }

    #[test]
    fn list_path_empty_filter() {
        let query = ListQuery::default();
        assert_eq!(list_path(&query), "/bot/list?page=1&page_size=10&address=");
    }
}
