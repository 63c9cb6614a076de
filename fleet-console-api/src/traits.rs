use async_trait::async_trait;

use crate::error::Result;
use crate::types::{BotDraft, BotPage, ConfigFields, ListQuery};

/// Fleet-management API surface consumed by the console controller.
///
/// Implementations:
/// - [`FleetClient`](crate::FleetClient) — the HTTP client
/// - test doubles in `fleet-console-core/tests`
#[async_trait]
pub trait FleetApi: Send + Sync {
    /// Fetch one page of the fleet list, filtered by address substring.
    async fn list_bots(&self, query: &ListQuery) -> Result<BotPage>;

    /// Register a new bot. The draft id must be the `0` sentinel.
    async fn create_bot(&self, draft: &BotDraft) -> Result<()>;

    /// Update an existing bot. The draft id must be nonzero.
    async fn update_bot(&self, draft: &BotDraft) -> Result<()>;

    /// Delete a bot by id.
    async fn delete_bot(&self, id: u64) -> Result<()>;

    /// Fetch the server-derived raw command blob for a bot.
    async fn fetch_command(&self, id: u64) -> Result<String>;
}

/// Structured-config API surface, consumed only by the structured-config
/// editor component.
///
/// Deliberately separate from [`FleetApi`]: the console controller treats
/// the structured editor as an opaque collaborator keyed on a bot id and
/// never touches these endpoints itself. The raw-command path and this
/// path share no cache; reopening either view always re-fetches.
#[async_trait]
pub trait ConfigApi: Send + Sync {
    /// Fetch the structured configuration fields for a bot.
    async fn fetch_config(&self, id: u64) -> Result<ConfigFields>;

    /// Replace the structured configuration fields for a bot.
    async fn save_config(&self, id: u64, fields: &ConfigFields) -> Result<()>;
}
