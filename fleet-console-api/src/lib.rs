//! # fleet-console-api
//!
//! HTTP client for the fleet-management API that backs the Fleet Console.
//!
//! Every endpoint answers with the same `{code, message, data}` envelope;
//! `code == 0` is success, anything else is an application-level failure
//! whose message must reach the operator. Transport failures (network,
//! timeout, body decode) are a separate error family with locally
//! synthesized, prefixed messages — see [`ApiError`].
//!
//! ## Endpoints
//!
//! | Operation | Method & Path |
//! |-----------|---------------|
//! | List | `GET /bot/list?page=&page_size=&address=` |
//! | Create | `POST /bot/create` |
//! | Update | `POST /bot/update` |
//! | Delete | `DELETE /bot/delete?id=` |
//! | Raw command | `GET /bot/command/get?id=` |
//! | Structured config get | `GET /bot/config/get?id=` |
//! | Structured config save | `POST /bot/config/update` |
//!
//! The first five live on the [`FleetApi`] trait consumed by the console
//! controller; the structured-config pair lives on the separate
//! [`ConfigApi`] trait consumed only by the structured-config editor, so
//! the two configuration views cannot share transport state.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fleet_console_api::{FleetApi, FleetClient, ListQuery};
//!
//! # async fn example() -> fleet_console_api::Result<()> {
//! let client = FleetClient::new("http://127.0.0.1:8080");
//! let page = client.list_bots(&ListQuery::default()).await?;
//! println!("{} bots", page.total);
//! # Ok(())
//! # }
//! ```
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.

mod client;
mod envelope;
mod error;
mod traits;
mod types;
mod util;

pub use client::FleetClient;
pub use envelope::{Envelope, decode};
pub use error::{ApiError, Result};
pub use traits::{ConfigApi, FleetApi};
pub use types::{
    BotDraft, BotPage, BotRecord, ConfigFields, ConfigUpdateRequest, DEFAULT_PAGE_SIZE, ListQuery,
};
