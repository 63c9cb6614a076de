//! Fleet Console Core Library
//!
//! Client-side controller logic for the fleet console, including:
//! - List/search/pagination state kept consistent with server-side CRUD
//! - Mutation protocol with explicit list invalidation
//! - Delete confirmation gate
//! - Config dual-view (raw command text vs. structured editor)
//!
//! This library is frontend-independent: the terminal UI drives a
//! [`Console`] and any other host could do the same. The transport is
//! abstracted through the [`FleetApi`] trait from `fleet-console-api`.

pub mod console;
pub mod state;
pub mod util;

// Re-export common types
pub use console::Console;
pub use state::{BotListState, ConfigView, DeleteGate, Notice, Severity};

// Re-export API boundary types
pub use fleet_console_api::{ApiError, BotDraft, BotPage, BotRecord, FleetApi, ListQuery};
