//! UI 状态模块

mod config_form;
mod modal_ui;
mod search;

pub use config_form::{ConfigFormPhase, ConfigFormState};
pub use modal_ui::{ModalUi, EDITOR_FIELDS};
pub use search::SearchState;
