//! Model 层：应用状态
//!
//! 绝大部分状态（列表 / 编辑草稿 / 删除门 / 配置视图 / 通知）
//! 由 fleet-console-core 的 `Console` 持有；
//! 本层只补充纯 UI 状态：焦点面板、搜索输入缓冲、
//! 弹窗内的字段焦点与滚动位置，以及结构化配置编辑器组件。

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{ConfigFormPhase, ConfigFormState, ModalUi, SearchState, EDITOR_FIELDS};
