//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，
//!                           阻塞等待事件，最长等待 timeout
//!
//!         · handle_event    事件分发
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 有弹窗打开时，按当前弹窗类型分发处理
//!                 - 全局快捷键（退出 / 刷新 / 焦点切换），就地处理
//!                 - 焦点位于搜索框，调用 handle_search_keys 处理
//!                 - 焦点位于表格，调用 handle_table_keys 处理
//!
//! 弹窗键盘处理的常用映射：
//!     Esc / Ctrl+C → ModalMessage::Close
//!     Tab / ↓      → ModalMessage::NextField
//!     Shift+Tab / ↑ → ModalMessage::PrevField
//!     Enter        → ModalMessage::Confirm
//!     字符输入      → ModalMessage::Input(c)
//!     Backspace    → ModalMessage::Backspace

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
