//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码，
//! 负责终端的初始化和恢复。
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//! 关键概念：
//!
//! · Raw Mode（原始模式）
//!     - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!     - 关闭字符回显：按键不会显示在终端上
//!     - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//! · Alternate Screen（备用屏幕）
//!     - TUI 应用在备用屏幕运行
//!     - 退出后自动恢复主屏幕内容
//!
//! 注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!       否则终端会保持在原始模式，用户输入不会正常显示。

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
