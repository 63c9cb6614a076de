//！┌───────────────────────────────────────────────────────────────────────────┐
//！│                             主循环 (app.rs)                               │
//！│                                                                          │
//！│  ┌───────────────────────────── UI 层 ─────────────────────────────┐    │
//！│  │                                                                  │    │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐      │    │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │      │    │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │      │    │
//！│  │   └─────────┘          │           │          └────┬─────┘      │    │
//！│  │        ▲               │ AppMessage│               │ 修改       │    │
//！│  │        │               │ SearchMsg │               ▼            │    │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐      │    │
//！│  │   │  View   │          │ ModalMsg  │   ┌───── │  Model   │      │    │
//！│  │   │   层    │          └───────────┘   │      │    层    │      │    │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘      │    │
//！│  │        │                                          │            │    │
//！│  └────────│──────────────────────────────────────────│────────────┘    │
//！│           │                                          │ 阻塞调用        │
//！│           ▼                                          ▼                 │
//！│      ┌─────────┐                               ┌──────────────┐        │
//！│      │  终端   │                               │ fleet-console│        │
//！│      │ (Util)  │                               │    -core     │        │
//！│      └─────────┘                               └──────┬───────┘        │
//！│                                                       │                │
//！│                                                       ▼                │
//！│                                              ┌─────────────────┐       │
//！│                                              │ fleet-console-  │       │
//！│                                              │  api (HTTP)     │       │
//！│                                              └─────────────────┘       │
//！└───────────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 所有的用户操作和状态变更都通过 Message 来表达，
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages，
//! Update 层根据 Message 来更新 Model。
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 应用主消息
//!         mod search;         // 搜索框子消息
//!         mod content;        // 表格面板子消息
//!         mod modal;          // 弹窗子消息
//!
//! 在 src/event/handler.rs 中，每个按键事件被翻译成一条 AppMessage；
//! 在 src/app.rs 中，该消息被传入 update 层处理。

mod app;
mod content;
mod modal;
mod search;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use search::SearchMessage;
