//! Fleet Console TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 本地配置服务 (`backend/`)
//!
//!
//! main.rs
//! Fleet Console TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     加载本地配置            // 服务器地址，命令行参数可覆盖
//!     init_terminal()         // 初始化终端
//!     model::App::new()       // 创建 APP 实例
//!     app.bootstrap()         // 拉取首屏列表
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{ConfigService, JsonConfigService};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 加载本地配置，并回写（首次运行时生成默认配置文件）
    let service = JsonConfigService;
    let mut config = service.load()?;
    service.save(&config)?;

    // 命令行参数可覆盖服务器地址：fleet-console-tui [SERVER_URL]
    if let Some(url) = std::env::args().nth(1) {
        config.server_url = url;
    }

    // 2. 初始化终端
    let mut terminal = init_terminal()?;

    // 3. 创建应用实例并拉取首屏数据
    let mut app = match model::App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            restore_terminal(&mut terminal)?;
            return Err(e);
        }
    };
    app.bootstrap();

    // 4. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 6. 返回结果
    result
}
