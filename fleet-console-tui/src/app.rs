//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     app.tick()                                      // 通知到期自动消隐
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并翻译成消息
//!         update::update(&mut app , msg)                  // 更新状态
//!     }
//! }
//!
//! 网络请求在 update 层通过 tokio 运行时阻塞执行：
//! 同一时刻最多一个请求在途，响应返回之前不处理后续输入。

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 通知自动消隐
        app.tick();

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
