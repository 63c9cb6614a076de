//! 搜索框更新逻辑

use crate::message::SearchMessage;
use crate::model::{App, FocusPanel};

/// 处理搜索框消息
pub fn update(app: &mut App, msg: SearchMessage) {
    match msg {
        SearchMessage::Input(c) => {
            app.search.insert(c);
        }

        SearchMessage::Backspace => {
            app.search.backspace();
        }

        SearchMessage::Submit => {
            let filter = app.search.input.clone();
            // 提交总是先把页码重置为 1，由核心完成
            app.runtime.block_on(app.console.submit_search(filter));
            app.focus = FocusPanel::Table;
        }

        SearchMessage::Clear => {
            app.search.clear();
            app.focus = FocusPanel::Table;
        }
    }
}
