//! 应用主状态结构

use std::time::{Duration, Instant};

use anyhow::Result;
use fleet_console_api::FleetClient;
use fleet_console_core::{Console, Notice};

use super::state::{ConfigFormState, ModalUi, SearchState};
use super::FocusPanel;
use crate::backend::ConsoleConfig;

/// 通知自动消隐时间
const NOTICE_TTL: Duration = Duration::from_secs(4);

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 控制台核心状态（列表 / 编辑草稿 / 删除门 / 配置视图 / 通知）
    pub console: Console<FleetClient>,

    /// 搜索框输入缓冲
    pub search: SearchState,

    /// 弹窗瞬时 UI 状态
    pub modal_ui: ModalUi,

    /// 结构化配置编辑器（协作组件，自带拉取/保存路径）
    pub config_form: ConfigFormState,

    /// 结构化配置编辑器专用客户端，与原始命令路径互不共享
    pub config_api: FleetClient,

    /// 阻塞执行网络请求的运行时
    pub runtime: tokio::runtime::Runtime,

    /// 当前展示的通知与展示时刻（驱动自动消隐）
    shown_notice: Option<(Notice, Instant)>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &ConsoleConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let client = FleetClient::new(config.server_url.clone());

        Ok(Self {
            should_quit: false,
            focus: FocusPanel::Table,
            console: Console::new(client.clone()),
            search: SearchState::default(),
            modal_ui: ModalUi::default(),
            config_form: ConfigFormState::default(),
            config_api: client,
            runtime,
            shown_notice: None,
        })
    }

    /// 启动时拉取首屏列表
    pub fn bootstrap(&mut self) {
        self.runtime.block_on(self.console.refresh());
    }

    /// 是否有弹窗打开（由核心状态推导，无独立布尔开关）
    #[must_use]
    pub fn modal_open(&self) -> bool {
        self.console.editor.is_some()
            || self.console.delete_gate.is_open()
            || self.console.config_view.is_open()
    }

    /// 每轮主循环调用：对齐通知展示时刻并处理自动消隐
    pub fn tick(&mut self) {
        self.sync_notice();
        if let Some((_, shown_at)) = &self.shown_notice {
            if shown_at.elapsed() >= NOTICE_TTL {
                self.console.dismiss_notice();
                self.shown_notice = None;
            }
        }
    }

    /// 新通知重置计时，通知消失时清空记录
    fn sync_notice(&mut self) {
        match (&self.console.notice, &self.shown_notice) {
            (Some(current), Some((shown, _))) if current == shown => {}
            (Some(current), _) => {
                self.shown_notice = Some((current.clone(), Instant::now()));
            }
            (None, _) => {
                self.shown_notice = None;
            }
        }
    }
}
