#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the console controller protocol: list refresh
//! semantics, create/update dispatch, mutation-driven invalidation, the
//! delete confirmation gate, and the config dual-view.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use fleet_console_api::{
    ApiError, BotDraft, BotPage, BotRecord, FleetApi, ListQuery, Result,
};
use fleet_console_core::{ConfigView, Console, DeleteGate, Severity};

/// One recorded API call, with the arguments the controller used.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    List { page: u32, page_size: u32, filter: String },
    Create { id: u64, address: String },
    Update { id: u64, address: String },
    Delete { id: u64 },
    Command { id: u64 },
}

// ===== Mock implementation =====

/// Scripted `FleetApi`: each method pops its next result from a queue
/// and records the call. Empty queues answer with benign defaults.
#[derive(Default)]
struct MockApi {
    calls: Mutex<Vec<Call>>,
    list_results: Mutex<VecDeque<Result<BotPage>>>,
    mutation_results: Mutex<VecDeque<Result<()>>>,
    command_results: Mutex<VecDeque<Result<String>>>,
}

impl MockApi {
    fn with_page(self, page: BotPage) -> Self {
        self.list_results.lock().unwrap().push_back(Ok(page));
        self
    }

    fn with_list_error(self, error: ApiError) -> Self {
        self.list_results.lock().unwrap().push_back(Err(error));
        self
    }

    fn with_mutation_error(self, error: ApiError) -> Self {
        self.mutation_results.lock().unwrap().push_back(Err(error));
        self
    }

    fn with_command(self, text: &str) -> Self {
        self.command_results
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    fn with_command_error(self, error: ApiError) -> Self {
        self.command_results.lock().unwrap().push_back(Err(error));
        self
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FleetApi for MockApi {
    async fn list_bots(&self, query: &ListQuery) -> Result<BotPage> {
        self.record(Call::List {
            page: query.page,
            page_size: query.page_size,
            filter: query.address.clone(),
        });
        self.list_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(BotPage::default()))
    }

    async fn create_bot(&self, draft: &BotDraft) -> Result<()> {
        self.record(Call::Create {
            id: draft.id,
            address: draft.address.clone(),
        });
        self.mutation_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn update_bot(&self, draft: &BotDraft) -> Result<()> {
        self.record(Call::Update {
            id: draft.id,
            address: draft.address.clone(),
        });
        self.mutation_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn delete_bot(&self, id: u64) -> Result<()> {
        self.record(Call::Delete { id });
        self.mutation_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn fetch_command(&self, id: u64) -> Result<String> {
        self.record(Call::Command { id });
        self.command_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

// ===== Helpers =====

fn record(id: u64, address: &str) -> BotRecord {
    BotRecord {
        id,
        address: address.to_string(),
        crt_file: String::new(),
        key_file: String::new(),
        ca_file: String::new(),
        status: "online".to_string(),
        create_time: 1_700_000_000,
        update_time: 1_700_000_000,
    }
}

fn page(records: Vec<BotRecord>, total: u64) -> BotPage {
    BotPage {
        list: records,
        total,
    }
}

fn list_calls(calls: &[Call]) -> Vec<&Call> {
    calls
        .iter()
        .filter(|c| matches!(c, Call::List { .. }))
        .collect()
}

// ===== List / search / paginate =====

#[tokio::test]
async fn refresh_replaces_rows_and_total() {
    let api = MockApi::default()
        .with_page(page(vec![record(1, "10.0.0.1:9000")], 1))
        .with_page(page(vec![record(2, "10.0.0.2:9000"), record(3, "10.0.0.3:9000")], 2));
    let mut console = Console::new(api);

    console.refresh().await;
    assert_eq!(console.list.bots.len(), 1);
    assert_eq!(console.list.bots[0].address, "10.0.0.1:9000");
    assert_eq!(console.list.total, 1);

    console.refresh().await;
    // the second page replaces the first entirely, no merge
    assert_eq!(console.list.bots.len(), 2);
    assert_eq!(console.list.bots[0].id, 2);
    assert_eq!(console.list.total, 2);
}

#[tokio::test]
async fn refresh_failure_leaves_list_untouched() {
    let api = MockApi::default()
        .with_page(page(vec![record(1, "10.0.0.1:9000")], 1))
        .with_list_error(ApiError::Application {
            code: 3,
            message: "backend unavailable".to_string(),
        });
    let mut console = Console::new(api);

    console.refresh().await;
    console.refresh().await;

    assert_eq!(console.list.bots.len(), 1);
    assert_eq!(console.list.total, 1);
    let notice = console.notice.expect("notice raised");
    assert_eq!(notice.message, "backend unavailable");
    assert_eq!(notice.severity, Severity::Error);
}

#[tokio::test]
async fn refresh_transport_failure_surfaces_prefixed_message() {
    let api = MockApi::default().with_list_error(ApiError::Network {
        detail: "connection refused".to_string(),
    });
    let mut console = Console::new(api);

    console.refresh().await;

    let notice = console.notice.expect("notice raised");
    assert_eq!(notice.message, "Request error: connection refused");
}

#[tokio::test]
async fn submit_search_resets_page_to_one() {
    let mut console = Console::new(MockApi::default());

    console.change_page(4).await;
    console.submit_search("10.0".to_string()).await;

    let calls = console.api().calls();
    assert_eq!(
        calls.last(),
        Some(&Call::List {
            page: 1,
            page_size: 10,
            filter: "10.0".to_string(),
        })
    );
}

#[tokio::test]
async fn change_page_keeps_filter() {
    let mut console = Console::new(MockApi::default());

    console.submit_search("edge".to_string()).await;
    console.change_page(2).await;

    let calls = console.api().calls();
    assert_eq!(
        calls.last(),
        Some(&Call::List {
            page: 2,
            page_size: 10,
            filter: "edge".to_string(),
        })
    );
}

// ===== CRUD dispatch and invalidation =====

#[tokio::test]
async fn create_draft_dispatches_to_create() {
    let mut console = Console::new(MockApi::default());

    console.open_create();
    console
        .editor
        .as_mut()
        .expect("editor open")
        .address = "10.0.0.9:9000".to_string();
    console.save().await;

    let calls = console.api().calls();
    assert!(calls.contains(&Call::Create {
        id: 0,
        address: "10.0.0.9:9000".to_string(),
    }));
    assert!(!calls.iter().any(|c| matches!(c, Call::Update { .. })));
}

#[tokio::test]
async fn nonzero_draft_dispatches_to_update() {
    let mut console = Console::new(MockApi::default());

    console.open_edit(&record(7, "10.0.0.7:9000"));
    console.save().await;

    let calls = console.api().calls();
    assert!(calls.contains(&Call::Update {
        id: 7,
        address: "10.0.0.7:9000".to_string(),
    }));
    assert!(!calls.iter().any(|c| matches!(c, Call::Create { .. })));
}

#[tokio::test]
async fn successful_save_refreshes_once_with_current_query_then_closes() {
    let mut console = Console::new(MockApi::default());

    console.submit_search("10.".to_string()).await;
    console.change_page(2).await;

    console.open_create();
    console.editor.as_mut().expect("editor open").address = "10.0.0.5:9000".to_string();
    console.save().await;

    assert!(console.editor.is_none());

    let calls = console.api().calls();
    let create_pos = calls
        .iter()
        .position(|c| matches!(c, Call::Create { .. }))
        .expect("create issued");
    let refreshes_after: Vec<_> = list_calls(&calls[create_pos..]);
    assert_eq!(refreshes_after.len(), 1);
    assert_eq!(
        refreshes_after[0],
        &Call::List {
            page: 2,
            page_size: 10,
            filter: "10.".to_string(),
        }
    );
}

#[tokio::test]
async fn failed_save_keeps_editor_and_skips_refresh() {
    let api = MockApi::default().with_mutation_error(ApiError::Application {
        code: 5,
        message: "duplicate address".to_string(),
    });
    let mut console = Console::new(api);

    console.open_create();
    console.editor.as_mut().expect("editor open").address = "10.0.0.1:9000".to_string();
    console.save().await;

    let notice = console.notice.clone().expect("notice raised");
    assert_eq!(notice.message, "duplicate address");
    assert_eq!(notice.severity, Severity::Error);

    let draft = console.editor.as_ref().expect("editor still open");
    assert_eq!(draft.address, "10.0.0.1:9000");

    assert!(list_calls(&console.api().calls()).is_empty());
}

#[tokio::test]
async fn save_without_editor_is_noop() {
    let mut console = Console::new(MockApi::default());
    console.save().await;
    assert!(console.api().calls().is_empty());
}

// ===== Delete confirmation gate =====

#[tokio::test]
async fn cancel_issues_no_request() {
    let mut console = Console::new(MockApi::default());

    console.request_delete(7);
    assert_eq!(console.delete_gate, DeleteGate::PendingConfirmation { bot_id: 7 });

    console.cancel_delete();
    assert_eq!(console.delete_gate, DeleteGate::Idle);
    assert!(console.api().calls().is_empty());
}

#[tokio::test]
async fn confirmed_delete_fires_clears_and_refreshes() {
    let mut console = Console::new(MockApi::default());

    console.request_delete(7);
    console.confirm_delete().await;

    assert_eq!(console.delete_gate, DeleteGate::Idle);
    let notice = console.notice.clone().expect("notice raised");
    assert_eq!(notice.message, "Bot deleted");
    assert_eq!(notice.severity, Severity::Success);

    let calls = console.api().calls();
    let delete_pos = calls
        .iter()
        .position(|c| matches!(c, Call::Delete { id: 7 }))
        .expect("delete issued");
    assert_eq!(list_calls(&calls[delete_pos..]).len(), 1);
}

#[tokio::test]
async fn confirm_without_pending_is_noop() {
    let mut console = Console::new(MockApi::default());
    console.confirm_delete().await;
    assert!(console.api().calls().is_empty());
}

#[tokio::test]
async fn duplicate_confirm_fires_once() {
    let mut console = Console::new(MockApi::default());

    console.request_delete(7);
    console.confirm_delete().await;
    console.confirm_delete().await;

    let deletes = console
        .api()
        .calls()
        .iter()
        .filter(|c| matches!(c, Call::Delete { .. }))
        .count();
    assert_eq!(deletes, 1);
}

#[tokio::test]
async fn failed_delete_clears_gate_and_skips_refresh() {
    let api = MockApi::default().with_mutation_error(ApiError::Application {
        code: 9,
        message: "bot is busy".to_string(),
    });
    let mut console = Console::new(api);

    console.request_delete(3);
    console.confirm_delete().await;

    assert_eq!(console.delete_gate, DeleteGate::Idle);
    assert_eq!(console.notice.clone().expect("notice").message, "bot is busy");
    assert!(list_calls(&console.api().calls()).is_empty());
}

// ===== Config dual-view =====

#[tokio::test]
async fn raw_viewer_formats_and_opens() {
    let api = MockApi::default().with_command("foo   bar\nbaz");
    let mut console = Console::new(api);

    console.show_raw_config(3).await;

    assert_eq!(
        console.config_view,
        ConfigView::Raw {
            text: "foo\nbar\nbaz".to_string()
        }
    );
    assert_eq!(console.api().calls(), vec![Call::Command { id: 3 }]);
}

#[tokio::test]
async fn raw_viewer_failure_does_not_open() {
    let api = MockApi::default().with_command_error(ApiError::Application {
        code: 4,
        message: "no command recorded".to_string(),
    });
    let mut console = Console::new(api);

    console.show_raw_config(3).await;

    assert_eq!(console.config_view, ConfigView::Hidden);
    assert_eq!(
        console.notice.clone().expect("notice").message,
        "no command recorded"
    );
}

#[tokio::test]
async fn reopening_raw_viewer_shows_latest_text_only() {
    let api = MockApi::default()
        .with_command("from-bot-x")
        .with_command("from-bot-y");
    let mut console = Console::new(api);

    console.show_raw_config(1).await;
    console.show_raw_config(2).await;

    assert_eq!(
        console.config_view,
        ConfigView::Raw {
            text: "from-bot-y".to_string()
        }
    );
}

#[tokio::test]
async fn structured_open_records_id_without_fetching() {
    let mut console = Console::new(MockApi::default());

    console.open_structured_config(9);

    assert_eq!(console.config_view, ConfigView::Structured { bot_id: 9 });
    // fetch/edit/save belong to the collaborator, not the controller
    assert!(console.api().calls().is_empty());
}

#[tokio::test]
async fn config_views_are_mutually_exclusive() {
    let api = MockApi::default().with_command("one two");
    let mut console = Console::new(api);

    console.show_raw_config(1).await;
    console.open_structured_config(2);

    assert_eq!(console.config_view, ConfigView::Structured { bot_id: 2 });

    console.close_config();
    assert_eq!(console.config_view, ConfigView::Hidden);
}
