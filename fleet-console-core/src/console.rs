//! The fleet console controller.
//!
//! Orchestrates the four client-side sub-protocols against the
//! fleet-management API: list/search/paginate, CRUD mutation with
//! explicit list invalidation, the delete confirmation gate, and the
//! config dual-view. Every failure is recovered here and surfaced as a
//! [`Notice`]; nothing propagates past the triggering operation.
//!
//! All network traffic goes through the injected [`FleetApi`]
//! implementation, one request at a time: an operation awaits its
//! response before the next state transition tied to it, and a
//! mutation's list refresh is issued only after that mutation's success
//! response has been observed.

use fleet_console_api::{ApiError, BotDraft, BotRecord, FleetApi};

use crate::state::{BotListState, ConfigView, DeleteGate, Notice};
use crate::util::format_command_text;

/// Invalidation signal produced by a successful mutation.
///
/// Consuming it re-fetches the list with the filter and page current at
/// that moment. This is the console's only cache-invalidation strategy;
/// rows are never patched locally.
#[must_use]
pub(crate) struct Invalidation;

/// Client-side orchestrator for one fleet-management server.
pub struct Console<A: FleetApi> {
    api: A,
    /// List/search/pagination state.
    pub list: BotListState,
    /// Edit form draft; `Some` while the editor modal is open.
    pub editor: Option<BotDraft>,
    /// Delete confirmation gate.
    pub delete_gate: DeleteGate,
    /// Config dual-view state.
    pub config_view: ConfigView,
    /// Current transient notification, if any.
    pub notice: Option<Notice>,
}

impl<A: FleetApi> Console<A> {
    /// Create a console over the given API implementation.
    pub fn new(api: A) -> Self {
        Self {
            api,
            list: BotListState::new(),
            editor: None,
            delete_gate: DeleteGate::Idle,
            config_view: ConfigView::Hidden,
            notice: None,
        }
    }

    /// The underlying API implementation.
    pub fn api(&self) -> &A {
        &self.api
    }

    // ========== Notifications ==========

    /// Raise a success notice, replacing any current one.
    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::success(message));
    }

    /// Raise an error notice for an API failure, replacing any current one.
    pub fn notify_api_error(&mut self, error: &ApiError) {
        if error.is_expected() {
            log::warn!("[console] {error}");
        } else {
            log::error!("[console] {error}");
        }
        self.notice = Some(Notice::error(error.to_string()));
    }

    /// Dismiss the current notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ========== List / search / paginate ==========

    /// Fetch the current page with the current filter.
    ///
    /// On success the rows and total atomically replace prior state; on
    /// failure nothing is touched and a notice is raised. Idempotent —
    /// re-invoking with identical arguments is expected (it runs after
    /// every mutation).
    pub async fn refresh(&mut self) {
        let query = self.list.query();
        match self.api.list_bots(&query).await {
            Ok(page) => self.list.set_page_data(page.list, page.total),
            Err(e) => self.notify_api_error(&e),
        }
    }

    /// Submit a new search filter.
    ///
    /// Resets the page to 1 before issuing the request so a narrowed
    /// filter cannot land on an empty out-of-range page.
    pub async fn submit_search(&mut self, filter: String) {
        self.list.page = 1;
        self.list.filter = filter;
        self.refresh().await;
    }

    /// Jump to a page and refresh.
    ///
    /// Out-of-range targets are the pagination component's job to clamp;
    /// the controller takes the target as given.
    pub async fn change_page(&mut self, page: u32) {
        self.list.page = page;
        self.refresh().await;
    }

    // ========== CRUD ==========

    /// Open the editor with an empty create draft (id sentinel `0`).
    pub fn open_create(&mut self) {
        self.editor = Some(BotDraft::new());
    }

    /// Open the editor pre-populated from an existing record.
    pub fn open_edit(&mut self, record: &BotRecord) {
        self.editor = Some(BotDraft::from_record(record));
    }

    /// Close the editor, discarding the draft.
    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Submit the edit form.
    ///
    /// Dispatches on the id sentinel — the sole branch distinguishing
    /// create from update; the payload shape is identical. On success the
    /// list is refreshed (with the filter/page current now) and only then
    /// does the editor close. On failure the editor stays open and
    /// populated so the operator can retry or cancel without re-entering
    /// data, and no refresh happens.
    pub async fn save(&mut self) {
        let Some(draft) = self.editor.clone() else {
            return;
        };

        let result = if draft.is_new() {
            self.api.create_bot(&draft).await
        } else {
            self.api.update_bot(&draft).await
        };

        match result {
            Ok(()) => {
                self.consume(Invalidation).await;
                self.editor = None;
            }
            Err(e) => self.notify_api_error(&e),
        }
    }

    // ========== Delete gate ==========

    /// Ask for confirmation before deleting `bot_id`. Never fires a
    /// request by itself.
    pub fn request_delete(&mut self, bot_id: u64) {
        self.delete_gate.request(bot_id);
    }

    /// Abandon the pending confirmation. No request is issued.
    pub fn cancel_delete(&mut self) {
        self.delete_gate.cancel();
    }

    /// Fire the gated delete.
    ///
    /// A no-op unless a confirmation is pending. The gate bookkeeping
    /// clears once the response is observed, whatever the outcome, so a
    /// late duplicate confirm cannot double-fire.
    pub async fn confirm_delete(&mut self) {
        let Some(bot_id) = self.delete_gate.begin() else {
            return;
        };

        let result = self.api.delete_bot(bot_id).await;
        self.delete_gate.settle();

        match result {
            Ok(()) => {
                self.notify_success("Bot deleted");
                self.consume(Invalidation).await;
            }
            Err(e) => self.notify_api_error(&e),
        }
    }

    // ========== Config dual-view ==========

    /// Fetch and open the read-only raw command viewer.
    ///
    /// The text is re-joined on whitespace runs for legibility before it
    /// is stored. On failure the viewer does not open.
    pub async fn show_raw_config(&mut self, bot_id: u64) {
        match self.api.fetch_command(bot_id).await {
            Ok(text) => self.config_view.open_raw(format_command_text(&text)),
            Err(e) => self.notify_api_error(&e),
        }
    }

    /// Open the structured editor for a bot.
    ///
    /// Only records the target id; fetch/edit/save belong to the
    /// structured-config collaborator, which shares no state with the raw
    /// path.
    pub fn open_structured_config(&mut self, bot_id: u64) {
        self.config_view.open_structured(bot_id);
    }

    /// Close whichever config view is open.
    pub fn close_config(&mut self) {
        self.config_view.close();
    }

    // ========== Invalidation ==========

    async fn consume(&mut self, _signal: Invalidation) {
        self.refresh().await;
    }
}
