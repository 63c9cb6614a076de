//! Two-phase delete confirmation gate.

/// State machine guarding bot deletion.
///
/// ```text
/// Idle --request(id)--> PendingConfirmation(id)
/// PendingConfirmation --cancel--> Idle            (no network call)
/// PendingConfirmation --begin--> InFlight(id)     (the only edge that may fire a request)
/// InFlight --settle--> Idle                       (whatever the outcome)
/// ```
///
/// `begin` hands out the pending id at most once per cycle, so a second
/// confirm while a request is in flight is a structural no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteGate {
    /// No deletion in progress.
    #[default]
    Idle,
    /// Waiting for the operator to confirm or cancel.
    PendingConfirmation {
        /// Id of the bot the operator asked to delete.
        bot_id: u64,
    },
    /// The delete request has been issued and not yet answered.
    InFlight {
        /// Id being deleted.
        bot_id: u64,
    },
}

impl DeleteGate {
    /// Ask for confirmation to delete `bot_id`. Ignored unless idle.
    pub fn request(&mut self, bot_id: u64) {
        if matches!(self, Self::Idle) {
            *self = Self::PendingConfirmation { bot_id };
        }
    }

    /// Abandon the pending confirmation. Ignored while a request is in
    /// flight.
    pub fn cancel(&mut self) {
        if matches!(self, Self::PendingConfirmation { .. }) {
            *self = Self::Idle;
        }
    }

    /// Move to in-flight and hand out the id to delete.
    ///
    /// Returns `None` unless a confirmation is pending, which is what
    /// makes a duplicate confirm a no-op.
    pub fn begin(&mut self) -> Option<u64> {
        if let Self::PendingConfirmation { bot_id } = *self {
            *self = Self::InFlight { bot_id };
            Some(bot_id)
        } else {
            None
        }
    }

    /// Record that the in-flight request was answered. The bookkeeping
    /// clears regardless of the outcome.
    pub fn settle(&mut self) {
        if matches!(self, Self::InFlight { .. }) {
            *self = Self::Idle;
        }
    }

    /// Id currently pending or in flight, if any.
    #[must_use]
    pub fn pending_id(&self) -> Option<u64> {
        match *self {
            Self::Idle => None,
            Self::PendingConfirmation { bot_id } | Self::InFlight { bot_id } => Some(bot_id),
        }
    }

    /// Whether the confirmation dialog should be visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
