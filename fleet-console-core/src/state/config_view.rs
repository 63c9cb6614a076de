//! Config dual-view state.

/// Which configuration view is open, if any.
///
/// The raw command blob and the structured editor are independent
/// subsystems that must never be visible at once; a single enum makes
/// the overlap unrepresentable. There is no cache behind either arm —
/// reopening a view always re-fetches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigView {
    /// Neither view is open.
    #[default]
    Hidden,
    /// Read-only raw command viewer, text already formatted for display.
    Raw {
        /// Display text, one token per line.
        text: String,
    },
    /// Structured editor, delegated to the collaborator keyed by bot id.
    Structured {
        /// Target bot.
        bot_id: u64,
    },
}

impl ConfigView {
    /// Show the raw command viewer with already-formatted text.
    pub fn open_raw(&mut self, text: String) {
        *self = Self::Raw { text };
    }

    /// Show the structured editor for a bot.
    pub fn open_structured(&mut self, bot_id: u64) {
        *self = Self::Structured { bot_id };
    }

    /// Close whichever view is open.
    pub fn close(&mut self) {
        *self = Self::Hidden;
    }

    /// Whether any configuration view is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_are_mutually_exclusive() {
        let mut view = ConfigView::default();
        view.open_raw("alpha".to_string());
        assert!(matches!(view, ConfigView::Raw { .. }));

        view.open_structured(4);
        assert_eq!(view, ConfigView::Structured { bot_id: 4 });
    }

    #[test]
    fn reopening_raw_replaces_text() {
        let mut view = ConfigView::default();
        view.open_raw("from bot X".to_string());
        view.open_raw("from bot Y".to_string());
        assert_eq!(
            view,
            ConfigView::Raw {
                text: "from bot Y".to_string()
            }
        );
    }

    #[test]
    fn close_hides_everything() {
        let mut view = ConfigView::default();
        view.open_structured(9);
        assert!(view.is_open());
        view.close();
        assert_eq!(view, ConfigView::Hidden);
        assert!(!view.is_open());
    }
}
