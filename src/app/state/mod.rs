use crate::app::dispatcher::ResultView;
use crate::domain::models::{HistoryEntry, Suggestion};
use std::time::{Duration, Instant};

pub mod deferral;
pub mod notification;
pub mod suggestions;

// Re-exports
pub use deferral::Deferral;
pub use notification::{Notification, NotificationLevel};
pub use suggestions::SuggestionState;

pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq)]
pub struct PaletteState {
    // --- Lifecycle ---
    pub should_quit: bool,
    pub frame_count: u64,

    // --- Visibility & Focus ---
    pub visible: bool,
    pub focused: bool,
    pub pending_focus: Deferral,
    pub pending_auto_close: Deferral,

    // --- Input ---
    pub query: String,
    pub suggestions: SuggestionState,

    // --- Execution ---
    pub executions_in_flight: usize,
    pub last_result: Option<ResultView>,
    pub history: Vec<HistoryEntry>,

    // --- Feedback ---
    pub notifications: Vec<Notification>,
    pub notification_ttl: Duration,
}

impl PaletteState {
    #[must_use]
    pub fn new(history: Vec<HistoryEntry>, fallback: Vec<Suggestion>) -> Self {
        Self {
            history,
            suggestions: SuggestionState::with_items(fallback),
            ..Default::default()
        }
    }

    /// True while a remote call for the current query or a command is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.executions_in_flight > 0 || self.suggestions.is_fetching()
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    pub fn expire_notifications(&mut self, now: Instant) {
        let ttl = self.notification_ttl;
        self.notifications.retain(|n| !n.is_expired(now, ttl));
    }
}

impl Default for PaletteState {
    fn default() -> Self {
        Self {
            should_quit: false,
            frame_count: 0,
            visible: false,
            focused: false,
            pending_focus: Deferral::default(),
            pending_auto_close: Deferral::default(),
            query: String::new(),
            suggestions: SuggestionState::default(),
            executions_in_flight: 0,
            last_result: None,
            history: Vec::new(),
            notifications: Vec::new(),
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
        }
    }
}
