use crate::domain::models::HistoryEntry;
use crate::infrastructure::store::KeyValueStore;
use std::sync::Arc;

pub const HISTORY_KEY: &str = "commandPaletteHistory";
pub const HISTORY_CAPACITY: usize = 10;

/// Bounded, most-recent-first command history kept in a key-value store.
pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
}

impl HistoryStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Reads the persisted history. Unreadable or corrupt data yields an
    /// empty history.
    pub fn load(&self) -> Vec<HistoryEntry> {
        let blob = match self.store.get(HISTORY_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::error!(error = %format!("{e:#}"), "failed to read command history");
                return Vec::new();
            }
        };

        match decode(&blob) {
            Ok(history) => history,
            Err(e) => {
                tracing::error!(error = %e, "failed to parse command history, starting empty");
                Vec::new()
            }
        }
    }

    pub fn append(&self, history: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
        push_front(history, entry);
        self.save(history);
    }

    fn save(&self, history: &[HistoryEntry]) {
        let blob = match serde_json::to_string(history) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize command history");
                return;
            }
        };
        if let Err(e) = self.store.set(HISTORY_KEY, &blob) {
            tracing::warn!(error = %format!("{e:#}"), "failed to persist command history");
        }
    }
}

pub fn push_front(history: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
    history.insert(0, entry);
    history.truncate(HISTORY_CAPACITY);
}

pub fn decode(blob: &str) -> serde_json::Result<Vec<HistoryEntry>> {
    let mut history: Vec<HistoryEntry> = serde_json::from_str(blob)?;
    history.truncate(HISTORY_CAPACITY);
    Ok(history)
}
