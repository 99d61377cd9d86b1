use crate::domain::models::Suggestion;

/// Suggestion list plus the bookkeeping that keeps late responses out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuggestionState {
    pub items: Vec<Suggestion>,
    pub selected_index: Option<usize>,
    latest_seq: u64,
    in_flight: Option<u64>,
}

impl SuggestionState {
    pub fn with_items(items: Vec<Suggestion>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// Starts a new lookup; every earlier one becomes stale.
    pub fn issue(&mut self) -> u64 {
        self.latest_seq += 1;
        self.in_flight = Some(self.latest_seq);
        self.latest_seq
    }

    /// Drops the list and makes any outstanding lookup stale.
    pub fn reset(&mut self) {
        self.latest_seq += 1;
        self.in_flight = None;
        self.items.clear();
        self.selected_index = None;
    }

    /// Settles lookup `seq`. Returns false (and changes nothing) when a
    /// newer lookup has been issued since.
    pub fn settle(&mut self, seq: u64, items: Vec<Suggestion>) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.in_flight = None;
        self.items = items;
        self.selected_index = None;
        true
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Suggestion> {
        self.selected_index.and_then(|i| self.items.get(i))
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        });
    }
}
