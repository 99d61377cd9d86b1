use crate::app::command::Command;
use crate::domain::models::{CommandResult, Suggestion};

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateResult {
    Handled(Vec<Command>),
    NotHandled,
}

impl UpdateResult {
    pub fn none() -> Self {
        UpdateResult::Handled(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Visibility ---
    TogglePalette,  // Ctrl+K
    ClosePalette,   // Esc while open
    FocusInput(u64), // Deferred focus after opening
    AutoClose(u64), // Deferred close after a qualifying result

    // --- Input ---
    InputChanged(String), // Whole query replaced
    InsertChar(char),
    DeleteChar,
    SelectNextSuggestion,
    SelectPrevSuggestion,
    AcceptSuggestion, // Tab: run the selected suggestion

    // --- Execution ---
    SubmitQuery, // Enter while open
    ExecuteCommand(String),

    // --- Async Results ---
    SuggestionsLoaded {
        seq: u64,
        result: Result<Vec<Suggestion>, String>,
    },
    CommandCompleted {
        command: String,
        result: Result<CommandResult, String>,
    },
}
