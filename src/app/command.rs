use crate::domain::models::CommandResult;

/// Side effects requested by the reducer, carried out by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchSuggestions { seq: u64, query: String },
    Execute(String),
    RecordHistory { command: String, result: CommandResult },
    ScheduleFocus(u64),
    CancelFocus,
    ScheduleAutoClose(u64),
    CancelAutoClose,
}
