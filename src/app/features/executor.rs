use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    dispatcher,
    state::{NotificationLevel, PaletteState},
};

pub const EMPTY_COMMAND_WARNING: &str = "Please enter a command";
pub const EXECUTION_FAILED: &str = "Error executing the command";

pub fn update(state: &mut PaletteState, action: &Action) -> UpdateResult {
    match action {
        Action::SubmitQuery => {
            if !state.visible {
                return UpdateResult::none();
            }
            let query = state.query.clone();
            UpdateResult::Handled(execute(state, &query))
        }
        Action::ExecuteCommand(command) => UpdateResult::Handled(execute(state, command)),
        Action::AcceptSuggestion => {
            let Some(selected) = state.suggestions.selected() else {
                return UpdateResult::none();
            };
            let command = selected.name.to_lowercase();
            state.query = command.clone();
            UpdateResult::Handled(execute(state, &command))
        }
        Action::CommandCompleted { command, result } => {
            state.executions_in_flight = state.executions_in_flight.saturating_sub(1);
            match result {
                Ok(result) => {
                    state.last_result = Some(dispatcher::render(result));
                    let mut commands = vec![Command::RecordHistory {
                        command: command.clone(),
                        result: result.clone(),
                    }];
                    if result.closes_palette() && state.visible {
                        commands.push(Command::ScheduleAutoClose(state.pending_auto_close.arm()));
                    }
                    UpdateResult::Handled(commands)
                }
                Err(e) => {
                    tracing::error!(command = %command, error = %e, "command execution failed");
                    state.notify(NotificationLevel::Danger, EXECUTION_FAILED);
                    UpdateResult::none()
                }
            }
        }
        _ => UpdateResult::NotHandled,
    }
}

fn execute(state: &mut PaletteState, command: &str) -> Vec<Command> {
    if command.trim().is_empty() {
        state.notify(NotificationLevel::Warning, EMPTY_COMMAND_WARNING);
        return Vec::new();
    }

    state.executions_in_flight += 1;
    vec![Command::Execute(command.to_string())]
}
