use crate::app::{action::Action, command::Command};
use crate::domain::{models::CommandContext, service::CommandService};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Spawns the remote call behind `command`. The outcome comes back on `tx`.
pub fn handle_command(
    command: Command,
    service: Arc<dyn CommandService>,
    context: CommandContext,
    tx: mpsc::Sender<Action>,
) {
    match command {
        Command::FetchSuggestions { seq, query } => {
            tokio::spawn(async move {
                let result = service
                    .command_suggestions(&query)
                    .await
                    .map_err(|e| format!("{e:#}"));
                let _ = tx.send(Action::SuggestionsLoaded { seq, result }).await;
            });
        }
        Command::Execute(command) => {
            tokio::spawn(async move {
                let result = service
                    .execute_command(&command, &context)
                    .await
                    .map_err(|e| format!("{e:#}"));
                let _ = tx.send(Action::CommandCompleted { command, result }).await;
            });
        }
        other => tracing::warn!(command = ?other, "not a remote command"),
    }
}
