use crate::domain::models::{CommandContext, CommandResult, Suggestion};
use anyhow::Result;
use async_trait::async_trait;

/// The remote command-interpretation service. Opaque to the palette.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandService: Send + Sync {
    // Completions for a partially typed command, in display order
    async fn command_suggestions(&self, partial: &str) -> Result<Vec<Suggestion>>;

    async fn execute_command(
        &self,
        command: &str,
        context: &CommandContext,
    ) -> Result<CommandResult>;
}
