//! The single owner of palette state.
//!
//! Everything that mutates [`PaletteState`] goes through
//! [`PaletteController::dispatch`]: the reducer decides, the controller carries
//! out the resulting commands (remote calls, timers, history writes).

use crate::app::{
    action::Action,
    command::Command,
    features::suggestions::fallback_suggestions,
    handler,
    history::HistoryStore,
    input,
    keymap::KeyMap,
    reducer,
    scheduler::{Deferred, Scheduler},
    state::PaletteState,
};
use crate::config::PaletteConfig;
use crate::domain::{
    models::{CommandContext, HistoryEntry},
    service::CommandService,
};
use crate::infrastructure::store::KeyValueStore;
use crossterm::event::KeyEvent;
use std::sync::Arc;
use tokio::sync::mpsc;

const ACTION_CHANNEL_CAPACITY: usize = 100;

pub struct PaletteController {
    state: PaletteState,
    history: HistoryStore,
    scheduler: Scheduler,
    keymap: KeyMap,
    service: Arc<dyn CommandService>,
    context: CommandContext,
    timings: PaletteConfig,
    action_tx: mpsc::Sender<Action>,
}

impl PaletteController {
    /// Loads persisted history and the fallback suggestions. Async results
    /// and timers arrive on the returned receiver and must be fed back
    /// through [`dispatch`](Self::dispatch).
    pub fn mount(
        service: Arc<dyn CommandService>,
        store: Arc<dyn KeyValueStore>,
        context: CommandContext,
        timings: PaletteConfig,
    ) -> (Self, mpsc::Receiver<Action>) {
        let (action_tx, action_rx) = mpsc::channel(ACTION_CHANNEL_CAPACITY);
        let history = HistoryStore::new(store);

        let mut state = PaletteState::new(history.load(), fallback_suggestions());
        state.notification_ttl = timings.notification_ttl();
        tracing::debug!(entries = state.history.len(), "palette mounted");

        let controller = Self {
            state,
            history,
            scheduler: Scheduler::new(action_tx.clone()),
            keymap: KeyMap::default(),
            service,
            context,
            timings,
            action_tx,
        };
        (controller, action_rx)
    }

    #[must_use]
    pub fn state(&self) -> &PaletteState {
        &self.state
    }

    #[must_use]
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    #[must_use]
    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    // --- Entry Points ---

    pub fn on_key_down(&mut self, key: KeyEvent) {
        if let Some(action) = input::map_key_to_action(key, &self.state, &self.keymap) {
            self.dispatch(action);
        }
    }

    pub fn toggle_visibility(&mut self) {
        self.dispatch(Action::TogglePalette);
    }

    pub fn on_input(&mut self, text: &str) {
        self.dispatch(Action::InputChanged(text.to_string()));
    }

    pub fn execute_command(&mut self, text: &str) {
        self.dispatch(Action::ExecuteCommand(text.to_string()));
    }

    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::update(&mut self.state, action);
        for command in commands {
            self.run(command);
        }
    }

    // --- Effects ---

    fn run(&mut self, command: Command) {
        match command {
            Command::FetchSuggestions { .. } | Command::Execute(_) => handler::handle_command(
                command,
                self.service.clone(),
                self.context.clone(),
                self.action_tx.clone(),
            ),
            Command::RecordHistory { command, result } => {
                self.history
                    .append(&mut self.state.history, HistoryEntry::new(command, result));
            }
            Command::ScheduleFocus(generation) => self.scheduler.schedule(
                Deferred::FocusInput,
                self.timings.focus_delay(),
                Action::FocusInput(generation),
            ),
            Command::CancelFocus => self.scheduler.cancel(Deferred::FocusInput),
            Command::ScheduleAutoClose(generation) => self.scheduler.schedule(
                Deferred::AutoClose,
                self.timings.auto_close_delay(),
                Action::AutoClose(generation),
            ),
            Command::CancelAutoClose => self.scheduler.cancel(Deferred::AutoClose),
        }
    }
}
