use crate::app::{
    action::Action, controller::PaletteController, input::map_event_to_action,
    listener::KeyboardListener, ui,
};
use crate::theme::Theme;

use anyhow::Result;
use crossterm::event::Event;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    controller: PaletteController,
    action_rx: mpsc::Receiver<Action>,
) -> Result<()> {
    // Dropped on return, which stops the reader
    let (_listener, event_rx) = KeyboardListener::start();
    run_loop_with_events(terminal, controller, event_rx, action_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut controller: PaletteController,
    mut event_rx: mpsc::Receiver<std::io::Result<Event>>,
    mut action_rx: mpsc::Receiver<Action>,
) -> Result<()> {
    let mut interval = interval(TICK_RATE);
    let theme = Theme::default();

    loop {
        // --- 1. Render ---
        terminal.draw(|f| ui::draw(f, controller.state(), controller.context(), &theme))?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            res = event_rx.recv() => match res {
                Some(Ok(event)) => map_event_to_action(event, controller.state(), controller.keymap()),
                Some(Err(e)) => return Err(e.into()),
                None => Some(Action::Quit),
            },

            // Async Results & Timers
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            controller.dispatch(action);
            if controller.state().should_quit {
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
