use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::PaletteState,
};
use std::time::Instant;

pub fn update(state: &mut PaletteState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            state.expire_notifications(Instant::now());
            UpdateResult::none()
        }
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }
        Action::TogglePalette => UpdateResult::Handled(toggle(state)),
        Action::ClosePalette => {
            if state.visible {
                UpdateResult::Handled(close(state))
            } else {
                UpdateResult::none()
            }
        }
        Action::FocusInput(generation) => {
            // Nothing to focus once the palette has gone away again
            if state.pending_focus.fire(*generation) && state.visible {
                state.focused = true;
            }
            UpdateResult::none()
        }
        Action::AutoClose(generation) => {
            if state.pending_auto_close.fire(*generation) && state.visible {
                state.visible = false;
                state.focused = false;
                if state.pending_focus.disarm() {
                    return UpdateResult::Handled(vec![Command::CancelFocus]);
                }
            }
            UpdateResult::none()
        }
        _ => UpdateResult::NotHandled,
    }
}

fn toggle(state: &mut PaletteState) -> Vec<Command> {
    if state.visible {
        return close(state);
    }

    state.visible = true;
    let mut commands = Vec::new();
    if state.pending_auto_close.disarm() {
        commands.push(Command::CancelAutoClose);
    }
    commands.push(Command::ScheduleFocus(state.pending_focus.arm()));
    commands
}

fn close(state: &mut PaletteState) -> Vec<Command> {
    state.visible = false;
    state.focused = false;

    let mut commands = Vec::new();
    if state.pending_focus.disarm() {
        commands.push(Command::CancelFocus);
    }
    if state.pending_auto_close.disarm() {
        commands.push(Command::CancelAutoClose);
    }
    commands
}
