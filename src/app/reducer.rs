use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::PaletteState,
};

/// Applies `action` to `state` and returns the side effects it asks for.
pub fn update(state: &mut PaletteState, action: Action) -> Vec<Command> {
    // --- Feature Chain ---
    let handlers: [fn(&mut PaletteState, &Action) -> UpdateResult; 3] = [
        features::visibility::update,
        features::suggestions::update,
        features::executor::update,
    ];

    for handler in handlers {
        if let UpdateResult::Handled(commands) = handler(state, &action) {
            return commands;
        }
    }

    tracing::debug!(?action, "unhandled action");
    Vec::new()
}
