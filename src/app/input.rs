use crate::app::{
    action::Action,
    keymap::{KeyMap, KeyScope},
    state::PaletteState,
};
use crossterm::event::{Event, KeyEvent, KeyEventKind};

#[must_use]
pub fn scope_of(state: &PaletteState) -> KeyScope {
    match (state.visible, state.focused) {
        (false, _) => KeyScope::Hidden,
        (true, false) => KeyScope::Open,
        (true, true) => KeyScope::Focused,
    }
}

pub fn map_key_to_action(key: KeyEvent, state: &PaletteState, keymap: &KeyMap) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    keymap.get_action(key, scope_of(state))
}

pub fn map_event_to_action(event: Event, state: &PaletteState, keymap: &KeyMap) -> Option<Action> {
    match event {
        Event::Key(key) => map_key_to_action(key, state, keymap),
        Event::Paste(text) if state.visible && state.focused => {
            let mut query = state.query.clone();
            query.push_str(text.trim_end_matches(['\r', '\n']));
            Some(Action::InputChanged(query))
        }
        // Resizes are picked up by the next draw
        _ => None,
    }
}
