use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Which bindings apply depends on how far the palette is "in front".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScope {
    Hidden,
    Open,
    Focused,
}

pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
    pub hidden: HashMap<KeyEvent, Action>,
    pub open: HashMap<KeyEvent, Action>,
    pub focused: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut global = HashMap::new();
        let mut hidden = HashMap::new();
        let mut open = HashMap::new();
        let mut focused = HashMap::new();

        // --- Global ---
        global.insert(ctrl('k'), Action::TogglePalette);
        global.insert(ctrl('K'), Action::TogglePalette);
        global.insert(ctrl('c'), Action::Quit);

        // --- Palette Hidden ---
        hidden.insert(key(KeyCode::Char('q')), Action::Quit);

        // --- Palette Open ---
        open.insert(key(KeyCode::Esc), Action::ClosePalette);
        open.insert(key(KeyCode::Enter), Action::SubmitQuery);

        // --- Input Focused ---
        focused.insert(key(KeyCode::Backspace), Action::DeleteChar);
        focused.insert(key(KeyCode::Down), Action::SelectNextSuggestion);
        focused.insert(key(KeyCode::Up), Action::SelectPrevSuggestion);
        focused.insert(key(KeyCode::Tab), Action::AcceptSuggestion);

        Self {
            global,
            hidden,
            open,
            focused,
        }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent, scope: KeyScope) -> Option<Action> {
        let event = KeyEvent::new(event.code, event.modifiers);
        if let Some(action) = self.global.get(&event) {
            return Some(action.clone());
        }

        match scope {
            KeyScope::Hidden => self.hidden.get(&event).cloned(),
            KeyScope::Open => self.open.get(&event).cloned(),
            KeyScope::Focused => self
                .focused
                .get(&event)
                .or_else(|| self.open.get(&event))
                .cloned()
                .or_else(|| text_input(event)),
        }
    }
}

fn text_input(event: KeyEvent) -> Option<Action> {
    match event.code {
        KeyCode::Char(c)
            if event.modifiers.difference(KeyModifiers::SHIFT).is_empty() && !c.is_control() =>
        {
            Some(Action::InsertChar(c))
        }
        _ => None,
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_k_everywhere() {
        let map = KeyMap::default();
        for scope in [KeyScope::Hidden, KeyScope::Open, KeyScope::Focused] {
            assert_eq!(
                map.get_action(press(KeyCode::Char('k'), KeyModifiers::CONTROL), scope),
                Some(Action::TogglePalette)
            );
        }
    }

    #[test]
    fn test_escape_and_enter_need_open_palette() {
        let map = KeyMap::default();
        let esc = press(KeyCode::Esc, KeyModifiers::NONE);
        let enter = press(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(map.get_action(esc, KeyScope::Hidden), None);
        assert_eq!(map.get_action(enter, KeyScope::Hidden), None);
        assert_eq!(map.get_action(esc, KeyScope::Open), Some(Action::ClosePalette));
        assert_eq!(map.get_action(enter, KeyScope::Focused), Some(Action::SubmitQuery));
    }

    #[test]
    fn test_typing_only_when_focused() {
        let map = KeyMap::default();
        let q = press(KeyCode::Char('q'), KeyModifiers::NONE);
        let upper = press(KeyCode::Char('E'), KeyModifiers::SHIFT);

        assert_eq!(map.get_action(q, KeyScope::Hidden), Some(Action::Quit));
        assert_eq!(map.get_action(q, KeyScope::Open), None);
        assert_eq!(map.get_action(q, KeyScope::Focused), Some(Action::InsertChar('q')));
        assert_eq!(map.get_action(upper, KeyScope::Focused), Some(Action::InsertChar('E')));
        assert_eq!(
            map.get_action(press(KeyCode::Char('x'), KeyModifiers::ALT), KeyScope::Focused),
            None
        );
    }
}
