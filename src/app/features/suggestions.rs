use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::PaletteState,
};
use crate::domain::models::Suggestion;

/// Queries shorter than this never reach the service.
pub const MIN_QUERY_CHARS: usize = 2;

/// Shown before the user has typed anything.
#[must_use]
pub fn fallback_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new("Estado del Proyecto", "Ver estado actual del proyecto"),
        Suggestion::new("Analizar Riesgos", "Análisis completo de riesgos"),
        Suggestion::new("Resumen Costos", "Resumen financiero del proyecto"),
        Suggestion::new("Crear Reporte Diario", "Generar nuevo reporte de obra"),
        Suggestion::new("Predecir Costos", "Predicción de costos con IA"),
    ]
}

pub fn update(state: &mut PaletteState, action: &Action) -> UpdateResult {
    match action {
        Action::InputChanged(query) => {
            state.query = query.clone();
            UpdateResult::Handled(on_query_changed(state))
        }
        Action::InsertChar(c) => {
            state.query.push(*c);
            UpdateResult::Handled(on_query_changed(state))
        }
        Action::DeleteChar => {
            if state.query.pop().is_none() {
                return UpdateResult::none();
            }
            UpdateResult::Handled(on_query_changed(state))
        }
        Action::SelectNextSuggestion => {
            state.suggestions.select_next();
            UpdateResult::none()
        }
        Action::SelectPrevSuggestion => {
            state.suggestions.select_prev();
            UpdateResult::none()
        }
        Action::SuggestionsLoaded { seq, result } => {
            match result {
                Ok(items) => {
                    if !state.suggestions.settle(*seq, items.clone()) {
                        tracing::debug!(
                            seq,
                            latest = state.suggestions.latest_seq(),
                            "dropping stale suggestions"
                        );
                    }
                }
                Err(e) => {
                    if state.suggestions.settle(*seq, Vec::new()) {
                        tracing::warn!(error = %e, "failed to fetch suggestions");
                    }
                }
            }
            UpdateResult::none()
        }
        _ => UpdateResult::NotHandled,
    }
}

fn on_query_changed(state: &mut PaletteState) -> Vec<Command> {
    if state.query.chars().count() < MIN_QUERY_CHARS {
        state.suggestions.reset();
        return Vec::new();
    }

    let seq = state.suggestions.issue();
    vec![Command::FetchSuggestions {
        seq,
        query: state.query.clone(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Vec<Suggestion> {
        names.iter().map(|n| Suggestion::new(*n, "")).collect()
    }

    fn fetch_seq(result: UpdateResult) -> u64 {
        match result {
            UpdateResult::Handled(cmds) => match cmds.as_slice() {
                [Command::FetchSuggestions { seq, .. }] => *seq,
                other => panic!("Expected one fetch, got {other:?}"),
            },
            UpdateResult::NotHandled => panic!("action was not handled"),
        }
    }

    #[test]
    fn test_short_query_clears_without_fetch() {
        let mut state = PaletteState::new(Vec::new(), fallback_suggestions());
        let result = update(&mut state, &Action::InputChanged("e".to_string()));

        assert_eq!(result, UpdateResult::none());
        assert!(state.suggestions.items.is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_each_keystroke_fetches() {
        let mut state = PaletteState::default();
        update(&mut state, &Action::InsertChar('e'));
        let first = fetch_seq(update(&mut state, &Action::InsertChar('s')));
        let second = fetch_seq(update(&mut state, &Action::InsertChar('t')));

        assert_eq!(state.query, "est");
        assert!(second > first);
        assert!(state.is_loading());
    }

    #[test]
    fn test_late_response_is_ignored() {
        let mut state = PaletteState::default();
        let old = fetch_seq(update(&mut state, &Action::InputChanged("es".to_string())));
        let new = fetch_seq(update(&mut state, &Action::InputChanged("est".to_string())));

        update(
            &mut state,
            &Action::SuggestionsLoaded {
                seq: new,
                result: Ok(items(&["Estado del Proyecto"])),
            },
        );
        update(
            &mut state,
            &Action::SuggestionsLoaded {
                seq: old,
                result: Ok(items(&["Estimar"])),
            },
        );

        assert_eq!(state.suggestions.items, items(&["Estado del Proyecto"]));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_response_after_shortening_is_ignored() {
        let mut state = PaletteState::default();
        let seq = fetch_seq(update(&mut state, &Action::InputChanged("an".to_string())));
        update(&mut state, &Action::DeleteChar);

        update(
            &mut state,
            &Action::SuggestionsLoaded {
                seq,
                result: Ok(items(&["Analizar Riesgos"])),
            },
        );
        assert!(state.suggestions.items.is_empty());
    }

    #[test]
    fn test_failed_fetch_clears_list() {
        let mut state = PaletteState::new(Vec::new(), fallback_suggestions());
        let seq = fetch_seq(update(&mut state, &Action::InputChanged("xyz".to_string())));
        update(
            &mut state,
            &Action::SuggestionsLoaded {
                seq,
                result: Err("connection refused".to_string()),
            },
        );

        assert!(state.suggestions.items.is_empty());
        assert!(!state.is_loading());
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_delete_on_empty_query() {
        let mut state = PaletteState::new(Vec::new(), fallback_suggestions());
        assert_eq!(update(&mut state, &Action::DeleteChar), UpdateResult::none());
        assert_eq!(state.suggestions.items.len(), 5);
    }

    #[test]
    fn test_multibyte_query_counts_chars() {
        let mut state = PaletteState::default();
        let result = update(&mut state, &Action::InputChanged("ñ".to_string()));
        assert_eq!(result, UpdateResult::none());
    }
}
