use crate::app::state::PaletteState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::history::HistoryList;
use crate::components::modals::{helpers::dim_area, CommandPaletteModal};
use crate::components::result_view::ResultPanel;
use crate::components::toast::Toasts;
use crate::domain::models::CommandContext;
use crate::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub result: Rect,
    pub history: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main[1]);

    AppLayout {
        header: main[0],
        result: body[0],
        history: body[1],
        footer: main[2],
    }
}

fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(title, theme.header_item),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border)
}

pub fn draw(f: &mut Frame, state: &PaletteState, context: &CommandContext, theme: &Theme) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let layout = get_layout(area);

    // --- Header ---
    f.render_widget(
        Header {
            state,
            context,
            theme,
        },
        layout.header,
    );

    // --- Body ---
    let result_block = panel("LAST RESULT", theme);
    let result_inner = result_block.inner(layout.result);
    f.render_widget(result_block, layout.result);
    if let Some(view) = &state.last_result {
        f.render_widget(ResultPanel { view, theme }, result_inner);
    } else if result_inner.height > 0 {
        let hint = Line::from(Span::styled(
            " Press Ctrl+K to run a command.",
            theme.dimmed,
        ));
        f.buffer_mut()
            .set_line(result_inner.x, result_inner.y, &hint, result_inner.width);
    }

    let history_block = panel("RECENT", theme);
    let history_inner = history_block.inner(layout.history);
    f.render_widget(history_block, layout.history);
    if history_inner.height > 0 {
        f.render_widget(
            HistoryList {
                entries: &state.history,
                theme,
            },
            history_inner,
        );
    }

    // --- Footer ---
    f.render_widget(Footer { state, theme }, layout.footer);

    // --- Overlays ---
    if state.visible {
        dim_area(f.buffer_mut(), area);
        f.render_widget(CommandPaletteModal { theme, state }, area);
    }
    f.render_widget(
        Toasts {
            notifications: &state.notifications,
            theme,
        },
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::dispatcher;
    use crate::app::state::NotificationLevel;
    use crate::domain::models::{CommandResult, HistoryEntry, Suggestion};
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;

    fn render(state: &PaletteState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let context = CommandContext {
            user_id: 2,
            project_id: Some(7),
        };
        terminal
            .draw(|f| draw(f, state, &context, &Theme::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_hidden_palette_shows_host() {
        let state = PaletteState::default();
        let screen = render(&state, 80, 20);
        assert!(screen.contains("CMDPAL"));
        assert!(screen.contains("project 7"));
        assert!(screen.contains("No commands yet."));
        assert!(!screen.contains("COMMANDS"));
    }

    #[test]
    fn test_open_palette_lists_suggestions() {
        let mut state = PaletteState::new(
            Vec::new(),
            vec![
                Suggestion::new("Estado del Proyecto", "Ver estado actual del proyecto"),
                Suggestion::new("Analizar Riesgos", ""),
            ],
        );
        state.visible = true;
        state.focused = true;
        state.query = "es".to_string();
        state.suggestions.select_next();

        let screen = render(&state, 100, 30);
        assert!(screen.contains("COMMANDS"));
        assert!(screen.contains("Estado del Proyecto"));
        assert!(screen.contains("Analizar Riesgos"));
        assert!(screen.contains("Results appear here."));
    }

    #[test]
    fn test_result_and_history_render() {
        let result = CommandResult::from_value(json!({
            "type": "project_status",
            "project": "Alpha",
            "progress": 42,
            "recent_reports": 3,
        }));
        let mut state = PaletteState {
            last_result: Some(dispatcher::render(&result)),
            ..Default::default()
        };
        state.history.push(HistoryEntry::new("estado del proyecto", result));

        let screen = render(&state, 100, 24);
        assert!(screen.contains("Project status: Alpha"));
        assert!(screen.contains("Progress: 42%"));
        assert!(screen.contains("estado del proyecto"));
    }

    #[test]
    fn test_toast_is_drawn_over_palette() {
        let mut state = PaletteState {
            visible: true,
            ..Default::default()
        };
        state.notify(NotificationLevel::Warning, "Please enter a command");

        let screen = render(&state, 100, 24);
        assert!(screen.contains("Please enter a command"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut state = PaletteState::new(Vec::new(), Vec::new());
        state.visible = true;
        state.notify(NotificationLevel::Danger, "Error executing the command");
        for (w, h) in [(1, 1), (5, 3), (12, 4), (30, 6)] {
            render(&state, w, h);
        }
    }
}
