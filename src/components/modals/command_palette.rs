use crate::app::state::PaletteState;
use crate::components::result_view::ResultPanel;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Widget},
};

use super::helpers::{draw_drop_shadow, palette_rect};

const MAX_SUGGESTION_ROWS: u16 = 6;
const RESULT_ROWS: u16 = 12;
const PLACEHOLDER: &str = "Type a command, e.g. estado del proyecto";

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a PaletteState,
}

impl CommandPaletteModal<'_> {
    fn input_line(&self) -> Line<'_> {
        let theme = self.theme;
        let mut spans = vec![Span::styled(format!(" {} ", glyphs::PROMPT), theme.input_prompt)];

        if self.state.query.is_empty() && !self.state.focused {
            spans.push(Span::styled(PLACEHOLDER, theme.input_placeholder));
        } else {
            spans.push(Span::styled(self.state.query.as_str(), theme.input_text));
        }
        if self.state.focused {
            spans.push(Span::styled(
                "_",
                theme.input_text.add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        if self.state.is_loading() {
            spans.push(Span::styled(
                format!("  {}", glyphs::spinner(self.state.frame_count)),
                theme.tone_info,
            ));
        }
        Line::from(spans)
    }

    fn suggestion_items(&self) -> Vec<ListItem<'_>> {
        let suggestions = &self.state.suggestions;
        suggestions
            .items
            .iter()
            .enumerate()
            .map(|(i, suggestion)| {
                let selected = suggestions.selected_index == Some(i);
                let (prefix, style) = if selected {
                    (format!("{} ", glyphs::SELECTED), self.theme.list_selected)
                } else {
                    ("  ".to_string(), self.theme.list_item)
                };

                let mut spans = vec![
                    Span::styled(prefix, style),
                    Span::styled(format!("{:<24}", suggestion.name), style),
                ];
                if !suggestion.description.is_empty() {
                    spans.push(Span::styled(
                        format!(" {}", suggestion.description),
                        self.theme.dimmed,
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect()
    }
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let suggestion_rows =
            (self.state.suggestions.items.len() as u16).clamp(1, MAX_SUGGESTION_ROWS);
        // Borders + input + two separators
        let height = 2 + 1 + 1 + suggestion_rows + 1 + RESULT_ROWS;

        let modal_area = palette_rect(70, height, area);
        if modal_area.width < 4 || modal_area.height < 3 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let border_style = if self.state.focused {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMANDS ", self.theme.header_logo),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("Ctrl+K", self.theme.footer_segment_key),
                Span::raw(" toggle "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),               // Query input
                Constraint::Length(1),               // Separator
                Constraint::Length(suggestion_rows), // Suggestions
                Constraint::Length(1),               // Separator
                Constraint::Min(0),                  // Result
            ])
            .split(inner_area);

        if layout[0].height > 0 {
            buf.set_line(layout[0].x, layout[0].y, &self.input_line(), layout[0].width);
        }

        let separator = "\u{2500}".repeat(inner_area.width as usize);
        for row in [layout[1], layout[3]] {
            if row.height > 0 {
                buf.set_string(row.x, row.y, &separator, self.theme.border);
            }
        }

        let items = self.suggestion_items();
        if items.is_empty() && layout[2].height > 0 {
            let none = Line::from(Span::styled("  No suggestions.", self.theme.dimmed));
            buf.set_line(layout[2].x, layout[2].y, &none, layout[2].width);
        } else {
            List::new(items).render(layout[2], buf);
        }

        match &self.state.last_result {
            Some(view) => ResultPanel {
                view,
                theme: self.theme,
            }
            .render(layout[4], buf),
            None => {
                let hint = Line::from(Span::styled(
                    "  Results appear here.",
                    self.theme.dimmed,
                ));
                if layout[4].height > 0 {
                    buf.set_line(layout[4].x, layout[4].y, &hint, layout[4].width);
                }
            }
        }
    }
}
