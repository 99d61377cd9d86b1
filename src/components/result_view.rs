use crate::app::dispatcher::{ResultLine, ResultView};
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

/// Renders one dispatched command result.
pub struct ResultPanel<'a> {
    pub view: &'a ResultView,
    pub theme: &'a Theme,
}

impl ResultPanel<'_> {
    fn lines(&self) -> Vec<Line<'_>> {
        let theme = self.theme;
        let mut lines = Vec::with_capacity(self.view.lines.len() + 1);
        lines.push(Line::from(Span::styled(
            self.view.title.as_str(),
            theme.tone(self.view.tone),
        )));

        for line in &self.view.lines {
            lines.push(match line {
                ResultLine::Field { label, value } => Line::from(vec![
                    Span::styled(format!("{label}: "), theme.field_label),
                    Span::styled(value.as_str(), theme.list_item),
                ]),
                ResultLine::Text(text) => Line::from(Span::styled(text.as_str(), theme.list_item)),
                ResultLine::Heading(text) => {
                    Line::from(Span::styled(text.as_str(), theme.tone(self.view.tone)))
                }
                ResultLine::Item(text) => Line::from(vec![
                    Span::styled(format!(" {} ", glyphs::BULLET), theme.dimmed),
                    Span::styled(text.as_str(), theme.list_item),
                ]),
                ResultLine::Code(text) => Line::from(Span::styled(text.as_str(), theme.code)),
            });
        }
        lines
    }
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
