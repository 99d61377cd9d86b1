use crate::app::state::PaletteState;
use crate::domain::models::CommandContext;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a PaletteState,
    pub context: &'a CommandContext,
    pub theme: &'a Theme,
}

impl Header<'_> {
    fn context_text(&self) -> String {
        match self.context.project_id {
            Some(project) => format!(" user {}  project {} ", self.context.user_id, project),
            None => format!(" user {}  all projects ", self.context.user_id),
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let item_bg = self.theme.header_item.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        // fg = current segment bg, bg = next segment bg
        let sep_logo_item = Style::default().fg(logo_bg).bg(item_bg);
        let sep_item_base = Style::default().fg(item_bg).bg(base_bg);

        let mut spans = vec![
            Span::styled(" CMDPAL ", self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, sep_logo_item),
            Span::styled(self.context_text(), self.theme.header_item),
            Span::styled(glyphs::SEP_RIGHT, sep_item_base),
            Span::raw(" "),
        ];

        if self.state.is_loading() {
            spans.push(Span::styled(
                format!(" {} working ", glyphs::spinner(self.state.frame_count)),
                self.theme.header_busy,
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
