use crate::domain::models::HistoryEntry;
use crate::theme::Theme;

use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, Widget},
};

pub struct HistoryList<'a> {
    pub entries: &'a [HistoryEntry],
    pub theme: &'a Theme,
}

impl Widget for HistoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.entries.is_empty() {
            let empty = Line::from(Span::styled(" No commands yet.", self.theme.dimmed));
            buf.set_line(area.x, area.y, &empty, area.width);
            return;
        }

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let kind = entry.result.kind().unwrap_or("?");
                ListItem::new(Line::from(vec![
                    Span::styled(
                        entry.timestamp.with_timezone(&Local).format(" %H:%M ").to_string(),
                        self.theme.timestamp,
                    ),
                    Span::styled(entry.command.as_str(), self.theme.list_item),
                    Span::styled(format!("  {kind}"), self.theme.dimmed),
                ]))
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
