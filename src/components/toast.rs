use crate::app::state::Notification;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

const TOAST_WIDTH: u16 = 36;
const TOAST_HEIGHT: u16 = 3;

/// Stacks notifications in the top-right corner, newest first.
pub struct Toasts<'a> {
    pub notifications: &'a [Notification],
    pub theme: &'a Theme,
}

impl Widget for Toasts<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = TOAST_WIDTH.min(area.width);
        if width < 4 {
            return;
        }

        let mut y = area.y.saturating_add(1);
        for notification in self.notifications.iter().rev() {
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }
            let toast_area = Rect {
                x: area.right().saturating_sub(width + 1).max(area.x),
                y,
                width,
                height: TOAST_HEIGHT,
            };
            let style = self.theme.notification(notification.level);

            Clear.render(toast_area, buf);
            Paragraph::new(Line::from(notification.message.as_str()))
                .style(style)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(style),
                )
                .render(toast_area, buf);
            y += TOAST_HEIGHT;
        }
    }
}
