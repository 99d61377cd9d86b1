use crate::app::dispatcher::Tone;
use crate::app::state::NotificationLevel;
use ratatui::style::{Modifier, Style};

pub mod glyphs;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_item: Style,
    pub header_busy: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub input_prompt: Style,
    pub input_text: Style,
    pub input_placeholder: Style,

    pub tone_info: Style,
    pub tone_success: Style,
    pub tone_warning: Style,
    pub tone_danger: Style,
    pub tone_neutral: Style,
    pub field_label: Style,
    pub code: Style,
    pub timestamp: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

impl Theme {
    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface1).fg(p.text),
            header_busy: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.base).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            input_prompt: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            input_text: Style::default().fg(p.text),
            input_placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::ITALIC),

            tone_info: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),
            tone_success: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            tone_warning: Style::default().fg(p.yellow).add_modifier(Modifier::BOLD),
            tone_danger: Style::default()
                .fg(p.red)
                .bg(dim_color(p.red, 0.18))
                .add_modifier(Modifier::BOLD),
            tone_neutral: Style::default().fg(p.subtext0).add_modifier(Modifier::BOLD),
            field_label: Style::default().fg(p.peach),
            code: Style::default().fg(p.teal),
            timestamp: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),

            list_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }

    #[must_use]
    pub fn tone(&self, tone: Tone) -> Style {
        match tone {
            Tone::Info => self.tone_info,
            Tone::Success => self.tone_success,
            Tone::Warning => self.tone_warning,
            Tone::Danger => self.tone_danger,
            Tone::Neutral => self.tone_neutral,
        }
    }

    #[must_use]
    pub fn notification(&self, level: NotificationLevel) -> Style {
        match level {
            NotificationLevel::Info => self.tone_info,
            NotificationLevel::Success => self.tone_success,
            NotificationLevel::Warning => self.tone_warning,
            NotificationLevel::Danger => self.tone_danger,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&Palette::NORD)
    }
}
