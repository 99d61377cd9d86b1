use ratatui::style::Color;

pub struct Palette {
    pub base: Color,
    pub crust: Color,
    pub text: Color,
    pub subtext0: Color,
    pub surface0: Color,
    pub surface1: Color,
    pub surface2: Color,
    pub overlay0: Color,
    pub blue: Color,
    pub teal: Color,
    pub green: Color,
    pub yellow: Color,
    pub peach: Color,
    pub red: Color,
    pub mauve: Color,
}

impl Palette {
    /// Polar night surfaces with frost and aurora accents.
    pub const NORD: Palette = Palette {
        base: Color::Rgb(46, 52, 64),
        crust: Color::Rgb(43, 48, 59),
        text: Color::Rgb(236, 239, 244),
        subtext0: Color::Rgb(216, 222, 233),
        surface0: Color::Rgb(76, 86, 106),
        surface1: Color::Rgb(59, 66, 82),
        surface2: Color::Rgb(67, 76, 94),
        overlay0: Color::Rgb(129, 161, 193),
        blue: Color::Rgb(129, 161, 193),
        teal: Color::Rgb(143, 188, 187),
        green: Color::Rgb(163, 190, 140),
        yellow: Color::Rgb(235, 203, 139),
        peach: Color::Rgb(208, 135, 112),
        red: Color::Rgb(191, 97, 106),
        mauve: Color::Rgb(180, 142, 173),
    };
}

/// Scales an `Rgb` color's channels by `factor` (0.0 = black, 1.0 = unchanged).
/// Other `Color` variants pass through.
#[must_use]
pub fn dim_color(c: Color, factor: f32) -> Color {
    if let Color::Rgb(r, g, b) = c {
        Color::Rgb(
            (f32::from(r) * factor) as u8,
            (f32::from(g) * factor) as u8,
            (f32::from(b) * factor) as u8,
        )
    } else {
        c
    }
}
