pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const PROMPT: &str = "\u{276f}";
pub const SELECTED: &str = "\u{25b8}";
pub const BULLET: &str = "\u{2022}";
pub const SPINNER: [&str; 10] = [
    "\u{280b}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283c}", "\u{2834}", "\u{2826}", "\u{2827}",
    "\u{2807}", "\u{280f}",
];

#[must_use]
pub fn spinner(frame: u64) -> &'static str {
    SPINNER[(frame % SPINNER.len() as u64) as usize]
}
