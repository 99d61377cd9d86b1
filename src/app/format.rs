//! Display formatting for numbers coming back from the service.
//!
//! Absent values always render as [`NOT_AVAILABLE`]; a present zero is `0`.

pub const NOT_AVAILABLE: &str = "N/A";

const GROUP_SEPARATOR: char = ',';
const DECIMAL_SEPARATOR: char = '.';

/// `1234567.5` -> `1,234,567.5`. At most two fraction digits, trailing zeros dropped.
#[must_use]
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let cents = (value.abs() * 100.0).round() as u128;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if value < 0.0 && cents > 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }

    if fraction != 0 {
        out.push(DECIMAL_SEPARATOR);
        if fraction % 10 == 0 {
            out.push_str(&(fraction / 10).to_string());
        } else {
            out.push_str(&format!("{fraction:02}"));
        }
    }
    out
}

#[must_use]
pub fn money(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${}", grouped(v)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Two fixed decimals, e.g. `12.35%`.
#[must_use]
pub fn percent_fixed(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.2}%"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Shortest form, e.g. `42%` or `42.5%`.
#[must_use]
pub fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}%", number(v)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[must_use]
pub fn count(value: Option<u64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

fn number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(0.0), "0");
        assert_eq!(grouped(999.0), "999");
        assert_eq!(grouped(1000.0), "1,000");
        assert_eq!(grouped(1234567.5), "1,234,567.5");
        assert_eq!(grouped(1234567.891), "1,234,567.89");
        assert_eq!(grouped(-45210.05), "-45,210.05");
        assert_eq!(grouped(-0.001), "0");
        assert_eq!(grouped(f64::NAN), NOT_AVAILABLE);
    }

    #[test]
    fn test_money_and_percent() {
        assert_eq!(money(Some(2500000.0)), "$2,500,000");
        assert_eq!(money(None), "N/A");
        assert_eq!(money(Some(0.0)), "$0");
        assert_eq!(percent_fixed(Some(3.14159)), "3.14%");
        assert_eq!(percent_fixed(Some(0.0)), "0.00%");
        assert_eq!(percent_fixed(None), "N/A");
        assert_eq!(percent(Some(42.0)), "42%");
        assert_eq!(percent(Some(33.333)), "33.33%");
    }

    #[test]
    fn test_count() {
        assert_eq!(count(Some(0)), "0");
        assert_eq!(count(Some(1500)), "1500");
        assert_eq!(count(None), "N/A");
    }
}
