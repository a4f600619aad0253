//! Display formatting and parsing for computed values.

/// Format a computed value for the display line.
///
/// Integral values render with no decimal point, so `4.0 × 5.0` shows as
/// `20` rather than `20.0`. Non-integral values use the shortest decimal
/// form that parses back to the same number. Zero of either sign renders as
/// `"0"`.
///
/// # Example
///
/// ```
/// use fourbanger::core::format_number;
///
/// assert_eq!(format_number(20.0), "20");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Parse display text back into a value, treating unparsable text as `0.0`.
///
/// The engine only ever writes numerals to the display, so the fallback is
/// never hit from inside the crate; it keeps the read path total for hosts
/// that construct display text themselves.
pub fn parse_display(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}
