//! Parsing of the integers typed by the user.

use std::num::IntErrorKind;

/// Parse user text as an integer.
///
/// Surrounding whitespace is ignored and a leading `+` or `-` is allowed.
/// Digit strings too large for `i64` still count as integers and saturate
/// to `i64::MAX` / `i64::MIN`. Returns `None` for anything that is not
/// an integer.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let text = raw.trim();
    match text.parse::<i64>() {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
