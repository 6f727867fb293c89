//! Lenient pagination parameter handling.
//!
//! Client-supplied `offset`/`limit` values are clamped, never rejected: a
//! negative offset becomes 0, an oversized limit becomes 100, and garbage
//! parses as the default. Leading digits are honored the way browsers parse
//! query numbers, so `"25abc"` still means 25.

/// Hard ceiling on page size, shared by every list route.
pub const MAX_LIMIT: u32 = 100;

/// Default page size when the client sends nothing usable.
pub const DEFAULT_LIMIT: u32 = 10;

/// `max(0, parsed or 0)`.
pub fn parse_offset(raw: Option<&str>) -> u32 {
    leading_int(raw).map_or(0, |n| n.max(0) as u32)
}

/// `min(max(1, parsed or default), 100)`. A parsed `0` counts as "nothing
/// usable" and falls back to the default, the same way `parseInt(x) || d`
/// reads it; negative values clamp up to 1.
pub fn parse_limit(raw: Option<&str>, default: u32) -> u32 {
    let parsed = match leading_int(raw) {
        Some(n) if n > 0 => n as u32,
        Some(n) if n < 0 => 1,
        _ => default.max(1),
    };
    parsed.min(MAX_LIMIT)
}

/// Parses the leading signed integer of a string, if any.
fn leading_int(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim();
    let mut end = 0;
    for (i, ch) in s.char_indices() {
        if ch.is_ascii_digit() || (i == 0 && (ch == '-' || ch == '+')) {
            end = i + ch.len_utf8();
        } else {
            break;
        }
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn offset_clamps_negatives_to_zero() {
        assert_eq!(parse_offset(Some("-5")), 0);
        assert_eq!(parse_offset(Some("0")), 0);
        assert_eq!(parse_offset(Some("42")), 42);
    }

    #[test]
    fn offset_defaults_on_garbage() {
        assert_eq!(parse_offset(None), 0);
        assert_eq!(parse_offset(Some("abc")), 0);
        assert_eq!(parse_offset(Some("")), 0);
    }

    #[test]
    fn limit_clamps_to_ceiling() {
        assert_eq!(parse_limit(Some("500"), DEFAULT_LIMIT), 100);
        assert_eq!(parse_limit(Some("100"), DEFAULT_LIMIT), 100);
        assert_eq!(parse_limit(Some("99"), DEFAULT_LIMIT), 99);
    }

    #[test]
    fn limit_zero_is_falsy_and_takes_the_default() {
        assert_eq!(parse_limit(Some("0"), DEFAULT_LIMIT), 10);
    }

    #[test]
    fn negative_limit_floors_at_one() {
        assert_eq!(parse_limit(Some("-3"), DEFAULT_LIMIT), 1);
    }

    #[test]
    fn limit_defaults_on_garbage() {
        assert_eq!(parse_limit(None, DEFAULT_LIMIT), 10);
        assert_eq!(parse_limit(Some("lots"), DEFAULT_LIMIT), 10);
    }

    #[test]
    fn leading_digits_parse_leniently() {
        assert_eq!(parse_limit(Some("25abc"), DEFAULT_LIMIT), 25);
        assert_eq!(parse_offset(Some("7;drop")), 7);
    }
}
