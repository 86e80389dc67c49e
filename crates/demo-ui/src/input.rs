//! Reading raw form values the way the page always has.

use demo_core::number::to_int32;

/// Leading-integer parse with JS `parseInt` rules: optional whitespace,
/// optional sign, then decimal digits or a `0x`/`0X` prefixed hex run.
/// Parsing stops at the first character outside the radix. Nothing
/// parsable is `0`; values outside `i32` wrap like `ToInt32`.
pub fn parse_int_lenient(raw: &str) -> i32 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value = 0.0_f64;
    let mut seen = false;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen = true;
        value = value * f64::from(radix) + f64::from(digit);
    }
    if !seen {
        return 0;
    }
    to_int32(if negative { -value } else { value })
}

/// Empty input falls back to `default`.
pub fn name_or_default<'a>(raw: &'a str, default: &'a str) -> &'a str {
    if raw.is_empty() {
        default
    } else {
        raw
    }
}
