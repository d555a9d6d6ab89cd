//! Attribute value parsing
//!
//! Router attribute values are loosely formatted strings; these helpers
//! convert them to scalars with the tolerance the formats require. Numeric
//! parsing takes the longest valid prefix and ignores trailing units
//! (`58.5Mbps-HT` parses as 58.5), and absent or unparseable values map to
//! a neutral default rather than an error: a missing counter on one router
//! model must not fail the whole record.

/// Parse a boolean attribute
///
/// Case-insensitive `"true"` is true; everything else, including an absent
/// value, is false.
pub fn parse_bool(value: Option<&str>) -> bool {
    value.map(|s| s.eq_ignore_ascii_case("true")).unwrap_or(false)
}

/// Parse an unsigned 32-bit decimal attribute, 0 on failure
pub fn parse_u32(value: Option<&str>) -> u32 {
    u32::try_from(parse_u64(value)).unwrap_or(0)
}

/// Parse an unsigned 64-bit decimal attribute, 0 on failure
pub fn parse_u64(value: Option<&str>) -> u64 {
    match value.map(digit_prefix) {
        Some(Some((n, _))) => n,
        _ => 0,
    }
}

/// Parse a floating-point attribute, NaN on failure
pub fn parse_f64(value: Option<&str>) -> f64 {
    let Some(s) = value else { return f64::NAN };

    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
            end += 1;
        }
    }
    if end == digits_start {
        return f64::NAN;
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Parse a paired `rx/tx` or `rx,tx` counter attribute
///
/// Returns `(0, 0)` when either half is missing or unparseable.
pub fn parse_rx_tx(value: Option<&str>) -> (u64, u64) {
    let Some(s) = value else { return (0, 0) };

    let Some((rx, rest)) = digit_prefix(s) else {
        return (0, 0);
    };
    let Some(rest) = rest.strip_prefix(['/', ',']) else {
        return (0, 0);
    };
    let Some((tx, _)) = digit_prefix(rest) else {
        return (0, 0);
    };

    (rx, tx)
}

/// Parse an uptime-style duration attribute into seconds
///
/// The format is a concatenation of `<n>y`, `<n>w`, `<n>d` and
/// `<n>:<n>:<n>` segments, e.g. `6w6d18:33:07`. The number before the
/// first colon is hours, numbers after subsequent colons are minutes and
/// then seconds; a trailing bare number is seconds. A segment that does
/// not start with a digit ends the scan, keeping what was accumulated.
pub fn parse_duration(value: Option<&str>) -> u64 {
    let Some(s) = value else { return 0 };

    let mut total: u64 = 0;
    let mut have_hour = false;
    let mut rest = s;

    while !rest.is_empty() {
        let Some((number, after)) = digit_prefix(rest) else {
            break;
        };

        let mut suffix_chars = after.chars();
        let segment = match suffix_chars.next() {
            Some('y') => number.saturating_mul(365 * 86_400),
            Some('w') => number.saturating_mul(7 * 86_400),
            Some('d') => number.saturating_mul(86_400),
            Some(':') => {
                let scale = if have_hour { 60 } else { 3_600 };
                have_hour = true;
                number.saturating_mul(scale)
            }
            // unknown unit or end of string: the number stands alone
            _ => number,
        };
        total = total.saturating_add(segment);

        rest = suffix_chars.as_str();
    }

    total
}

/// Split the leading decimal digits off a string
///
/// Returns the parsed value and the remainder, or `None` when the string
/// does not start with a digit or the value overflows a u64.
fn digit_prefix(s: &str) -> Option<(u64, &str)> {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }

    let mut value: u64 = 0;
    for b in s[..end].bytes() {
        value = value
            .checked_mul(10)?
            .checked_add((b - b'0') as u64)?;
    }

    Some((value, &s[end..]))
}
