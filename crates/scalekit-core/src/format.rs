//! Scale number formatting and parsing
//!
//! Scale values are shown with a configurable number of fractional digits,
//! but without the noise: `1.500` is displayed as `1.5` and `2.000` as `2`.
//! Formatting always uses `.` as the decimal separator.

use crate::error::InputError;

/// Fractional digits used for shortcut button labels
pub const SHORTCUT_LABEL_PRECISION: i32 = 5;

/// Format a scale for display
///
/// * `value` - Scale to render
/// * `precision` - Fractional digits before trimming; `<= 0` gives an integer
///
/// Trailing zeros are removed, then a trailing decimal point.
pub fn format_scale(value: f32, precision: i32) -> String {
    let digits = precision.max(0) as usize;
    let mut s = format!("{:.*}", digits, value);

    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }

    if s == "-0" {
        s.remove(0);
    }
    s
}

/// Whether the text contains at least one ASCII digit
pub fn contains_digit(input: &str) -> bool {
    input.bytes().any(|b| b.is_ascii_digit())
}

/// Label for a shortcut button showing `value`
///
/// Falls back to `"1"` when the formatted value carries no digit at all
/// (NaN or infinite presets).
pub fn shortcut_label(value: f32) -> String {
    let label = format_scale(value, SHORTCUT_LABEL_PRECISION);
    if contains_digit(&label) {
        label
    } else {
        "1".to_string()
    }
}

/// Parse committed scale text
///
/// Text without digits is not a scale command. Otherwise the longest leading
/// number is used and anything after it is ignored, so `"1.5-"` reads as
/// `1.5` and `".5"` as `0.5`.
pub fn parse_scale_input(input: &str) -> Result<f32, InputError> {
    if !contains_digit(input) {
        return Err(InputError::NoDigits);
    }

    let text = input.trim_start();
    let end = numeric_prefix_len(text);
    if end == 0 {
        return Err(InputError::Malformed {
            input: input.to_string(),
        });
    }

    text[..end].parse::<f32>().map_err(|_| InputError::Malformed {
        input: input.to_string(),
    })
}

/// Length of the leading `[sign] digits [. digits] [e [sign] digits]` run
///
/// Returns 0 when the mantissa has no digit.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        let frac_digits = j - frac_start;
        if mantissa_digits + frac_digits > 0 {
            mantissa_digits += frac_digits;
            i = j;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}
