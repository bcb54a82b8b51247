// 🔢 Numerals - Arabic-Indic ↔ Western digits
// Input cleaning and display formatting at the UI boundary
//
// The formatter in `words` assumes a finite number. Everything typed by a
// user goes through here first.

use anyhow::{bail, Context, Result};

/// Arabic thousands separator (U+066C)
pub const ARABIC_THOUSANDS_SEPARATOR: char = '٬';

const ARABIC_ZERO: u32 = '٠' as u32;

fn arabic_digit_value(c: char) -> Option<u32> {
    match c {
        '٠'..='٩' => Some(c as u32 - ARABIC_ZERO),
        _ => None,
    }
}

/// "١٢٣" → "123"; other characters untouched
pub fn arabic_to_western(input: &str) -> String {
    input
        .chars()
        .map(|c| match arabic_digit_value(c) {
            Some(d) => char::from_digit(d, 10).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// "123" → "١٢٣"; other characters untouched
pub fn western_to_arabic(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(ARABIC_ZERO + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

pub fn has_arabic_numerals(input: &str) -> bool {
    input.chars().any(|c| arabic_digit_value(c).is_some())
}

/// What an amount field keeps from a keystroke: digits (either script,
/// normalised to Western) and the decimal point
pub fn sanitize_input(input: &str) -> String {
    arabic_to_western(input)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

fn clean_amount(input: &str) -> String {
    let without_separators: String = input
        .chars()
        .filter(|c| *c != ',' && *c != ARABIC_THOUSANDS_SEPARATOR)
        .collect();

    arabic_to_western(without_separators.trim())
}

/// Lenient parse: anything unusable reads as 0
pub fn parse_amount(input: &str) -> f64 {
    clean_amount(input)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Strict parse for command-line and API input
pub fn parse_amount_strict(input: &str) -> Result<f64> {
    let cleaned = clean_amount(input);

    if cleaned.is_empty() {
        bail!("Amount is empty");
    }

    let value: f64 = cleaned
        .parse()
        .with_context(|| format!("Invalid amount: {:?}", input))?;

    if !value.is_finite() {
        bail!("Amount is not a finite number: {:?}", input);
    }

    if value < 0.0 {
        bail!("Amount must not be negative: {:?}", input);
    }

    Ok(value)
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    grouped
}

/// Digits of `|value|` rounded half-up to `fraction_digits` decimals,
/// as (integer digits, fraction digits). Ties are decided on the exact
/// binary value, so 0.125 rounds up while 1.005 (stored as 1.00499…) does not.
pub(crate) fn round_half_up(value: f64, fraction_digits: usize) -> (String, String) {
    let expanded = format!("{:.*}", fraction_digits + 40, value.abs());
    let (whole, decimals) = expanded.split_once('.').unwrap_or((expanded.as_str(), ""));
    let (kept, rest) = decimals.split_at(fraction_digits.min(decimals.len()));

    let mut digits: Vec<u8> = whole.bytes().chain(kept.bytes()).collect();

    if rest.bytes().next().map_or(false, |b| b >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - kept.len();
    let fraction = digits.split_off(split);

    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&fraction).into_owned(),
    )
}

/// Display an amount with en-US grouping and at most
/// `max_fraction_digits` decimals (rounded half-up, trailing zeros dropped).
/// With `use_arabic` the digits and group separator are Arabic.
pub fn format_amount(value: f64, use_arabic: bool, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let (whole, fraction) = round_half_up(value, max_fraction_digits);
    let fraction = fraction.trim_end_matches('0');

    let separator = if use_arabic { ARABIC_THOUSANDS_SEPARATOR } else { ',' };
    let mut formatted = group_thousands(&whole, separator);

    if !fraction.is_empty() {
        formatted.push('.');
        formatted.push_str(fraction);
    }

    let is_zero = formatted.chars().all(|c| !c.is_ascii_digit() || c == '0');
    if value < 0.0 && !is_zero {
        formatted.insert(0, '-');
    }

    if use_arabic {
        western_to_arabic(&formatted)
    } else {
        formatted
    }
}

// ============================================================================
// TESTS
// ============================================================================
