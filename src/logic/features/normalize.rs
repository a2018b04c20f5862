//! Field Normalization
//!
//! Turns store values into numbers. A value that cannot be normalized is
//! absent, never an error.

use super::record::FieldValue;

/// Upper bound of a subject score
pub const MAX_SCORE: f64 = 100.0;

/// Upper bound of a plausible age
pub const MAX_AGE: f64 = 120.0;

/// Parse text with an optional comma decimal separator ("0,92" -> 0.92)
fn parse_number(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse::<f64>().ok()
}

/// Parse attendance as a fraction without checking its range.
///
/// Accepts "92%", "92", "0.92", "0,92" and plain numbers. A trailing "%" or
/// a bare value above 1 is read as a percentage.
pub fn parse_attendance(value: &FieldValue) -> Option<f64> {
    let (number, percent) = match value {
        FieldValue::Number(n) => (*n, false),
        FieldValue::Text(text) => {
            let trimmed = text.trim();
            match trimmed.strip_suffix('%') {
                Some(body) => (parse_number(body)?, true),
                None => (parse_number(trimmed)?, false),
            }
        }
    };

    if !number.is_finite() {
        return None;
    }

    Some(if percent || number > 1.0 {
        number / 100.0
    } else {
        number
    })
}

/// Parse a plain number (score, age) without checking its range
pub fn parse_numeric(value: &FieldValue) -> Option<f64> {
    let number = match value {
        FieldValue::Number(n) => *n,
        FieldValue::Text(text) => parse_number(text)?,
    };
    number.is_finite().then_some(number)
}

/// Normalize attendance to a fraction in [0, 1]
pub fn normalize_attendance(value: &FieldValue) -> Option<f64> {
    parse_attendance(value).filter(|fraction| (0.0..=1.0).contains(fraction))
}

/// Normalize a subject score to [0, 100]
pub fn normalize_score(value: &FieldValue) -> Option<f64> {
    parse_numeric(value).filter(|score| (0.0..=MAX_SCORE).contains(score))
}

/// Normalize an age to whole years in [1, 120]
pub fn normalize_age(value: &FieldValue) -> Option<u32> {
    parse_numeric(value)
        .filter(|age| (1.0..=MAX_AGE).contains(age))
        .map(|age| age.trunc() as u32)
}
