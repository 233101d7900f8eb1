//! Roman numeral conversion.

use thiserror::Error;

/// Largest number expressible with standard Roman numerals.
pub const MAX_ROMAN: u32 = 3999;

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Errors returned by numeral conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumeralError {
    /// Zero and numbers above 3999 have no standard numeral.
    #[error("{0} cannot be written as a Roman numeral (expected 1..=3999)")]
    OutOfRange(u32),

    /// The input is not a canonical Roman numeral.
    #[error("invalid Roman numeral: {0:?}")]
    InvalidNumeral(String),
}

/// Converts `arabic` to a Roman numeral using subtractive notation.
pub fn to_roman(arabic: u32) -> Result<String, NumeralError> {
    if arabic == 0 || arabic > MAX_ROMAN {
        return Err(NumeralError::OutOfRange(arabic));
    }

    let mut remaining = arabic;
    let mut result = String::new();
    for (value, symbol) in NUMERALS {
        while remaining >= value {
            result.push_str(symbol);
            remaining -= value;
        }
    }
    Ok(result)
}

/// Parses a canonical Roman numeral such as `"MCMLXXXIV"`.
///
/// Non-canonical spellings like `"IIII"` or `"IC"` are rejected.
pub fn from_roman(roman: &str) -> Result<u32, NumeralError> {
    let invalid = || NumeralError::InvalidNumeral(roman.to_string());

    let mut rest = roman;
    let mut total: u32 = 0;
    for (value, symbol) in NUMERALS {
        while let Some(stripped) = rest.strip_prefix(symbol) {
            total = total.saturating_add(value);
            rest = stripped;
        }
    }

    if !rest.is_empty() || total == 0 || total > MAX_ROMAN {
        return Err(invalid());
    }
    match to_roman(total) {
        Ok(canonical) if canonical == roman => Ok(total),
        _ => Err(invalid()),
    }
}
