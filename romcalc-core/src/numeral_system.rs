use std::fmt::Display;

use crate::{
    calc_error::CalcError,
    roman::{arabic_to_roman, roman_to_arabic},
};

const ROMAN_LETTERS: &'static str = "IVXLCDM";

/// Returns whether the token consists solely of Roman letters.
///
/// Only the character set is checked, so `IIII` and `VV` pass even though
/// they aren't canonical numerals.
pub fn is_roman<T: AsRef<str>>(token: T) -> bool {
    let token = token.as_ref();
    !token.is_empty() && token.chars().all(|ch| ROMAN_LETTERS.contains(ch))
}

/// Returns whether the token consists solely of ASCII decimal digits.
pub fn is_arabic<T: AsRef<str>>(token: T) -> bool {
    let token = token.as_ref();
    !token.is_empty() && token.chars().all(|ch| ch.is_ascii_digit())
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NumeralSystem {
    Roman,
    Arabic,
}

impl NumeralSystem {
    /// Figures out which system the token is written in, if any.
    pub fn classify<T: AsRef<str>>(token: T) -> Option<Self> {
        let token = token.as_ref();
        if is_roman(token) {
            Some(NumeralSystem::Roman)
        } else if is_arabic(token) {
            Some(NumeralSystem::Arabic)
        } else {
            None
        }
    }

    /// Converts a token written in this system to its value.
    pub fn parse<T: AsRef<str>>(&self, token: T) -> Result<i64, CalcError> {
        match self {
            NumeralSystem::Roman => roman_to_arabic(token),
            // The token has already been classified, so the only way this
            // can fail is if it's too big.
            NumeralSystem::Arabic => token
                .as_ref()
                .parse::<i64>()
                .map_err(|_| CalcError::Overflow),
        }
    }

    /// Renders a computed value in this system.
    pub fn render(&self, value: i64) -> Result<String, CalcError> {
        match self {
            NumeralSystem::Roman => {
                if value <= 0 {
                    return Err(CalcError::OutOfRange);
                }
                Ok(arabic_to_roman(value))
            }
            NumeralSystem::Arabic => Ok(value.to_string()),
        }
    }
}

impl Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumeralSystem::Roman => write!(f, "Roman"),
            NumeralSystem::Arabic => write!(f, "Arabic"),
        }
    }
}
