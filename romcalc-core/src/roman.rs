use crate::{calc_error::CalcError, numeral_table::ROMAN_NUMERALS};

/// What `arabic_to_roman` returns for values that have no Roman form.
pub const INVALID_FOR_ROMAN: &'static str = "invalid for Roman numerals";

/// Converts a Roman numeral to its value by greedily stripping symbols off
/// the front of the string, largest first.
///
/// This is deliberately lenient: non-canonical strings like `IIII` are
/// accepted (as 4), and any characters left over once the table has been
/// walked are ignored, so `VX` evaluates to 5. The only rejected input is
/// one that adds up to nothing, which in practice means the empty string.
pub fn roman_to_arabic<T: AsRef<str>>(roman: T) -> Result<i64, CalcError> {
    let mut remaining = roman.as_ref();
    let mut total: i64 = 0;

    for numeral in ROMAN_NUMERALS.iter() {
        while let Some(rest) = remaining.strip_prefix(numeral.symbol) {
            total = total
                .checked_add(numeral.value)
                .ok_or(CalcError::Overflow)?;
            remaining = rest;
        }
    }

    if total == 0 {
        return Err(CalcError::InvalidNumeral);
    }
    Ok(total)
}

/// Renders a positive value as a canonical Roman numeral.
///
/// There's no upper bound, so 4000 comes out as `MMMM`. Past 3999 the
/// output grows linearly with the value (one `M` per thousand), so huge
/// values mean huge strings. Zero and negative values return
/// `INVALID_FOR_ROMAN` instead of a numeral.
pub fn arabic_to_roman(arabic: i64) -> String {
    if arabic <= 0 {
        return INVALID_FOR_ROMAN.to_string();
    }

    let mut remaining = arabic;
    let mut result = String::new();
    for numeral in ROMAN_NUMERALS.iter() {
        while remaining >= numeral.value {
            result.push_str(numeral.symbol);
            remaining -= numeral.value;
        }
    }
    result
}
