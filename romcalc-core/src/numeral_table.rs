/// A single Roman symbol (or subtractive pair) and the value it stands for.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct NumeralEntry {
    pub value: i64,
    pub symbol: &'static str,
}

const fn entry(value: i64, symbol: &'static str) -> NumeralEntry {
    NumeralEntry { value, symbol }
}

/// Every Roman symbol we know about, including the subtractive pairs,
/// in strictly descending order of value.
///
/// Both conversion directions are greedy and rely on walking this table
/// from top to bottom, so the ordering must never change.
pub const ROMAN_NUMERALS: [NumeralEntry; 13] = [
    entry(1000, "M"),
    entry(900, "CM"),
    entry(500, "D"),
    entry(400, "CD"),
    entry(100, "C"),
    entry(90, "XC"),
    entry(50, "L"),
    entry(40, "XL"),
    entry(10, "X"),
    entry(9, "IX"),
    entry(5, "V"),
    entry(4, "IV"),
    entry(1, "I"),
];
