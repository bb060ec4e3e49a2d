//! Roman numerals for the footer's copyright year.

/// Values and numerals in descending order, subtractive pairs included.
const ROMAN_MAP: [(u32, &str); 13] = [
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

/// Convert a year to its roman numeral representation.
///
/// Greedy over the subtractive-pair table; a year of 0 yields an empty
/// string.
pub fn year_to_roman(year: u32) -> String {
    let mut result = String::new();
    let mut remaining = year;

    for (value, numeral) in ROMAN_MAP {
        while remaining >= value {
            result.push_str(numeral);
            remaining -= value;
        }
    }

    result
}

// =============================================================================
// Tests
// =============================================================================
