//! Roman-numeral vocabulary and the numeric anchors derived from it.
//!
//! Catalog sources write centuries and millennia in Roman numerals (often
//! transliterated, see `normalize`). The vocabulary is deliberately closed:
//! a token outside it makes the enclosing recognizer decline rather than
//! guess, so a malformed numeral can never silently misdate a record.

/// Parse a Roman numeral in the supported I–XXV vocabulary.
///
/// Returns `None` for anything else (non-canonical forms like "IIX"
/// included), which causes the enclosing recognizer to decline.
pub fn roman_to_int(s: &str) -> Option<u32> {
    match s.to_ascii_uppercase().as_str() {
        "I" => Some(1),
        "II" => Some(2),
        "III" => Some(3),
        "IV" => Some(4),
        "V" => Some(5),
        "VI" => Some(6),
        "VII" => Some(7),
        "VIII" => Some(8),
        "IX" => Some(9),
        "X" => Some(10),
        "XI" => Some(11),
        "XII" => Some(12),
        "XIII" => Some(13),
        "XIV" => Some(14),
        "XV" => Some(15),
        "XVI" => Some(16),
        "XVII" => Some(17),
        "XVIII" => Some(18),
        "XIX" => Some(19),
        "XX" => Some(20),
        "XXI" => Some(21),
        "XXII" => Some(22),
        "XXIII" => Some(23),
        "XXIV" => Some(24),
        "XXV" => Some(25),
        _ => None,
    }
}

/// Unsigned midpoint of the Nth century.
///
/// The Nth century spans 100 years ending at N*100; its midpoint magnitude
/// is the same in both eras (XIX century → 1850, VI century BC → 550 before
/// signing).
pub fn century_midpoint(century: u32) -> f64 {
    (century * 100) as f64 - 50.0
}

/// Unsigned midpoint of the Nth millennium (II millennium → 1500).
pub fn millennium_midpoint(millennium: u32) -> f64 {
    (millennium * 1000) as f64 - 500.0
}

/// Offset from a century midpoint to the midpoint of its first/fourth
/// quarter (quarter width ≈ 25 years, so the outer quarters center 38 years
/// from the middle of the century).
pub const QUARTER_EDGE_OFFSET: f64 = 38.0;

/// Offset from a century midpoint to the midpoint of its second/third
/// quarter, also used for half-century qualifiers.
pub const QUARTER_INNER_OFFSET: f64 = 12.0;
