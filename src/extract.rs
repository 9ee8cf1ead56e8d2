//! The recognizer cascade over normalized date text.
//!
//! Each rule family matches one notation observed in the catalog sources:
//! explicit years, slash-compound years, "thousand years ago", millennia,
//! centuries with and without quarter/half qualifiers, decades, bare small
//! years. Rules are tried in a fixed priority order and the FIRST successful
//! match wins; the general rules near the bottom would otherwise pre-empt
//! the specific ones above them, so the ordering is a correctness contract,
//! not a style choice.
//!
//! Every rule is total: malformed input inside a rule's own pattern (an
//! out-of-vocabulary Roman numeral, say) makes the rule decline, never
//! panic.

use regex::{Captures, Regex};

use crate::estimate::{EraSign, TemporalEstimate};
use crate::numeral::{
    century_midpoint, millennium_midpoint, roman_to_int, QUARTER_EDGE_OFFSET, QUARTER_INNER_OFFSET,
};

// ── Capture helpers ──────────────────────────────────────────────────

fn num(caps: &Captures, idx: usize) -> Option<f64> {
    caps.get(idx)?.as_str().parse().ok()
}

fn roman(caps: &Captures, idx: usize) -> Option<u32> {
    roman_to_int(caps.get(idx)?.as_str())
}

fn sign(caps: &Captures, idx: usize) -> EraSign {
    EraSign::from_suffix(caps.get(idx).map(|m| m.as_str()))
}

// ── Qualifier offsets ────────────────────────────────────────────────

/// Offset of a named quarter from the century midpoint.
fn quarter_offset(word: &str) -> f64 {
    match word.to_lowercase().as_str() {
        "first" | "beginning" => -QUARTER_EDGE_OFFSET,
        "second" => -QUARTER_INNER_OFFSET,
        "third" => QUARTER_INNER_OFFSET,
        "fourth" | "last" => QUARTER_EDGE_OFFSET,
        _ => 0.0,
    }
}

/// Offset of a named half from the century midpoint (range rules only).
fn half_offset(word: &str) -> f64 {
    match word.to_lowercase().as_str() {
        "first" => -QUARTER_INNER_OFFSET,
        "second" => QUARTER_INNER_OFFSET,
        _ => 0.0,
    }
}

/// Offset of a free-form part-of-century qualifier. "End of" and "late"
/// land in the fourth quarter, "second half" in the third, "first half",
/// "early" and "beginning" in the first, "mid" stays put.
fn century_part_offset(part: &str) -> f64 {
    let p = part.to_lowercase();
    if p.contains("end") || p.contains("late") {
        QUARTER_EDGE_OFFSET
    } else if p.contains("second half") {
        QUARTER_INNER_OFFSET
    } else if p.contains("first half")
        || p.contains("early")
        || p.contains("beginning")
        || p.contains("start")
    {
        -QUARTER_EDGE_OFFSET
    } else {
        0.0
    }
}

// ── Extractor ────────────────────────────────────────────────────────

/// All cascade regexes, compiled once and shared read-only across calls
/// (and threads) for the life of the process.
pub struct Extractor {
    // canonical years
    re_canonical_range: Regex,
    re_canonical_single: Regex,
    // slash-compound years
    re_or_alternative: Regex,
    re_double_slash: Regex,
    re_slash_pair: Regex,
    // thousand years ago
    re_thousand_range: Regex,
    re_thousand_single: Regex,
    // millennia
    re_millennium_roman_range: Regex,
    re_millennium_arabic_range: Regex,
    re_millennium_single: Regex,
    // century ranges with qualifiers
    re_quarter_of_range: Regex,
    re_quarter_abbrev_range: Regex,
    re_half_range: Regex,
    re_end_of_range: Regex,
    // single centuries with qualifiers
    re_qualified_roman: Regex,
    re_qualified_arabic: Regex,
    // bare centuries
    re_century_artifact: Regex,
    re_century_bc_both: Regex,
    re_century_mixed: Regex,
    re_century_roman_range: Regex,
    re_century_arabic_range: Regex,
    re_century_roman_single: Regex,
    re_century_arabic_single: Regex,
    re_lone_roman_range: Regex,
    re_lone_roman_single: Regex,
    // decades
    re_decade_range: Regex,
    re_decade_single: Regex,
    // bare years
    re_year_range: Regex,
    re_year_single: Regex,
}

/// A single recognizer. Total on its input domain; `None` means "not my
/// notation", and the cascade moves on.
pub type RuleFn = fn(&Extractor, &str) -> Option<TemporalEstimate>;

/// The cascade in priority order. First match wins; later entries never see
/// input a more specific rule has claimed.
pub static RULES: &[(&str, RuleFn)] = &[
    ("canonical-year", Extractor::canonical_year as RuleFn),
    ("compound-years", Extractor::compound_years),
    ("thousand-years-ago", Extractor::thousand_years_ago),
    ("millennium", Extractor::millennium),
    ("qualified-century-range", Extractor::qualified_century_range),
    ("qualified-century", Extractor::qualified_century),
    ("century", Extractor::century),
    ("decade", Extractor::decade),
    ("bare-year", Extractor::bare_year),
];

impl Extractor {
    pub fn new() -> Self {
        Extractor {
            re_canonical_range: Regex::new(r"^(\d{4})\s*-\s*(\d{4})$").expect("canonical range regex"),
            re_canonical_single: Regex::new(r"^(\d{4})$").expect("canonical year regex"),

            re_or_alternative: Regex::new(
                r"(?i)\b(\d{1,4})/(\d{1,4})\s+or\s+(\d{1,4})/(\d{1,4})\b",
            )
            .expect("or-alternative regex"),
            re_double_slash: Regex::new(
                r"(?i)^(\d{1,4})/(\d{1,4})\s*-\s*(\d{1,4})/(\d{1,4})(?:\s*(BC|AD))?$",
            )
            .expect("double slash regex"),
            re_slash_pair: Regex::new(r"(?i)^(\d{1,4})/(\d{1,4})(?:\s*г\.?)?(?:\s*(BC|AD))?$")
                .expect("slash pair regex"),

            re_thousand_range: Regex::new(r"(?i)\b(\d+)\s*-\s*(\d+)\s*thousand\s+years?\s+ago\b")
                .expect("thousand range regex"),
            re_thousand_single: Regex::new(r"(?i)\b(\d+)\s*thousand\s+years?\s+ago\b")
                .expect("thousand regex"),

            re_millennium_roman_range: Regex::new(
                r"(?i)\b([IVX]+)\s*-\s*([IVX]+)\s+millenni(?:um|a)(?:\s+(BC|AD))?\b",
            )
            .expect("millennium range regex"),
            re_millennium_arabic_range: Regex::new(
                r"(?i)\b(\d{1,4})\s*-\s*(\d{1,4})\s+millennium\s+BC\b",
            )
            .expect("millennium arabic regex"),
            re_millennium_single: Regex::new(r"(?i)\b([IVX]+)\s+millennium(?:\s+(BC|AD))?\b")
                .expect("millennium regex"),

            re_quarter_of_range: Regex::new(
                r"(?i)\b(beginning|last|first|second|third|fourth)\s+quarter\s+of\s+(?:the\s+)?([IVX]+)(?:\s*(?:st|nd|rd|th))?\s*-\s*(?:(beginning|last|first|second|third|fourth)\s+)?(?:quarter\s+)?of\s+(?:the\s+)?([IVX]+)(?:\s*(?:st|nd|rd|th))?\s*century",
            )
            .expect("quarter-of range regex"),
            re_quarter_abbrev_range: Regex::new(
                r"(?i)\b([IVX]+)\s*-\s*(first|second|third|fourth|last)\s+(?:q\.?|quarter)\s+([IVX]+)\s+centur(?:y|ies)(?:\s+(BC|AD))?",
            )
            .expect("quarter abbrev range regex"),
            re_half_range: Regex::new(
                r"(?i)\b(first|second)\s+half\s+(?:of\s+the\s+)?(\d{1,2})(?:st|nd|rd|th)\s*-\s*(first|second|last)\s+half\s+(?:of\s+the\s+)?(\d{1,2})(?:st|nd|rd|th)\s+centur",
            )
            .expect("half range regex"),
            re_end_of_range: Regex::new(
                r"(?i)\bend\s+of\s+the\s+([IVX]+)\s*-\s*([IVX]+)\s+centur(?:y|ies)(?:\s+(BC|AD))?",
            )
            .expect("end-of range regex"),

            re_qualified_roman: Regex::new(
                r"(?i)\b(second\s+half|first\s+half|beginning|ending|end|start|early|late|middle|mid)\b[a-z\s]{0,15}\b([IVX]+)(?:st|nd|rd|th|d)?\s+centur(?:y|ies)(?:\s+(BC|AD))?",
            )
            .expect("qualified century regex"),
            re_qualified_arabic: Regex::new(
                r"(?i)\b(beginning|end|early|late)\s+(?:of\s+the\s+)?(\d{1,2})(?:st|nd|rd|th)\s*cent",
            )
            .expect("qualified arabic century regex"),

            re_century_artifact: Regex::new(r"(?i)^(\d{4})\s*century\b").expect("century artifact regex"),
            re_century_bc_both: Regex::new(
                r"(?i)\b([IVX]+)\s+centur(?:y|ies)\s+BC\s*-\s*([IVX]+)\s+centur(?:y|ies)\s+BC\b",
            )
            .expect("century bc-bc regex"),
            re_century_mixed: Regex::new(
                r"(?i)\b([IVX]+)\s+centur(?:y|ies)\s+BC\s*-\s*([IVX]+)\s+centur(?:y|ies)(?:\s+(AD))?",
            )
            .expect("century mixed-era regex"),
            re_century_roman_range: Regex::new(
                r"(?i)\b([IVX]+)(?:\s*-\s*|\s+)([IVX]+)\s+centur(?:y|ies)(?:\s+(BC|AD))?",
            )
            .expect("century range regex"),
            re_century_arabic_range: Regex::new(
                r"(?i)\b(\d{1,2})(?:st|nd|rd|th)?\s*-\s*(\d{1,2})(?:st|nd|rd|th)?\s+centur(?:y|ies)(?:\s+(BC|AD))?",
            )
            .expect("century arabic range regex"),
            re_century_roman_single: Regex::new(
                r"(?i)\b([IVX]+)(?:st|nd|rd|th|d)?\s+centur(?:y|ies)(?:\s+(BC|AD))?",
            )
            .expect("century regex"),
            re_century_arabic_single: Regex::new(
                r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\s+centur(?:y|ies)(?:\s+(BC|AD))?",
            )
            .expect("century arabic regex"),
            re_lone_roman_range: Regex::new(r"(?i)^([IVX]+)\s*-\s*([IVX]+)$")
                .expect("lone roman range regex"),
            re_lone_roman_single: Regex::new(r"(?i)^([IVX]+)$").expect("lone roman regex"),

            re_decade_range: Regex::new(r"(?i)\b(\d{1,4})\s*-\s*(\d{1,4})s\b(?:\s+(BC|AD))?")
                .expect("decade range regex"),
            re_decade_single: Regex::new(r"(?i)\b(\d{1,4})s\b(?:\s+(BC|AD))?")
                .expect("decade regex"),

            re_year_range: Regex::new(
                r"(?i)^(\d{1,4})\s*-\s*(\d{1,4})(?:\s*г\.?)?(?:\s+(BC|AD))?$",
            )
            .expect("year range regex"),
            re_year_single: Regex::new(r"(?i)^(\d{1,4})(?:\s*(г)\.?)?(?:\s+(BC|AD))?$")
                .expect("year regex"),
        }
    }

    /// Run the cascade over normalized text.
    pub fn extract(&self, text: &str) -> Option<TemporalEstimate> {
        self.extract_with_rule(text).map(|(_, estimate)| estimate)
    }

    /// Like [`extract`](Self::extract), also reporting which rule matched.
    pub fn extract_with_rule(&self, text: &str) -> Option<(&'static str, TemporalEstimate)> {
        if text.is_empty() {
            return None;
        }
        RULES
            .iter()
            .find_map(|(name, rule)| rule(self, text).map(|estimate| (*name, estimate)))
    }

    // ── Rule 1: canonical YYYY / YYYY-YYYY ───────────────────────────

    fn canonical_year(&self, text: &str) -> Option<TemporalEstimate> {
        if let Some(caps) = self.re_canonical_range.captures(text) {
            return Some(TemporalEstimate::interval(num(&caps, 1)?, num(&caps, 2)?));
        }
        let caps = self.re_canonical_single.captures(text)?;
        Some(TemporalEstimate::Point(num(&caps, 1)?))
    }

    // ── Rule 2: slash-compound years ─────────────────────────────────

    /// "666/668", "131/132-153/154", "596/597 or 598/599" — each slash pair
    /// is uncertainty about the exact year within a transition; all named
    /// years are averaged.
    fn compound_years(&self, text: &str) -> Option<TemporalEstimate> {
        if let Some(caps) = self.re_or_alternative.captures(text) {
            let first = (num(&caps, 1)? + num(&caps, 2)?) / 2.0;
            let second = (num(&caps, 3)? + num(&caps, 4)?) / 2.0;
            return Some(TemporalEstimate::interval(first, second));
        }
        if let Some(caps) = self.re_double_slash.captures(text) {
            let era = sign(&caps, 5);
            let first = era.apply((num(&caps, 1)? + num(&caps, 2)?) / 2.0);
            let second = era.apply((num(&caps, 3)? + num(&caps, 4)?) / 2.0);
            return Some(TemporalEstimate::interval(first, second));
        }
        let caps = self.re_slash_pair.captures(text)?;
        let era = sign(&caps, 3);
        Some(TemporalEstimate::interval(
            era.apply(num(&caps, 1)?),
            era.apply(num(&caps, 2)?),
        ))
    }

    // ── Rule 3: N thousand years ago ─────────────────────────────────

    fn thousand_years_ago(&self, text: &str) -> Option<TemporalEstimate> {
        if let Some(caps) = self.re_thousand_range.captures(text) {
            return Some(TemporalEstimate::interval(
                -(num(&caps, 1)? * 1000.0),
                -(num(&caps, 2)? * 1000.0),
            ));
        }
        let caps = self.re_thousand_single.captures(text)?;
        Some(TemporalEstimate::Point(-(num(&caps, 1)? * 1000.0)))
    }

    // ── Rule 4: millennia ────────────────────────────────────────────

    fn millennium(&self, text: &str) -> Option<TemporalEstimate> {
        if let Some(caps) = self.re_millennium_roman_range.captures(text) {
            let era = sign(&caps, 3);
            return Some(TemporalEstimate::interval(
                era.apply(millennium_midpoint(roman(&caps, 1)?)),
                era.apply(millennium_midpoint(roman(&caps, 2)?)),
            ));
        }
        if let Some(caps) = self.re_millennium_arabic_range.captures(text) {
            // Arabic "150-33 millennium BC" is a recurring data-entry
            // artifact meaning thousands of years
            return Some(TemporalEstimate::interval(
                -(num(&caps, 1)? * 1000.0),
                -(num(&caps, 2)? * 1000.0),
            ));
        }
        let caps = self.re_millennium_single.captures(text)?;
        let era = sign(&caps, 2);
        Some(TemporalEstimate::Point(
            era.apply(millennium_midpoint(roman(&caps, 1)?)),
        ))
    }

    // ── Rule 5: century ranges with quarter/half qualifiers ──────────

    fn qualified_century_range(&self, text: &str) -> Option<TemporalEstimate> {
        // "first quarter of the XIX - beginning of the XX century"
        if let Some(caps) = self.re_quarter_of_range.captures(text) {
            let from_offset = quarter_offset(caps.get(1).map_or("", |m| m.as_str()));
            let from = century_midpoint(roman(&caps, 2)?) + from_offset;
            // An unnamed second qualifier means "beginning of"
            let to_offset = caps
                .get(3)
                .map_or(-QUARTER_EDGE_OFFSET, |m| quarter_offset(m.as_str()));
            let to = century_midpoint(roman(&caps, 4)?) + to_offset;
            return Some(TemporalEstimate::interval(from, to));
        }
        // "XIX - first q. XX century AD", "VI - second quarter V centuries BC"
        if let Some(caps) = self.re_quarter_abbrev_range.captures(text) {
            let era = sign(&caps, 4);
            let from = century_midpoint(roman(&caps, 1)?);
            let quarter = quarter_offset(caps.get(2).map_or("", |m| m.as_str()));
            let to = century_midpoint(roman(&caps, 3)?) + quarter;
            return Some(TemporalEstimate::interval(era.apply(from), era.apply(to)));
        }
        // "second half 2nd - first half 3rd century AD"
        if let Some(caps) = self.re_half_range.captures(text) {
            let from = century_midpoint(num(&caps, 2)? as u32)
                + half_offset(caps.get(1).map_or("", |m| m.as_str()));
            let to = century_midpoint(num(&caps, 4)? as u32)
                + half_offset(caps.get(3).map_or("", |m| m.as_str()));
            return Some(TemporalEstimate::interval(from, to));
        }
        // "end of the VII-VIII centuries BC" — pinned to the later century
        let caps = self.re_end_of_range.captures(text)?;
        let era = sign(&caps, 3);
        Some(TemporalEstimate::Point(
            era.apply(century_midpoint(roman(&caps, 2)?) + QUARTER_EDGE_OFFSET),
        ))
    }

    // ── Rule 6: single century with qualifier ────────────────────────

    fn qualified_century(&self, text: &str) -> Option<TemporalEstimate> {
        if let Some(caps) = self.re_qualified_roman.captures(text) {
            let offset = century_part_offset(caps.get(1).map_or("", |m| m.as_str()));
            let era = sign(&caps, 3);
            return Some(TemporalEstimate::Point(
                era.apply(century_midpoint(roman(&caps, 2)?) + offset),
            ));
        }
        // "early 20th cent."
        let caps = self.re_qualified_arabic.captures(text)?;
        let offset = century_part_offset(caps.get(1).map_or("", |m| m.as_str()));
        Some(TemporalEstimate::Point(
            century_midpoint(num(&caps, 2)? as u32) + offset,
        ))
    }

    // ── Rule 7: bare centuries ───────────────────────────────────────

    fn century(&self, text: &str) -> Option<TemporalEstimate> {
        // "1900 century" — a recurring catalog typo for the plain year
        if let Some(caps) = self.re_century_artifact.captures(text) {
            return Some(TemporalEstimate::Point(num(&caps, 1)?));
        }
        // "VI century BC - IV century BC" (explicit era on both ends)
        if let Some(caps) = self.re_century_bc_both.captures(text) {
            return Some(TemporalEstimate::interval(
                -century_midpoint(roman(&caps, 1)?),
                -century_midpoint(roman(&caps, 2)?),
            ));
        }
        // "VI century BC - IV century" (era transition inside the range)
        if let Some(caps) = self.re_century_mixed.captures(text) {
            return Some(TemporalEstimate::interval(
                -century_midpoint(roman(&caps, 1)?),
                century_midpoint(roman(&caps, 2)?),
            ));
        }
        // "V-VI century", "XIII XVII centuries", "VIII-VI centuries BC"
        if let Some(caps) = self.re_century_roman_range.captures(text) {
            let era = sign(&caps, 3);
            return Some(TemporalEstimate::interval(
                era.apply(century_midpoint(roman(&caps, 1)?)),
                era.apply(century_midpoint(roman(&caps, 2)?)),
            ));
        }
        // "18-19th centuries"
        if let Some(caps) = self.re_century_arabic_range.captures(text) {
            let era = sign(&caps, 3);
            return Some(TemporalEstimate::interval(
                era.apply(century_midpoint(num(&caps, 1)? as u32)),
                era.apply(century_midpoint(num(&caps, 2)? as u32)),
            ));
        }
        // "XIX century", "XIXth century", "VI century BC"
        if let Some(caps) = self.re_century_roman_single.captures(text) {
            let era = sign(&caps, 2);
            return Some(TemporalEstimate::Point(
                era.apply(century_midpoint(roman(&caps, 1)?)),
            ));
        }
        // "18th century"
        if let Some(caps) = self.re_century_arabic_single.captures(text) {
            let era = sign(&caps, 2);
            return Some(TemporalEstimate::Point(
                era.apply(century_midpoint(num(&caps, 1)? as u32)),
            ));
        }
        // Lone Roman numerals without the word "century": "XIX-XX", "XVIII"
        if let Some(caps) = self.re_lone_roman_range.captures(text) {
            return Some(TemporalEstimate::interval(
                century_midpoint(roman(&caps, 1)?),
                century_midpoint(roman(&caps, 2)?),
            ));
        }
        let caps = self.re_lone_roman_single.captures(text)?;
        let token = caps.get(1)?.as_str();
        // A lone "I" (or a runaway numeral string) is too ambiguous to be a
        // century claim
        if !(2..=5).contains(&token.chars().count()) {
            return None;
        }
        Some(TemporalEstimate::Point(century_midpoint(roman_to_int(
            token,
        )?)))
    }

    // ── Rule 8: decades ──────────────────────────────────────────────

    fn decade(&self, text: &str) -> Option<TemporalEstimate> {
        if let Some(caps) = self.re_decade_range.captures(text) {
            let era = sign(&caps, 3);
            return Some(TemporalEstimate::interval(
                era.apply(num(&caps, 1)?),
                era.apply(num(&caps, 2)?),
            ));
        }
        let caps = self.re_decade_single.captures(text)?;
        let era = sign(&caps, 2);
        Some(TemporalEstimate::Point(era.apply(num(&caps, 1)? + 5.0)))
    }

    // ── Rule 9: bare years ───────────────────────────────────────────

    fn bare_year(&self, text: &str) -> Option<TemporalEstimate> {
        if let Some(caps) = self.re_year_range.captures(text) {
            let era = sign(&caps, 3);
            return Some(TemporalEstimate::interval(
                era.apply(num(&caps, 1)?),
                era.apply(num(&caps, 2)?),
            ));
        }
        let caps = self.re_year_single.captures(text)?;
        let year = num(&caps, 1)?;
        let has_year_marker = caps.get(2).is_some();
        match caps.get(3).map(|m| m.as_str()) {
            Some(suffix) => Some(TemporalEstimate::Point(
                EraSign::from_suffix(Some(suffix)).apply(year),
            )),
            // Unflagged small years are CE by the early-Roman-period
            // convention; an unflagged 3-digit year from 500 up needs an
            // explicit era suffix (or the Russian "г." year marker)
            None if has_year_marker || year < 500.0 || year >= 1000.0 => {
                Some(TemporalEstimate::Point(year))
            }
            None => None,
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::{resolve, ResolvedYear};

    fn extractor() -> Extractor {
        Extractor::new()
    }

    /// Resolve a normalized expression straight to its year, panicking in
    /// the test if nothing matched.
    fn year_of(text: &str) -> f64 {
        let e = extractor();
        match resolve(e.extract(text)) {
            ResolvedYear::Known(y) => y,
            ResolvedYear::Unknown => panic!("no rule matched {text:?}"),
        }
    }

    fn rule_of(text: &str) -> &'static str {
        extractor()
            .extract_with_rule(text)
            .unwrap_or_else(|| panic!("no rule matched {text:?}"))
            .0
    }

    // ── canonical years ──────────────────────────────────────────────

    #[test]
    fn test_single_year() {
        assert_eq!(year_of("1900"), 1900.0);
    }

    #[test]
    fn test_year_range_midpoint() {
        assert_eq!(year_of("1840-1850"), 1845.0);
        assert_eq!(year_of("1840 - 1850"), 1845.0);
    }

    // ── compound years ───────────────────────────────────────────────

    #[test]
    fn test_slash_pair() {
        assert_eq!(year_of("666/668"), 667.0);
        assert_eq!(year_of("686/687"), 686.5);
    }

    #[test]
    fn test_double_slash_range() {
        assert_eq!(year_of("131/132-153/154"), 142.5);
        assert_eq!(year_of("318/319-341/342"), 330.0);
    }

    #[test]
    fn test_double_slash_range_bc() {
        assert_eq!(year_of("15/14-9/8 BC"), -11.5);
    }

    #[test]
    fn test_or_alternative_averages_everything() {
        assert_eq!(year_of("596/597 or 598/599"), 597.5);
    }

    // ── thousand years ago ───────────────────────────────────────────

    #[test]
    fn test_thousand_years_ago() {
        assert_eq!(year_of("4 thousand years ago"), -4000.0);
        assert_eq!(year_of("40-12 thousand years ago"), -26000.0);
    }

    // ── millennia ────────────────────────────────────────────────────

    #[test]
    fn test_millennium_single() {
        assert_eq!(year_of("II millennium BC"), -1500.0);
        assert_eq!(year_of("II millennium"), 1500.0);
    }

    #[test]
    fn test_millennium_roman_range() {
        assert_eq!(year_of("V-IV millennium BC"), -4000.0);
    }

    #[test]
    fn test_millennium_arabic_artifact() {
        assert_eq!(year_of("150-33 millennium BC"), -91500.0);
    }

    // ── qualified century ranges ─────────────────────────────────────

    #[test]
    fn test_quarter_of_range() {
        // 1812 .. 1912 → 1862
        assert_eq!(
            year_of("first quarter of the XIX - beginning of the XX century"),
            1862.0
        );
    }

    #[test]
    fn test_quarter_abbrev_range() {
        // 1850 .. 1912 → 1881
        assert_eq!(year_of("XIX - first q. XX century AD"), 1881.0);
    }

    #[test]
    fn test_quarter_range_bc() {
        // 550 .. 438 → 494, negated
        assert_eq!(year_of("VI - second quarter V centuries BC"), -494.0);
    }

    #[test]
    fn test_half_range() {
        // 162 .. 238 → 200
        assert_eq!(year_of("second half 2nd - first half 3rd century AD"), 200.0);
    }

    #[test]
    fn test_end_of_range_uses_later_century() {
        // end of the VIII century → 750 + 38
        assert_eq!(year_of("end of the VII-VIII centuries"), 788.0);
        assert_eq!(year_of("end of the VII-VIII centuries BC"), -788.0);
    }

    // ── qualified single centuries ───────────────────────────────────

    #[test]
    fn test_century_halves() {
        assert_eq!(year_of("first half of XIX century"), 1812.0);
        assert_eq!(year_of("second half of the XIX century"), 1862.0);
    }

    #[test]
    fn test_century_edges() {
        assert_eq!(year_of("end of the VII century"), 688.0);
        assert_eq!(year_of("beginning of XX century"), 1912.0);
        assert_eq!(year_of("late XIXth century"), 1888.0);
        assert_eq!(year_of("early XIXth century"), 1812.0);
        assert_eq!(year_of("mid XVII century"), 1650.0);
    }

    #[test]
    fn test_ordinal_century_qualifiers() {
        assert_eq!(year_of("beginning of the IIId century"), 212.0);
        assert_eq!(year_of("early 20th cent"), 1912.0);
    }

    #[test]
    fn test_qualified_century_bc_shifts_before_signing() {
        // The qualifier shifts the magnitude, then the era sign applies
        assert_eq!(year_of("end of the VI century BC"), -588.0);
    }

    // ── bare centuries ───────────────────────────────────────────────

    #[test]
    fn test_single_century_midpoints() {
        assert_eq!(year_of("XIX century"), 1850.0);
        assert_eq!(year_of("XX century"), 1950.0);
        assert_eq!(year_of("I century"), 50.0);
    }

    #[test]
    fn test_century_bc() {
        assert_eq!(year_of("VI century BC"), -550.0);
        // The uniform formula covers numerals the source material rarely
        // flags as BC
        assert_eq!(year_of("IX century BC"), -850.0);
    }

    #[test]
    fn test_century_ranges() {
        assert_eq!(year_of("V-VI century"), 500.0);
        assert_eq!(year_of("XIII XVII centuries"), 1450.0);
        assert_eq!(year_of("VIII-VI centuries BC"), -650.0);
    }

    #[test]
    fn test_century_mixed_era_range() {
        assert_eq!(year_of("VI century BC - IV century"), -100.0);
    }

    #[test]
    fn test_century_bc_both_ends() {
        assert_eq!(year_of("VI century BC - IV century BC"), -450.0);
    }

    #[test]
    fn test_arabic_centuries() {
        assert_eq!(year_of("18th century"), 1750.0);
        assert_eq!(year_of("18-19th centuries"), 1800.0);
    }

    #[test]
    fn test_century_artifact() {
        assert_eq!(year_of("1900 century"), 1900.0);
    }

    #[test]
    fn test_lone_roman_numerals() {
        assert_eq!(year_of("XX"), 1950.0);
        assert_eq!(year_of("XIX - XX"), 1900.0);
        assert_eq!(year_of("XVIII"), 1750.0);
    }

    #[test]
    fn test_lone_i_declines() {
        // A bare "I" is far more often a cataloguing mark than a century
        assert!(extractor().extract("I").is_none());
    }

    // ── decades ──────────────────────────────────────────────────────

    #[test]
    fn test_decade() {
        assert_eq!(year_of("1920s"), 1925.0);
        assert_eq!(year_of("580s BC"), -585.0);
    }

    #[test]
    fn test_decade_range() {
        assert_eq!(year_of("580-560s BC"), -570.0);
    }

    // ── bare years ───────────────────────────────────────────────────

    #[test]
    fn test_small_years_assume_ce() {
        assert_eq!(year_of("81"), 81.0);
        assert_eq!(year_of("81 AD"), 81.0);
        assert_eq!(year_of("49-54"), 51.5);
    }

    #[test]
    fn test_bc_years() {
        assert_eq!(year_of("64-63 BC"), -63.5);
        assert_eq!(year_of("150 BC"), -150.0);
    }

    #[test]
    fn test_russian_year_marker() {
        assert_eq!(year_of("973 г"), 973.0);
        assert_eq!(year_of("973 г."), 973.0);
    }

    #[test]
    fn test_unflagged_mid_magnitude_year_declines() {
        // 500-999 without an era suffix is ambiguous between eras in the
        // source material
        assert!(extractor().extract("584").is_none());
    }

    #[test]
    fn test_unflagged_range_resolves() {
        assert_eq!(year_of("584-602"), 593.0);
    }

    // ── cascade ordering ─────────────────────────────────────────────

    #[test]
    fn test_first_match_wins_by_rule_name() {
        assert_eq!(rule_of("1840-1850"), "canonical-year");
        assert_eq!(rule_of("666/668"), "compound-years");
        assert_eq!(rule_of("40-12 thousand years ago"), "thousand-years-ago");
        assert_eq!(rule_of("II millennium BC"), "millennium");
        assert_eq!(rule_of("XIX - first q. XX century AD"), "qualified-century-range");
        assert_eq!(rule_of("first half of XIX century"), "qualified-century");
        assert_eq!(rule_of("XIX century"), "century");
        assert_eq!(rule_of("1920s"), "decade");
        assert_eq!(rule_of("81 AD"), "bare-year");
    }

    #[test]
    fn test_specific_rule_preempts_general() {
        // The bare-century rule would also match these; the qualifier rules
        // must claim them first
        assert_eq!(rule_of("second half of the XIX century"), "qualified-century");
        assert_eq!(rule_of("VI - second quarter V centuries BC"), "qualified-century-range");
        // And the bare-year rule must never see canonical input
        assert_eq!(rule_of("1250"), "canonical-year");
    }

    // ── totality ─────────────────────────────────────────────────────

    #[test]
    fn test_malformed_numerals_decline() {
        let e = extractor();
        assert!(e.extract("XXX century").is_none());
        assert!(e.extract("IIX century").is_none());
        assert!(e.extract("XXX-X millennium BC").is_none());
    }

    #[test]
    fn test_junk_input_never_panics() {
        let e = extractor();
        for junk in [
            "",
            "unknown",
            "n/a",
            "date unclear",
            "century",
            "early",
            "-",
            "--",
            "??",
            "I",
            "г",
            "thousand years ago",
            "quarter of century",
            "/",
            "0/0/0",
        ] {
            let _ = e.extract(junk);
        }
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let e = extractor();
        for text in ["XIX century", "1840-1850", "VI century BC", "1920s"] {
            assert_eq!(e.extract(text), e.extract(text));
        }
    }
}
