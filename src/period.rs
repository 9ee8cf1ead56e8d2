//! Static table of Ukrainian historical periods.
//!
//! One canonical table, loaded at build time, read by every call and never
//! mutated. Adjacent entries are allowed to overlap: the transition between
//! the Kievan Rus' period, the Mongol domination and the Kingdom of
//! Galicia-Volhynia is genuinely ambiguous, and the table reflects that
//! rather than papering over it. Overlaps are settled by the `arbiter`
//! module, not here.

use serde::Serialize;

use crate::estimate::ResolvedYear;

// ── Period ───────────────────────────────────────────────────────────

/// A named historical period in the classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Period {
    Paleolithic,
    Neolithic,
    BronzeAge,
    IronAge,
    ScythianSarmatian,
    GreekRoman,
    Migration,
    EarlyMedieval,
    KievanRus,
    MongolDomination,
    GaliciaVolhynia,
    LithuanianPolish,
    CossackHetmanate,
    RussianEmpire,
    FirstIndependence,
    Soviet,
    Independence,
}

// ── Table row ────────────────────────────────────────────────────────

/// One row of the period table: an inclusive signed-year interval and the
/// label reported to consumers.
#[derive(Debug, Serialize)]
pub struct HistoricalPeriod {
    pub period: Period,
    /// Inclusive start year, BCE negative.
    pub start: f64,
    /// Inclusive end year.
    pub end: f64,
    pub label: &'static str,
}

impl HistoricalPeriod {
    pub fn contains(&self, year: f64) -> bool {
        self.start <= year && year <= self.end
    }
}

/// Master table, ordered chronologically by start year (except for the
/// Galicia-Volhynia entry, which the source chronology lists after the
/// Mongol invasion it overlaps).
pub static PERIODS: &[HistoricalPeriod] = &[
    HistoricalPeriod {
        period: Period::Paleolithic,
        start: -1_400_000.0,
        end: -10_000.0,
        label: "Paleolithic Period",
    },
    HistoricalPeriod {
        period: Period::Neolithic,
        start: -10_000.0,
        end: -4_500.0,
        label: "Neolithic Period",
    },
    HistoricalPeriod {
        period: Period::BronzeAge,
        start: -4_500.0,
        end: -1_200.0,
        label: "Bronze Age",
    },
    HistoricalPeriod {
        period: Period::IronAge,
        start: -1_200.0,
        end: -700.0,
        label: "Iron Age",
    },
    HistoricalPeriod {
        period: Period::ScythianSarmatian,
        start: -700.0,
        end: 250.0,
        label: "Scythian-Sarmatian Era",
    },
    HistoricalPeriod {
        period: Period::GreekRoman,
        start: -250.0,
        end: 375.0,
        label: "Greek and Roman Period",
    },
    HistoricalPeriod {
        period: Period::Migration,
        start: 370.0,
        end: 700.0,
        label: "Migration Period",
    },
    HistoricalPeriod {
        period: Period::EarlyMedieval,
        start: 600.0,
        end: 900.0,
        label: "Early Medieval Period",
    },
    HistoricalPeriod {
        period: Period::KievanRus,
        start: 839.0,
        end: 1240.0,
        label: "Kievan Rus' Period",
    },
    HistoricalPeriod {
        period: Period::MongolDomination,
        start: 1239.0,
        end: 1400.0,
        label: "Mongol Invasion and Domination",
    },
    HistoricalPeriod {
        period: Period::GaliciaVolhynia,
        start: 1197.0,
        end: 1340.0,
        label: "Kingdom of Galicia-Volhynia",
    },
    HistoricalPeriod {
        period: Period::LithuanianPolish,
        start: 1340.0,
        end: 1648.0,
        label: "Lithuanian and Polish Period",
    },
    HistoricalPeriod {
        period: Period::CossackHetmanate,
        start: 1648.0,
        end: 1764.0,
        label: "Cossack Hetmanate Period",
    },
    HistoricalPeriod {
        period: Period::RussianEmpire,
        start: 1764.0,
        end: 1917.0,
        label: "Ukraine under the Russian Empire",
    },
    HistoricalPeriod {
        period: Period::FirstIndependence,
        start: 1917.0,
        end: 1921.0,
        label: "Ukraine's First Independence",
    },
    HistoricalPeriod {
        period: Period::Soviet,
        start: 1921.0,
        end: 1991.0,
        label: "Soviet Period",
    },
    HistoricalPeriod {
        period: Period::Independence,
        start: 1991.0,
        end: 2030.0,
        label: "Independence Period",
    },
];

// ── Labels outside the table ─────────────────────────────────────────

/// Years before the earliest table entry.
pub const PRE_NEOLITHIC_LABEL: &str = "Pre-Neolithic Period";
/// Years after the latest table entry.
pub const CONTEMPORARY_LABEL: &str = "Contemporary Period";
/// Unparseable input.
pub const UNKNOWN_LABEL: &str = "Unknown Period";

/// Display label for a period name.
pub fn label_of(period: Period) -> &'static str {
    PERIODS
        .iter()
        .find(|p| p.period == period)
        .map(|p| p.label)
        .unwrap_or(UNKNOWN_LABEL)
}

// ── Classification ───────────────────────────────────────────────────

/// All periods whose inclusive interval contains the resolved year.
///
/// The table is scanned in full rather than short-circuited on the first
/// hit: overlaps are expected and the arbiter needs every candidate.
/// `Unknown` yields no candidates.
pub fn classify(year: ResolvedYear) -> Vec<&'static HistoricalPeriod> {
    let ResolvedYear::Known(y) = year else {
        return Vec::new();
    };
    PERIODS.iter().filter(|p| p.contains(y)).collect()
}
