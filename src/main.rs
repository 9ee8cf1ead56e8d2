use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use walkdir::WalkDir;

use period_extract::{normalize, period, period_label_for, resolve, Extractor, ResolvedYear};

const OUTPUT_DIR: &str = "output";

#[derive(Parser)]
#[command(
    name = "period_extract",
    about = "Ukrainian heritage catalog date analyzer"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Assign years and periods to date expressions given as arguments
    Assign {
        /// Date expressions, e.g. "XIX century", "1840-1850", "VI century BC"
        dates: Vec<String>,
    },
    /// Process a directory of record files (one expression per line) → output/*.json
    Batch {
        /// Path to the record directory
        #[arg(default_value = ".")]
        corpus: PathBuf,
    },
    /// Print the historical period table inventory
    Periods,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Assign { dates }) => run_assign(&dates),
        Some(Command::Batch { corpus }) => run_batch(&corpus),
        Some(Command::Periods) | None => run_periods(),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  OUTPUT FILE HELPERS
// ═══════════════════════════════════════════════════════════════════════

fn output_path(name: &str) -> PathBuf {
    Path::new(OUTPUT_DIR).join(name)
}

fn write_json<T: serde::Serialize>(name: &str, data: &T) {
    let path = output_path(name);
    let json = serde_json::to_string_pretty(data).expect("JSON serialization failed");
    std::fs::write(&path, &json).unwrap_or_else(|e| panic!("cannot write {}: {e}", path.display()));
    eprintln!("  {} ({} bytes)", path.display(), json.len());
}

// ═══════════════════════════════════════════════════════════════════════
//  SHARED RECORD SHAPE
// ═══════════════════════════════════════════════════════════════════════

/// One assigned record, as written to stdout / output files.
#[derive(serde::Serialize)]
struct Assignment {
    input: String,
    normalized: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    matched_rule: Option<&'static str>,
    resolved_year: ResolvedYear,
    period_label: &'static str,
}

impl Assignment {
    fn build(extractor: &Extractor, raw: &str) -> Self {
        let normalized = normalize(raw);
        let (matched_rule, estimate) = match extractor.extract_with_rule(&normalized) {
            Some((rule, estimate)) => (Some(rule), Some(estimate)),
            None => (None, None),
        };
        let resolved_year = resolve(estimate);
        Assignment {
            input: raw.to_string(),
            normalized,
            matched_rule,
            resolved_year,
            period_label: period_label_for(resolved_year),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  ASSIGN MODE: expressions from the command line → JSON to stdout
// ═══════════════════════════════════════════════════════════════════════

fn run_assign(dates: &[String]) {
    if dates.is_empty() {
        eprintln!("No date expressions given. Example:");
        eprintln!("  cargo run -- assign \"XIX century\" \"1840-1850\"");
        return;
    }

    let extractor = Extractor::new();
    let results: Vec<Assignment> = dates.iter().map(|d| Assignment::build(&extractor, d)).collect();

    let parsed = results.iter().filter(|a| a.resolved_year.is_known()).count();
    eprintln!("Assigned {parsed}/{} expressions", results.len());

    let json = serde_json::to_string_pretty(&results).expect("JSON serialization");
    println!("{json}");
}

// ═══════════════════════════════════════════════════════════════════════
//  BATCH MODE: record directory → output/*.json
// ═══════════════════════════════════════════════════════════════════════

/// Discover record files (*.txt, one date expression per line) under root.
fn scan_records(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("txt"))
        .collect();
    files.sort();
    files
}

fn run_batch(corpus: &Path) {
    eprintln!("Scanning records at: {}", corpus.display());

    let files = scan_records(corpus);
    eprintln!("Found {} record files", files.len());
    if files.is_empty() {
        eprintln!("Nothing to do (expected *.txt files, one date expression per line).");
        return;
    }

    let extractor = Extractor::new();
    let mut assignments = Vec::new();

    for file in &files {
        let content = match std::fs::read_to_string(file) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Cannot read {}: {e}", file.display());
                continue;
            }
        };
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            assignments.push(Assignment::build(&extractor, line));
        }
    }

    // ── Statistics ─────────────────────────────────────────────────
    eprintln!("\n══════════════════════════════════════════");
    eprintln!("  PERIOD ASSIGNMENT STATISTICS");
    eprintln!("══════════════════════════════════════════");

    let total = assignments.len();
    let parsed = assignments
        .iter()
        .filter(|a| a.resolved_year.is_known())
        .count();
    eprintln!("\nRecords: {total} total, {parsed} dated, {} unknown", total - parsed);

    let mut by_period = std::collections::HashMap::new();
    for a in &assignments {
        *by_period.entry(a.period_label).or_insert(0usize) += 1;
    }
    let mut period_counts: Vec<(&str, usize)> = by_period.into_iter().collect();
    period_counts.sort_by_key(|(_, c)| std::cmp::Reverse(*c));
    eprintln!("\nBy period:");
    for (label, count) in &period_counts {
        eprintln!("  {label}: {count} records");
    }

    let mut by_rule = std::collections::HashMap::new();
    for a in &assignments {
        if let Some(rule) = a.matched_rule {
            *by_rule.entry(rule).or_insert(0usize) += 1;
        }
    }
    let mut rule_counts: Vec<(&str, usize)> = by_rule.into_iter().collect();
    rule_counts.sort_by_key(|(_, c)| std::cmp::Reverse(*c));
    eprintln!("\nBy matched rule:");
    for (rule, count) in &rule_counts {
        eprintln!("  {rule}: {count} records");
    }

    let unmatched: Vec<&Assignment> = assignments
        .iter()
        .filter(|a| !a.resolved_year.is_known())
        .collect();
    if !unmatched.is_empty() {
        eprintln!("\nUnmatched inputs (first 30):");
        for a in unmatched.iter().take(30) {
            eprintln!("  {:?}", a.input);
        }
        if unmatched.len() > 30 {
            eprintln!("  ... and {} more", unmatched.len() - 30);
        }
    }

    // ── Write output files ─────────────────────────────────────────
    eprintln!("\n══════════════════════════════════════════");
    eprintln!("  WRITING OUTPUT FILES");
    eprintln!("══════════════════════════════════════════\n");

    std::fs::create_dir_all(OUTPUT_DIR).expect("cannot create output/");

    write_json("assignments.json", &assignments);

    #[derive(serde::Serialize)]
    struct Summary<'a> {
        total: usize,
        dated: usize,
        unknown: usize,
        distribution: Vec<(&'a str, usize)>,
        rule_usage: Vec<(&'a str, usize)>,
    }
    write_json(
        "summary.json",
        &Summary {
            total,
            dated: parsed,
            unknown: total - parsed,
            distribution: period_counts,
            rule_usage: rule_counts,
        },
    );

    eprintln!("\nDone. Inspect single expressions with:");
    eprintln!("  cargo run -- assign \"second half of the XIX century\"");
}

// ═══════════════════════════════════════════════════════════════════════
//  PERIODS MODE: print the static table
// ═══════════════════════════════════════════════════════════════════════

/// Render a signed year for the inventory listing ("550 BC", "1850").
fn year_label(year: f64) -> String {
    if year < 0.0 {
        format!("{} BC", (-year) as i64)
    } else {
        format!("{}", year as i64)
    }
}

fn run_periods() {
    println!("Historical period table ({} entries):\n", period::PERIODS.len());
    for p in period::PERIODS {
        println!(
            "  {:>10} .. {:<7}  {}",
            year_label(p.start),
            year_label(p.end),
            p.label
        );
    }
    println!();
    println!("  before {:>6}        {}", year_label(period::PERIODS[0].start), period::PRE_NEOLITHIC_LABEL);
    println!(
        "  after  {:>6}        {}",
        year_label(period::PERIODS[period::PERIODS.len() - 1].end),
        period::CONTEMPORARY_LABEL
    );
    println!("  unparseable input     {}", period::UNKNOWN_LABEL);

    eprintln!(
        "\nOverlapping intervals are resolved by {} precedence rules.",
        period_extract::arbiter::OVERLAP_RULES.len()
    );
}
