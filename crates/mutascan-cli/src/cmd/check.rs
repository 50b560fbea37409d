use super::{EXIT_HUMAN, EXIT_INVALID, EXIT_MUTANT};
use crate::reports;
use clap::Args;
use mutascan_core::detector::{self, Sequence};
use mutascan_core::fingerprint::Fingerprint;
use mutascan_core::Grid;
use serde::Serialize;
use std::process::ExitCode;
use tracing::error;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Matrix rows, e.g. ATGCGA CAGTGC TTATGT AGAAGG CCCCTA TCACTG
    #[arg(required = true)]
    pub rows: Vec<String>,

    /// Print a JSON report instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    fingerprint: &'a Fingerprint,
    is_mutant: bool,
    sequences: &'a [Sequence],
}

pub fn run(args: CheckArgs) -> ExitCode {
    let grid = match Grid::from_rows(&args.rows) {
        Ok(g) => g,
        Err(e) => {
            error!("❌ Invalid DNA: {}", e);
            if args.json {
                println!("{}", serde_json::json!({ "error": e.to_string() }));
            }
            return ExitCode::from(EXIT_INVALID);
        }
    };

    let is_mutant = detector::is_mutant(&grid);
    let sequences: Vec<Sequence> = detector::scan(&grid).collect();
    let fingerprint = Fingerprint::of(&grid);

    if args.json {
        let report = CheckReport {
            fingerprint: &fingerprint,
            is_mutant,
            sequences: &sequences,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{}", s),
            Err(e) => error!("Failed to serialize report: {}", e),
        }
    } else {
        reports::print_grid(&grid, &sequences);
        reports::print_sequences(&sequences);
        println!(
            "\n{} {}",
            if is_mutant { "🧬 MUTANT" } else { "🙂 HUMAN" },
            fingerprint.short(16)
        );
    }

    ExitCode::from(if is_mutant { EXIT_MUTANT } else { EXIT_HUMAN })
}
