use super::EXIT_INVALID;
use crate::reports::{self, BatchRow};
use clap::Args;
use mutascan_core::grid::{self, Grid, ValidationError};
use mutascan_core::store::MemoryStore;
use mutascan_core::MutantService;
use rayon::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// JSON array whose items are row arrays or `{"dna": [..]}` objects.
    pub file: PathBuf,

    /// Print the stats snapshot as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum BatchEntry {
    Rows(Vec<Option<String>>),
    Wrapped { dna: Option<Vec<Option<String>>> },
    Null(()),
}

impl BatchEntry {
    fn validate(&self) -> Result<Grid, ValidationError> {
        match self {
            BatchEntry::Wrapped { dna } => grid::validate(dna.as_deref()),
            BatchEntry::Rows(rows) => grid::validate(Some(rows.as_slice())),
            BatchEntry::Null(()) => grid::validate(None),
        }
    }
}

pub fn load(path: &Path) -> Result<Vec<BatchEntry>, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    serde_json::from_str(&raw).map_err(|e| format!("{}: {}", path.display(), e))
}

pub async fn run(args: BatchArgs) -> ExitCode {
    let entries = match load(&args.file) {
        Ok(e) => e,
        Err(e) => {
            error!("❌ Could not read batch: {}", e);
            return ExitCode::from(EXIT_INVALID);
        }
    };
    info!("📂 Loaded {} entries from {:?}", entries.len(), args.file);

    // Validation is pure, so it runs in parallel ahead of the cache.
    let grids: Vec<Result<Grid, ValidationError>> =
        entries.par_iter().map(BatchEntry::validate).collect();

    let service = MutantService::new(MemoryStore::new());
    let mut rows = Vec::with_capacity(grids.len());

    for (index, grid) in grids.into_iter().enumerate() {
        let row = match grid {
            Ok(g) => match service.evaluate_grid(&g).await {
                Ok(eval) => BatchRow::Evaluated { index, eval },
                Err(e) => {
                    error!("❌ Entry {} failed: {}", index, e);
                    return ExitCode::FAILURE;
                }
            },
            Err(e) => BatchRow::Invalid {
                index,
                reason: e.to_string(),
            },
        };
        rows.push(row);
    }

    let stats = match service.stats().await {
        Ok(s) => s,
        Err(e) => {
            error!("❌ Could not read stats: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&stats) {
            Ok(s) => println!("{}", s),
            Err(e) => error!("Failed to serialize stats: {}", e),
        }
    } else {
        reports::print_batch(&rows);
        reports::print_stats(&stats);
    }

    ExitCode::SUCCESS
}
