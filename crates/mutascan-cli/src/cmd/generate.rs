use super::EXIT_INVALID;
use clap::Args;
use mutascan_core::grid::{BASES, MIN_SIZE};
use std::process::ExitCode;
use tracing::error;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(long, default_value_t = 6)]
    pub size: usize,

    #[arg(long, default_value_t = 10)]
    pub count: usize,

    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn random_rows(rng: &mut fastrand::Rng, n: usize) -> Vec<String> {
    (0..n)
        .map(|_| (0..n).map(|_| BASES[rng.usize(..BASES.len())] as char).collect())
        .collect()
}

pub fn run(args: GenerateArgs) -> ExitCode {
    if args.size < MIN_SIZE {
        error!("❌ Size must be at least {}", MIN_SIZE);
        return ExitCode::from(EXIT_INVALID);
    }

    let mut rng = match args.seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    let batch: Vec<serde_json::Value> = (0..args.count)
        .map(|_| serde_json::json!({ "dna": random_rows(&mut rng, args.size) }))
        .collect();

    match serde_json::to_string_pretty(&batch) {
        Ok(s) => {
            println!("{}", s);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize batch: {}", e);
            ExitCode::FAILURE
        }
    }
}
