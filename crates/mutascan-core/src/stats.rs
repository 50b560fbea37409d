use crate::cache::VerdictCache;
use crate::store::{StoreResult, VerdictStore};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    pub count_mutant_dna: u64,
    pub count_human_dna: u64,
    pub ratio: f64,
}

impl StatsSnapshot {
    pub fn from_counts(mutants: u64, humans: u64) -> Self {
        Self {
            count_mutant_dna: mutants,
            count_human_dna: humans,
            ratio: ratio(mutants, humans),
        }
    }
}

/// Mutants per human. With no humans recorded the mutant count itself is
/// reported, so the result is always finite.
pub fn ratio(mutants: u64, humans: u64) -> f64 {
    if humans > 0 {
        mutants as f64 / humans as f64
    } else if mutants > 0 {
        mutants as f64
    } else {
        0.0
    }
}

pub async fn snapshot<S: VerdictStore>(cache: &VerdictCache<S>) -> StoreResult<StatsSnapshot> {
    let mutants = cache.count_by_verdict(true).await?;
    let humans = cache.count_by_verdict(false).await?;

    let stats = StatsSnapshot::from_counts(mutants, humans);
    info!(
        "📊 Stats: mutants={} humans={} ratio={:.3}",
        stats.count_mutant_dna, stats.count_human_dna, stats.ratio
    );
    Ok(stats)
}
