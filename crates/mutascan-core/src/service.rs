use crate::cache::VerdictCache;
use crate::detector;
use crate::error::MutantResult;
use crate::fingerprint::Fingerprint;
use crate::grid::{self, Grid};
use crate::stats::{self, StatsSnapshot};
use crate::store::VerdictStore;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub fingerprint: Fingerprint,
    pub is_mutant: bool,
    pub cached: bool,
}

/// Validate, fingerprint, then consult the cache; the detector only runs on
/// a miss.
pub struct MutantService<S> {
    cache: VerdictCache<S>,
}

impl<S: VerdictStore> MutantService<S> {
    pub fn new(store: S) -> Self {
        Self {
            cache: VerdictCache::new(store),
        }
    }

    pub fn cache(&self) -> &VerdictCache<S> {
        &self.cache
    }

    /// Takes the nullable payload shape the HTTP layer decodes.
    pub async fn evaluate(&self, rows: Option<&[Option<String>]>) -> MutantResult<Evaluation> {
        let grid = grid::validate(rows)?;
        self.evaluate_grid(&grid).await
    }

    pub async fn evaluate_rows<R: AsRef<str>>(&self, rows: &[R]) -> MutantResult<Evaluation> {
        let grid = Grid::from_rows(rows)?;
        self.evaluate_grid(&grid).await
    }

    pub async fn evaluate_grid(&self, grid: &Grid) -> MutantResult<Evaluation> {
        let fingerprint = Fingerprint::of(grid);
        let outcome = self
            .cache
            .get_or_compute(&fingerprint, || detector::is_mutant(grid))
            .await?;

        if !outcome.cached {
            info!(
                "🧬 New DNA {} ({}x{}): {}",
                fingerprint.short(12),
                grid.size(),
                grid.size(),
                if outcome.is_mutant { "mutant" } else { "human" }
            );
        }

        Ok(Evaluation {
            fingerprint,
            is_mutant: outcome.is_mutant,
            cached: outcome.cached,
        })
    }

    pub async fn stats(&self) -> MutantResult<StatsSnapshot> {
        Ok(stats::snapshot(&self.cache).await?)
    }
}
