use crate::fingerprint::Fingerprint;
use crate::store::{StoreResult, VerdictRecord, VerdictStore};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOutcome {
    pub is_mutant: bool,
    /// True when the verdict came from the store and nothing was computed.
    pub cached: bool,
}

/// Content-addressed memo of verdicts. Each distinct grid is scored at most
/// once per store; the store's uniqueness on the fingerprint is the only
/// synchronization.
pub struct VerdictCache<S> {
    store: S,
}

impl<S: VerdictStore> VerdictCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Looks the fingerprint up and only calls `compute` on a miss.
    ///
    /// A failed lookup is an error. A failed or lost write after a
    /// successful compute is not: the local verdict is returned and only
    /// caching degrades for this call.
    pub async fn get_or_compute<F>(&self, key: &Fingerprint, compute: F) -> StoreResult<CacheOutcome>
    where
        F: FnOnce() -> bool,
    {
        if let Some(record) = self.store.find_by_key(key).await? {
            debug!("Cache hit {}", key.short(12));
            return Ok(CacheOutcome {
                is_mutant: record.is_mutant,
                cached: true,
            });
        }

        let is_mutant = compute();

        match self
            .store
            .insert_if_absent(VerdictRecord::new(key.clone(), is_mutant))
            .await
        {
            Ok(true) => debug!("Stored verdict {} for {}", is_mutant, key.short(12)),
            Ok(false) => debug!("Concurrent writer already stored {}", key.short(12)),
            Err(e) => warn!("⚠️ Verdict for {} not persisted: {}", key.short(12), e),
        }

        Ok(CacheOutcome {
            is_mutant,
            cached: false,
        })
    }

    pub async fn count_by_verdict(&self, is_mutant: bool) -> StoreResult<u64> {
        self.store.count_where(is_mutant).await
    }
}
