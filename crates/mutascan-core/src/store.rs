use crate::fingerprint::Fingerprint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::sync::RwLock;
use thiserror::Error;

/// A persisted verdict. Written once per fingerprint and never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictRecord {
    pub fingerprint: Fingerprint,
    pub is_mutant: bool,
    pub created_at: DateTime<Utc>,
}

impl VerdictRecord {
    pub fn new(fingerprint: Fingerprint, is_mutant: bool) -> Self {
        Self {
            fingerprint,
            is_mutant,
            created_at: Utc::now(),
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Verdict store unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupt verdict record: {0}")]
    Corrupt(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository for verdict records. Implementations must enforce uniqueness
/// on the fingerprint: the first insert for a key wins, later ones are
/// ignored and report `false`.
pub trait VerdictStore: Send + Sync {
    fn find_by_key(
        &self,
        key: &Fingerprint,
    ) -> impl Future<Output = StoreResult<Option<VerdictRecord>>> + Send;

    /// Returns whether this call created the record.
    fn insert_if_absent(
        &self,
        record: VerdictRecord,
    ) -> impl Future<Output = StoreResult<bool>> + Send;

    fn count_where(&self, is_mutant: bool) -> impl Future<Output = StoreResult<u64>> + Send;
}

#[derive(Default)]
struct MemoryInner {
    records: HashMap<Fingerprint, VerdictRecord>,
    mutants: u64,
    humans: u64,
}

/// Process-local store. Counters are maintained under the same lock as the
/// map so a count never disagrees with the records it summarizes.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|i| i.records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".to_string())
}

impl VerdictStore for MemoryStore {
    async fn find_by_key(&self, key: &Fingerprint) -> StoreResult<Option<VerdictRecord>> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.records.get(key).cloned())
    }

    async fn insert_if_absent(&self, record: VerdictRecord) -> StoreResult<bool> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        if inner.records.contains_key(&record.fingerprint) {
            return Ok(false);
        }
        if record.is_mutant {
            inner.mutants += 1;
        } else {
            inner.humans += 1;
        }
        inner.records.insert(record.fingerprint.clone(), record);
        Ok(true)
    }

    async fn count_where(&self, is_mutant: bool) -> StoreResult<u64> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(if is_mutant { inner.mutants } else { inner.humans })
    }
}
