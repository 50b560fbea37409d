mod common;

use common::{grid, MUTANT_6};
use mutascan_core::cache::VerdictCache;
use mutascan_core::fingerprint::Fingerprint;
use mutascan_core::store::{MemoryStore, StoreError, StoreResult, VerdictRecord, VerdictStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn key() -> Fingerprint {
    Fingerprint::of(&grid(&MUTANT_6))
}

#[tokio::test]
async fn test_miss_then_hit() {
    let cache = VerdictCache::new(MemoryStore::new());
    let calls = AtomicUsize::new(0);

    let first = cache
        .get_or_compute(&key(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        })
        .await
        .unwrap();
    assert!(first.is_mutant);
    assert!(!first.cached);

    let second = cache
        .get_or_compute(&key(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            false // would flip the verdict if it ever ran
        })
        .await
        .unwrap();
    assert!(second.is_mutant);
    assert!(second.cached);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.count_by_verdict(true).await.unwrap(), 1);
    assert_eq!(cache.count_by_verdict(false).await.unwrap(), 0);
}

#[tokio::test]
async fn test_first_writer_wins() {
    let store = MemoryStore::new();
    assert!(store
        .insert_if_absent(VerdictRecord::new(key(), true))
        .await
        .unwrap());
    assert!(!store
        .insert_if_absent(VerdictRecord::new(key(), false))
        .await
        .unwrap());

    let rec = store.find_by_key(&key()).await.unwrap().unwrap();
    assert!(rec.is_mutant);
    assert_eq!(store.len(), 1);
    assert_eq!(store.count_where(false).await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_callers_store_one_record() {
    let cache = Arc::new(VerdictCache::new(MemoryStore::new()));
    let mut handles = Vec::new();

    for _ in 0..16 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            cache.get_or_compute(&key(), || true).await.unwrap()
        }));
    }

    for h in handles {
        assert!(h.await.unwrap().is_mutant);
    }

    assert_eq!(cache.store().len(), 1);
    assert_eq!(cache.count_by_verdict(true).await.unwrap(), 1);
}

/// Reads work, writes always fail.
struct ReadOnlyStore;

impl VerdictStore for ReadOnlyStore {
    async fn find_by_key(&self, _key: &Fingerprint) -> StoreResult<Option<VerdictRecord>> {
        Ok(None)
    }

    async fn insert_if_absent(&self, _record: VerdictRecord) -> StoreResult<bool> {
        Err(StoreError::Unavailable("disk full".into()))
    }

    async fn count_where(&self, _is_mutant: bool) -> StoreResult<u64> {
        Ok(0)
    }
}

/// Nothing works.
struct DownStore;

impl VerdictStore for DownStore {
    async fn find_by_key(&self, _key: &Fingerprint) -> StoreResult<Option<VerdictRecord>> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn insert_if_absent(&self, _record: VerdictRecord) -> StoreResult<bool> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn count_where(&self, _is_mutant: bool) -> StoreResult<u64> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

#[tokio::test]
async fn test_failed_write_still_returns_verdict() {
    let cache = VerdictCache::new(ReadOnlyStore);
    let outcome = cache.get_or_compute(&key(), || true).await.unwrap();
    assert!(outcome.is_mutant);
    assert!(!outcome.cached);
}

#[tokio::test]
async fn test_failed_lookup_is_surfaced() {
    let cache = VerdictCache::new(DownStore);
    let calls = AtomicUsize::new(0);
    let result = cache
        .get_or_compute(&key(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        })
        .await;

    assert!(matches!(result, Err(StoreError::Unavailable(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
