mod common;

use common::{owned, HUMAN_6, MUTANT_6};
use mutascan_core::store::MemoryStore;
use mutascan_core::{MutantError, MutantService, ValidationError};

#[tokio::test]
async fn test_reference_grids() {
    let service = MutantService::new(MemoryStore::new());

    let mutant = service.evaluate_rows(&MUTANT_6).await.unwrap();
    assert!(mutant.is_mutant);
    assert!(!mutant.cached);

    let human = service.evaluate_rows(&HUMAN_6).await.unwrap();
    assert!(!human.is_mutant);
    assert_ne!(mutant.fingerprint, human.fingerprint);
}

#[tokio::test]
async fn test_repeat_counts_once() {
    let service = MutantService::new(MemoryStore::new());

    let first = service.evaluate_rows(&MUTANT_6).await.unwrap();
    let second = service.evaluate_rows(&MUTANT_6).await.unwrap();

    assert_eq!(first.is_mutant, second.is_mutant);
    assert_eq!(first.fingerprint, second.fingerprint);
    assert!(second.cached);

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.count_mutant_dna, 1);
    assert_eq!(stats.count_human_dna, 0);
    assert_eq!(stats.ratio, 1.0);
}

#[tokio::test]
async fn test_nullable_payload() {
    let service = MutantService::new(MemoryStore::new());
    let rows = owned(&HUMAN_6);

    let eval = service.evaluate(Some(rows.as_slice())).await.unwrap();
    assert!(!eval.is_mutant);

    let err = service.evaluate(None).await.unwrap_err();
    assert!(matches!(
        err,
        MutantError::Validation(ValidationError::Missing)
    ));
}

#[tokio::test]
async fn test_invalid_grid_is_never_stored() {
    let service = MutantService::new(MemoryStore::new());

    let err = service
        .evaluate_rows(&["ATGC", "CAGT", "TTAT"])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MutantError::Validation(ValidationError::TooSmall { size: 3 })
    ));

    assert!(service.cache().store().is_empty());
    let stats = service.stats().await.unwrap();
    assert_eq!(stats.count_mutant_dna + stats.count_human_dna, 0);
    assert_eq!(stats.ratio, 0.0);
}
