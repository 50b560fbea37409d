use chrono::{DateTime, Utc};
use mutascan_core::fingerprint::Fingerprint;
use mutascan_core::store::{StoreError, StoreResult, VerdictRecord, VerdictStore};
use sqlx::{Pool, Row, Sqlite};

/// `dna_records` table behind the verdict cache. The UNIQUE constraint on
/// `dna_hash` is what makes concurrent first evaluations safe.
#[derive(Clone)]
pub struct SqliteStore {
    pub db: Pool<Sqlite>,
}

impl SqliteStore {
    pub fn new(db: Pool<Sqlite>) -> Self {
        Self { db }
    }

    pub async fn total(&self) -> StoreResult<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM dna_records")
            .fetch_one(&self.db)
            .await
            .map_err(unavailable)?;
        to_count(row.try_get("n").map_err(corrupt)?)
    }
}

fn unavailable(e: sqlx::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

fn corrupt(e: sqlx::Error) -> StoreError {
    StoreError::Corrupt(e.to_string())
}

fn to_count(n: i64) -> StoreResult<u64> {
    u64::try_from(n).map_err(|_| StoreError::Corrupt(format!("negative count {}", n)))
}

impl VerdictStore for SqliteStore {
    async fn find_by_key(&self, key: &Fingerprint) -> StoreResult<Option<VerdictRecord>> {
        let row = sqlx::query(
            "SELECT dna_hash, is_mutant, created_at FROM dna_records WHERE dna_hash = ?",
        )
        .bind(key.as_str())
        .fetch_optional(&self.db)
        .await
        .map_err(unavailable)?;

        let Some(r) = row else {
            return Ok(None);
        };

        let hash: String = r.try_get("dna_hash").map_err(corrupt)?;
        let fingerprint = Fingerprint::from_hex(&hash)
            .ok_or_else(|| StoreError::Corrupt(format!("malformed dna_hash '{}'", hash)))?;
        let is_mutant: bool = r.try_get("is_mutant").map_err(corrupt)?;
        let created_at: DateTime<Utc> = r.try_get("created_at").map_err(corrupt)?;

        Ok(Some(VerdictRecord {
            fingerprint,
            is_mutant,
            created_at,
        }))
    }

    async fn insert_if_absent(&self, record: VerdictRecord) -> StoreResult<bool> {
        let res = sqlx::query(
            "INSERT INTO dna_records (dna_hash, is_mutant, created_at) VALUES (?, ?, ?) \
             ON CONFLICT(dna_hash) DO NOTHING",
        )
        .bind(record.fingerprint.as_str())
        .bind(record.is_mutant)
        .bind(record.created_at)
        .execute(&self.db)
        .await
        .map_err(unavailable)?;

        Ok(res.rows_affected() == 1)
    }

    async fn count_where(&self, is_mutant: bool) -> StoreResult<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM dna_records WHERE is_mutant = ?")
            .bind(is_mutant)
            .fetch_one(&self.db)
            .await
            .map_err(unavailable)?;

        to_count(row.try_get("n").map_err(corrupt)?)
    }
}
