use crate::store::SqliteStore;
use mutascan_core::MutantService;
use sqlx::{Pool, Sqlite};

pub struct AppState {
    pub service: MutantService<SqliteStore>,
}

impl AppState {
    pub fn new(db: Pool<Sqlite>) -> Self {
        Self {
            service: MutantService::new(SqliteStore::new(db)),
        }
    }
}
