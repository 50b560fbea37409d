use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

const CONNECT_RETRIES: u32 = 5;

pub async fn init_db(db_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    info!("🔌 Opening verdict store at {}", db_url);

    let pool = connect_with_retry(db_url, max_connections).await?;

    let schema = include_str!("../schema.sql");
    if let Err(e) = apply_schema(&pool, schema).await {
        tracing::error!("❌ Schema migration failed: {}", e);
        return Err(e);
    }

    info!("✅ Database connected and schema applied.");
    Ok(pool)
}

async fn connect_with_retry(db_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(db_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let delay = Duration::from_secs(1);
    let mut attempt = 1;

    loop {
        match SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options.clone())
            .await
        {
            Ok(p) => return Ok(p),
            Err(e) if attempt < CONNECT_RETRIES => {
                warn!(
                    "⚠️  DB Connection attempt {}/{} failed: {}. Retrying...",
                    attempt, CONNECT_RETRIES, e
                );
                attempt += 1;
                sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

async fn apply_schema(pool: &SqlitePool, schema: &str) -> Result<(), sqlx::Error> {
    let statements = split_sql(schema);

    let mut tx = pool.begin().await?;

    for (i, sql) in statements.iter().enumerate() {
        if let Err(e) = sqlx::query(sql).execute(&mut *tx).await {
            tracing::error!("🚨 Schema Error in statement #{}:\n{}", i + 1, sql);
            return Err(e);
        }
    }

    tx.commit().await?;
    Ok(())
}

/// Splits a schema file into statements on trailing semicolons, ignoring
/// `--` comments. Comment-only chunks are dropped.
fn split_sql(raw: &str) -> Vec<String> {
    let mut cmds = Vec::new();
    let mut current = String::new();

    for line in raw.lines() {
        let code = match line.find("--") {
            Some(idx) => &line[..idx],
            None => line,
        };
        let code = code.trim();
        if code.is_empty() {
            continue;
        }

        current.push_str(code);
        current.push('\n');

        if code.ends_with(';') {
            cmds.push(current.trim().to_string());
            current.clear();
        }
    }

    if !current.trim().is_empty() {
        cmds.push(current.trim().to_string());
    }
    cmds
}
