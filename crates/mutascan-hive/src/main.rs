use anyhow::Context;
use clap::Parser;
use mutascan_hive::state::AppState;
use mutascan_hive::{app, db};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about = "HTTP front end for the mutant DNA detector")]
struct Args {
    #[arg(long, default_value = "sqlite://mutants.db")]
    db: String,

    #[arg(long, default_value_t = 8080)]
    port: u16,

    #[arg(long, default_value_t = 16)]
    max_connections: u32,

    /// Maximum request body size in bytes.
    #[arg(long, default_value_t = 1024 * 1024)]
    body_limit: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    info!("🧬 Mutascan Hive is initializing...");

    let pool = db::init_db(&args.db, args.max_connections)
        .await
        .with_context(|| format!("opening verdict store {}", args.db))?;

    let state = Arc::new(AppState::new(pool));
    let router = app(state, args.body_limit);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("🚀 Hive listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("🛑 Hive stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
