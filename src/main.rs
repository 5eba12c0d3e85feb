use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledger_core::cache::InMemoryListCache;
use ledger_core::cli::{Cli, Commands};
use ledger_core::config::Config;
use ledger_core::services::TransactionService;
use ledger_core::store::memory::InMemoryTransactionStore;
use ledger_core::{create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Setup logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if let Some(Commands::Config) = cli.command {
        println!("{:#?}", config);
        return Ok(());
    }

    let store = Arc::new(InMemoryTransactionStore::new());
    let cache = Arc::new(InMemoryListCache::new());
    let service = Arc::new(TransactionService::new(store, cache));
    let app = create_app(AppState { service });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
