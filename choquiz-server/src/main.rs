//! choquiz-server - Korean initial-consonant quiz service
//!
//! Streams a zipped dictionary export into a curated quiz pool and serves
//! free-text search, batch draws, and pool management over HTTP.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use choquiz_common::config;
use choquiz_common::db::{init_database, PoolStore};
use choquiz_server::{build_router, seed, AppState};

/// Command-line arguments for choquiz-server
#[derive(Parser, Debug)]
#[command(name = "choquiz-server")]
#[command(about = "Korean chosung quiz service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "CHOQUIZ_PORT")]
    port: u16,

    /// Root folder holding the database and dictionary archive
    /// (falls back to CHOQUIZ_ROOT_FOLDER, the config file, then the OS data dir)
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// Dictionary archive path (defaults to <root>/dict.zip)
    #[arg(short, long, env = "CHOQUIZ_ARCHIVE")]
    archive: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting choquiz-server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let paths = config::resolve_paths(args.root_folder.as_deref(), args.archive.as_deref())?;
    info!("Database path: {}", paths.database_path.display());
    info!("Archive path: {}", paths.archive_path.display());

    let pool = match init_database(&paths.database_path).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e.into());
        }
    };
    let store = PoolStore::new(pool);

    // Seeding failures disable ingestion but never keep the store-backed
    // endpoints from serving
    if paths.archive_path.exists() {
        if let Err(e) = seed::seed_pool(&store, &paths.archive_path).await {
            error!("Startup seeding failed: {}", e);
        }
    } else {
        error!(
            "Dictionary archive not found: {} (search and seeding disabled)",
            paths.archive_path.display()
        );
    }

    let state = AppState::new(store, paths.archive_path);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("choquiz-server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
