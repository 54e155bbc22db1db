//! HRMS server - HR records REST API
//!
//! Serves departments, jobs, employees and user accounts over HTTP, backed by
//! PostgreSQL or SQLite.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hrms_api::{ApiServer, ApiServerConfig};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::prelude::*;

/// HRMS - HR records REST API
#[derive(Parser, Debug)]
#[command(name = "hrms")]
#[command(about = "HRMS - HR records REST API")]
#[command(version = env!("GIT_TAG"))]
#[command(long_version = concat!(env!("GIT_TAG"), "\nCommit: ", env!("GIT_HASH"), "\nBuilt: ", env!("BUILD_TIME")))]
struct Cli {
    /// Database URL (PostgreSQL or SQLite)
    #[arg(
        long,
        global = true,
        env = "DATABASE_URL",
        default_value = "sqlite://./hrms.db?mode=rwc"
    )]
    database_url: String,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Address to bind the HTTP API
    #[arg(long, global = true, env = "HRMS_BIND_ADDR", default_value = "127.0.0.1:5555")]
    bind_addr: SocketAddr,

    /// Disable CORS headers
    #[arg(long, global = true)]
    no_cors: bool,

    /// Insert demo data on startup when the database is empty
    #[arg(long, global = true, env = "HRMS_SEED_DEMO")]
    seed_demo: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Commands {
    /// Run migrations and serve the HTTP API (default)
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
    /// Apply migrations, insert demo data if the database is empty, and exit
    Seed,
}

fn init_logging(log_level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(log_level))
        .context("Failed to initialize logging filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down..."),
        Err(e) => error!("Failed to listen for Ctrl+C: {}", e),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level)?;

    info!("HRMS {} ({})", env!("GIT_TAG"), env!("GIT_HASH"));

    let db = hrms_db::connect(&cli.database_url)
        .await
        .context("Failed to connect to database")?;
    hrms_db::migrate(&db)
        .await
        .context("Failed to run database migrations")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Migrate => {
            info!("Migrations applied");
        }
        Commands::Seed => {
            seed(&db).await?;
        }
        Commands::Serve => {
            if cli.seed_demo {
                seed(&db).await?;
            }

            let config = ApiServerConfig {
                bind_addr: cli.bind_addr,
                enable_cors: !cli.no_cors,
                cors_origins: None,
            };

            ApiServer::new(config, db)
                .start(shutdown_signal())
                .await?;
        }
    }

    Ok(())
}

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<()> {
    let inserted = hrms_db::seed::seed_demo_data(db)
        .await
        .context("Failed to insert demo data")?;

    if inserted {
        info!("Demo data inserted");
    } else {
        info!("Database already has data, demo data skipped");
    }

    Ok(())
}
