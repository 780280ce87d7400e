//! Background engine binary for the Spiritkeep backend.
//!
//! This is the main entry point that wires the tick scheduler to
//! `PostgreSQL`. It loads configuration, connects to the database, runs
//! migrations, and then hands control to the scheduler, which maintains
//! every spiritling until the process is stopped.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `spiritkeep-config.yaml`
//! 3. Connect to `PostgreSQL` and run migrations
//! 4. Build the stores and tick processor
//! 5. Run the scheduler loop (never returns during normal operation)

mod error;

use std::path::Path;

use rand::SeedableRng as _;
use rand::rngs::SmallRng;
use spiritkeep_core::{EngineConfig, Scheduler, TickProcessor};
use spiritkeep_db::{PgActionLog, PgSpiritlingStore, PostgresConfig, PostgresPool};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Application entry point for the engine.
///
/// # Errors
///
/// Returns an error if any initialization step fails. Once the scheduler
/// is running, failures are handled internally with backoff and never
/// propagate here.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("spiritkeep-engine starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        pass_interval_secs = config.scheduler.pass_interval_secs,
        creature_pause_ms = config.scheduler.creature_pause_ms,
        backoff_secs = config.scheduler.backoff_secs,
        "Configuration loaded"
    );

    // 3. Connect to PostgreSQL and run migrations.
    let pg_config = PostgresConfig::new(&config.database.url)
        .with_max_connections(config.database.max_connections);
    let pool = PostgresPool::connect(&pg_config).await?;
    pool.run_migrations().await?;

    // 4. Build the stores and tick processor.
    let store = PgSpiritlingStore::new(pool.pool().clone());
    let log = PgActionLog::new(pool.pool().clone());
    let processor = TickProcessor::new(store, log);

    // 5. Run the scheduler loop.
    let scheduler = Scheduler::new(processor, SmallRng::from_os_rng())
        .with_config(config.scheduler.intervals());
    info!("Entering scheduler loop");
    scheduler.run().await;

    Ok(())
}

/// Load the engine configuration from `spiritkeep-config.yaml`.
///
/// Looks for the config file relative to the current working directory.
fn load_config() -> Result<EngineConfig, EngineError> {
    let config_path = Path::new("spiritkeep-config.yaml");
    if config_path.exists() {
        let config = EngineConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        let mut config = EngineConfig::default();
        config.database.apply_env_overrides();
        Ok(config)
    }
}
