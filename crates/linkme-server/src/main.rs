//! # LinkMe Server
//!
//! Loads configuration, installs logging, connects and migrates the
//! database, and wires the data layer. Runs until Ctrl+C / SIGTERM.

use linkme_config::ConfigLoader;
use linkme_core::{telemetry, LinkMeResult};
use linkme_repository::{create_pool, DatabasePoolInterface};
use linkme_server::di::build_data_module;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Logging may not be installed yet if the config failed to load.
        eprintln!("Application error: {}", e);
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> LinkMeResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    telemetry::init_logging(&config.logging)?;

    info!("Starting LinkMe data layer...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    let db_pool = create_pool(&config.database).await?;
    db_pool.health_check().await?;

    if config.database.run_migrations {
        db_pool.run_migrations().await?;
    }

    let _module = build_data_module(&db_pool);
    info!("Data layer ready");

    shutdown_signal().await;

    db_pool.close().await;
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
