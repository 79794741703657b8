use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stylesense::adapters::{build_router, PgStyleRecordStore};
use stylesense::config::{AppConfig, ServerConfig};
use stylesense::ports::StyleRecordStore;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("stylesense: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.server);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over the configured filter.
fn init_logging(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_filter));

    let registry = tracing_subscriber::registry().with(filter);
    if server.logs_as_json() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().with_target(false)).init();
    }
}

async fn run(config: AppConfig) -> std::io::Result<()> {
    let store = open_store(&config).await;
    let app = build_router(&config, store);

    let addr = config
        .server
        .socket_addr()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "StyleSense listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Storage is optional: any failure here only disables persistence.
async fn open_store(config: &AppConfig) -> Option<Arc<dyn StyleRecordStore>> {
    if !config.persistence_enabled() {
        tracing::info!("Persistence disabled; recommendations will not be stored");
        return None;
    }
    let database = config.database.as_ref()?;

    let store = match PgStyleRecordStore::connect_lazy(database) {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(error = %e, "Could not open database pool; persistence disabled");
            return None;
        }
    };

    if database.run_migrations {
        if let Err(e) = store.run_migrations().await {
            tracing::warn!(error = %e, "Migrations failed; writes may fail until fixed");
        }
    }

    tracing::info!(database = %database.redacted_url(), "Persistence enabled (PostgreSQL)");
    Some(Arc::new(store))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
