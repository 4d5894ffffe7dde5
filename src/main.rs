// Main entry point for the campus event catalog service

use anyhow::Context;
use event_catalog::api::{create_router, AppState};
use event_catalog::config::Config;
use event_catalog::engine::Catalog;
use event_catalog::loader::seed_loader;
use event_catalog::state::SharedCatalog;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load and validate configuration first (before any logging)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // 2. Initialize tracing subscriber with config values
    init_tracing(&config)?;

    info!("Starting event catalog service");
    info!(
        bind_address = %config.bind_address,
        port = config.port,
        seed_events = config.seed_events,
        "Configuration loaded"
    );

    // 3. Build the catalog
    let catalog = build_catalog(&config)?;
    info!(events = catalog.len(), next_event_id = catalog.next_event_id(), "Catalog initialized");

    // 4. Create router
    let app_state = AppState::new(SharedCatalog::new(catalog), config.clone());
    let router = create_router(app_state);

    // 5. Start HTTP server
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| {
            error!(error = %e, addr = %addr, "Failed to bind to address");
            e
        })
        .with_context(|| format!("binding {}", addr))?;

    info!(addr = %addr, "Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!(error = %e, "Server error");
            e
        })?;

    info!("Server shutdown complete");
    Ok(())
}

/// Seed file, built-in events, or an empty catalog, in that order of preference
fn build_catalog(config: &Config) -> anyhow::Result<Catalog> {
    if !config.seed_events {
        return Ok(Catalog::new());
    }

    match config.seed_events_path {
        Some(ref path) => {
            let events = seed_loader::from_file(path).map_err(|e| {
                error!(error = %e, path = ?path, "Failed to load seed events");
                e
            })?;
            info!(path = ?path, count = events.len(), "Seed events loaded from file");
            Ok(Catalog::with_events(events))
        }
        None => Catalog::seeded().context("Built-in seed events are invalid"),
    }
}

/// Initialize tracing subscriber based on configuration
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_env_filter(filter);

    let result = if config.log_format == "json" {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Ctrl+C received, starting graceful shutdown");
        },
        _ = terminate => {
            info!("SIGTERM received, starting graceful shutdown");
        },
    }
}
