//! # Proctor - RPA Knowledge Quiz Service
//!
//! Serves a seven-question quiz drawn from a fixed bank and issues a
//! sequential passcode (`LW001P`, `LW002P`, ...) to every passing
//! submission.
//!
//! ## Architecture
//! ```text
//! Browser → Proctor → Question Bank (static)
//!              ↓
//!        Passcode Counter (file or Redis)
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod passcode;
mod quiz;
mod routes;
mod state;

use config::AppConfig;
use state::AppState;

/// Proctor - RPA quiz and passcode service
#[derive(Parser, Debug)]
#[command(name = "proctor")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/proctor.toml")]
    config: String,

    /// Listen address (overrides config)
    #[arg(short, long, env = "LISTEN_ADDR")]
    listen: Option<String>,

    /// Passcode counter file (overrides config)
    #[arg(long, env = "COUNTER_PATH")]
    counter_path: Option<String>,

    /// Redis URL; switches the counter to the Redis backend
    #[arg(long, env = "REDIS_URL")]
    redis_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "LOG_LEVEL")]
    log_level: String,

    /// Enable JSON logging output
    #[arg(long, default_value = "false")]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env before reading env-backed arguments
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(&args);

    info!("Starting Proctor v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load(&args.config, &args)?;
    info!(config = %args.config, "Configuration loaded");

    // Initialize application state
    let state = AppState::new(config.clone()).await?;
    info!(
        backend = state.counter.backend(),
        bank_size = state.bank.len(),
        "Passcode counter ready"
    );

    // Build router
    let app = routes::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    info!("Proctor listening on {}", config.listen_addr);

    // Handle graceful shutdown
    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Shutdown signal received");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .context("Server error")?;

    info!("Proctor shutdown complete");
    Ok(())
}

/// `RUST_LOG` wins over `--log-level`. Per-request spans from tower-http
/// stay at `warn` unless asked for, so passcode issuance is what shows at
/// `info`.
fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},tower_http=warn")))
}

fn init_logging(args: &Args) {
    let registry = tracing_subscriber::registry().with(log_filter(&args.log_level));

    if args.json_logs {
        registry
            .with(fmt::layer().json().flatten_event(true).with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer().compact().with_target(false)).init();
    }
}
