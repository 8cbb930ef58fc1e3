//! CM True Cost estimator server.
//!
//! Serves the estimate API for a presentation shell.
//!
//! # Usage
//! ```bash
//! cm-cost-engine [--config ./config/cm_default] [--host 127.0.0.1] [--port 8080] [--verbose]
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cm_cost_engine::api::{AppState, create_router};
use cm_cost_engine::config::ConfigLoader;

/// Construction management true-cost estimator API
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Estimator configuration directory
    #[arg(short, long, env = "CM_COST_CONFIG", default_value = "./config/cm_default")]
    config: PathBuf,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "CM_COST_PORT", default_value = "8080")]
    port: u16,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(args.verbose)
        .init();

    let config = ConfigLoader::load(&args.config)?;
    info!(
        estimator = %config.metadata().name,
        version = %config.metadata().version,
        roles = config.default_roster().len(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}
