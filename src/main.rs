//! HTTP server for the bill splitter.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bill_splitter::api::{AppState, create_router};
use bill_splitter::config::ConfigLoader;
use bill_splitter::models::{PaletteColorAssigner, UuidGenerator};
use bill_splitter::store::InMemoryEventStore;

/// Bill splitter - split shared items, tax, and tip between people
///
/// Serves a JSON API for splitting bills. Events are kept in memory and are
/// lost when the process exits.
#[derive(Parser, Debug)]
#[command(name = "bill-splitter")]
#[command(about = "Serves the bill splitting API", long_about = None)]
struct Args {
    /// Path to the YAML configuration file
    ///
    /// Built-in defaults are used when omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the configured one
    #[arg(short, long, value_name = "ADDR")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &args.config {
        Some(path) => match ConfigLoader::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!(error = %e, "Failed to load configuration");
                process::exit(1);
            }
        },
        None => ConfigLoader::builtin(),
    };

    let bind = args
        .bind
        .clone()
        .unwrap_or_else(|| config.bind_address().to_string());

    let store = InMemoryEventStore::new(
        Arc::new(UuidGenerator),
        Arc::new(PaletteColorAssigner::new(config.palette().to_vec())),
    );
    let router = create_router(AppState::new(config, Arc::new(store)));

    let listener = match tokio::net::TcpListener::bind(&bind).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(bind = %bind, error = %e, "Failed to bind");
            process::exit(1);
        }
    };

    info!(bind = %bind, "Listening");
    if let Err(e) = axum::serve(listener, router).await {
        error!(error = %e, "Server error");
        process::exit(1);
    }
}
