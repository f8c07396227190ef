//! Atlas Server
//!
//! Person record search API: create records and run case-insensitive
//! substring searches over them, behind a shared API key.
//!
//! Storage is PostgreSQL when `DATABASE_URL` points at a server and an
//! embedded SQLite file otherwise.

#![recursion_limit = "256"]

mod config;
mod handlers;
mod middleware;
mod services;
mod storage;

use anyhow::{Context, Result};
use atlas_core::ApiKeyGate;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use config::ServerConfig;
use services::PersonDirectory;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<PersonDirectory>,
    pub gate: ApiKeyGate,
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Atlas Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, db={:?}, max_connections={}",
        config.bind_address, config.database, config.max_connections
    );
    if config.uses_default_api_key() {
        warn!("Running with the placeholder API key; set API_KEY before exposing this server");
    }

    let store = storage::connect(&config.database, config.max_connections)
        .await
        .context("Failed to open storage")?;
    let directory = Arc::new(PersonDirectory::new(store));
    info!("Storage ready ({})", directory.engine());

    let state = AppState {
        directory,
        gate: ApiKeyGate::new(config.api_key()),
    };

    let app = build_router(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // Open paths
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(handlers::docs::openapi))
        .route("/docs", get(handlers::docs::swagger_ui))
        // Guarded operations
        .route("/init", post(handlers::schema::init))
        .route("/persons", post(handlers::persons::create))
        .route("/search", get(handlers::persons::search))
        // Layers
        .layer(axum::middleware::from_fn_with_state(
            state.gate.clone(),
            middleware::require_api_key,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
