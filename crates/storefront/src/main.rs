//! EquipPro Storefront - Public marketing and catalog site.
//!
//! This binary serves the single-page storefront on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for interactivity
//! - Askama templates for server-side rendering
//! - A static, embedded product catalog (no database)
//! - Per-session in-memory cart state via tower-sessions
//!
//! Nothing is persisted: the cart lives and dies with its session, and
//! "submitting" an order or the contact form only resets state and shows a
//! toast.

#![cfg_attr(not(test), forbid(unsafe_code))]

use equippro_storefront::catalog::Catalog;
use equippro_storefront::config::StorefrontConfig;
use equippro_storefront::routes;
use equippro_storefront::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "equippro_storefront=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load and validate the embedded catalog
    let catalog = Catalog::builtin().expect("Embedded catalog is invalid");
    tracing::info!(products = catalog.all().len(), "Catalog loaded");

    // Build application state and router
    let state = AppState::new(config.clone(), catalog);
    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
