//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Home page (hero, catalog, services, about, contacts)
//! GET  /health          - Health check
//!
//! # Catalog (HTMX fragments)
//! GET  /catalog         - Product grid, ?category=<slug> filters, absent/all = full catalog
//!
//! # Cart (HTMX fragments)
//! GET  /cart            - Cart panel
//! POST /cart/add        - Add one unit of a product (success toast, cart-updated trigger)
//! POST /cart/update     - Set line quantity (≤ 0 removes the line, info toast)
//! POST /cart/remove     - Remove a line (info toast)
//! POST /cart/city       - Set the destination city (re-quotes delivery)
//! POST /cart/submit     - Validate and "submit" the order (local reset only)
//! GET  /cart/count      - Cart badge fragment
//!
//! # Contact
//! POST /contact         - Contact form (validation + toast, no real submission)
//! ```

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/city", post(cart::city))
        .route("/submit", post(cart::submit))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog grid fragment
        .route("/catalog", get(catalog::grid))
        // Cart routes
        .nest("/cart", cart_routes())
        // Contact form
        .route("/contact", post(contact::submit))
}

/// Build the full application: routes, static files, sessions, tracing.
///
/// The session store is in-memory on purpose: the cart is session-scoped
/// transient state and is discarded when the process stops.
pub fn app(state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(session_layer)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
