//! Integration tests for the EquipPro storefront.
//!
//! # Test Categories
//!
//! - `order_flow` - Catalog → cart → delivery → order flow across the
//!   service layer
//! - `http_surface` - In-process HTTP tests against the full router
//!   (sessions, HTMX fragments, status codes)
//!
//! The HTTP tests drive the router directly with `tower::ServiceExt::oneshot`;
//! no server or external service is needed.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;

use equippro_storefront::catalog::Catalog;
use equippro_storefront::config::StorefrontConfig;
use equippro_storefront::routes;
use equippro_storefront::state::AppState;

/// Build the full application router over the builtin catalog.
///
/// # Panics
///
/// Panics if the embedded catalog fails validation; tests cover that
/// separately.
#[must_use]
pub fn test_app() -> Router {
    let config = StorefrontConfig {
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        base_url: "http://localhost".to_string(),
    };
    let catalog = Catalog::builtin().expect("builtin catalog is valid");
    routes::app(AppState::new(config, catalog))
}
