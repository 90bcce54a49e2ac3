//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::services::DeliveryPolicy;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the static catalog, and the delivery policy.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    delivery: DeliveryPolicy,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                delivery: DeliveryPolicy::default(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the delivery fee policy.
    #[must_use]
    pub fn delivery(&self) -> &DeliveryPolicy {
        &self.inner.delivery
    }
}
