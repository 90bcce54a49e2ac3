//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `cart` - Session-scoped cart state (lines, quantities, destination city)
//! - `delivery` - Delivery fee policy (free-shipping threshold, per-city rules)
//! - `order` - Order intent validation and state reset
//!
//! Services hold no I/O and no rendering: they consume catalog data and
//! produce raw amounts and outcomes. Toasts and templates live in the routes.

pub mod cart;
pub mod delivery;
pub mod order;

pub use cart::{Cart, CartLine, SetQuantityOutcome};
pub use delivery::DeliveryPolicy;
pub use order::{OrderError, OrderSummary};
