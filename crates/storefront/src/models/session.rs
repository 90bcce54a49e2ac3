//! Session-related types.
//!
//! All session state is transient: the store is in-memory and the cart is
//! dropped with the session. Nothing here survives a process restart.

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the session's cart.
    pub const CART: &str = "cart";
}
