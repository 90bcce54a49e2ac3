//! Order intent handling.
//!
//! There is no backend: a successful "submission" is a local state reset.
//! If a real order service is ever added, the network call belongs between
//! validation and the cart reset here, with the reset deferred until the call
//! confirms.

use thiserror::Error;

use equippro_core::Price;

use super::cart::Cart;
use super::delivery::DeliveryPolicy;

/// User-correctable validation failures; the only errors this flow produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The cart has no lines.
    #[error("Корзина пуста")]
    EmptyCart,

    /// No destination city was entered.
    #[error("Укажите город доставки")]
    MissingDestination,
}

/// What the order would have contained, captured before the reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Price,
    pub delivery_fee: Price,
    pub total: Price,
    pub destination_city: String,
    pub line_count: usize,
}

/// Validate and "submit" the order.
///
/// Checks run in a fixed order and the first failure is the one surfaced:
/// an empty cart, then a missing destination. On success the cart (lines and
/// destination) is cleared and a summary of the submitted order is returned.
///
/// # Errors
///
/// Returns [`OrderError`] when validation fails; the cart is left unchanged.
pub fn submit(cart: &mut Cart, policy: &DeliveryPolicy) -> Result<OrderSummary, OrderError> {
    if cart.is_empty() {
        return Err(OrderError::EmptyCart);
    }
    if cart.destination_city().is_empty() {
        return Err(OrderError::MissingDestination);
    }

    let subtotal = cart.subtotal();
    let delivery_fee = policy.fee(subtotal, cart.destination_city());
    let summary = OrderSummary {
        subtotal,
        delivery_fee,
        total: subtotal + delivery_fee,
        destination_city: cart.destination_city().to_string(),
        line_count: cart.line_count(),
    };

    cart.clear();
    Ok(summary)
}
