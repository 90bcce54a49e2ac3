//! The session-scoped shopping cart.
//!
//! A cart is owned by exactly one browsing session and serialized into the
//! session store between requests. It holds an ordered list of lines plus the
//! free-form destination city used for the delivery fee quote.

use serde::{Deserialize, Serialize};

use equippro_core::{Category, Price, Product, ProductId};

/// One product's attributes captured at add-time, plus a mutable quantity.
///
/// The fields are copied from the catalog product at the moment of the first
/// add, so later catalog changes never retroactively affect existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    pub image: String,
    pub description: String,
    /// Always positive; a line that would drop to zero is removed instead.
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            category: product.category,
            price: product.price,
            image: product.image.clone(),
            description: product.description.clone(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Outcome of a [`Cart::set_quantity`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetQuantityOutcome {
    /// The quantity was set to the given positive value.
    Updated,
    /// The requested quantity was ≤ 0; any matching line was removed.
    Removed,
    /// A positive quantity for an absent product id; nothing changed.
    NotInCart,
}

/// The shopping cart: ordered lines plus a destination city.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    destination_city: String,
}

impl Cart {
    /// Add one unit of a product.
    ///
    /// If a line for the product already exists its quantity is incremented;
    /// otherwise a new line with quantity 1 is appended, snapshotting the
    /// product's attributes. Returns the line's new quantity. Quantities are
    /// unbounded: no inventory model exists.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity += 1;
            return line.quantity;
        }
        self.lines.push(CartLine::from_product(product));
        1
    }

    /// Remove the line for a product, if present.
    ///
    /// Removing an absent id is a no-op; returns whether a line was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id != id);
        self.lines.len() < before
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity ≤ 0 behaves exactly as [`Cart::remove`], whether or not a
    /// line for the id exists. A positive quantity for an absent id creates
    /// no line.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> SetQuantityOutcome {
        if quantity <= 0 {
            self.remove(id);
            return SetQuantityOutcome::Removed;
        }
        // Fits after the sign check; the UI sends small numbers anyway.
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.line_mut(id) {
            Some(line) => {
                line.quantity = quantity;
                SetQuantityOutcome::Updated
            }
            None => SetQuantityOutcome::NotInCart,
        }
    }

    /// Sum of price × quantity over all lines; zero for an empty cart.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (what the header badge shows).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// The free-form destination city text.
    #[must_use]
    pub fn destination_city(&self) -> &str {
        &self.destination_city
    }

    /// Set the destination city. Independent of cart contents.
    pub fn set_destination_city(&mut self, city: impl Into<String>) {
        self.destination_city = city.into();
    }

    /// Clear all lines and the destination city.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.destination_city.clear();
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32, rubles: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Товар {id}"),
            category: Category::Furniture,
            price: Price::from_rubles(rubles),
            image: "/static/images/placeholder.svg".to_string(),
            description: "Описание".to_string(),
        }
    }

    #[test]
    fn test_repeated_add_accumulates_one_line() {
        let mut cart = Cart::default();
        let desk = product(1, 8_500);
        for _ in 0..5 {
            cart.add(&desk);
        }
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_add_returns_new_quantity() {
        let mut cart = Cart::default();
        let desk = product(1, 8_500);
        assert_eq!(cart.add(&desk), 1);
        assert_eq!(cart.add(&desk), 2);
    }

    #[test]
    fn test_add_snapshots_product_attributes() {
        let mut cart = Cart::default();
        let mut board = product(1, 145_000);
        cart.add(&board);

        // Mutating the caller's product after the add must not leak in.
        board.name = "renamed".to_string();
        board.price = Price::from_rubles(1);

        assert_eq!(cart.lines()[0].name, "Товар 1");
        assert_eq!(cart.lines()[0].price, Price::from_rubles(145_000));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::default();
        cart.add(&product(1, 100));
        assert!(!cart.remove(ProductId::new(2)));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_remove_present() {
        let mut cart = Cart::default();
        cart.add(&product(1, 100));
        assert!(cart.remove(ProductId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_nonpositive_equals_remove() {
        for quantity in [0_i64, -1, -100] {
            let mut cart = Cart::default();
            cart.add(&product(1, 100));
            assert_eq!(
                cart.set_quantity(ProductId::new(1), quantity),
                SetQuantityOutcome::Removed
            );
            assert!(cart.is_empty());
        }
    }

    #[test]
    fn test_set_quantity_updates_existing_line() {
        let mut cart = Cart::default();
        cart.add(&product(1, 100));
        assert_eq!(
            cart.set_quantity(ProductId::new(1), 7),
            SetQuantityOutcome::Updated
        );
        assert_eq!(cart.lines()[0].quantity, 7);
    }

    #[test]
    fn test_set_quantity_absent_creates_nothing() {
        let mut cart = Cart::default();
        assert_eq!(
            cart.set_quantity(ProductId::new(9), 3),
            SetQuantityOutcome::NotInCart
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_nonpositive_on_absent_id_reports_removed() {
        let mut cart = Cart::default();
        cart.add(&product(1, 100));
        assert_eq!(
            cart.set_quantity(ProductId::new(9), 0),
            SetQuantityOutcome::Removed
        );
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_subtotal_is_sum_of_line_totals() {
        let mut cart = Cart::default();
        let desk = product(1, 8_500);
        let chairs = product(2, 45_000);
        cart.add(&desk);
        cart.add(&desk);
        cart.add(&chairs);
        assert_eq!(cart.subtotal(), Price::from_rubles(2 * 8_500 + 45_000));
    }

    #[test]
    fn test_subtotal_invariant_under_insertion_order() {
        let a = product(1, 8_500);
        let b = product(2, 45_000);

        let mut first = Cart::default();
        first.add(&a);
        first.add(&b);

        let mut second = Cart::default();
        second.add(&b);
        second.add(&a);

        assert_eq!(first.subtotal(), second.subtotal());
    }

    #[test]
    fn test_empty_cart_subtotal_is_zero() {
        assert_eq!(Cart::default().subtotal(), Price::ZERO);
    }

    #[test]
    fn test_clear_resets_lines_and_destination() {
        let mut cart = Cart::default();
        cart.add(&product(1, 100));
        cart.set_destination_city("Москва");
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.destination_city(), "");
    }

    #[test]
    fn test_session_serde_roundtrip() {
        let mut cart = Cart::default();
        cart.add(&product(1, 8_500));
        cart.set_destination_city("Казань");

        let json = serde_json::to_string(&cart).expect("serialize");
        let back: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cart);
    }
}
