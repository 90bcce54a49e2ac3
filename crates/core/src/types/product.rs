//! The immutable catalog product record.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Price, ProductId};

/// A catalog product.
///
/// Products are defined once at process start from the static catalog table
/// and never mutated or deleted during a session. The cart copies the fields
/// it needs at add-time, so a `Product` is never referenced after the add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category the product is filed under.
    pub category: Category,
    /// Unit price in rubles.
    pub price: Price,
    /// Image reference (a path under `/static`).
    pub image: String,
    /// Short display description.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_from_catalog_json() {
        let json = r#"{
            "id": 2,
            "name": "Парты ученические регулируемые",
            "category": "Мебель",
            "price": "8500",
            "image": "/static/images/placeholder.svg",
            "description": "Эргономичные парты с регулировкой высоты"
        }"#;
        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.id, ProductId::new(2));
        assert_eq!(product.category, Category::Furniture);
        assert_eq!(product.price, Price::from_rubles(8_500));
    }
}
