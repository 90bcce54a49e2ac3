//! The static product catalog.
//!
//! The catalog is the storefront's one external data input: a fixed, ordered
//! table of products embedded at compile time from `content/catalog.json`.
//! It is loaded once at startup, validated, and never mutated afterwards.

use thiserror::Error;

use equippro_core::{Category, Price, Product, ProductId};

/// Errors produced while loading the catalog table.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The JSON document is malformed.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share the same id.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    /// A product carries a negative unit price.
    #[error("negative price for product {0}")]
    NegativePrice(ProductId),
}

/// An immutable, ordered list of products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Parse and validate a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on malformed JSON, duplicate product ids, or
    /// negative unit prices.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;

        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price < Price::ZERO {
                return Err(CatalogError::NegativePrice(product.id));
            }
        }

        Ok(Self { products })
    }

    /// The catalog shipped with the storefront.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the embedded table fails validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(include_str!("../content/catalog.json"))
    }

    /// All products in display order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in a single category, preserving display order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().expect("builtin catalog is valid");
        assert_eq!(catalog.all().len(), 8);
    }

    #[test]
    fn test_builtin_catalog_ids_are_unique() {
        let catalog = Catalog::builtin().expect("builtin catalog is valid");
        let mut ids: Vec<i32> = catalog.all().iter().map(|p| p.id.as_i32()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.all().len());
    }

    #[test]
    fn test_builtin_catalog_covers_every_category() {
        let catalog = Catalog::builtin().expect("builtin catalog is valid");
        for category in Category::ALL {
            assert!(
                catalog.in_category(category).next().is_some(),
                "no products in {category}"
            );
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin().expect("builtin catalog is valid");
        let board = catalog.get(ProductId::new(1)).expect("product 1 exists");
        assert_eq!(board.category, Category::Equipment);
        assert_eq!(board.price, Price::from_rubles(145_000));

        assert!(catalog.get(ProductId::new(999)).is_none());
    }

    #[test]
    fn test_in_category_preserves_order() {
        let catalog = Catalog::builtin().expect("builtin catalog is valid");
        let furniture: Vec<i32> = catalog
            .in_category(Category::Furniture)
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(furniture, vec![2, 5, 8]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            {"id": 1, "name": "a", "category": "Мебель", "price": "10",
             "image": "/static/a.svg", "description": "a"},
            {"id": 1, "name": "b", "category": "Стенды", "price": "20",
             "image": "/static/b.svg", "description": "b"}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId(id)) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"[
            {"id": 3, "name": "a", "category": "Техника", "price": "-5",
             "image": "/static/a.svg", "description": "a"}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::NegativePrice(id)) if id == ProductId::new(3)
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
