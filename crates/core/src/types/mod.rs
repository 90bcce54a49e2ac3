//! Core types for the EquipPro storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;
pub mod product;

pub use category::Category;
pub use id::*;
pub use price::Price;
pub use product::Product;
