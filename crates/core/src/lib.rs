//! EquipPro Core - Shared domain types.
//!
//! This crate provides the types shared between the storefront binary and the
//! integration tests:
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no session state.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, the product
//!   category set, and the immutable `Product` record.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
