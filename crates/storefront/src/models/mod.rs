//! View-layer models for the storefront.

pub mod session;
pub mod toast;

pub use toast::{Toast, ToastLevel};
