//! Domain models for the storefront.

pub mod cart;

pub use cart::{Cart, CartLine};

/// Session key constants.
pub mod session_keys {
    /// Session key for the shopping cart.
    pub const CART: &str = "cart";
}
