//! Session-related types.
//!
//! The session is the only persistence the storefront has; everything in it
//! is scoped to one browsing session.

/// Session keys for cart data.
pub mod keys {
    /// Key for the serialized cart (a JSON array of line items).
    pub const CART: &str = "cart";
}
