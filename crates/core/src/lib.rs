//! GreenBowl Core - Cart domain library.
//!
//! This crate owns the cart state: line items, quantity bounds, merging by
//! item name, derived totals, and the plain-text order rendering handed off
//! to WhatsApp. It contains no I/O, no HTTP, and no session handling - the
//! storefront binary owns those and persists a [`Cart`] per browsing session.
//!
//! # Modules
//!
//! - [`cart`] - [`Cart`] and [`LineItem`] with the four mutation operations
//! - [`order`] - deterministic order-text rendering of a cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod order;

pub use cart::{Cart, DEFAULT_EMOJI, LineItem, MAX_QTY, MIN_QTY};
pub use order::order_text;
