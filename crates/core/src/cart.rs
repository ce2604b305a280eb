//! Cart state and mutation operations.
//!
//! A [`Cart`] is an ordered, deduplicated collection of [`LineItem`]s. Items
//! are identified by `name` (the menu has no separate SKU concept), insertion
//! order is preserved, and quantities are always kept within `[1, 20]`.
//!
//! The serialized form is a bare JSON array of line item records
//! (`name`, `price`, `qty`, `emoji`), which is what the storefront stores
//! under its session key. Anything that fails to parse as that array is
//! treated as an empty cart - there is no schema versioning or migration.

use serde::{Deserialize, Serialize};

/// Smallest quantity a line item can hold.
pub const MIN_QTY: u32 = 1;

/// Largest quantity a line item can hold.
pub const MAX_QTY: u32 = 20;

/// Glyph used when an item is added without one.
pub const DEFAULT_EMOJI: &str = "🥗";

/// One distinct purchasable item currently in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name; unique within the cart.
    pub name: String,
    /// Unit price in whole rupees.
    pub price: u32,
    /// Quantity, always in `[MIN_QTY, MAX_QTY]`.
    pub qty: u32,
    /// Display glyph shown next to the item.
    pub emoji: String,
}

impl LineItem {
    /// Price of this line (unit price times quantity).
    ///
    /// Saturates at `u32::MAX`: the add endpoint accepts any parseable
    /// price, so the product must not wrap.
    #[must_use]
    pub const fn line_total(&self) -> u32 {
        self.price.saturating_mul(self.qty)
    }
}

/// Ordered, deduplicated collection of line items for one browsing session.
///
/// Serializes transparently as a JSON array of [`LineItem`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items (not total quantity).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all line items. Zero for an empty cart.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items
            .iter()
            .map(|item| item.qty)
            .fold(0, u32::saturating_add)
    }

    /// Sum of `price * qty` across all line items. Zero for an empty cart.
    ///
    /// Saturates at `u32::MAX` rather than wrapping on extreme prices.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(0, u32::saturating_add)
    }

    /// Add an item, merging with an existing line of the same name.
    ///
    /// A zero quantity is treated as 1 so a malformed add never fails.
    /// Merging sums quantities and clamps at [`MAX_QTY`]; the existing
    /// line's price and emoji are kept as-is (first write wins). A new
    /// line gets [`DEFAULT_EMOJI`] when `emoji` is empty.
    pub fn add(&mut self, name: &str, price: u32, qty: u32, emoji: &str) {
        let qty = qty.clamp(MIN_QTY, MAX_QTY);

        if let Some(existing) = self.items.iter_mut().find(|item| item.name == name) {
            existing.qty = (existing.qty + qty).min(MAX_QTY);
            return;
        }

        self.items.push(LineItem {
            name: name.to_owned(),
            price,
            qty,
            emoji: if emoji.is_empty() {
                DEFAULT_EMOJI.to_owned()
            } else {
                emoji.to_owned()
            },
        });
    }

    /// Adjust a line's quantity by `delta`, clamped to `[MIN_QTY, MAX_QTY]`.
    ///
    /// The quantity never reaches zero here; taking a line out of the cart
    /// is only possible through [`Cart::remove`]. Unknown names are a no-op.
    pub fn update_qty(&mut self, name: &str, delta: i32) {
        let Some(item) = self.items.iter_mut().find(|item| item.name == name) else {
            return;
        };

        let qty = i64::from(item.qty) + i64::from(delta);
        let qty = qty.clamp(i64::from(MIN_QTY), i64::from(MAX_QTY));
        item.qty = u32::try_from(qty).unwrap_or(MIN_QTY);
    }

    /// Remove the line matching `name`, if present.
    pub fn remove(&mut self, name: &str) {
        self.items.retain(|item| item.name != name);
    }

    /// Empty the cart after a positive answer from `confirm`.
    ///
    /// The confirmation capability is injected so the core does not depend
    /// on any particular UI prompt. It is not consulted at all when the
    /// cart is already empty. Returns whether the cart was emptied.
    pub fn clear(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        if self.items.is_empty() {
            return false;
        }
        if !confirm() {
            return false;
        }
        self.items.clear();
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn two_item_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add("Detox Salad", 100, 1, "🥬");
        cart.add("Paneer Bowl", 200, 3, "🍛");
        cart
    }

    #[test]
    fn empty_cart_has_zero_totals() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let cart = two_item_cart();
        let names: Vec<_> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Detox Salad", "Paneer Bowl"]);
    }

    #[test]
    fn add_same_name_merges_into_one_line() {
        let mut cart = Cart::new();
        cart.add("Buddha Bowl", 250, 2, "🥗");
        cart.add("Buddha Bowl", 250, 3, "🥗");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].qty, 5);
    }

    #[test]
    fn merge_clamps_quantity_at_twenty() {
        // Buddha Bowl scenario: 2 + 19 clamps to 20, total 20 * 250.
        let mut cart = Cart::new();
        cart.add("Buddha Bowl", 250, 2, "🥗");
        cart.add("Buddha Bowl", 250, 19, "🥗");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].qty, 20);
        assert_eq!(cart.total(), 5000);
    }

    #[test]
    fn merge_keeps_first_price_and_emoji() {
        let mut cart = Cart::new();
        cart.add("Buddha Bowl", 250, 1, "🥗");
        cart.add("Buddha Bowl", 999, 1, "🔥");
        let item = &cart.items()[0];
        assert_eq!(item.price, 250);
        assert_eq!(item.emoji, "🥗");
    }

    #[test]
    fn add_zero_quantity_defaults_to_one() {
        let mut cart = Cart::new();
        cart.add("Detox Salad", 100, 0, "🥬");
        assert_eq!(cart.items()[0].qty, 1);
    }

    #[test]
    fn add_oversized_quantity_clamps() {
        let mut cart = Cart::new();
        cart.add("Detox Salad", 100, 50, "🥬");
        assert_eq!(cart.items()[0].qty, 20);
    }

    #[test]
    fn add_empty_emoji_gets_default() {
        let mut cart = Cart::new();
        cart.add("Detox Salad", 100, 1, "");
        assert_eq!(cart.items()[0].emoji, DEFAULT_EMOJI);
    }

    #[test]
    fn extreme_price_saturates_instead_of_wrapping() {
        let mut cart = Cart::new();
        cart.add("Gold Bowl", u32::MAX, 2, "🥇");
        assert_eq!(cart.items()[0].line_total(), u32::MAX);
        assert_eq!(cart.total(), u32::MAX);
    }

    #[test]
    fn total_saturates_across_lines() {
        let mut cart = Cart::new();
        cart.add("Gold Bowl", u32::MAX, 1, "🥇");
        cart.add("Platinum Bowl", u32::MAX, 1, "💎");
        assert_eq!(cart.total(), u32::MAX);
    }

    #[test]
    fn counts_and_totals_follow_contents() {
        let cart = two_item_cart();
        assert_eq!(cart.count(), 4);
        assert_eq!(cart.total(), 700);
    }

    #[test]
    fn update_qty_stays_within_bounds() {
        let mut cart = Cart::new();
        cart.add("Detox Salad", 100, 1, "🥬");
        cart.update_qty("Detox Salad", -5);
        assert_eq!(cart.items()[0].qty, 1);
        cart.update_qty("Detox Salad", 100);
        assert_eq!(cart.items()[0].qty, 20);
    }

    #[test]
    fn update_qty_never_removes_a_line() {
        let mut cart = Cart::new();
        cart.add("Detox Salad", 100, 1, "🥬");
        cart.update_qty("Detox Salad", -1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].qty, 1);
    }

    #[test]
    fn update_qty_unknown_name_is_noop() {
        let mut cart = two_item_cart();
        cart.update_qty("Nope", 3);
        assert_eq!(cart, two_item_cart());
    }

    #[test]
    fn remove_deletes_matching_line_only() {
        let mut cart = two_item_cart();
        cart.remove("Detox Salad");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].name, "Paneer Bowl");
    }

    #[test]
    fn remove_unknown_name_is_noop() {
        let mut cart = two_item_cart();
        cart.remove("Nope");
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn remove_then_add_starts_fresh() {
        let mut cart = Cart::new();
        cart.add("Buddha Bowl", 250, 5, "🥗");
        cart.remove("Buddha Bowl");
        cart.add("Buddha Bowl", 300, 1, "🍲");
        let item = &cart.items()[0];
        assert_eq!(item.price, 300);
        assert_eq!(item.qty, 1);
        assert_eq!(item.emoji, "🍲");
    }

    #[test]
    fn clear_empty_cart_skips_confirmation() {
        let mut cart = Cart::new();
        let cleared = cart.clear(|| panic!("confirmation must not run on an empty cart"));
        assert!(!cleared);
    }

    #[test]
    fn clear_declined_keeps_items() {
        let mut cart = two_item_cart();
        assert!(!cart.clear(|| false));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn clear_confirmed_empties_cart() {
        let mut cart = two_item_cart();
        assert!(cart.clear(|| true));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn serializes_as_plain_json_array() {
        let mut cart = Cart::new();
        cart.add("Buddha Bowl", 250, 2, "🥗");
        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"Buddha Bowl","price":250,"qty":2,"emoji":"🥗"}]"#
        );
    }

    #[test]
    fn round_trips_through_json() {
        let cart = two_item_cart();
        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn corrupt_json_is_not_a_cart() {
        // The storefront treats any parse failure as an empty cart.
        assert!(serde_json::from_str::<Cart>("{not json").is_err());
        assert!(serde_json::from_str::<Cart>(r#"{"name":"x"}"#).is_err());
        let empty: Cart = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());
    }
}
