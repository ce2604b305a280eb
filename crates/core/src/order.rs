//! Plain-text order rendering.
//!
//! The cart is handed off to WhatsApp as a formatted text message. Rendering
//! is deterministic for a given cart and leaves the cart untouched; the
//! storefront percent-encodes the result into the `wa.me` deep link.

use std::fmt::Write;

use crate::cart::Cart;

const HEADER: &str = "🥗 *GreenBowl Order*";
const SEPARATOR: &str = "—————————————";
const CLOSING_NOTE: &str = "📍 Please confirm availability and delivery time. Thank you!";

/// Render the cart as the outbound order message.
///
/// Header, one numbered entry per line item in cart order, a separator,
/// the total, and a closing note. WhatsApp `*bold*` markup is used for
/// item names and the total.
#[must_use]
pub fn order_text(cart: &Cart) -> String {
    let mut msg = String::new();
    let _ = writeln!(msg, "{HEADER}");
    let _ = writeln!(msg, "{SEPARATOR}");
    for (i, item) in cart.items().iter().enumerate() {
        let _ = writeln!(msg, "{}. *{}*", i + 1, item.name);
        let _ = writeln!(
            msg,
            "   Qty: {} × ₹{} = ₹{}",
            item.qty,
            item.price,
            item.line_total()
        );
    }
    let _ = writeln!(msg, "{SEPARATOR}");
    let _ = writeln!(msg, "🧾 *Total: ₹{}*", cart.total());
    let _ = writeln!(msg, "{SEPARATOR}");
    msg.push_str(CLOSING_NOTE);
    msg
}
