//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the session: every mutating handler loads it,
//! applies exactly one core operation, writes it back, and responds with a
//! re-rendered fragment plus an `HX-Trigger` so the other read-outs
//! (badge, drawer) refresh themselves.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use greenbowl_core::{Cart, order_text};

use crate::filters;
use crate::models::session_keys;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub name: String,
    pub emoji: String,
    pub price: u32,
    pub qty: u32,
    pub line_total: u32,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub subtotal: u32,
    pub is_empty: bool,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart
                .items()
                .iter()
                .map(|item| CartLineView {
                    name: item.name.clone(),
                    emoji: item.emoji.clone(),
                    price: item.price,
                    qty: item.qty,
                    line_total: item.line_total(),
                })
                .collect(),
            item_count: cart.count(),
            subtotal: cart.total(),
            is_empty: cart.is_empty(),
        }
    }
}

/// Badge text: the total quantity, capped for display.
fn badge_label(count: u32) -> String {
    if count > 99 {
        "99+".to_string()
    } else {
        count.to_string()
    }
}

/// Parse a numeric form field leniently.
///
/// Missing or malformed input degrades to `default` so a mutation is
/// never rejected over a bad number.
fn parse_or(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session.
///
/// An absent or unparseable stored cart is an empty cart.
async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Write the cart back to the session.
///
/// A failed write is logged and otherwise ignored; the in-memory cart for
/// this request is still rendered and the next mutation writes again.
async fn save_cart(session: &Session, cart: &Cart) {
    if let Err(e) = session.insert(session_keys::CART, cart).await {
        tracing::error!("Failed to persist cart to session: {e}");
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
///
/// Numeric fields arrive as strings and are parsed leniently: a malformed
/// quantity degrades to 1 and a malformed price to 0.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub name: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub qty: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub name: String,
    pub delta: i32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub name: String,
}

/// Clear cart form data.
#[derive(Debug, Deserialize)]
pub struct ClearCartForm {
    /// Set by the client once the user has answered the confirm prompt.
    #[serde(default)]
    pub confirmed: bool,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart drawer fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_badge.html")]
pub struct CartBadgeTemplate {
    pub label: String,
    pub has_items: bool,
}

/// Transient "Added!" label swapped into the add button (for HTMX).
///
/// The client restores the original label after a short delay; re-adding
/// before the timer fires just overwrites the label again.
#[derive(Template, WebTemplate)]
#[template(path = "partials/added_feedback.html")]
pub struct AddedFeedbackTemplate;

/// Re-rendered drawer plus the badge refresh trigger.
fn drawer_response(cart: &Cart) -> Response {
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartDrawerTemplate {
            cart: CartView::from(cart),
        },
    )
        .into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Cart drawer fragment (HTMX).
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    CartDrawerTemplate {
        cart: CartView::from(&cart),
    }
}

/// Cart count badge fragment (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    let count = cart.count();
    CartBadgeTemplate {
        label: badge_label(count),
        has_items: count > 0,
    }
}

/// Add item to cart (HTMX).
///
/// Merges with an existing line of the same name (quantity clamped by the
/// core). Responds with the transient button label and triggers a badge
/// refresh and a drawer open.
#[instrument(skip(session))]
pub async fn add(session: Session, Form(form): Form<AddToCartForm>) -> Response {
    let price = parse_or(form.price.as_deref(), 0);
    let qty = parse_or(form.qty.as_deref(), 1);
    let emoji = form.emoji.unwrap_or_default();

    let mut cart = load_cart(&session).await;
    cart.add(&form.name, price, qty, &emoji);
    save_cart(&session, &cart).await;

    (
        AppendHeaders([("HX-Trigger", "cart-updated, cart-open")]),
        AddedFeedbackTemplate,
    )
        .into_response()
}

/// Adjust a line quantity (HTMX). Returns the re-rendered drawer.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Response {
    let mut cart = load_cart(&session).await;
    cart.update_qty(&form.name, form.delta);
    save_cart(&session, &cart).await;
    drawer_response(&cart)
}

/// Remove a line from the cart (HTMX). Returns the re-rendered drawer.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Response {
    let mut cart = load_cart(&session).await;
    cart.remove(&form.name);
    save_cart(&session, &cart).await;
    drawer_response(&cart)
}

/// Empty the cart (HTMX). Returns the re-rendered drawer.
///
/// The browser shows the confirm prompt (`hx-confirm`) and posts
/// `confirmed=true` on a positive answer; that answer is what the core
/// clear operation consumes as its confirmation capability. An empty cart
/// never consults it.
#[instrument(skip(session))]
pub async fn clear(session: Session, Form(form): Form<ClearCartForm>) -> Response {
    let mut cart = load_cart(&session).await;
    cart.clear(|| form.confirmed);
    save_cart(&session, &cart).await;
    drawer_response(&cart)
}

/// Hand the order off to WhatsApp.
///
/// Builds the percent-encoded order text into a `wa.me` link and
/// redirects; the cart is left untouched (a read-only export). An empty
/// cart redirects home instead - the drawer disables this control, so
/// that path is only reachable by navigating directly.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Response {
    let cart = load_cart(&session).await;
    if cart.is_empty() {
        return Redirect::to("/").into_response();
    }

    let text = order_text(&cart);
    let url = format!(
        "https://wa.me/{}?text={}",
        state.config().whatsapp_number,
        urlencoding::encode(&text)
    );
    Redirect::to(&url).into_response()
}
