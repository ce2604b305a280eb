//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Home page (menu grid)
//! GET  /health          - Health check
//!
//! # Cart (HTMX fragments)
//! GET  /cart            - Cart drawer (fragment)
//! POST /cart/add        - Add to cart (returns "Added!" label, triggers cart-updated)
//! POST /cart/update     - Adjust quantity (returns drawer fragment)
//! POST /cart/remove     - Remove item (returns drawer fragment)
//! POST /cart/clear      - Empty cart after confirmation (returns drawer fragment)
//! GET  /cart/count      - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /cart/checkout   - Redirect to the WhatsApp order link
//! ```

pub mod cart;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
        .route("/checkout", get(cart::checkout))
}

/// Create the complete storefront router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .nest("/cart", cart_routes())
}
