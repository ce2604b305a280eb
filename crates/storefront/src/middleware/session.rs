//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. The cart only needs to
//! survive navigation within one browsing session, so the store is not
//! durable and the cookie expires with the session (the sessionStorage
//! model: nothing outlives a server restart or a closed browser).
//!
//! `Expiry::OnSessionEnd` only expires the cookie; `MemoryStore` does no
//! reaping of its own, so abandoned entries live until the process
//! restarts. Acceptable for a single small instance; a durable or swept
//! store would be the first change for anything bigger.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "gb_session";

/// Create the session layer with an in-memory store.
///
/// # Arguments
///
/// * `config` - Storefront configuration (for the secure-cookie decision)
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    // Determine if we're in production (HTTPS)
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnSessionEnd)
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
