//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::menu::MenuItem;
use crate::state::AppState;

/// Home page template with the menu grid.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub items: Vec<MenuItem>,
}

/// Display the menu / home page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        items: state.menu().to_vec(),
    }
}
