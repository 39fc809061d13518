use axum::{extract::State, response::Redirect};

use crate::server::state::AppState;

/// Sends browsers that open the bare domain to the homepage.
pub async fn home(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&state.config.homepage_url)
}
