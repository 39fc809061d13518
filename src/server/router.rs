use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::server::{
    config::RateLimitConfig,
    controller::{home::home, interaction::handle_interaction},
    error::config::ConfigError,
    middleware::rate_limit::with_rate_limit,
    state::AppState,
};

/// Builds the HTTP surface.
///
/// Only `/interactions` is rate limited. Serve with
/// `into_make_service_with_connect_info::<SocketAddr>()` so the limiter can
/// fall back to the peer address when no forwarding header is present.
pub fn router(rate_limit: &RateLimitConfig) -> Result<Router<AppState>, ConfigError> {
    let interactions = with_rate_limit(
        Router::new().route("/interactions", post(handle_interaction)),
        rate_limit,
    )?;

    Ok(Router::new()
        .route("/", get(home))
        .merge(interactions)
        .layer(TraceLayer::new_for_http()))
}
