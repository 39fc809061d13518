use std::sync::Arc;

use axum::Router;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};

use crate::server::{config::RateLimitConfig, error::config::ConfigError, state::AppState};

/// Applies a per-client-IP token bucket to every route of `router`.
///
/// The bucket holds `max_requests` tokens and regains one every
/// `window / max_requests`. Clients are keyed by `X-Forwarded-For`,
/// `X-Real-IP` or `Forwarded` before falling back to the peer address, so the
/// server must sit behind a proxy that sets those headers. Rejected requests
/// get 429 Too Many Requests from the limiter itself.
pub fn with_rate_limit(
    router: Router<AppState>,
    config: &RateLimitConfig,
) -> Result<Router<AppState>, ConfigError> {
    let interval_ms = u64::try_from(config.replenish_interval().as_millis())
        .map_err(|_| ConfigError::InvalidRateLimit)?;

    let governor = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_millisecond(interval_ms)
        .burst_size(config.max_requests)
        .finish()
        .ok_or(ConfigError::InvalidRateLimit)?;

    Ok(router.layer(GovernorLayer::new(Arc::new(governor))))
}
