//! Shared setup for server tests.

use ed25519_dalek::VerifyingKey;
use serenity::all::ApplicationId;
use test_utils::{builder::TestBuilder, fixture::interaction as fixture, signing::TestSigner};

use crate::server::{
    bot::command::CommandRegistry,
    config::{Config, RateLimitConfig},
    state::AppState,
};

pub const DISCORD_TOKEN: &str = "test-token";
pub const HOMEPAGE_URL: &str = "https://quickvids.test";

/// Configuration pointing every upstream at `api_url`.
pub fn test_config(api_url: &str) -> Config {
    test_config_with_key(api_url, TestSigner::new().verifying_key())
}

pub fn test_config_with_key(api_url: &str, discord_public_key: VerifyingKey) -> Config {
    let application_id = fixture::APPLICATION_ID
        .parse::<u64>()
        .map(ApplicationId::new)
        .expect("fixture application id is a snowflake");

    Config {
        database_url: "sqlite::memory:".to_string(),
        port: 0,
        discord_token: DISCORD_TOKEN.to_string(),
        application_id,
        discord_public_key,
        discord_api_url: api_url.to_string(),
        homepage_url: HOMEPAGE_URL.to_string(),
        topgg_token: None,
        topgg_api_url: api_url.to_string(),
        register_commands: false,
        rate_limit: RateLimitConfig::default(),
    }
}

/// Application state over an in-memory database with the statistics tables.
pub async fn test_state(config: Config, commands: CommandRegistry) -> AppState {
    let db = TestBuilder::new()
        .with_stats_tables()
        .build()
        .await
        .expect("test database")
        .db
        .expect("database connection");

    AppState::new(db, reqwest::Client::new(), config, commands)
}
