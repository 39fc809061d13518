use std::time::Duration;

use ed25519_dalek::{VerifyingKey, PUBLIC_KEY_LENGTH};
use serenity::all::ApplicationId;
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DISCORD_API_URL: &str = "https://discord.com";
const DEFAULT_TOPGG_API_URL: &str = "https://top.gg";
const DEFAULT_HOMEPAGE_URL: &str = "https://quickvids.win";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_RATE_LIMIT_MAX: u32 = 5;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 5;

pub struct Config {
    pub database_url: String,
    pub port: u16,

    pub discord_token: String,
    pub application_id: ApplicationId,
    /// Key Discord signs interaction requests with.
    pub discord_public_key: VerifyingKey,
    /// Discord API origin without the `/api/v10` suffix or a trailing slash.
    pub discord_api_url: String,

    /// Target of the `GET /` redirect.
    pub homepage_url: String,

    pub topgg_token: Option<String>,
    pub topgg_api_url: String,

    /// Overwrite the global command list on startup.
    pub register_commands: bool,
    pub rate_limit: RateLimitConfig,
}

/// Per-client request allowance on the interactions route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window: Duration,
}

impl RateLimitConfig {
    /// Time for a single request slot to replenish, at least one millisecond.
    pub fn replenish_interval(&self) -> Duration {
        let per_request = self.window / self.max_requests.max(1);
        per_request.max(Duration::from_millis(1))
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX,
            window: Duration::from_secs(DEFAULT_RATE_LIMIT_WINDOW_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let application_id = parse_application_id(&required("APPLICATION_ID")?)?;
        let discord_public_key = parse_public_key(&required("DISCORD_PUBLIC_KEY")?)?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port: parse_or("PORT", var("PORT"), DEFAULT_PORT)?,
            discord_token: required("DISCORD_TOKEN")?,
            application_id,
            discord_public_key,
            discord_api_url: parse_url(
                "DISCORD_API_URL",
                var("DISCORD_API_URL").as_deref().unwrap_or(DEFAULT_DISCORD_API_URL),
            )?,
            homepage_url: parse_url(
                "HOMEPAGE_URL",
                var("HOMEPAGE_URL").as_deref().unwrap_or(DEFAULT_HOMEPAGE_URL),
            )?,
            topgg_token: var("TOPGG_TOKEN"),
            topgg_api_url: parse_url(
                "TOPGG_API_URL",
                var("TOPGG_API_URL").as_deref().unwrap_or(DEFAULT_TOPGG_API_URL),
            )?,
            register_commands: parse_or("REGISTER_COMMANDS", var("REGISTER_COMMANDS"), false)?,
            rate_limit: parse_rate_limit(var("RATE_LIMIT_MAX"), var("RATE_LIMIT_WINDOW_SECS"))?,
        })
    }
}

/// Decodes the hex encoded Ed25519 public key from the developer portal.
pub fn parse_public_key(value: &str) -> Result<VerifyingKey, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "DISCORD_PUBLIC_KEY".to_string(),
        reason: reason.to_string(),
    };

    let bytes = hex::decode(value.trim()).map_err(|_| invalid("not valid hex"))?;
    let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| invalid("expected 32 bytes"))?;

    VerifyingKey::from_bytes(&bytes).map_err(|_| invalid("not an Ed25519 public key"))
}

fn parse_application_id(value: &str) -> Result<ApplicationId, ConfigError> {
    value
        .trim()
        .parse::<std::num::NonZeroU64>()
        .map(|id| ApplicationId::new(id.get()))
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "APPLICATION_ID".to_string(),
            reason: "expected a non-zero snowflake".to_string(),
        })
}

/// Validates an absolute URL and strips any trailing slash.
fn parse_url(name: &str, value: &str) -> Result<String, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    Ok(value.trim_end_matches('/').to_string())
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_rate_limit(
    max: Option<String>,
    window_secs: Option<String>,
) -> Result<RateLimitConfig, ConfigError> {
    let max_requests = parse_or("RATE_LIMIT_MAX", max, DEFAULT_RATE_LIMIT_MAX)?;
    let window_secs = parse_or(
        "RATE_LIMIT_WINDOW_SECS",
        window_secs,
        DEFAULT_RATE_LIMIT_WINDOW_SECS,
    )?;

    if max_requests == 0 || window_secs == 0 {
        return Err(ConfigError::InvalidRateLimit);
    }

    Ok(RateLimitConfig {
        max_requests,
        window: Duration::from_secs(window_secs),
    })
}
