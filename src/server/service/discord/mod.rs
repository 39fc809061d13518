//! Discord REST API client.
//!
//! Each endpoint lives in its own file as an `impl DiscordRestService` block.
//! All calls share the same contract: `Some` with the decoded body on a 2xx
//! response, `None` (logged at warn) on anything else. Nothing is retried.

pub mod channel;
pub mod command;
pub mod entitlement;
pub mod guild;
pub mod message;

use reqwest::{header::AUTHORIZATION, Method, RequestBuilder};
use serenity::all::ApplicationId;

use crate::server::config::Config;

pub const API_VERSION: u8 = 10;

/// Message id addressing the initial response of an interaction.
pub const ORIGINAL_RESPONSE: &str = "@original";

pub struct DiscordRestService<'a> {
    http_client: &'a reqwest::Client,
    api_url: &'a str,
    token: &'a str,
    application_id: ApplicationId,
}

impl<'a> DiscordRestService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self {
            http_client,
            api_url: &config.discord_api_url,
            token: &config.discord_token,
            application_id: config.application_id,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v{}{}", self.api_url, API_VERSION, path)
    }

    /// Request carrying the bot credential.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, self.endpoint(path))
            .header(AUTHORIZATION, format!("Bot {}", self.token))
    }

    /// Request authenticated by an interaction token in the path instead.
    fn webhook_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client.request(method, self.endpoint(path))
    }
}
