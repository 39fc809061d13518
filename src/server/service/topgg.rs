use reqwest::header::AUTHORIZATION;
use serenity::all::ApplicationId;

use crate::server::{config::Config, model::stats::TopggStats, util::http::send_json};

/// Client for the top.gg bot listing API.
pub struct TopggService<'a> {
    http_client: &'a reqwest::Client,
    api_url: &'a str,
    token: Option<&'a str>,
    bot_id: ApplicationId,
}

impl<'a> TopggService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a Config) -> Self {
        Self {
            http_client,
            api_url: &config.topgg_api_url,
            token: config.topgg_token.as_deref(),
            bot_id: config.application_id,
        }
    }

    /// Fetches the bot's vote counters.
    ///
    /// # Returns
    /// - `Some(TopggStats)` - top.gg answered with the bot's listing
    /// - `None` - No token is configured or the request failed
    pub async fn get_votes(&self) -> Option<TopggStats> {
        let token = self.token?;

        send_json(
            self.http_client
                .get(format!("{}/api/bots/{}", self.api_url, self.bot_id))
                .header(AUTHORIZATION, token),
        )
        .await
    }
}
