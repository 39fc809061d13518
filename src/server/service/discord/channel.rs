use reqwest::Method;
use serde_json::json;
use serenity::all::{ChannelId, GuildId, UserId};

use crate::server::{
    model::discord::Channel, service::discord::DiscordRestService, util::http::send_json,
};

impl DiscordRestService<'_> {
    /// Opens (or returns the existing) DM channel with a user.
    pub async fn create_dm_channel(&self, user_id: UserId) -> Option<Channel> {
        send_json(
            self.request(Method::POST, "/users/@me/channels")
                .json(&json!({ "recipient_id": user_id })),
        )
        .await
    }

    pub async fn get_channel(&self, channel_id: ChannelId) -> Option<Channel> {
        send_json(self.request(Method::GET, &format!("/channels/{}", channel_id))).await
    }

    pub async fn get_guild_channels(&self, guild_id: GuildId) -> Option<Vec<Channel>> {
        send_json(self.request(Method::GET, &format!("/guilds/{}/channels", guild_id))).await
    }
}
