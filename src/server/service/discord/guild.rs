use reqwest::Method;
use serenity::all::GuildId;

use crate::server::{
    model::discord::Guild, service::discord::DiscordRestService, util::http::send_json,
};

impl DiscordRestService<'_> {
    pub async fn get_guild(&self, guild_id: GuildId) -> Option<Guild> {
        send_json(self.request(Method::GET, &format!("/guilds/{}", guild_id))).await
    }
}
