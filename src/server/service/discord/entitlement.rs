use reqwest::Method;
use serenity::all::GuildId;

use crate::server::{
    model::discord::Entitlement, service::discord::DiscordRestService, util::http::send_json,
};

impl DiscordRestService<'_> {
    /// Lists the application's entitlements, optionally for one guild.
    ///
    /// With `exclude_ended` Discord omits entitlements past their end date.
    pub async fn get_entitlements(
        &self,
        guild_id: Option<GuildId>,
        exclude_ended: bool,
    ) -> Option<Vec<Entitlement>> {
        let mut query = vec![("exclude_ended", exclude_ended.to_string())];
        if let Some(guild_id) = guild_id {
            query.push(("guild_id", guild_id.to_string()));
        }

        send_json(
            self.request(
                Method::GET,
                &format!("/applications/{}/entitlements", self.application_id),
            )
            .query(&query),
        )
        .await
    }
}
