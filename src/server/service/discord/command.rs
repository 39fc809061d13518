use reqwest::Method;
use serenity::all::CreateCommand;

use crate::server::{
    model::discord::ApplicationCommand, service::discord::DiscordRestService,
    util::http::send_json,
};

impl DiscordRestService<'_> {
    /// Replaces the application's global commands with `commands`.
    ///
    /// Commands missing from the list are deleted by Discord.
    pub async fn bulk_overwrite_global_commands(
        &self,
        commands: &[CreateCommand],
    ) -> Option<Vec<ApplicationCommand>> {
        send_json(
            self.request(
                Method::PUT,
                &format!("/applications/{}/commands", self.application_id),
            )
            .json(commands),
        )
        .await
    }
}
