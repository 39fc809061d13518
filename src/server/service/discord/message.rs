use reqwest::Method;
use serde::Serialize;
use serenity::all::{ChannelId, MessageId};

use crate::server::{
    model::discord::Message, service::discord::DiscordRestService, util::http::send_json,
};

impl DiscordRestService<'_> {
    /// Posts a message to a channel.
    ///
    /// `body` is any message payload, typically a Serenity `CreateMessage`.
    pub async fn send_message<B>(&self, channel_id: ChannelId, body: &B) -> Option<Message>
    where
        B: Serialize + ?Sized,
    {
        send_json(
            self.request(Method::POST, &format!("/channels/{}/messages", channel_id))
                .json(body),
        )
        .await
    }

    pub async fn edit_message<B>(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        body: &B,
    ) -> Option<Message>
    where
        B: Serialize + ?Sized,
    {
        send_json(
            self.request(
                Method::PATCH,
                &format!("/channels/{}/messages/{}", channel_id, message_id),
            )
            .json(body),
        )
        .await
    }

    /// Edits a message sent through an interaction webhook.
    ///
    /// Pass [`ORIGINAL_RESPONSE`](super::ORIGINAL_RESPONSE) as `message_id` to
    /// edit the initial response. The interaction token authenticates the
    /// call, so no bot credential is sent.
    pub async fn edit_interaction_response<B>(
        &self,
        interaction_token: &str,
        message_id: &str,
        body: &B,
    ) -> Option<Message>
    where
        B: Serialize + ?Sized,
    {
        send_json(
            self.webhook_request(
                Method::PATCH,
                &format!(
                    "/webhooks/{}/{}/messages/{}",
                    self.application_id, interaction_token, message_id
                ),
            )
            .json(body),
        )
        .await
    }
}
