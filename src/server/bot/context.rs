use serenity::all::{
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
    Permissions,
};

use crate::server::{
    error::command::CommandError,
    model::{discord::Message, interaction::Interaction},
    service::discord::{DiscordRestService, ORIGINAL_RESPONSE},
    state::AppState,
};

/// Per-interaction handle given to a running command.
///
/// Holds at most one response; it is sent as the HTTP response body once the
/// command returns.
pub struct CommandContext<'a> {
    pub interaction: &'a Interaction,
    pub state: &'a AppState,
    response: Option<CreateInteractionResponse>,
}

impl<'a> CommandContext<'a> {
    pub fn new(interaction: &'a Interaction, state: &'a AppState) -> Self {
        Self {
            interaction,
            state,
            response: None,
        }
    }

    pub fn member_permissions(&self) -> Option<Permissions> {
        self.interaction.member_permissions()
    }

    pub fn has_responded(&self) -> bool {
        self.response.is_some()
    }

    /// Responds with a message.
    ///
    /// # Returns
    /// - `Ok(())` - Message recorded as the response
    /// - `Err(CommandError::AlreadyResponded)` - A response was already recorded
    pub fn reply(&mut self, message: CreateInteractionResponseMessage) -> Result<(), CommandError> {
        self.respond(CreateInteractionResponse::Message(message))
    }

    /// Responds with a loading state to be replaced through [`Self::edit`].
    pub fn defer(&mut self, ephemeral: bool) -> Result<(), CommandError> {
        self.respond(CreateInteractionResponse::Defer(
            CreateInteractionResponseMessage::new().ephemeral(ephemeral),
        ))
    }

    fn respond(&mut self, response: CreateInteractionResponse) -> Result<(), CommandError> {
        if self.response.is_some() {
            return Err(CommandError::AlreadyResponded);
        }
        self.response = Some(response);

        Ok(())
    }

    /// Edits the original response through the interaction webhook.
    ///
    /// The original response only exists once the HTTP response has been
    /// delivered, so this is for work spawned after replying or deferring.
    pub async fn edit(&self, edit: &EditInteractionResponse) -> Option<Message> {
        self.rest()
            .edit_interaction_response(&self.interaction.token, ORIGINAL_RESPONSE, edit)
            .await
    }

    /// REST client authenticated as the bot.
    pub fn rest(&self) -> DiscordRestService<'a> {
        DiscordRestService::new(&self.state.http_client, &self.state.config)
    }

    pub fn into_response(self) -> Option<CreateInteractionResponse> {
        self.response
    }
}
