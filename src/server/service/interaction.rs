//! Routing of verified interaction payloads.

use serenity::all::{
    CreateAutocompleteResponse, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::server::{
    bot::context::CommandContext,
    error::{command::CommandError, AppError},
    model::interaction::{CommandType, Interaction, InteractionEnvelope, InteractionType},
    service::permission,
    state::AppState,
};

pub const UNKNOWN_COMMAND: &str = "Unknown command.";
pub const UNSUPPORTED_COMMAND: &str = "This type of command is not supported.";
pub const COMMAND_FAILED: &str = "Something went wrong while running this command.";
pub const NO_RESPONSE: &str = "This command did not produce a response.";

pub struct InteractionService<'a> {
    state: &'a AppState,
}

impl<'a> InteractionService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Produces the single response for a verified request body.
    ///
    /// The body is decoded for its `type` first so pings are answered without
    /// looking at anything else.
    ///
    /// # Returns
    /// - `Ok(CreateInteractionResponse)` - Response to send with status 200
    /// - `Err(AppError::BadRequest)` - Body is not a decodable interaction
    pub async fn dispatch(&self, body: &[u8]) -> Result<CreateInteractionResponse, AppError> {
        let envelope: InteractionEnvelope = serde_json::from_slice(body)?;

        match envelope.kind {
            InteractionType::Ping => Ok(CreateInteractionResponse::Pong),
            InteractionType::ApplicationCommand => {
                let interaction: Interaction = serde_json::from_slice(body)?;
                self.run_command(&interaction).await
            }
            InteractionType::Autocomplete => Ok(CreateInteractionResponse::Autocomplete(
                CreateAutocompleteResponse::new(),
            )),
            InteractionType::MessageComponent | InteractionType::ModalSubmit => {
                Ok(CreateInteractionResponse::Acknowledge)
            }
            InteractionType::Unknown(kind) => {
                tracing::debug!("Acknowledging interaction of unknown type {}", kind);

                Ok(CreateInteractionResponse::Acknowledge)
            }
        }
    }

    async fn run_command(
        &self,
        interaction: &Interaction,
    ) -> Result<CreateInteractionResponse, AppError> {
        let data = interaction.data.as_ref().ok_or(CommandError::MissingData)?;

        if data.kind != CommandType::ChatInput {
            return Ok(notice(UNSUPPORTED_COMMAND));
        }

        let Some(command) = self.state.commands.get(&data.name) else {
            tracing::warn!("Received unknown command `{}`", data.name);

            return Ok(notice(UNKNOWN_COMMAND));
        };

        let mut ctx = CommandContext::new(interaction, self.state);

        if permission::check_permissions(command, &mut ctx)? {
            if let Err(e) = command.execute(&mut ctx).await {
                tracing::error!("Command `{}` failed: {}", command.name(), e);

                if !ctx.has_responded() {
                    ctx.reply(ephemeral(COMMAND_FAILED))?;
                }
            }
        }

        Ok(ctx.into_response().unwrap_or_else(|| {
            tracing::warn!("Command `{}` finished without responding", command.name());

            notice(NO_RESPONSE)
        }))
    }
}

fn ephemeral(content: &str) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true)
}

fn notice(content: &str) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(ephemeral(content))
}
