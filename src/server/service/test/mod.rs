use crate::server::{
    bot::{
        command::{Command, CommandRegistry},
        commands,
        context::CommandContext,
    },
    error::{command::CommandError, AppError},
    model::{interaction::Interaction, stats::TopggStats},
    service::{
        interaction::{
            InteractionService, COMMAND_FAILED, NO_RESPONSE, UNKNOWN_COMMAND, UNSUPPORTED_COMMAND,
        },
        permission::{has_permission, missing_permissions, missing_permissions_message},
        stats::{start_of_day, StatsService},
        topgg::TopggService,
    },
    test::{test_config, test_state},
};
use axum::{
    extract::Path,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use chrono::{Duration, Timelike, Utc};
use serde_json::{json, Value};
use serenity::all::{CreateCommand, CreateInteractionResponseMessage, Permissions};
use serenity::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use test_utils::{factory, fixture::interaction as fixture, upstream::FakeDiscord};

mod interaction;

/// Command requiring kick and ban, counting its runs.
#[derive(Clone, Default)]
struct Moderate {
    runs: Arc<AtomicUsize>,
}

#[async_trait]
impl Command for Moderate {
    fn name(&self) -> &'static str {
        "moderate"
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description("Moderates")
    }

    fn required_permissions(&self) -> Permissions {
        Permissions::KICK_MEMBERS | Permissions::BAN_MEMBERS
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), AppError> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        ctx.reply(CreateInteractionResponseMessage::new().content("moderated"))?;

        Ok(())
    }
}

/// Command that never replies.
struct Silent;

#[async_trait]
impl Command for Silent {
    fn name(&self) -> &'static str {
        "silent"
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description("Says nothing")
    }

    async fn execute(&self, _ctx: &mut CommandContext<'_>) -> Result<(), AppError> {
        Ok(())
    }
}

/// Command that fails before replying.
struct Failing;

#[async_trait]
impl Command for Failing {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description("Breaks")
    }

    async fn execute(&self, _ctx: &mut CommandContext<'_>) -> Result<(), AppError> {
        Err(AppError::InternalError("upstream exploded".to_string()))
    }
}

/// Command that replies twice, propagating the second attempt's error.
struct Chatty;

#[async_trait]
impl Command for Chatty {
    fn name(&self) -> &'static str {
        "chatty"
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description("Talks too much")
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), AppError> {
        ctx.reply(CreateInteractionResponseMessage::new().content("first"))?;
        ctx.reply(CreateInteractionResponseMessage::new().content("second"))?;

        Ok(())
    }
}

fn test_registry(moderate: &Moderate) -> CommandRegistry {
    CommandRegistry::new()
        .register(moderate.clone())
        .register(Silent)
        .register(Failing)
        .register(Chatty)
}

/// Dispatches `payload` and returns the serialized response.
async fn dispatch(registry: CommandRegistry, payload: Value) -> Result<Value, AppError> {
    let state = test_state(test_config("http://127.0.0.1:1"), registry).await;
    let body = serde_json::to_vec(&payload)?;

    let response = InteractionService::new(&state).dispatch(&body).await?;

    Ok(serde_json::to_value(response)?)
}
