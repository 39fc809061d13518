//! Command permission checks.
//!
//! The computation is pure; only [`notify_missing_permissions`] produces a
//! reply. Members without a permission bitmask (DMs) are unrestricted.

use serenity::all::{CreateEmbed, CreateInteractionResponseMessage, Permissions};

use crate::server::{
    bot::{command::Command, context::CommandContext},
    error::command::CommandError,
};

pub const MISSING_PERMISSIONS_COLOUR: u32 = 0xFF0000;

/// Permissions in `required` that `held` lacks.
///
/// `None` means nothing is known about the invoker and yields the empty set.
pub fn missing_permissions(required: Permissions, held: Option<Permissions>) -> Permissions {
    match held {
        Some(held) => required & !held,
        None => Permissions::empty(),
    }
}

/// Whether `held` includes every flag of `permission`.
pub fn has_permission(permission: Permissions, held: Option<Permissions>) -> bool {
    missing_permissions(permission, held).is_empty()
}

/// Ephemeral notice listing the missing permissions by name.
pub fn missing_permissions_message(missing: Permissions) -> CreateInteractionResponseMessage {
    let names = missing
        .get_permission_names()
        .iter()
        .map(|name| format!("`{}`", name))
        .collect::<Vec<_>>()
        .join(", ");

    let embed = CreateEmbed::new()
        .title("Missing Permissions")
        .description(format!(
            "You are missing the following permissions: {}",
            names
        ))
        .colour(MISSING_PERMISSIONS_COLOUR);

    CreateInteractionResponseMessage::new()
        .embed(embed)
        .ephemeral(true)
}

/// Replies with the missing permissions notice.
pub fn notify_missing_permissions(
    ctx: &mut CommandContext<'_>,
    missing: Permissions,
) -> Result<(), CommandError> {
    ctx.reply(missing_permissions_message(missing))
}

/// Checks the invoker against the command's requirements.
///
/// # Returns
/// - `Ok(true)` - Command may run
/// - `Ok(false)` - Permissions are missing and the notice is the response
/// - `Err(CommandError::AlreadyResponded)` - The context already holds a response
pub fn check_permissions(
    command: &dyn Command,
    ctx: &mut CommandContext<'_>,
) -> Result<bool, CommandError> {
    let missing = missing_permissions(command.required_permissions(), ctx.member_permissions());
    if missing.is_empty() {
        return Ok(true);
    }

    tracing::debug!(
        "User is missing {:?} for command `{}`",
        missing.get_permission_names(),
        command.name()
    );
    notify_missing_permissions(ctx, missing)?;

    Ok(false)
}
