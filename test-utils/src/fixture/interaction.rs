//! Interaction payload fixtures, shaped like the bodies Discord posts.

use serde_json::{json, Value};

/// Application the fixtures are addressed to.
pub const APPLICATION_ID: &str = "1000000000000000001";

/// Guild the guild-scoped fixtures originate from.
pub const GUILD_ID: &str = "1000000000000000002";

/// Channel the fixtures originate from.
pub const CHANNEL_ID: &str = "1000000000000000003";

/// User invoking the fixtures.
pub const USER_ID: &str = "1000000000000000004";

/// Interaction token used for webhook follow-ups.
pub const INTERACTION_TOKEN: &str = "aW50ZXJhY3Rpb24tdG9rZW4";

/// Command id attached to command fixtures.
pub const COMMAND_ID: &str = "1000000000000000005";

fn user() -> Value {
    json!({
        "id": USER_ID,
        "username": "alex",
        "discriminator": "0",
        "global_name": "Alex",
        "avatar": null,
    })
}

fn base(kind: u64) -> Value {
    json!({
        "id": "1100000000000000001",
        "application_id": APPLICATION_ID,
        "type": kind,
        "token": INTERACTION_TOKEN,
        "version": 1,
        "locale": "en-US",
        "entitlements": [],
    })
}

/// URL verification ping.
pub fn ping() -> Value {
    base(1)
}

/// Slash command invoked inside a guild.
///
/// `permissions` is the member's permission bitmask as Discord serializes it
/// (a decimal string). `None` omits the field entirely.
pub fn chat_input(name: &str, permissions: Option<&str>) -> Value {
    let mut member = json!({
        "user": user(),
        "nick": null,
        "roles": [],
        "joined_at": "2024-01-01T00:00:00.000000+00:00",
    });
    if let Some(permissions) = permissions {
        member["permissions"] = json!(permissions);
    }

    let mut payload = command(2, name, 1);
    payload["guild_id"] = json!(GUILD_ID);
    payload["member"] = member;
    payload
}

/// Slash command invoked in a direct message, without member data.
pub fn dm_chat_input(name: &str) -> Value {
    let mut payload = command(2, name, 1);
    payload["user"] = user();
    payload
}

/// User context-menu command invoked inside a guild.
pub fn user_command(name: &str) -> Value {
    let mut payload = command(2, name, 2);
    payload["guild_id"] = json!(GUILD_ID);
    payload["member"] = json!({ "user": user(), "permissions": "0" });
    payload
}

/// Autocomplete request for a command option.
pub fn autocomplete(name: &str) -> Value {
    let mut payload = command(4, name, 1);
    payload["user"] = user();
    payload
}

/// Button click on a message component.
pub fn message_component() -> Value {
    let mut payload = base(3);
    payload["channel_id"] = json!(CHANNEL_ID);
    payload["user"] = user();
    payload["data"] = json!({ "custom_id": "retry", "component_type": 2 });
    payload["message"] = json!({ "id": "1200000000000000001", "content": "hi" });
    payload
}

/// Modal form submission.
pub fn modal_submit() -> Value {
    let mut payload = base(5);
    payload["channel_id"] = json!(CHANNEL_ID);
    payload["user"] = user();
    payload["data"] = json!({ "custom_id": "feedback", "components": [] });
    payload
}

/// Interaction with a type this server does not know about.
pub fn unknown(kind: u64) -> Value {
    base(kind)
}

fn command(kind: u64, name: &str, command_type: u64) -> Value {
    let mut payload = base(kind);
    payload["channel_id"] = json!(CHANNEL_ID);
    payload["data"] = json!({
        "id": COMMAND_ID,
        "name": name,
        "type": command_type,
        "options": [],
    });
    payload
}
