//! Inbound interaction payloads.
//!
//! Requests are decoded twice: once into [`InteractionEnvelope`] to learn the
//! type, and only for command interactions into the full [`Interaction`]. A
//! ping with an otherwise unusable payload still gets its pong.

use serde::Deserialize;
use serde_json::Value;
use serenity::all::{ApplicationId, ChannelId, CommandId, GuildId, InteractionId, Permissions};

use crate::server::model::discord::{Entitlement, User};

/// Interaction `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "u64")]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    MessageComponent,
    Autocomplete,
    ModalSubmit,
    Unknown(u64),
}

impl From<u64> for InteractionType {
    fn from(value: u64) -> Self {
        match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            3 => Self::MessageComponent,
            4 => Self::Autocomplete,
            5 => Self::ModalSubmit,
            other => Self::Unknown(other),
        }
    }
}

/// Command data `type` field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "u64")]
pub enum CommandType {
    #[default]
    ChatInput,
    User,
    Message,
    Unknown(u64),
}

impl From<u64> for CommandType {
    fn from(value: u64) -> Self {
        match value {
            1 => Self::ChatInput,
            2 => Self::User,
            3 => Self::Message,
            other => Self::Unknown(other),
        }
    }
}

/// Just enough of a payload to route it.
#[derive(Debug, Deserialize)]
pub struct InteractionEnvelope {
    #[serde(rename = "type")]
    pub kind: InteractionType,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Interaction {
    pub id: InteractionId,
    pub application_id: ApplicationId,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    pub data: Option<CommandData>,
    pub guild_id: Option<GuildId>,
    pub channel_id: Option<ChannelId>,
    /// Present when invoked in a guild.
    pub member: Option<Member>,
    /// Present when invoked in a DM.
    pub user: Option<User>,
    /// Authenticates webhook edits and follow-ups for 15 minutes.
    pub token: String,
    #[serde(default)]
    pub entitlements: Vec<Entitlement>,
    pub locale: Option<String>,
    pub guild_locale: Option<String>,
}

impl Interaction {
    /// The invoking user, from the member object in guilds or `user` in DMs.
    pub fn author(&self) -> Option<&User> {
        self.member
            .as_ref()
            .and_then(|member| member.user.as_ref())
            .or(self.user.as_ref())
    }

    /// Permissions of the invoking member, `None` outside of guilds.
    pub fn member_permissions(&self) -> Option<Permissions> {
        self.member.as_ref().and_then(Member::permissions)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CommandData {
    pub id: CommandId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: CommandType,
    #[serde(default)]
    pub options: Vec<CommandDataOption>,
    pub guild_id: Option<GuildId>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CommandDataOption {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub value: Option<Value>,
    /// Nested options of subcommands and groups.
    #[serde(default)]
    pub options: Vec<CommandDataOption>,
    #[serde(default)]
    pub focused: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Member {
    pub user: Option<User>,
    pub nick: Option<String>,
    /// Decimal permission bitmask including channel overwrites.
    #[serde(rename = "permissions")]
    pub permission_bits: Option<String>,
}

impl Member {
    /// Parsed permission bitmask.
    ///
    /// `None` when Discord sent no bitmask. A malformed bitmask yields the
    /// empty set rather than `None` so it can never read as unrestricted.
    pub fn permissions(&self) -> Option<Permissions> {
        self.permission_bits.as_deref().map(|bits| {
            bits.trim()
                .parse::<u64>()
                .map(Permissions::from_bits_truncate)
                .unwrap_or_else(|_| Permissions::empty())
        })
    }
}
