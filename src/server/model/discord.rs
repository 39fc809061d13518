//! Discord REST response models.
//!
//! Only the fields the bot reads are declared; unknown fields are ignored so
//! API additions never break decoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serenity::all::{
    ApplicationId, ChannelId, CommandId, EntitlementId, GuildId, MessageId, SkuId, UserId,
};

use crate::server::util::format;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// `"0"` for accounts migrated to unique usernames.
    #[serde(default = "default_discriminator")]
    pub discriminator: String,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
    #[serde(default)]
    pub bot: bool,
}

fn default_discriminator() -> String {
    "0".to_string()
}

impl User {
    pub fn tag(&self) -> String {
        format::user_tag(&self.username, &self.discriminator)
    }

    pub fn avatar_url(&self) -> String {
        format::avatar_url(self.id, self.avatar.as_deref(), &self.discriminator)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Message {
    pub id: MessageId,
    pub channel_id: ChannelId,
    #[serde(default)]
    pub content: String,
    pub author: Option<User>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Channel {
    pub id: ChannelId,
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: Option<String>,
    pub guild_id: Option<GuildId>,
    /// Populated for DM channels.
    #[serde(default)]
    pub recipients: Vec<User>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Guild {
    pub id: GuildId,
    pub name: String,
    pub icon: Option<String>,
    pub owner_id: Option<UserId>,
    pub approximate_member_count: Option<u64>,
}

/// Premium access granted to a user or guild.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Entitlement {
    pub id: EntitlementId,
    pub sku_id: SkuId,
    pub application_id: Option<ApplicationId>,
    pub user_id: Option<UserId>,
    pub guild_id: Option<GuildId>,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub deleted: bool,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

/// A registered global command as echoed back by Discord.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApplicationCommand {
    pub id: CommandId,
    pub application_id: ApplicationId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
