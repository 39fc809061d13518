pub use super::discord_guild::Entity as DiscordGuild;
pub use super::embed_event::Entity as EmbedEvent;
