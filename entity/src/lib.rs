//! SeaORM entities backing the bot statistics shown by `/info`.

pub mod prelude;

pub mod discord_guild;
pub mod embed_event;
