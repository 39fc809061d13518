pub mod info;

use crate::server::bot::command::CommandRegistry;

/// Every command the bot serves.
pub fn registry() -> CommandRegistry {
    CommandRegistry::new().register(info::Info)
}
