use std::collections::HashMap;

use serenity::all::{CreateCommand, Permissions};
use serenity::async_trait;

use crate::server::{bot::context::CommandContext, error::AppError};

/// A slash command.
#[async_trait]
pub trait Command: Send + Sync {
    /// Name the command is registered and invoked under.
    fn name(&self) -> &'static str;

    /// Definition sent to Discord when registering commands.
    fn definition(&self) -> CreateCommand;

    /// Permissions the invoking member must hold. Empty by default.
    fn required_permissions(&self) -> Permissions {
        Permissions::empty()
    }

    /// Runs the command, replying through `ctx`.
    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), AppError>;
}

/// Commands by exact name.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command, replacing any earlier command with the same name.
    pub fn register(mut self, command: impl Command + 'static) -> Self {
        let name = command.name();
        if self.commands.insert(name, Box::new(command)).is_some() {
            tracing::warn!("Command `{}` registered twice, keeping the latest", name);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|command| command.as_ref())
    }

    /// Registration payloads for every command, sorted by name.
    pub fn definitions(&self) -> Vec<CreateCommand> {
        let mut names: Vec<&&'static str> = self.commands.keys().collect();
        names.sort();

        names
            .into_iter()
            .filter_map(|name| self.commands.get(*name))
            .map(|command| command.definition())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
