//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for the statistics tables
//! - HTTP client for Discord and top.gg requests
//! - Read-only configuration, including the interaction verification key
//! - The slash command registry

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{bot::command::CommandRegistry, config::Config};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle,
/// `reqwest::Client` uses an `Arc` internally and the rest sit behind `Arc`.
/// Nothing here is mutated after startup, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for outbound REST calls.
    ///
    /// Configured without redirects and with a request timeout. Shared by the
    /// Discord and top.gg services.
    pub http_client: reqwest::Client,

    pub config: Arc<Config>,

    /// Commands resolved by name for every application command interaction.
    pub commands: Arc<CommandRegistry>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `config` - Loaded configuration
    /// - `commands` - Registry of every served command
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        config: Config,
        commands: CommandRegistry,
    ) -> Self {
        Self {
            db,
            http_client,
            config: Arc::new(config),
            commands: Arc::new(commands),
        }
    }
}
