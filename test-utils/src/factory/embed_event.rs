//! Embed event factory for populating the statistics tables.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating embed events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let event = EmbedEventFactory::new(&db)
///     .user_id("42")
///     .hours_ago(30)
///     .build()
///     .await?;
/// ```
pub struct EmbedEventFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    guild_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> EmbedEventFactory<'a> {
    /// Creates a new factory for an event embedded just now by a fresh user.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id().to_string(),
            guild_id: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the user that requested the embed.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the guild the embed was posted in.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    /// Sets the event time.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Moves the event time `hours` into the past.
    pub fn hours_ago(self, hours: i64) -> Self {
        let created_at = Utc::now() - Duration::hours(hours);
        self.created_at(created_at)
    }

    /// Builds and inserts the event into the database.
    pub async fn build(self) -> Result<entity::embed_event::Model, DbErr> {
        entity::embed_event::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an embed event with default values.
pub async fn create_embed_event(
    db: &DatabaseConnection,
) -> Result<entity::embed_event::Model, DbErr> {
    EmbedEventFactory::new(db).build().await
}
