use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect,
};
use serenity::all::{GuildId, UserId};

/// Read and write access to the embed and guild statistics tables.
pub struct StatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn count_embeds(&self) -> Result<u64, DbErr> {
        entity::prelude::EmbedEvent::find().count(self.db).await
    }

    /// Counts embeds created at or after `since`.
    pub async fn count_embeds_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::EmbedEvent::find()
            .filter(entity::embed_event::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }

    /// Counts distinct users that have ever requested an embed.
    pub async fn count_users(&self) -> Result<u64, DbErr> {
        entity::prelude::EmbedEvent::find()
            .select_only()
            .column(entity::embed_event::Column::UserId)
            .distinct()
            .count(self.db)
            .await
    }

    pub async fn count_guilds(&self) -> Result<u64, DbErr> {
        entity::prelude::DiscordGuild::find().count(self.db).await
    }

    /// Records one embedded video.
    pub async fn record_embed(
        &self,
        user_id: UserId,
        guild_id: Option<GuildId>,
    ) -> Result<entity::embed_event::Model, DbErr> {
        entity::prelude::EmbedEvent::insert(entity::embed_event::ActiveModel {
            user_id: ActiveValue::Set(user_id.get().to_string()),
            guild_id: ActiveValue::Set(guild_id.map(|id| id.get().to_string())),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Inserts a guild or refreshes its name, keeping the original join time.
    pub async fn upsert_guild(
        &self,
        guild_id: GuildId,
        name: &str,
    ) -> Result<entity::discord_guild::Model, DbErr> {
        entity::prelude::DiscordGuild::insert(entity::discord_guild::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.get().to_string()),
            name: ActiveValue::Set(name.to_string()),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::discord_guild::Column::GuildId)
                .update_column(entity::discord_guild::Column::Name)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Measures one database round trip.
    pub async fn ping(&self) -> Result<Duration, DbErr> {
        let start = Instant::now();
        self.db.ping().await?;

        Ok(start.elapsed())
    }
}
