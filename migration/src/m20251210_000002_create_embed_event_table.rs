use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmbedEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(EmbedEvent::Id))
                    .col(string(EmbedEvent::UserId))
                    .col(string_null(EmbedEvent::GuildId))
                    .col(timestamp_with_time_zone(EmbedEvent::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Stats queries filter on the event time
        manager
            .create_index(
                Index::create()
                    .name("idx_embed_event_created_at")
                    .table(EmbedEvent::Table)
                    .col(EmbedEvent::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmbedEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmbedEvent {
    Table,
    Id,
    UserId,
    GuildId,
    CreatedAt,
}
