use sea_orm::entity::prelude::*;

/// A guild the bot has been added to.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "discord_guild")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord snowflake, stored as text
    #[sea_orm(unique)]
    pub guild_id: String,
    pub name: String,
    pub joined_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
