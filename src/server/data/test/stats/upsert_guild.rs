use super::*;

/// Tests inserting a guild the bot just joined.
///
/// Expected: Ok with the guild stored
#[tokio::test]
async fn inserts_new_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = StatsRepository::new(db)
        .upsert_guild(GuildId::new(42), "Test Guild")
        .await?;

    assert_eq!(guild.guild_id, "42");
    assert_eq!(guild.name, "Test Guild");

    Ok(())
}

/// Tests upserting a guild that already exists.
///
/// Verifies the name is refreshed while the join time and row are kept.
///
/// Expected: Ok with one row, new name and the original joined_at
#[tokio::test]
async fn updates_existing_guild_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let joined_at = Utc::now() - Duration::days(3);
    let existing = factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("42")
        .name("Old Name")
        .joined_at(joined_at)
        .build()
        .await?;

    let repo = StatsRepository::new(db);
    let updated = repo.upsert_guild(GuildId::new(42), "New Name").await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.joined_at, existing.joined_at);
    assert_eq!(repo.count_guilds().await?, 1);

    Ok(())
}

