use super::*;

/// Tests recording an embed from a guild.
///
/// Expected: Ok with ids stored as decimal strings and the event counted
#[tokio::test]
async fn records_guild_embed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatsRepository::new(db);
    let event = repo
        .record_embed(UserId::new(11), Some(GuildId::new(42)))
        .await?;

    assert_eq!(event.user_id, "11");
    assert_eq!(event.guild_id.as_deref(), Some("42"));
    assert_eq!(repo.count_embeds().await?, 1);

    Ok(())
}

/// Tests recording an embed from a DM.
///
/// Expected: Ok with no guild id
#[tokio::test]
async fn records_dm_embed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = StatsRepository::new(db)
        .record_embed(UserId::new(11), None)
        .await?;

    assert!(event.guild_id.is_none());

    Ok(())
}
