use super::*;

/// Tests counting on empty tables.
///
/// Expected: Ok(0) for every counter
#[tokio::test]
async fn counts_zero_on_empty_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StatsRepository::new(db);

    assert_eq!(repo.count_embeds().await?, 0);
    assert_eq!(repo.count_embeds_since(Utc::now()).await?, 0);
    assert_eq!(repo.count_users().await?, 0);
    assert_eq!(repo.count_guilds().await?, 0);

    Ok(())
}

/// Tests windowed embed counts.
///
/// Verifies that only events at or after the cutoff are counted.
///
/// Expected: Ok(2) within the last 24 hours out of 3 total
#[tokio::test]
async fn counts_embeds_since_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::embed_event::EmbedEventFactory::new(db)
        .hours_ago(1)
        .build()
        .await?;
    factory::embed_event::EmbedEventFactory::new(db)
        .hours_ago(23)
        .build()
        .await?;
    factory::embed_event::EmbedEventFactory::new(db)
        .hours_ago(30)
        .build()
        .await?;

    let repo = StatsRepository::new(db);

    assert_eq!(repo.count_embeds().await?, 3);
    assert_eq!(
        repo.count_embeds_since(Utc::now() - Duration::hours(24)).await?,
        2
    );

    Ok(())
}

/// Tests distinct user counting.
///
/// Expected: Ok(2) for three events from two users
#[tokio::test]
async fn counts_distinct_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for user_id in ["11", "11", "12"] {
        factory::embed_event::EmbedEventFactory::new(db)
            .user_id(user_id)
            .build()
            .await?;
    }

    let repo = StatsRepository::new(db);

    assert_eq!(repo.count_users().await?, 2);

    Ok(())
}

/// Tests guild counting.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_stats_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_guild::create_guild(db).await?;
    factory::discord_guild::create_guild(db).await?;

    let repo = StatsRepository::new(db);

    assert_eq!(repo.count_guilds().await?, 2);

    Ok(())
}
