use std::time::Duration;

use chrono::{DateTime, NaiveTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{data::stats::StatsRepository, error::AppError, model::stats::BotStats};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects the usage counters as of `now`.
    ///
    /// "Today" starts at UTC midnight; the 24 hour window is rolling.
    pub async fn get_bot_stats(&self, now: DateTime<Utc>) -> Result<BotStats, AppError> {
        let repo = StatsRepository::new(self.db);
        let today_started_at = start_of_day(now);

        Ok(BotStats {
            total_embedded: repo.count_embeds().await?,
            embedded_past_24_hours: repo
                .count_embeds_since(now - chrono::Duration::hours(24))
                .await?,
            embedded_today: repo.count_embeds_since(today_started_at).await?,
            today_started_at,
            total_users: repo.count_users().await?,
            server_count: repo.count_guilds().await?,
        })
    }

    /// Round-trip time of a trivial database query.
    pub async fn database_ping(&self) -> Result<Duration, AppError> {
        Ok(StatsRepository::new(self.db).ping().await?)
    }
}

/// UTC midnight of the day containing `now`.
pub fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}
