use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Usage statistics shown by `/info`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BotStats {
    pub total_embedded: u64,
    pub embedded_past_24_hours: u64,
    pub embedded_today: u64,
    /// Start of the "today" window, UTC midnight.
    pub today_started_at: DateTime<Utc>,
    pub total_users: u64,
    pub server_count: u64,
}

/// Vote counters from the top.gg bot endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TopggStats {
    pub points: u64,
    #[serde(rename = "monthlyPoints", default)]
    pub monthly_points: u64,
}
