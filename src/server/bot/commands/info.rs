use std::time::Duration;

use chrono::Utc;
use serenity::all::{CreateCommand, CreateEmbed, CreateInteractionResponseMessage};
use serenity::async_trait;

use crate::server::{
    bot::{command::Command, context::CommandContext},
    error::AppError,
    model::stats::{BotStats, TopggStats},
    service::{stats::StatsService, topgg::TopggService},
    util::format::{discord_timestamp, format_count},
};

pub const INFO_COLOUR: u32 = 0x5865F2;

/// `/info`: usage statistics and latency.
pub struct Info;

#[async_trait]
impl Command for Info {
    fn name(&self) -> &'static str {
        "info"
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Get some general information and statistics about QuickVids.")
    }

    async fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<(), AppError> {
        let stats_service = StatsService::new(&ctx.state.db);

        let stats = stats_service.get_bot_stats(Utc::now()).await?;
        let ping = stats_service.database_ping().await?;
        let votes = TopggService::new(&ctx.state.http_client, &ctx.state.config)
            .get_votes()
            .await;

        ctx.reply(CreateInteractionResponseMessage::new().embed(info_embed(
            &stats,
            ping,
            votes.as_ref(),
        )))?;

        Ok(())
    }
}

pub fn info_embed(stats: &BotStats, ping: Duration, votes: Option<&TopggStats>) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("QuickVids Info")
        .description("Here is some general information and statistics about QuickVids.")
        .colour(INFO_COLOUR)
        .field(
            "TikToks Embedded 📈",
            format_count(stats.total_embedded),
            true,
        )
        .field(
            "Past 24 Hours ⌛",
            format_count(stats.embedded_past_24_hours),
            true,
        )
        .field(
            "Embedded Today 📅",
            format!(
                "{} since {}",
                format_count(stats.embedded_today),
                discord_timestamp(stats.today_started_at.timestamp(), 'R')
            ),
            true,
        )
        .field("User Count 👤", format_count(stats.total_users), true)
        .field("Total Servers 🏠", format_count(stats.server_count), true)
        .field(
            "Ping 🏓",
            format!("{:.0}ms", ping.as_secs_f64() * 1000.0),
            true,
        );

    if let Some(votes) = votes {
        embed = embed.field("Top.gg Votes 📈", format_count(votes.points), true);
    }

    embed
}
