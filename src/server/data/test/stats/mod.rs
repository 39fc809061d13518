use crate::server::data::stats::StatsRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use serenity::all::{GuildId, UserId};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod record_embed;
mod upsert_guild;
