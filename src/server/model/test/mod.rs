use crate::server::model::interaction::{
    CommandType, Interaction, InteractionEnvelope, InteractionType, Member,
};
use serenity::all::Permissions;
use test_utils::fixture::interaction as fixture;
