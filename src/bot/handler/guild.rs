use dioxus_logger::tracing;
use serenity::all::Guild;
use serenity::http::Http;

use crate::{
    model::{event::BotEvent, presence::GuildPresences},
    service::dispatch::EventDispatcher,
};

/// Handle a guild becoming available by replaying its presences
pub async fn handle_guild_create(
    dispatcher: &EventDispatcher<'_, Http>,
    guild: Guild,
    is_new: Option<bool>,
) {
    tracing::debug!(
        "Guild create event: {} ({}) - new: {:?}, presences: {}",
        guild.name,
        guild.id,
        is_new,
        guild.presences.len()
    );

    dispatcher
        .dispatch(BotEvent::GuildCreate(GuildPresences::from(&guild)))
        .await;
}
