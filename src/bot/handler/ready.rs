//! Ready event handlers for bot initialization.
//!
//! `ready` fires once the gateway handshake completes. On Discord the ready payload
//! only lists guild IDs; the presences arrive with each guild afterwards. Once all
//! of those guilds are cached, `cache_ready` fires and the cached presences are
//! replayed as the initial snapshot.

use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Ready};
use serenity::cache::Cache;
use serenity::http::Http;

use crate::{
    model::{
        event::{BotEvent, ReadySnapshot},
        presence::GuildPresences,
    },
    service::dispatch::EventDispatcher,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `_ctx` - Discord context
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );
}

/// Replays the presences of every cached guild once the cache is ready.
pub async fn handle_cache_ready(
    dispatcher: &EventDispatcher<'_, Http>,
    ctx: &Context,
    guild_ids: Vec<GuildId>,
) {
    let snapshot = snapshot_from_cache(&ctx.cache, &guild_ids);

    dispatcher.dispatch(BotEvent::Ready(snapshot)).await;
}

/// Collects presences of the given guilds from the cache.
///
/// Guilds missing from the cache are skipped.
fn snapshot_from_cache(cache: &Cache, guild_ids: &[GuildId]) -> ReadySnapshot {
    let guilds = guild_ids
        .iter()
        .filter_map(|guild_id| {
            let guild = cache.guild(*guild_id);
            if guild.is_none() {
                tracing::warn!("Guild {} missing from cache at ready", guild_id);
            }
            guild.map(|guild| GuildPresences::from(&*guild))
        })
        .collect();

    ReadySnapshot { guilds }
}
