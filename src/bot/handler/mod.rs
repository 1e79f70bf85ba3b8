use serenity::all::{Context, Guild, GuildId, Message, Presence, Ready};
use serenity::async_trait;
use serenity::http::Http;
use serenity::prelude::EventHandler;

use crate::{
    model::reminder::ReminderSettings, service::dispatch::EventDispatcher, state::PresenceState,
};

pub mod guild;
pub mod message;
pub mod presence;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: PresenceState,
    pub settings: ReminderSettings,
}

impl Handler {
    pub fn new(state: PresenceState, settings: ReminderSettings) -> Self {
        Self { state, settings }
    }

    fn dispatcher<'a>(&'a self, ctx: &'a Context) -> EventDispatcher<'a, Http> {
        EventDispatcher::new(&self.state, ctx.http.as_ref(), &self.settings)
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called once every guild from the ready payload has been cached
    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        ready::handle_cache_ready(&self.dispatcher(&ctx), &ctx, guilds).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.dispatcher(&ctx), guild, is_new).await;
    }

    /// Called when a member's presence changes
    async fn presence_update(&self, ctx: Context, new_data: Presence) {
        presence::handle_presence_update(&self.dispatcher(&ctx), new_data).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.dispatcher(&ctx), message).await;
    }
}
