use serenity::all::Message;

use super::presence::{GuildPresences, PresenceUpdate};

/// Gateway events the bot reacts to.
///
/// Every Serenity callback is reduced to one of these variants and handed to
/// `EventDispatcher::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotEvent {
    /// Initial snapshot of every guild available after connecting
    Ready(ReadySnapshot),
    /// Single user's presence changed
    PresenceUpdate(PresenceUpdate),
    /// Guild became available or the bot joined it
    GuildCreate(GuildPresences),
    /// Message posted in a channel the bot can see
    MessageCreate(IncomingMessage),
}

/// Presences of all guilds known when the bot became ready.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadySnapshot {
    pub guilds: Vec<GuildPresences>,
}

/// The parts of a posted message the notifier needs.
///
/// The text itself is never consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub message_id: String,
    pub channel_id: String,
    /// `None` for direct messages
    pub guild_id: Option<String>,
    pub author_id: String,
    pub author_is_bot: bool,
}

impl From<&Message> for IncomingMessage {
    fn from(message: &Message) -> Self {
        Self {
            message_id: message.id.to_string(),
            channel_id: message.channel_id.to_string(),
            guild_id: message.guild_id.map(|id| id.to_string()),
            author_id: message.author.id.to_string(),
            author_is_bot: message.author.bot,
        }
    }
}
