//! Discord bot integration for presence tracking and offline reminders.
//!
//! The bot mirrors member presences into `PresenceState` and replies to messages
//! from members whose status is offline. Serenity runs each event handler in its
//! own task, so a slow reply never holds up presence updates.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild snapshots when guilds become available
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `GUILD_PRESENCES` - Receive presence snapshots and updates (privileged intent)
//!
//! Note: `GUILD_PRESENCES` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application. Message content is never
//! read, so `MESSAGE_CONTENT` is not requested.

pub mod handler;
pub mod start;
