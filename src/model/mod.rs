//! Domain models for presence tracking and reminders.
//!
//! Serenity types are converted into these models at the edge of the bot so the
//! services can be driven directly from tests without a gateway connection. Discord
//! IDs are carried as opaque strings.

pub mod event;
pub mod presence;
pub mod reminder;
