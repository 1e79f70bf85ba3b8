//! Single entry point for gateway events.
//!
//! The bot handler converts each Serenity callback into a `BotEvent` and calls
//! `EventDispatcher::dispatch`, which routes it to the presence or reminder
//! service. Tests drive the bot through this type without a gateway connection.

use chrono::{DateTime, Utc};

use crate::{
    model::{event::BotEvent, reminder::ReminderOutcome, reminder::ReminderSettings},
    service::{
        presence::PresenceService,
        reminder::{ReminderService, ReplySender},
    },
    state::PresenceState,
};

/// What dispatching an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Number of presence entries applied
    Presence(usize),
    /// Decision taken for a message
    Reminder(ReminderOutcome),
}

pub struct EventDispatcher<'a, S: ReplySender + ?Sized> {
    state: &'a PresenceState,
    sender: &'a S,
    settings: &'a ReminderSettings,
}

impl<'a, S: ReplySender + ?Sized> EventDispatcher<'a, S> {
    pub fn new(state: &'a PresenceState, sender: &'a S, settings: &'a ReminderSettings) -> Self {
        Self {
            state,
            sender,
            settings,
        }
    }

    /// Routes `event` to the service responsible for it.
    pub async fn dispatch(&self, event: BotEvent) -> DispatchOutcome {
        self.dispatch_at(event, Utc::now()).await
    }

    /// Routes `event` using `now` as the current time for reminders.
    pub async fn dispatch_at(&self, event: BotEvent, now: DateTime<Utc>) -> DispatchOutcome {
        let presence_service = PresenceService::new(self.state);

        match event {
            BotEvent::Ready(snapshot) => {
                DispatchOutcome::Presence(presence_service.apply_ready(&snapshot).await)
            }
            BotEvent::GuildCreate(guild) => {
                DispatchOutcome::Presence(presence_service.apply_guild(&guild).await)
            }
            BotEvent::PresenceUpdate(update) => {
                presence_service.update(&update).await;
                DispatchOutcome::Presence(1)
            }
            BotEvent::MessageCreate(message) => {
                let reminder_service = ReminderService::new(self.state, self.sender, self.settings);
                DispatchOutcome::Reminder(reminder_service.handle_message_at(&message, now).await)
            }
        }
    }
}
