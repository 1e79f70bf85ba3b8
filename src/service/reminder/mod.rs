//! Offline reminder service.
//!
//! Replies to messages from users who are not in the presence set, at most once
//! per cooldown per user. The policy for an incoming message is, in order:
//!
//! 1. Ignore bot authors without touching any state
//! 2. Ignore direct messages; the bot only operates in guild channels
//! 3. Ignore authors that are currently online
//! 4. Ignore authors reminded less than one cooldown ago
//! 5. Otherwise reply with the reminder text and record the send time
//!
//! The state lock is not held while the reply is sent. A failed send is logged and
//! leaves the last-notified time untouched, so the next message retries at once.

pub mod sender;

#[cfg(test)]
mod test;

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;

use crate::{
    model::{
        event::IncomingMessage,
        reminder::{
            ReminderEligibility, ReminderOutcome, ReminderReply, ReminderSettings, ReplyReference,
        },
    },
    state::PresenceState,
};

pub use sender::ReplySender;

pub struct ReminderService<'a, S: ReplySender + ?Sized> {
    state: &'a PresenceState,
    sender: &'a S,
    settings: &'a ReminderSettings,
}

impl<'a, S: ReplySender + ?Sized> ReminderService<'a, S> {
    pub fn new(state: &'a PresenceState, sender: &'a S, settings: &'a ReminderSettings) -> Self {
        Self {
            state,
            sender,
            settings,
        }
    }

    /// Handles an incoming message as if it arrived at `now`.
    ///
    /// # Arguments
    /// - `message` - The message that was posted
    /// - `now` - Time used for the cooldown check and recorded on a successful send
    ///
    /// # Returns
    /// - `ReminderOutcome` - Which rule applied, or whether the reply was sent
    pub async fn handle_message_at(
        &self,
        message: &IncomingMessage,
        now: DateTime<Utc>,
    ) -> ReminderOutcome {
        if message.author_is_bot {
            return ReminderOutcome::IgnoredBot;
        }

        if message.guild_id.is_none() {
            return ReminderOutcome::IgnoredDirectMessage;
        }

        let author_id = &message.author_id;

        match self
            .state
            .try_claim_reminder(author_id, now, self.settings.cooldown)
            .await
        {
            ReminderEligibility::Online => return ReminderOutcome::IgnoredOnline,
            ReminderEligibility::CoolingDown { remaining } => {
                tracing::debug!(
                    "User {} is offline but was reminded recently ({}s of cooldown left)",
                    author_id,
                    remaining.num_seconds()
                );
                return ReminderOutcome::CoolingDown;
            }
            ReminderEligibility::InFlight => {
                tracing::debug!("Reminder for user {} is already being sent", author_id);
                return ReminderOutcome::InFlight;
            }
            ReminderEligibility::Eligible => {}
        }

        let reply = self.build_reply(message);

        match self.sender.send_reply(&reply).await {
            Ok(()) => {
                self.state.complete_reminder(author_id, Some(now)).await;
                tracing::info!(
                    "Reminded offline user {} in channel {}",
                    author_id,
                    message.channel_id
                );
                ReminderOutcome::Sent
            }
            Err(e) => {
                self.state.complete_reminder(author_id, None).await;
                tracing::error!(
                    "Failed to reply to message {} in channel {}: {}",
                    message.message_id,
                    message.channel_id,
                    e
                );
                ReminderOutcome::SendFailed
            }
        }
    }

    fn build_reply(&self, message: &IncomingMessage) -> ReminderReply {
        ReminderReply {
            channel_id: message.channel_id.clone(),
            content: self.settings.message.clone(),
            reference: ReplyReference {
                message_id: message.message_id.clone(),
                channel_id: message.channel_id.clone(),
                guild_id: message.guild_id.clone(),
            },
        }
    }
}
