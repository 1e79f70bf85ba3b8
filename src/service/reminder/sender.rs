//! Outbound reply delivery.
//!
//! `ReplySender` is the single operation the notifier needs from Discord. The
//! production implementation posts through Serenity's HTTP client; tests use
//! `MockReplySender`.

use serenity::all::{ChannelId, CreateMessage, GuildId, MessageId, MessageReference};
use serenity::async_trait;
use serenity::http::Http;

use crate::{error::AppError, model::reminder::ReminderReply, util::parse::parse_u64_from_str};

#[async_trait]
pub trait ReplySender: Send + Sync {
    /// Posts `reply` as a reply to the message it references.
    ///
    /// # Returns
    /// - `Ok(())` - Discord accepted the message
    /// - `Err(AppError)` - The reply could not be sent
    async fn send_reply(&self, reply: &ReminderReply) -> Result<(), AppError>;
}

#[async_trait]
impl ReplySender for Http {
    async fn send_reply(&self, reply: &ReminderReply) -> Result<(), AppError> {
        let channel_id = ChannelId::new(parse_u64_from_str(&reply.channel_id)?);
        let reference_channel_id = ChannelId::new(parse_u64_from_str(&reply.reference.channel_id)?);
        let message_id = MessageId::new(parse_u64_from_str(&reply.reference.message_id)?);

        let mut reference = MessageReference::from((reference_channel_id, message_id));
        if let Some(guild_id) = &reply.reference.guild_id {
            reference.guild_id = Some(GuildId::new(parse_u64_from_str(guild_id)?));
        }

        let message = CreateMessage::new()
            .content(&reply.content)
            .reference_message(reference);

        channel_id.send_message(self, message).await?;

        Ok(())
    }
}

#[cfg(test)]
pub mod mock {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::error::internal::InternalError;

    /// Records replies instead of sending them.
    ///
    /// While `fail` is set every send returns an error and nothing is recorded.
    #[derive(Default)]
    pub struct MockReplySender {
        sent: Mutex<Vec<ReminderReply>>,
        fail: AtomicBool,
    }

    impl MockReplySender {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            let sender = Self::default();
            sender.set_failing(true);
            sender
        }

        pub fn set_failing(&self, fail: bool) {
            self.fail.store(fail, Ordering::SeqCst);
        }

        pub fn sent(&self) -> Vec<ReminderReply> {
            self.sent.lock().unwrap().clone()
        }

        pub fn sent_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ReplySender for MockReplySender {
        async fn send_reply(&self, reply: &ReminderReply) -> Result<(), AppError> {
            if self.fail.load(Ordering::SeqCst) {
                // Any AppError works here
                let source = "x".parse::<u64>().unwrap_err();
                return Err(InternalError::ParseStringId {
                    value: reply.channel_id.clone(),
                    source,
                }
                .into());
            }

            self.sent.lock().unwrap().push(reply.clone());
            Ok(())
        }
    }
}
