use chrono::Duration;

use crate::config::Config;

/// Reply text and cooldown used by the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderSettings {
    pub message: String,
    /// Minimum time between two reminders to the same user
    pub cooldown: Duration,
}

impl From<&Config> for ReminderSettings {
    fn from(config: &Config) -> Self {
        Self {
            message: config.reminder_message.clone(),
            cooldown: config.reminder_cooldown,
        }
    }
}

/// Message the reply is threaded to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyReference {
    pub message_id: String,
    pub channel_id: String,
    pub guild_id: Option<String>,
}

/// Outbound reminder reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderReply {
    pub channel_id: String,
    pub content: String,
    pub reference: ReplyReference,
}

/// Result of checking whether a user may be reminded right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderEligibility {
    /// User is in the presence set
    Online,
    /// Last reminder was sent less than one cooldown ago
    CoolingDown { remaining: Duration },
    /// Another reply to this user is currently being sent
    InFlight,
    /// Reminder claimed; the caller must send and then complete it
    Eligible,
}

/// What the notifier did with an incoming message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderOutcome {
    IgnoredBot,
    IgnoredDirectMessage,
    IgnoredOnline,
    CoolingDown,
    InFlight,
    Sent,
    SendFailed,
}
