use chrono::Duration;
use test_utils::fixture::time::{minutes_after, reference_time};

use crate::{
    model::{
        event::IncomingMessage,
        presence::PresenceStatus,
        reminder::{ReminderOutcome, ReminderSettings},
    },
    service::reminder::{sender::mock::MockReplySender, ReminderService},
    state::PresenceState,
};


const REMINDER_TEXT: &str = "How are you using Discord? You're offline.";

fn settings() -> ReminderSettings {
    ReminderSettings {
        message: REMINDER_TEXT.to_string(),
        cooldown: Duration::hours(1),
    }
}

fn guild_message(message_id: &str, author_id: &str) -> IncomingMessage {
    IncomingMessage {
        message_id: message_id.to_string(),
        channel_id: "444".to_string(),
        guild_id: Some("900".to_string()),
        author_id: author_id.to_string(),
        author_is_bot: false,
    }
}
