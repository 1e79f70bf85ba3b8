//! Business logic driven by gateway events.
//!
//! - **Presence** (`presence/`) - Mirrors presence events into the presence set
//! - **Reminder** (`reminder/`) - Decides whether to remind a message author and sends the reply
//! - **Dispatch** (`dispatch`) - Routes a `BotEvent` to the service responsible for it

pub mod dispatch;
pub mod presence;
pub mod reminder;
