use serenity::all::Presence;
use serenity::http::Http;

use crate::{
    model::{event::BotEvent, presence::PresenceUpdate},
    service::dispatch::EventDispatcher,
};

/// Handle a presence change for a single user
pub async fn handle_presence_update(dispatcher: &EventDispatcher<'_, Http>, presence: Presence) {
    dispatcher
        .dispatch(BotEvent::PresenceUpdate(PresenceUpdate::from(&presence)))
        .await;
}
