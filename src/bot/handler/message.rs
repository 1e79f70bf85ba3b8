use serenity::all::Message;
use serenity::http::Http;

use crate::{
    model::event::{BotEvent, IncomingMessage},
    service::dispatch::EventDispatcher,
};

/// Handle message creation in a channel
pub async fn handle_message(dispatcher: &EventDispatcher<'_, Http>, message: Message) {
    dispatcher
        .dispatch(BotEvent::MessageCreate(IncomingMessage::from(&message)))
        .await;
}
