use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler, config::Config, error::AppError, model::reminder::ReminderSettings,
    state::PresenceState,
};

/// Gateway intents the bot subscribes to.
///
/// Only guild events are requested, so direct messages never reach the bot.
pub fn required_intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::GUILD_PRESENCES
}

/// Builds the Discord client without connecting.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and reminder settings
/// - `state` - Presence state shared with the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client could not be built (e.g. malformed token)
pub async fn init_bot(config: &Config, state: PresenceState) -> Result<Client, AppError> {
    let handler = Handler::new(state, ReminderSettings::from(config));

    let client = Client::builder(&config.discord_token, required_intents())
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects to Discord and processes events until the shards are shut down.
///
/// This blocks for the lifetime of the connection and should run in its own task.
/// An authentication or connection failure is returned as an error.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_intents_cover_presences_and_guild_messages() {
        let intents = required_intents();

        assert!(intents.contains(GatewayIntents::GUILDS));
        assert!(intents.contains(GatewayIntents::GUILD_MESSAGES));
        assert!(intents.contains(GatewayIntents::GUILD_PRESENCES));
    }

    #[test]
    fn required_intents_exclude_direct_messages_and_content() {
        let intents = required_intents();

        assert!(!intents.contains(GatewayIntents::DIRECT_MESSAGES));
        assert!(!intents.contains(GatewayIntents::MESSAGE_CONTENT));
    }
}
