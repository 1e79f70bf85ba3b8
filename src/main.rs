mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use dioxus_logger::tracing;

use crate::{config::Config, error::AppError, state::PresenceState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("err: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::init_logger(&config) {
        eprintln!("err: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

/// Runs the bot until a shutdown signal arrives or the connection fails.
///
/// # Returns
/// - `Ok(())` - Shut down cleanly after a signal
/// - `Err(AppError)` - The client could not be built, the connection failed, or
///   the gateway task ended with an error while shutting down
async fn run(config: Config) -> Result<(), AppError> {
    let state = PresenceState::new();

    let client = bot::start::init_bot(&config, state).await?;
    let shard_manager = client.shard_manager.clone();

    let mut bot_task = tokio::spawn(bot::start::start_bot(client));

    tracing::info!("Bot is now running. Press CTRL-C to exit.");

    tokio::select! {
        result = &mut bot_task => {
            // The gateway stopped on its own, e.g. the token was rejected
            return result?;
        }
        signal = startup::shutdown_signal() => signal?,
    }

    tracing::info!("Closing Discord connection");
    shard_manager.shutdown_all().await;

    bot_task.await?
}
