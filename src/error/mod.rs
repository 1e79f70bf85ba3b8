//! Error types for the bot process.
//!
//! `AppError` is the top-level error returned from startup, the gateway task and
//! the reply path. Startup and shutdown errors end the process with a non-zero exit
//! status; reply errors are logged by the notifier and never escape event handling.

pub mod config;
pub mod internal;

use dioxus_logger::tracing::subscriber::SetGlobalDefaultError;
use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal issue such as a malformed Discord snowflake.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Failure installing signal handlers.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// The gateway task panicked or was cancelled.
    #[error(transparent)]
    BotTaskErr(#[from] tokio::task::JoinError),

    /// A global tracing subscriber was already installed.
    #[error(transparent)]
    LoggerErr(#[from] SetGlobalDefaultError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
