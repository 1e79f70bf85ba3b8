use dioxus_logger::tracing;

use crate::{config::Config, error::AppError};

/// Installs the global tracing subscriber at the configured level.
///
/// # Returns
/// - `Ok(())` - Logger installed
/// - `Err(AppError::LoggerErr)` - A global subscriber was already set
pub fn init_logger(config: &Config) -> Result<(), AppError> {
    dioxus_logger::init(config.log_level)?;

    Ok(())
}

/// Resolves once the process receives SIGINT or SIGTERM.
///
/// # Returns
/// - `Ok(())` - A shutdown signal was received
/// - `Err(AppError::IoErr)` - Signal handlers could not be installed
pub async fn shutdown_signal() -> Result<(), AppError> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate())?;

        tokio::select! {
            result = tokio::signal::ctrl_c() => result?,
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c().await?;

    tracing::info!("Shutdown signal received");

    Ok(())
}
