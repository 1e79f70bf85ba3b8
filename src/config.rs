use chrono::Duration;
use dioxus_logger::tracing::Level;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_REMINDER_MESSAGE: &str = "How are you using Discord? You're offline.";
const DEFAULT_REMINDER_COOLDOWN_SECS: i64 = 60 * 60;

pub struct Config {
    pub discord_token: String,

    pub reminder_message: String,
    pub reminder_cooldown: Duration,

    pub log_level: Level,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration using `lookup` to resolve variable names.
    ///
    /// Only `DISCORD_TOKEN` is required; the reminder text, cooldown and log level
    /// fall back to their defaults when unset. Blank values count as unset.
    ///
    /// # Arguments
    /// - `lookup` - Resolves an environment variable name to its value
    ///
    /// # Returns
    /// - `Ok(Config)` - All values present and valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DISCORD_TOKEN` is not set
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - An optional value failed to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let discord_token = get("DISCORD_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        let reminder_message =
            get("REMINDER_MESSAGE").unwrap_or_else(|| DEFAULT_REMINDER_MESSAGE.to_string());

        let reminder_cooldown = match get("REMINDER_COOLDOWN_SECS") {
            Some(value) => parse_cooldown(&value)?,
            None => Duration::seconds(DEFAULT_REMINDER_COOLDOWN_SECS),
        };

        let log_level = match get("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "LOG_LEVEL".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => Level::INFO,
        };

        Ok(Self {
            discord_token,
            reminder_message,
            reminder_cooldown,
            log_level,
        })
    }
}

fn parse_cooldown(value: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: "REMINDER_COOLDOWN_SECS".to_string(),
        value: value.to_string(),
        reason,
    };

    let seconds = value.trim().parse::<i64>().map_err(|e| invalid(e.to_string()))?;
    if seconds <= 0 {
        return Err(invalid("cooldown must be a positive number of seconds".to_string()));
    }

    Duration::try_seconds(seconds).ok_or_else(|| invalid("cooldown is out of range".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    /// Tests loading with only the token set.
    ///
    /// Expected: defaults for message, a one hour cooldown and info logging
    #[test]
    fn loads_defaults_with_only_token() {
        let config = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "secret")])).unwrap();

        assert_eq!(config.discord_token, "secret");
        assert_eq!(config.reminder_message, DEFAULT_REMINDER_MESSAGE);
        assert_eq!(config.reminder_cooldown, Duration::hours(1));
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn missing_token_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DISCORD_TOKEN"
        ));
    }

    #[test]
    fn blank_token_is_treated_as_missing() {
        let result = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "   ")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(_)))
        ));
    }

    #[test]
    fn reads_optional_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "secret"),
            ("REMINDER_MESSAGE", "You appear offline."),
            ("REMINDER_COOLDOWN_SECS", "120"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.reminder_message, "You appear offline.");
        assert_eq!(config.reminder_cooldown, Duration::seconds(120));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_non_numeric_cooldown() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "secret"),
            ("REMINDER_COOLDOWN_SECS", "an hour"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. }))
                if name == "REMINDER_COOLDOWN_SECS"
        ));
    }

    #[test]
    fn rejects_zero_cooldown() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "secret"),
            ("REMINDER_COOLDOWN_SECS", "0"),
        ]));

        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "secret"),
            ("LOG_LEVEL", "loud"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. }))
                if name == "LOG_LEVEL"
        ));
    }
}
