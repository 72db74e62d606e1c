use std::env;

use crate::constants::messages::Locale;
use crate::errors::{AppError, AppResult};

pub const DEFAULT_PASSWORD_MIN: usize = 6;
pub const DEFAULT_MESSAGE_MIN: usize = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub locale: Locale,
    pub password_min_length: usize,
    pub message_min_length: usize,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::Hu,
            password_min_length: DEFAULT_PASSWORD_MIN,
            message_min_length: DEFAULT_MESSAGE_MIN,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Reads `REBEL_PAGE_*` variables, after loading a `.env` file if one exists.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let locale = match env::var("REBEL_PAGE_LOCALE") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::Config(format!("unknown locale '{}'", raw)))?,
            Err(_) => defaults.locale,
        };

        Ok(Self {
            locale,
            password_min_length: parse_length("REBEL_PAGE_PASSWORD_MIN")?
                .unwrap_or(defaults.password_min_length),
            message_min_length: parse_length("REBEL_PAGE_MESSAGE_MIN")?
                .unwrap_or(defaults.message_min_length),
            log_filter: env::var("REBEL_PAGE_LOG").unwrap_or(defaults.log_filter),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            locale: Locale::En,
            log_filter: "debug".to_string(),
            ..Self::default()
        }
    }
}

fn parse_length(key: &str) -> AppResult<Option<usize>> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::Config(format!("{} must be a non-negative integer, got '{}'", key, raw))),
        Err(_) => Ok(None),
    }
}

/// Installs the `env_logger` backend. Safe to call more than once.
pub fn init_logging(config: &Config) {
    let result = env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .format_timestamp_millis()
        .try_init();

    if result.is_ok() {
        log::debug!("logging initialised with filter '{}'", config.log_filter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = Config::default();

        assert_eq!(config.locale, Locale::Hu);
        assert_eq!(config.password_min_length, 6);
        assert_eq!(config.message_min_length, 10);
    }

    // One test owns the REBEL_PAGE_* variables so parallel tests never race on them.
    #[test]
    fn test_config_from_env() {
        const KEYS: [&str; 4] = [
            "REBEL_PAGE_LOCALE",
            "REBEL_PAGE_PASSWORD_MIN",
            "REBEL_PAGE_MESSAGE_MIN",
            "REBEL_PAGE_LOG",
        ];
        for key in KEYS {
            env::remove_var(key);
        }

        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config.locale, Locale::Hu);
        assert_eq!(config.password_min_length, DEFAULT_PASSWORD_MIN);
        assert_eq!(config.message_min_length, DEFAULT_MESSAGE_MIN);
        assert_eq!(config.log_filter, "info");

        env::set_var("REBEL_PAGE_LOCALE", "en");
        env::set_var("REBEL_PAGE_PASSWORD_MIN", "8");
        env::set_var("REBEL_PAGE_MESSAGE_MIN", " 12 ");
        env::set_var("REBEL_PAGE_LOG", "debug");
        let config = Config::from_env().expect("overrides should load");
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.password_min_length, 8);
        assert_eq!(config.message_min_length, 12);
        assert_eq!(config.log_filter, "debug");

        env::set_var("REBEL_PAGE_LOCALE", "klingon");
        let err = Config::from_env().unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");

        env::set_var("REBEL_PAGE_LOCALE", "hu");
        env::set_var("REBEL_PAGE_PASSWORD_MIN", "six");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("REBEL_PAGE_PASSWORD_MIN"));

        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.password_min_length, DEFAULT_PASSWORD_MIN);
        assert_eq!(config.message_min_length, DEFAULT_MESSAGE_MIN);
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        let config = Config::test_config();
        init_logging(&config);
        init_logging(&config);
    }
}
