//! Element count and tick interval, the only inputs the host hands in.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Exclusive upper bound for the number of keys.
pub const MAX_LEN: usize = 1000;

/// Exclusive upper bound for the tick interval in milliseconds.
pub const MAX_INTERVAL_MS: u64 = 10_000;

pub const DEFAULT_LEN: usize = 100;
pub const DEFAULT_INTERVAL_MS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("element count {0} outside of 1..{max}", max = MAX_LEN)]
    LenOutOfRange(usize),
    #[error("tick interval {0}ms outside of 1..{max}", max = MAX_INTERVAL_MS)]
    IntervalOutOfRange(u64),
    #[error("{0:?} is not an integer")]
    NotAnInteger(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub len: usize,
    pub interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

impl Config {
    /// Reads `SORT_RACE_LEN` and `SORT_RACE_INTERVAL_MS`. Missing or invalid values keep the
    /// defaults, invalid ones are logged.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var("SORT_RACE_LEN") {
            match parse_len(&raw) {
                Ok(len) => config.len = len,
                Err(err) => log::warn!("ignoring SORT_RACE_LEN: {err}"),
            }
        }

        if let Ok(raw) = env::var("SORT_RACE_INTERVAL_MS") {
            match parse_interval(&raw) {
                Ok(interval) => config.interval = interval,
                Err(err) => log::warn!("ignoring SORT_RACE_INTERVAL_MS: {err}"),
            }
        }

        config
    }
}

pub fn validate_len(len: usize) -> Result<usize, ConfigError> {
    if (1..MAX_LEN).contains(&len) {
        Ok(len)
    } else {
        Err(ConfigError::LenOutOfRange(len))
    }
}

pub fn validate_interval_ms(interval_ms: u64) -> Result<Duration, ConfigError> {
    if (1..MAX_INTERVAL_MS).contains(&interval_ms) {
        Ok(Duration::from_millis(interval_ms))
    } else {
        Err(ConfigError::IntervalOutOfRange(interval_ms))
    }
}

/// Parses host input such as `"250"`. Fractions, signs and garbage are rejected.
pub fn parse_len(raw: &str) -> Result<usize, ConfigError> {
    let len = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::NotAnInteger(raw.to_owned()))?;

    validate_len(len)
}

pub fn parse_interval(raw: &str) -> Result<Duration, ConfigError> {
    let interval_ms = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::NotAnInteger(raw.to_owned()))?;

    validate_interval_ms(interval_ms)
}
