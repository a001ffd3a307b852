use std::{env, fmt::Display, str::FromStr};

use log::{info, warn};

/// Runtime configuration, read from the environment once at startup.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            host: try_load("FLASHCARDS_HOST", "127.0.0.1"),
            port: try_load("FLASHCARDS_PORT", "8080"),
            database_path: try_load("FLASHCARDS_DB", "flashcards.sqlite"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
