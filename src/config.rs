// Configuration lue depuis l'environnement (.env chargé par dotenv dans main)

use std::env;
use thiserror::Error;

use crate::utils::password::DEFAULT_ITERATIONS;

const DEFAULT_DATABASE_URL: &str = "sqlite://fixitbot.db?mode=rwc";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub password_iterations: u32,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construit la config à partir d'une fonction de lecture des variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: raw })?,
            None => 8080,
        };

        let password_iterations = match lookup("PASSWORD_ITERATIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidValue { key: "PASSWORD_ITERATIONS", value: raw }),
            },
            None => DEFAULT_ITERATIONS,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            password_iterations,
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
