// src/infra/errors.rs — Error types for hodlbot

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HodlbotError {
    /// A matcher's `respond` gave up mid-turn. The dispatch loop treats this
    /// as "could not handle" and continues down the chain.
    #[error("matcher '{matcher}' failed: {message}")]
    Matcher {
        matcher: &'static str,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid config file: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
