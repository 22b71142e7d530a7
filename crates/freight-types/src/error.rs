//! Error types for freight-market

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Reference catalog errors (cities, cargo, clients, distance tables)
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    #[error("Duplicate city in catalog: {0}")]
    DuplicateCity(String),

    #[error("Cargo category '{0}' has no compatible trailer types")]
    NoTrailerTypes(String),

    #[error("Cargo category '{0}' has no example items")]
    NoExampleItems(String),

    #[error("Catalog has no cargo categories")]
    NoCargo,

    #[error("Catalog has no clients")]
    NoClients,

    #[error("Invalid distance in row {row}: {value}")]
    InvalidDistance { row: usize, value: String },

    #[error("Malformed distance row {row}: expected city_a,city_b,km")]
    MalformedRow { row: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
