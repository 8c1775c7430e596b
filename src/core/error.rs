use thiserror::Error;

/// Load-time failures for combat data
#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid weapon {weapon}: {reason}")]
    InvalidWeapon { weapon: String, reason: String },

    #[error("Invalid combat rules: {0}")]
    InvalidRules(String),

    #[error("Duplicate weapon: {0}")]
    DuplicateWeapon(String),

    #[error("Weapon not found: {0}")]
    UnknownWeapon(String),
}

pub type Result<T> = std::result::Result<T, DataError>;
