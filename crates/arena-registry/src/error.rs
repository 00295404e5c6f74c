//! Registry error types.
//!
//! Resolution itself never fails; these are raised only while building a
//! registry from configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Model id must not be empty")]
    EmptyModelId,

    #[error("Display name must not be empty for model: {0}")]
    EmptyDisplayName(String),

    #[error("Invalid color '{color}': expected #rgb or #rrggbb")]
    InvalidColor { color: String },

    #[error("Duplicate model id: {0}")]
    DuplicateModel(String),

    #[error("Alias must not be empty (target: {0})")]
    EmptyAlias(String),

    #[error("Alias '{alias}' points to unknown model: {target}")]
    UnknownAliasTarget { alias: String, target: String },

    #[error("Invalid heuristic pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Heuristic '{pattern}' points to unknown model: {target}")]
    UnknownHeuristicTarget { pattern: String, target: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
