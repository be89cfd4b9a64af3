//! Error types
//!
//! Nothing in the per-tick path returns an error. These surface at startup
//! (bad settings, impossible spawn configuration) or on run restart.

use std::path::PathBuf;

use thiserror::Error;

use crate::sim::EntityKind;

/// Rejection sampling could not place a disc clear of the player
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not place {kind} #{index} clear of the player after {attempts} attempts")]
pub struct SpawnError {
    pub kind: EntityKind,
    pub index: usize,
    pub attempts: u32,
}

/// Settings could not be loaded or describe an unplayable board
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error(transparent)]
    Spawn(#[from] SpawnError),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
