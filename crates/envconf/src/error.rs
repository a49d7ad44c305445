//! Error types for the configuration store.
//!
//! Responsibilities:
//! - Define the recoverable failures surfaced by `Section` and `Store`.
//!
//! Does NOT handle:
//! - Parse problems (malformed lines are dropped, missing files degrade to
//!   an empty store; neither is an error).
//! - Value conversion problems (conversions default to zero values).
//!
//! Invariants:
//! - I/O variants always carry the path that was being touched.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by store mutation and persistence.
#[derive(Error, Debug)]
pub enum EnvconfError {
    /// `put` was called without a usable key.
    #[error("Key name must not be empty")]
    EmptyKey,

    /// The key would not read back as the same key once saved.
    #[error("Invalid key {key:?}: must not contain {reason}")]
    InvalidKey { key: String, reason: &'static str },

    #[error("Invalid value for key {key:?}: must not contain a line break")]
    InvalidValue { key: String },

    #[error("Invalid section name {0:?}: must not be blank or padded, nor contain a line break or the comment marker")]
    InvalidSectionName(String),

    #[error("Invalid environment variable name: {0:?}")]
    InvalidEnvName(String),

    #[error("Invalid value for environment variable {name}: value contains a NUL byte")]
    InvalidEnvValue { name: String },

    /// `save` was called on a store that was never given a backing path.
    #[error("No backing file path is set for this store")]
    NoPath,

    #[error("Failed to {op} {}: {source}", path.display())]
    Io {
        op: IoOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The filesystem step that failed during a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    ResolvePath,
    CreateDir,
    Write,
    Backup,
    Replace,
}

impl std::fmt::Display for IoOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IoOp::ResolvePath => "resolve path",
            IoOp::CreateDir => "create directory",
            IoOp::Write => "write",
            IoOp::Backup => "back up",
            IoOp::Replace => "replace",
        };
        f.write_str(text)
    }
}

pub type Result<T, E = EnvconfError> = std::result::Result<T, E>;
