//! Error types for typed access and `.env` loading.
//!
//! Responsibilities:
//! - Define the failures a strict accessor can report.
//! - Define the failures the file loader can observe while overlaying a `.env` file.
//!
//! Invariants:
//! - Every variant carries the variable name or file path it concerns.
//! - Dotenv errors NEVER include raw `.env` line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the non-default accessors under strict policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("environment variable [{name}] not set")]
    MissingVariable { name: String },

    #[error("environment variable [{name}] not an int: {raw:?}")]
    InvalidInt { name: String, raw: String },

    #[error("environment variable [{name}] not a boolean: {raw:?}")]
    InvalidBool { name: String, raw: String },

    #[error("environment variable [{name}] not a valid {expected}: {raw:?}")]
    InvalidValue {
        name: String,
        raw: String,
        expected: &'static str,
    },
}

impl EnvError {
    /// Name of the variable the error concerns.
    pub fn name(&self) -> &str {
        match self {
            EnvError::MissingVariable { name }
            | EnvError::InvalidInt { name, .. }
            | EnvError::InvalidBool { name, .. }
            | EnvError::InvalidValue { name, .. } => name,
        }
    }
}

/// Errors that can occur while overlaying a `.env` file onto the process environment.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("no path provided")]
    EmptyPath,

    /// Invalid syntax in the `.env` file.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error("failed to parse file [{}] at position {error_index}", .path.display())]
    Parse { path: PathBuf, error_index: usize },

    /// The `.env` file could not be read.
    #[error("failed to read file [{}]: {kind}", .path.display())]
    Io { path: PathBuf, kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("failed to load file [{}]", .path.display())]
    Unknown { path: PathBuf },
}

impl LoadError {
    pub(crate) fn from_dotenv(path: PathBuf, error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, error_index) => LoadError::Parse { path, error_index },
            dotenvy::Error::Io(io_err) => LoadError::Io {
                path,
                kind: io_err.kind(),
            },
            _ => LoadError::Unknown { path },
        }
    }
}
