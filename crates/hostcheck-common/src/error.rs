//! Unified error type for the hostcheck workspace.
//!
//! Classifiers never surface these to the report caller: they fold them
//! into a tier and an explanation. Only the initial version-info fetch
//! propagates an error out of report assembly.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum HostcheckError {
    /// A host file or directory could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Host data or a version string did not have the expected shape.
    #[error("failed to parse {what}: {input:?}")]
    Parse {
        /// What was being parsed.
        what: &'static str,
        /// The offending input.
        input: String,
    },

    /// No mount was found for a cgroup subsystem.
    #[error("cgroup subsystem {subsystem} is not mounted")]
    NotMounted {
        /// Subsystem that was looked up.
        subsystem: String,
    },

    /// An external collaborator failed to supply its data.
    #[error("{provider} failed: {message}")]
    Provider {
        /// Name of the failing collaborator.
        provider: &'static str,
        /// Description of the failure.
        message: String,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

impl HostcheckError {
    /// Builds an [`HostcheckError::Io`] for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, HostcheckError>;
