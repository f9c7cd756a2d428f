//! Error types for provenance generation.

use std::path::PathBuf;

/// Errors raised while generating a provenance statement.
#[derive(Debug, thiserror::Error)]
pub enum ProvenanceError {
    /// An artifact root given by the caller does not exist.
    #[error("Resource path not found: [provided={}]", .path.display())]
    ArtifactNotFound {
        /// The artifact root as supplied.
        path: PathBuf,
    },

    /// Directory traversal failed below an artifact root.
    #[error("failed to walk artifacts: {0}")]
    WalkError(#[from] walkdir::Error),

    /// An artifact file could not be read.
    #[error("failed to read artifact `{}`: {source}", .path.display())]
    IoError {
        /// The file being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A build or agent context blob is not valid JSON for its schema.
    #[error("malformed {context} context: {source}")]
    ContextError {
        /// Which context failed (`"build"` or `"agent"`).
        context: &'static str,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// Failed to serialize the statement.
    #[error("failed to serialize provenance: {0}")]
    SerializeError(#[from] serde_json::Error),
}

impl ProvenanceError {
    /// Whether the error is user-correctable input rather than an
    /// unexpected failure.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::ArtifactNotFound { .. })
    }
}
