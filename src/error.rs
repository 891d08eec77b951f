//! # Error Taxonomy for the Backup Pipeline
//!
//! This module defines `BackupError`, the typed error returned by every stage of the
//! backup pipeline. Each variant corresponds to exactly one failure class: container
//! port resolution, an empty backup set, transport/parse failures while listing
//! collections, snapshot creation, and snapshot download. No stage catches or retries
//! errors locally; every failure propagates unchanged to the top level, where it is
//! logged and terminates the run with a non-zero exit status.

use thiserror::Error;

/// Convenience alias used by the stage functions throughout the crate.
pub type Result<T> = std::result::Result<T, BackupError>;

/// Errors raised by the backup pipeline, one variant per stage failure class.
#[derive(Error, Debug)]
pub enum BackupError {
    /// The container runtime could not resolve a published host port: the container
    /// was not found, is not running, the port is not published, or the runtime's
    /// output could not be parsed.
    #[error("Failed to resolve host port for container '{container}': {reason}")]
    RuntimeQuery { container: String, reason: String },

    /// The service reported zero collections. Treated as a terminal condition rather
    /// than a silent no-op; no snapshot files are created.
    #[error("No collections found - nothing to back up")]
    EmptyBackupSet,

    /// Network, HTTP, or JSON failure while listing collections.
    #[error("Failed to list collections: {reason}")]
    Transport { reason: String },

    /// The snapshot-creation endpoint returned a non-2xx status or a body without a
    /// snapshot name.
    #[error("Failed to create snapshot for collection '{collection}': {reason}")]
    SnapshotCreation { collection: String, reason: String },

    /// The snapshot download endpoint returned a non-2xx status or the stream failed
    /// mid-transfer.
    #[error("Failed to download snapshot '{snapshot}' of collection '{collection}': {reason}")]
    Download {
        collection: String,
        snapshot: String,
        reason: String,
    },

    /// Local filesystem failure (output directory creation, file writes).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ensures each variant renders the message a user sees at the top level.
    #[test]
    fn test_error_display() {
        let err = BackupError::RuntimeQuery {
            container: "n8n_qdrant".to_string(),
            reason: "no such container".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to resolve host port for container 'n8n_qdrant': no such container"
        );

        assert_eq!(
            BackupError::EmptyBackupSet.to_string(),
            "No collections found - nothing to back up"
        );

        let err = BackupError::SnapshotCreation {
            collection: "alpha".to_string(),
            reason: "HTTP status 500".to_string(),
        };
        assert!(err.to_string().contains("alpha"));
        assert!(err.to_string().contains("HTTP status 500"));
    }

    /// I/O errors convert into the `Io` variant via `From`.
    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BackupError = io.into();
        assert!(matches!(err, BackupError::Io(_)));
    }
}
