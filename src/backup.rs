//! # Backup Orchestration
//!
//! This module runs the four-stage backup sequence: resolve the container's host
//! port, list collections, then for each collection trigger a snapshot and download
//! it. The stages run strictly in order with no concurrency between collections; a
//! failure at any point aborts the entire run and propagates the stage's typed
//! error. Snapshot files fully written before the failure are retained on disk, as
//! is the possibly truncated file of a failed download; the log records every file
//! saved so far.

use crate::collections::list_collections;
use crate::error::{BackupError, Result};
use crate::runtime::{resolve_host_port, QDRANT_INTERNAL_PORT};
use crate::snapshot::{create_snapshot, download_snapshot, snapshot_file_name};
use chrono::Local;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Summary of one collection's completed backup.
#[derive(Debug)]
pub struct CollectionBackup {
    /// Name of the backed-up collection.
    pub collection: String,
    /// Server-assigned snapshot name.
    pub snapshot: String,
    /// Path of the local snapshot file.
    pub path: PathBuf,
    /// Size of the local snapshot file in bytes.
    pub bytes: u64,
}

/// Runs a full backup of every collection on the Qdrant instance in `container`.
///
/// Creates `output_dir` if absent, computes a run-scoped timestamp, resolves the
/// host port for the container's internal port 6333, and processes each collection
/// in listing order: trigger snapshot, then stream it to
/// `<output_dir>/<collection>_<timestamp>.snapshot`.
///
/// # Arguments
///
/// * `container` - Name or ID of the container running Qdrant.
/// * `output_dir` - Directory to write snapshot files into (created if absent).
/// * `timeout` - Per-request timeout for every HTTP call of the run.
///
/// # Returns
///
/// * `Ok(Vec<CollectionBackup>)` - One summary row per collection, all non-empty
///   collections backed up.
/// * `Err(BackupError)` - The first stage failure; earlier collections' files are
///   retained on disk.
pub async fn run_backup(
    container: &str,
    output_dir: &Path,
    timeout: Duration,
) -> Result<Vec<CollectionBackup>> {
    tokio::fs::create_dir_all(output_dir).await?;
    let timestamp = run_timestamp();

    let host_port = resolve_host_port(container, QDRANT_INTERNAL_PORT).await?;
    let base_url = format!("http://localhost:{}", host_port);

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| BackupError::Transport {
            reason: format!("failed to build HTTP client: {}", e),
        })?;

    let collections = list_collections(&client, &base_url).await?;

    let mut backups = Vec::with_capacity(collections.len());
    for collection in collections {
        info!("Processing collection: {}", collection);

        let snapshot = create_snapshot(&client, &base_url, &collection).await?;
        let path = output_dir.join(snapshot_file_name(&collection, &timestamp));
        let bytes = download_snapshot(&client, &base_url, &collection, &snapshot, &path).await?;

        backups.push(CollectionBackup {
            collection,
            snapshot,
            path,
            bytes,
        });
    }

    Ok(backups)
}

/// Formats the run-scoped timestamp, computed once per run in local time.
///
/// Second resolution, e.g. `20240101_120000`. Every output file of a run shares
/// this value.
fn run_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The timestamp is 8 digits, an underscore, then 6 digits.
    #[test]
    fn test_run_timestamp_shape() {
        let ts = run_timestamp();
        assert_eq!(ts.len(), 15);
        let (date, time) = ts.split_at(8);
        assert!(date.chars().all(|c| c.is_ascii_digit()));
        assert!(time.starts_with('_'));
        assert!(time[1..].chars().all(|c| c.is_ascii_digit()));
    }

    /// Output paths combine directory, collection, and timestamp as documented.
    #[test]
    fn test_output_path_composition() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir
            .path()
            .join(snapshot_file_name("alpha", "20240101_120000"));
        assert!(path.ends_with("alpha_20240101_120000.snapshot"));
        assert_eq!(path.parent().unwrap(), dir.path());
    }
}
