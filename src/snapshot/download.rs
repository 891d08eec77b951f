use crate::error::{BackupError, Result};
use futures::StreamExt;
use log::info;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Downloads a snapshot and writes it to a local file.
///
/// Sends a streamed `GET {base_url}/collections/{collection}/snapshots/{snapshot}`
/// and writes the body to `dest` chunk by chunk, so memory stays bounded regardless
/// of snapshot size. The file handle is scope-released on both success and failure
/// paths; on a mid-transfer failure a truncated file may remain at `dest`.
///
/// # Arguments
///
/// * `client` - The shared HTTP client.
/// * `base_url` - Base URL of the Qdrant instance.
/// * `collection` - Name of the snapshotted collection.
/// * `snapshot` - Server-assigned snapshot name from the trigger step.
/// * `dest` - Path of the local output file.
///
/// # Returns
///
/// * `Ok(u64)` - Total bytes written to `dest`.
/// * `Err(BackupError::Download)` - Non-2xx status or a failed stream read.
/// * `Err(BackupError::Io)` - The local file could not be created or written.
pub async fn download_snapshot(
    client: &reqwest::Client,
    base_url: &str,
    collection: &str,
    snapshot: &str,
    dest: &Path,
) -> Result<u64> {
    let url = format!(
        "{}/collections/{}/snapshots/{}",
        base_url, collection, snapshot
    );
    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|e| BackupError::Download {
            collection: collection.to_string(),
            snapshot: snapshot.to_string(),
            reason: format!("GET {} failed: {}", url, e),
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(BackupError::Download {
            collection: collection.to_string(),
            snapshot: snapshot.to_string(),
            reason: format!("HTTP status {}", status),
        });
    }

    let mut file = File::create(dest).await?;
    let mut stream = resp.bytes_stream();
    let mut total_bytes: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| BackupError::Download {
            collection: collection.to_string(),
            snapshot: snapshot.to_string(),
            reason: format!("stream error after {} bytes: {}", total_bytes, e),
        })?;
        file.write_all(&chunk).await?;
        total_bytes += chunk.len() as u64;
    }
    file.flush().await?;

    info!(
        "Saved {:.2} KB to {}",
        total_bytes as f64 / 1024.0,
        dest.display()
    );
    Ok(total_bytes)
}

/// Builds the output file name for a collection's snapshot.
///
/// The pattern is `<collection>_<timestamp>.snapshot`, with the timestamp shared by
/// every file of a run. Two runs within the same second produce identical names and
/// the later run overwrites the earlier one; with a second-resolution timestamp this
/// is documented behavior, not guarded against.
///
/// # Examples
///
/// ```rust
/// use qdrant_backup::snapshot::snapshot_file_name;
/// assert_eq!(
///     snapshot_file_name("alpha", "20240101_120000"),
///     "alpha_20240101_120000.snapshot"
/// );
/// ```
pub fn snapshot_file_name(collection: &str, timestamp: &str) -> String {
    format!("{}_{}.snapshot", collection, timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The documented naming pattern for a fixed timestamp.
    #[test]
    fn test_snapshot_file_name_pattern() {
        assert_eq!(
            snapshot_file_name("alpha", "20240101_120000"),
            "alpha_20240101_120000.snapshot"
        );
        assert_eq!(
            snapshot_file_name("beta", "20240101_120000"),
            "beta_20240101_120000.snapshot"
        );
    }

    /// The same run timestamp yields one distinct file per collection.
    #[test]
    fn test_snapshot_file_names_distinct_per_collection() {
        let ts = "20240101_120000";
        assert_ne!(snapshot_file_name("alpha", ts), snapshot_file_name("beta", ts));
    }
}
