use crate::error::{BackupError, Result};
use log::info;
use serde_json::Value;

/// Triggers server-side snapshot creation for one collection.
///
/// Sends `POST {base_url}/collections/{collection}/snapshots` and reads the
/// server-assigned snapshot name out of the response body. Qdrant performs the
/// snapshot synchronously, so a 2xx response means the snapshot is ready for
/// download.
///
/// # Arguments
///
/// * `client` - The shared HTTP client.
/// * `base_url` - Base URL of the Qdrant instance.
/// * `collection` - Name of the collection to snapshot.
///
/// # Returns
///
/// * `Ok(String)` - The server-assigned snapshot name.
/// * `Err(BackupError::SnapshotCreation)` - Non-2xx status, network failure, or a
///   body without `result.name`.
pub async fn create_snapshot(
    client: &reqwest::Client,
    base_url: &str,
    collection: &str,
) -> Result<String> {
    let url = format!("{}/collections/{}/snapshots", base_url, collection);
    let resp = client
        .post(&url)
        .send()
        .await
        .map_err(|e| BackupError::SnapshotCreation {
            collection: collection.to_string(),
            reason: format!("POST {} failed: {}", url, e),
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(BackupError::SnapshotCreation {
            collection: collection.to_string(),
            reason: format!("HTTP status {}", status),
        });
    }

    let body: Value = resp
        .json()
        .await
        .map_err(|e| BackupError::SnapshotCreation {
            collection: collection.to_string(),
            reason: format!("invalid JSON response: {}", e),
        })?;

    let name = snapshot_name(&body).map_err(|e| match e {
        BackupError::SnapshotCreation { reason, .. } => BackupError::SnapshotCreation {
            collection: collection.to_string(),
            reason,
        },
        other => other,
    })?;

    info!("Created snapshot: {}", name);
    Ok(name)
}

/// Extracts the server-assigned snapshot name from a creation response body.
///
/// The expected shape is `{ "result": { "name": "..." } }`.
///
/// # Arguments
///
/// * `body` - The parsed response body.
///
/// # Returns
///
/// * `Ok(String)` - The snapshot name.
/// * `Err(BackupError::SnapshotCreation)` - `result.name` missing or not a string.
pub fn snapshot_name(body: &Value) -> Result<String> {
    body["result"]["name"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| BackupError::SnapshotCreation {
            collection: String::new(),
            reason: "response body missing result.name".to_string(),
        })
}
