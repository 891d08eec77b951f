use crate::error::{BackupError, Result};
use log::info;
use serde_json::Value;

/// Lists the names of all collections on a Qdrant instance.
///
/// Sends `GET {base_url}/collections` and extracts the collection names from the
/// response body. Network failures, non-2xx statuses, and malformed JSON all map to
/// `BackupError::Transport`; an empty collection list maps to
/// `BackupError::EmptyBackupSet` before any snapshot work starts.
///
/// # Arguments
///
/// * `client` - The shared HTTP client (carries the run's request timeout).
/// * `base_url` - Base URL of the Qdrant instance (e.g., "http://localhost:49153").
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Collection names in the order the service reported them.
/// * `Err(BackupError)` - `Transport` on HTTP/parse failure, `EmptyBackupSet` if the
///   service reports zero collections.
pub async fn list_collections(client: &reqwest::Client, base_url: &str) -> Result<Vec<String>> {
    let url = format!("{}/collections", base_url);
    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|e| BackupError::Transport {
            reason: format!("GET {} failed: {}", url, e),
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(BackupError::Transport {
            reason: format!("GET {} returned HTTP status {}", url, status),
        });
    }

    let body: Value = resp.json().await.map_err(|e| BackupError::Transport {
        reason: format!("invalid JSON from {}: {}", url, e),
    })?;

    let names = collection_names(&body)?;
    if names.is_empty() {
        return Err(BackupError::EmptyBackupSet);
    }

    info!("Found {} collection(s)", names.len());
    Ok(names)
}

/// Extracts collection names from a `GET /collections` response body.
///
/// The expected shape is `{ "result": { "collections": [ { "name": "..." }, ... ] } }`.
/// An empty `collections` array yields an empty vector; deciding whether that is
/// terminal belongs to the caller.
///
/// # Arguments
///
/// * `body` - The parsed response body.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The collection names, in listing order.
/// * `Err(BackupError::Transport)` - The nested key is missing or a descriptor has
///   no string `name`.
pub fn collection_names(body: &Value) -> Result<Vec<String>> {
    let collections = body["result"]["collections"]
        .as_array()
        .ok_or_else(|| BackupError::Transport {
            reason: "response body missing result.collections array".to_string(),
        })?;

    let mut names = Vec::with_capacity(collections.len());
    for descriptor in collections {
        let name = descriptor["name"]
            .as_str()
            .ok_or_else(|| BackupError::Transport {
                reason: format!("collection descriptor missing name: {}", descriptor),
            })?;
        names.push(name.to_string());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Names come back in listing order, extra descriptor fields ignored.
    #[test]
    fn test_collection_names_extracts_in_order() {
        let body = json!({
            "result": {
                "collections": [
                    { "name": "alpha", "vectors_count": 120 },
                    { "name": "beta" }
                ]
            },
            "status": "ok",
            "time": 0.000045
        });
        assert_eq!(collection_names(&body).unwrap(), vec!["alpha", "beta"]);
    }

    /// An empty array is not an error at this layer.
    #[test]
    fn test_collection_names_empty_array() {
        let body = json!({ "result": { "collections": [] } });
        assert!(collection_names(&body).unwrap().is_empty());
    }

    #[test]
    fn test_collection_names_missing_key() {
        let body = json!({ "result": {} });
        let err = collection_names(&body).unwrap_err();
        assert!(matches!(err, BackupError::Transport { .. }));
        assert!(err.to_string().contains("result.collections"));
    }

    #[test]
    fn test_collection_names_descriptor_without_name() {
        let body = json!({ "result": { "collections": [ { "vectors_count": 3 } ] } });
        let err = collection_names(&body).unwrap_err();
        assert!(err.to_string().contains("missing name"));
    }
}
