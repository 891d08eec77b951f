//! # Listing Qdrant Collections
//!
//! This module enumerates the collections exposed by a Qdrant instance via a single
//! `GET /collections` request. The response body nests collection descriptors under
//! `result.collections`, each carrying a `name`; only the names are kept. An empty
//! collection list is a terminal condition (`BackupError::EmptyBackupSet`) rather
//! than a silent no-op, so a misconfigured or freshly wiped instance never produces
//! a "successful" run with zero snapshot files.
//!
//! ## Submodules
//!
//! - **listing**: Contains the HTTP request and the response-body parser.

mod listing;

pub use listing::{collection_names, list_collections};
