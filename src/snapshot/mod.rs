//! # Creating and Downloading Qdrant Snapshots
//!
//! This module covers the per-collection half of the pipeline: asking Qdrant to
//! create a server-side snapshot of a collection, then streaming the resulting
//! snapshot file to local disk. A snapshot exists only between creation and download
//! completion; the downloaded file, named `<collection>_<timestamp>.snapshot`, is
//! its durable form. Each collection passes through trigger then download
//! independently and sequentially; a failure on either step aborts the run.
//!
//! ## Submodules
//!
//! - **trigger**: Requests snapshot creation and extracts the server-assigned name.
//! - **download**: Streams the snapshot bytes to a timestamped output file.

mod download;
mod trigger;

pub use download::{download_snapshot, snapshot_file_name};
pub use trigger::{create_snapshot, snapshot_name};
