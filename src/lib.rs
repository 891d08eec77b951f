//! Qdrant Backup Library
//!
//! This library provides functionality to resolve a containerized Qdrant
//! instance's host port, enumerate its collections, and create and download
//! per-collection snapshots to local disk.

pub mod backup;
pub mod collections;
pub mod error;
pub mod runtime;
pub mod snapshot;
