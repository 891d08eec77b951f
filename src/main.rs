//! Qdrant Backup: Snapshot Every Collection of a Containerized Qdrant Instance
//!
//! This application performs a point-in-time backup of a Qdrant vector database
//! running in a Docker container. It resolves the host port Docker published for
//! Qdrant's internal port 6333, lists all collections over HTTP, triggers a
//! server-side snapshot per collection, and streams each snapshot to a timestamped
//! file in the output directory.
//!
//! ## Design Overview
//! - **Port resolution**: Maps the container's internal port to a host port via the
//!   `runtime` module (shelling out to `docker port`).
//! - **Listing**: Enumerates collection names using the `collections` module.
//! - **Snapshotting**: Creates and downloads one snapshot per collection via the
//!   `snapshot` module, strictly sequentially, aborting the run on the first failure.
//!
//! ## Dependencies
//! - **`reqwest`**: HTTP requests to the Qdrant REST API, including the streamed
//!   snapshot download.
//! - **`tokio`**: Async runtime for network, subprocess, and file I/O.
//! - **`clap`**: Command-line argument parsing.
//! - **`log` and `env_logger`**: Structured logging instead of `println!`.
//! - **`thiserror` and `anyhow`**: Typed stage errors, wrapped with context at the
//!   top level.
//! - **`chrono`**: The run-scoped timestamp embedded in output file names.
//! - **`serde_json`**: Parsing the Qdrant API's JSON response bodies.
//!
//! ## Usage
//! 1. Ensure the Qdrant container is running with port 6333 published, e.g.:
//!    ```sh
//!    docker run -d --name n8n_qdrant -p 6333 qdrant/qdrant
//!    ```
//! 2. Run the backup:
//!    ```sh
//!    cargo run -- --container n8n_qdrant --output /var/backups/qdrant
//!    ```
//! 3. Logs are controlled by the `RUST_LOG` environment variable:
//!    ```sh
//!    export RUST_LOG=info
//!    cargo run -- -c n8n_qdrant -o /var/backups/qdrant
//!    ```
//!
//! ## Notes
//! - One file per collection is written as
//!   `<output_dir>/<collection>_<YYYYMMDD_HHMMSS>.snapshot`; re-running within the
//!   same second overwrites the previous run's files.
//! - Any failure aborts the whole run with a non-zero exit status. Files written
//!   before the failure are retained.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line arguments for the Qdrant backup tool.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Name or ID of the Docker container running Qdrant.
    #[clap(short, long)]
    container: String,

    /// Directory to write snapshot files into (created if absent).
    #[clap(short, long)]
    output: PathBuf,

    /// Per-request timeout in seconds for every HTTP call.
    #[clap(long, default_value_t = 30)]
    timeout_secs: u64,
}

/// Orchestrates the backup run and reports the outcome.
///
/// Parses arguments, runs the backup pipeline, and logs one line per saved
/// snapshot. Any stage failure propagates here and terminates the process with a
/// non-zero exit status after the error is printed.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    info!("Starting Qdrant backup for container: {}", args.container);

    let backups = qdrant_backup::backup::run_backup(
        &args.container,
        &args.output,
        Duration::from_secs(args.timeout_secs),
    )
    .await
    .context("Backup run failed")?;

    for backup in &backups {
        info!(
            "Backed up collection {} ({} bytes) -> {}",
            backup.collection,
            backup.bytes,
            backup.path.display()
        );
    }
    info!("Backup complete: {} collection(s)", backups.len());

    Ok(())
}
