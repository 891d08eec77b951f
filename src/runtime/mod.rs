//! # Resolving the Qdrant Host Port from the Container Runtime
//!
//! This module queries Docker for the host-side mapping of the Qdrant service's
//! well-known internal port (6333). It shells out to `docker port <container> <port>`
//! and parses the numeric host port out of the colon-delimited address the runtime
//! prints (e.g., "0.0.0.0:49153"). Resolution happens once per run, before any HTTP
//! call is made; if the container is not found, not running, or the port is not
//! published, the run terminates with `BackupError::RuntimeQuery`.
//!
//! ## Submodules
//!
//! - **docker**: Contains the subprocess invocation and the address-string parser.

mod docker;

pub use docker::{parse_host_port, resolve_host_port, QDRANT_INTERNAL_PORT};
