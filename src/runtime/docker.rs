use crate::error::{BackupError, Result};
use log::info;
use tokio::process::Command;

/// The port Qdrant listens on inside its container.
pub const QDRANT_INTERNAL_PORT: u16 = 6333;

/// Resolves the host port Docker has published for a container's internal port.
///
/// This function runs `docker port <container> <internal_port>` and parses the host
/// port out of the runtime's output. It is the only interaction with the container
/// runtime; everything after it speaks HTTP to `http://localhost:<host_port>`.
///
/// # Arguments
///
/// * `container` - Name or ID of the container running Qdrant (e.g., "n8n_qdrant").
/// * `internal_port` - The container-internal port to look up (normally `QDRANT_INTERNAL_PORT`).
///
/// # Returns
///
/// * `Ok(u16)` - The host-mapped port number.
/// * `Err(BackupError::RuntimeQuery)` - The container was not found, is not running,
///   the port is not published, or the output could not be parsed.
pub async fn resolve_host_port(container: &str, internal_port: u16) -> Result<u16> {
    let port_arg = internal_port.to_string();
    let output = Command::new("docker")
        .args(["port", container, port_arg.as_str()])
        .output()
        .await
        .map_err(|e| BackupError::RuntimeQuery {
            container: container.to_string(),
            reason: format!("failed to run docker: {}", e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BackupError::RuntimeQuery {
            container: container.to_string(),
            reason: stderr.trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let host_port = parse_host_port(&stdout).map_err(|e| match e {
        BackupError::RuntimeQuery { reason, .. } => BackupError::RuntimeQuery {
            container: container.to_string(),
            reason,
        },
        other => other,
    })?;

    info!(
        "Resolved container {} port {} -> host port {}",
        container, internal_port, host_port
    );
    Ok(host_port)
}

/// Parses the host port out of `docker port` output.
///
/// Docker prints one published address per line, e.g. `0.0.0.0:49153` or
/// `[::]:49153` when the port is published on both IPv4 and IPv6. The host port is
/// the token after the last colon of the first non-empty line; splitting on the last
/// colon keeps IPv6 addresses intact.
///
/// # Arguments
///
/// * `output` - Raw stdout of `docker port <container> <port>`.
///
/// # Returns
///
/// * `Ok(u16)` - The parsed host port.
/// * `Err(BackupError::RuntimeQuery)` - Empty output, no colon-delimited address, or
///   a non-numeric port token.
pub fn parse_host_port(output: &str) -> Result<u16> {
    let line = output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| BackupError::RuntimeQuery {
            container: String::new(),
            reason: "docker port produced no output (port not published?)".to_string(),
        })?;

    let port_token = line.rsplit(':').next().unwrap_or("");
    port_token
        .parse::<u16>()
        .map_err(|_| BackupError::RuntimeQuery {
            container: String::new(),
            reason: format!("could not parse host port from '{}'", line),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Typical IPv4 publication.
    #[test]
    fn test_parse_host_port_ipv4() {
        assert_eq!(parse_host_port("0.0.0.0:49153\n").unwrap(), 49153);
    }

    /// IPv6 addresses contain colons themselves; the port is still the last token.
    #[test]
    fn test_parse_host_port_ipv6() {
        assert_eq!(parse_host_port("[::]:49153\n").unwrap(), 49153);
    }

    /// Dual-stack output lists one address per line; the first non-empty line wins.
    #[test]
    fn test_parse_host_port_multiline() {
        assert_eq!(parse_host_port("0.0.0.0:6333\n[::]:6333\n").unwrap(), 6333);
    }

    #[test]
    fn test_parse_host_port_empty_output() {
        let err = parse_host_port("").unwrap_err();
        assert!(matches!(err, BackupError::RuntimeQuery { .. }));
        assert!(err.to_string().contains("no output"));
    }

    #[test]
    fn test_parse_host_port_whitespace_only() {
        assert!(parse_host_port("\n  \n").is_err());
    }

    #[test]
    fn test_parse_host_port_malformed() {
        let err = parse_host_port("0.0.0.0:notaport\n").unwrap_err();
        assert!(err.to_string().contains("could not parse host port"));
    }

    /// A bare port with no address still parses (rsplit on ':' yields the whole token).
    #[test]
    fn test_parse_host_port_bare_port() {
        assert_eq!(parse_host_port("49153").unwrap(), 49153);
    }

    #[test]
    fn test_parse_host_port_out_of_range() {
        assert!(parse_host_port("0.0.0.0:99999").is_err());
    }
}
