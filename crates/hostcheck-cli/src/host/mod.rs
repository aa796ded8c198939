//! Host-backed collaborators for report assembly.
//!
//! [`manager::HostManager`] answers version, machine, and debug queries
//! from the running system; [`docker::DockerInfoProvider`] asks the
//! container runtime about itself.

pub mod docker;
pub mod manager;

use std::process::Command;

use hostcheck_common::error::{HostcheckError, Result};

/// Runs the runtime binary with `args` and returns its trimmed stdout.
///
/// # Errors
///
/// Returns an error if the binary is not on `PATH`, cannot be spawned, or
/// exits unsuccessfully.
pub fn run_runtime(binary: &str, args: &[&str]) -> Result<String> {
    let path = which::which(binary).map_err(|e| HostcheckError::Provider {
        provider: "runtime",
        message: format!("{binary} not found: {e}"),
    })?;
    tracing::debug!(binary = %path.display(), ?args, "querying container runtime");
    let output = Command::new(&path)
        .args(args)
        .output()
        .map_err(|e| HostcheckError::io(&path, e))?;
    if !output.status.success() {
        return Err(HostcheckError::Provider {
            provider: "runtime",
            message: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}
