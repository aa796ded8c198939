//! Container runtime info via `docker info`.

use hostcheck_common::error::{HostcheckError, Result};
use hostcheck_core::provider::{RuntimeInfo, RuntimeInfoProvider};
use serde::Deserialize;

use super::run_runtime;

/// Subset of `docker info --format '{{json .}}'` that validation reads.
#[derive(Debug, Default, Deserialize)]
struct DockerInfo {
    #[serde(rename = "Driver", default)]
    driver: String,
    #[serde(rename = "ServerVersion", default)]
    server_version: String,
}

/// [`RuntimeInfoProvider`] that shells out to the runtime CLI.
#[derive(Debug, Clone)]
pub struct DockerInfoProvider {
    binary: String,
}

impl DockerInfoProvider {
    /// Creates a provider for the given runtime binary.
    #[must_use]
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl RuntimeInfoProvider for DockerInfoProvider {
    fn validate_info(&self) -> Result<RuntimeInfo> {
        let raw = run_runtime(&self.binary, &["info", "--format", "{{json .}}"])?;
        parse_info(&raw)
    }
}

/// Parses and validates `docker info` JSON.
fn parse_info(raw: &str) -> Result<RuntimeInfo> {
    let info: DockerInfo = serde_json::from_str(raw)?;
    if info.server_version.is_empty() {
        return Err(HostcheckError::Provider {
            provider: "docker info",
            message: "failed to detect runtime server version".to_owned(),
        });
    }
    if info.driver.is_empty() {
        return Err(HostcheckError::Provider {
            provider: "docker info",
            message: "failed to find runtime storage driver".to_owned(),
        });
    }
    Ok(RuntimeInfo {
        storage_driver: info.driver,
        server_version: info.server_version,
    })
}
