//! Configuration model for the host probes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{HostcheckError, Result};

/// Host paths and binaries consulted while building a report.
///
/// Every field has a default, so a config file may override any subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostcheckConfig {
    /// Enabled cgroup subsystem table.
    pub proc_cgroups: PathBuf,
    /// Process mount information used to resolve cgroup mounts.
    pub mountinfo: PathBuf,
    /// System-wide mount table.
    pub mounts: PathBuf,
    /// Mount point probed for the cgroups v2 unified hierarchy.
    pub unified_root: PathBuf,
    /// Block device directory.
    pub sys_block: PathBuf,
    /// Operating system identification file.
    pub os_release: PathBuf,
    /// Root path handed to the cgroup mountpoint resolver.
    pub cgroup_root: PathBuf,
    /// Container runtime binary name or path.
    pub runtime_binary: String,
}

impl Default for HostcheckConfig {
    fn default() -> Self {
        Self {
            proc_cgroups: PathBuf::from(constants::PROC_CGROUPS),
            mountinfo: PathBuf::from(constants::PROC_SELF_MOUNTINFO),
            mounts: PathBuf::from(constants::PROC_MOUNTS),
            unified_root: PathBuf::from(constants::CGROUP_ROOT),
            sys_block: PathBuf::from(constants::SYS_BLOCK),
            os_release: PathBuf::from(constants::OS_RELEASE),
            cgroup_root: PathBuf::from(constants::RESOLVER_ROOT),
            runtime_binary: constants::RUNTIME_BINARY.to_owned(),
        }
    }
}

impl HostcheckConfig {
    /// Loads a JSON configuration file, filling absent keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// names an empty runtime binary.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| HostcheckError::io(path, e))?;
        let config: Self = serde_json::from_str(&content)?;
        if config.runtime_binary.trim().is_empty() {
            return Err(HostcheckError::Config {
                message: format!("{}: runtime_binary must not be empty", path.display()),
            });
        }
        Ok(config)
    }
}
