//! Version, machine, and debug facts read from the running host.

use std::path::Path;

use hostcheck_common::config::HostcheckConfig;
use hostcheck_common::error::{HostcheckError, Result};
use hostcheck_core::provider::{ContainerManager, DebugInfo, DiskInfo, MachineInfo, VersionInfo};

use super::run_runtime;

/// Block device name prefixes that never carry container I/O.
const IGNORED_DEVICE_PREFIXES: &[&str] = &["loop", "ram"];

/// [`ContainerManager`] backed by `uname`, os-release, sysfs, and the runtime CLI.
#[derive(Debug, Clone)]
pub struct HostManager {
    config: HostcheckConfig,
}

impl HostManager {
    /// Creates a manager reading the configured host paths.
    #[must_use]
    pub const fn new(config: HostcheckConfig) -> Self {
        Self { config }
    }

    fn runtime_version(&self) -> String {
        match run_runtime(
            &self.config.runtime_binary,
            &["version", "--format", "{{.Server.Version}}"],
        ) {
            Ok(version) => version,
            Err(e) => {
                tracing::warn!(error = %e, "runtime version unavailable");
                String::new()
            }
        }
    }
}

impl ContainerManager for HostManager {
    fn version_info(&self) -> Result<VersionInfo> {
        let os_version = std::fs::read_to_string(&self.config.os_release)
            .ok()
            .and_then(|content| pretty_name(&content))
            .unwrap_or_else(|| "Unknown".to_owned());
        Ok(VersionInfo {
            agent_version: env!("CARGO_PKG_VERSION").to_owned(),
            os_version,
            kernel_version: kernel_release()?,
            runtime_version: self.runtime_version(),
        })
    }

    fn machine_info(&self) -> Result<MachineInfo> {
        read_disk_map(&self.config.sys_block)
    }

    fn debug_info(&self) -> DebugInfo {
        let c = &self.config;
        let lines: Vec<String> = [
            ("proc_cgroups", c.proc_cgroups.as_path()),
            ("mountinfo", c.mountinfo.as_path()),
            ("mounts", c.mounts.as_path()),
            ("unified_root", c.unified_root.as_path()),
            ("sys_block", c.sys_block.as_path()),
            ("os_release", c.os_release.as_path()),
            ("cgroup_root", c.cgroup_root.as_path()),
        ]
        .iter()
        .map(|(key, path)| format!("{key}: {}", path.display()))
        .chain(std::iter::once(format!("runtime_binary: {}", c.runtime_binary)))
        .collect();
        DebugInfo::from([("Probe paths".to_owned(), lines)])
    }
}

#[cfg(target_os = "linux")]
fn kernel_release() -> Result<String> {
    Ok(nix::sys::utsname::uname()
        .map_err(|e| HostcheckError::Provider {
            provider: "uname",
            message: e.to_string(),
        })?
        .release()
        .to_string_lossy()
        .into_owned())
}

#[cfg(not(target_os = "linux"))]
fn kernel_release() -> Result<String> {
    Err(HostcheckError::Provider {
        provider: "uname",
        message: "Linux required for kernel validation".into(),
    })
}

/// Extracts `PRETTY_NAME` from os-release content.
fn pretty_name(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|value| value.trim().trim_matches('"').to_owned())
        .filter(|value| !value.is_empty())
}

/// Returns the active scheduler from a `queue/scheduler` line.
///
/// The active entry is bracketed (`mq-deadline [bfq] none`); a single
/// unbracketed entry is taken as-is.
fn active_scheduler(content: &str) -> String {
    let entries: Vec<&str> = content.split_whitespace().collect();
    entries
        .iter()
        .find_map(|e| e.strip_prefix('[')?.strip_suffix(']'))
        .or(match entries.as_slice() {
            [only] => Some(*only),
            _ => None,
        })
        .unwrap_or("none")
        .to_owned()
}

/// Builds the disk map from a `/sys/block` style directory.
fn read_disk_map(sys_block: &Path) -> Result<MachineInfo> {
    let entries = std::fs::read_dir(sys_block).map_err(|e| HostcheckError::io(sys_block, e))?;
    let mut info = MachineInfo::default();
    for entry in entries {
        let entry = entry.map_err(|e| HostcheckError::io(sys_block, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if IGNORED_DEVICE_PREFIXES.iter().any(|p| name.starts_with(p)) {
            continue;
        }
        let dir = entry.path();
        let device = std::fs::read_to_string(dir.join("dev"))
            .map(|d| d.trim().to_owned())
            .unwrap_or_else(|_| name.clone());
        let scheduler = std::fs::read_to_string(dir.join("queue/scheduler"))
            .map(|s| active_scheduler(&s))
            .unwrap_or_else(|_| "none".to_owned());
        tracing::debug!(disk = %name, %device, %scheduler, "block device");
        let _ = info.disk_map.insert(device, DiskInfo { name, scheduler });
    }
    Ok(info)
}
