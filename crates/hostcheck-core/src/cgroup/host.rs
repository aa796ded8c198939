//! Host cgroup facts.
//!
//! [`CgroupHost`] is the seam between the classifiers and the running
//! system. [`ProcfsHost`] reads the real `/proc` and `/sys` files (or any
//! tree the configuration points at).

use std::path::{Path, PathBuf};

use hostcheck_common::config::HostcheckConfig;
use hostcheck_common::error::{HostcheckError, Result};

use super::mount;

/// Source of raw cgroup facts for one validation pass.
///
/// Implementors only read; nothing here mutates host state.
pub trait CgroupHost {
    /// Returns the raw enabled-subsystem table (`/proc/cgroups` format).
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    fn subsystem_table(&self) -> Result<String>;

    /// Resolves the mount point of a cgroup v1 subsystem.
    ///
    /// # Errors
    ///
    /// Returns [`HostcheckError::NotMounted`] if no mount is found, or an
    /// I/O error if the mount information cannot be read.
    fn find_mountpoint(&self, subsystem: &str) -> Result<PathBuf>;

    /// Returns whether the host runs the cgroups v2 unified hierarchy.
    fn is_unified(&self) -> bool;

    /// Returns the raw system mount table (`/proc/mounts` format).
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    fn mount_table(&self) -> Result<String>;
}

/// [`CgroupHost`] backed by procfs and sysfs files.
#[derive(Debug, Clone)]
pub struct ProcfsHost {
    proc_cgroups: PathBuf,
    mountinfo: PathBuf,
    mounts: PathBuf,
    unified_root: PathBuf,
    cgroup_root: PathBuf,
}

impl ProcfsHost {
    /// Creates a host reader from the configured paths.
    #[must_use]
    pub fn from_config(config: &HostcheckConfig) -> Self {
        Self {
            proc_cgroups: config.proc_cgroups.clone(),
            mountinfo: config.mountinfo.clone(),
            mounts: config.mounts.clone(),
            unified_root: config.unified_root.clone(),
            cgroup_root: config.cgroup_root.clone(),
        }
    }
}

impl Default for ProcfsHost {
    fn default() -> Self {
        Self::from_config(&HostcheckConfig::default())
    }
}

fn read(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "reading host file");
    std::fs::read_to_string(path).map_err(|e| HostcheckError::io(path, e))
}

impl CgroupHost for ProcfsHost {
    fn subsystem_table(&self) -> Result<String> {
        read(&self.proc_cgroups)
    }

    fn find_mountpoint(&self, subsystem: &str) -> Result<PathBuf> {
        if self.is_unified() {
            return Err(HostcheckError::NotMounted {
                subsystem: subsystem.to_owned(),
            });
        }
        let info = read(&self.mountinfo)?;
        mount::find_cgroup_mountpoint(&info, &self.cgroup_root, subsystem).ok_or_else(|| {
            HostcheckError::NotMounted {
                subsystem: subsystem.to_owned(),
            }
        })
    }

    #[cfg(target_os = "linux")]
    fn is_unified(&self) -> bool {
        use nix::sys::statfs::{CGROUP2_SUPER_MAGIC, statfs};

        statfs(&self.unified_root).is_ok_and(|st| st.filesystem_type() == CGROUP2_SUPER_MAGIC)
    }

    #[cfg(not(target_os = "linux"))]
    fn is_unified(&self) -> bool {
        false
    }

    fn mount_table(&self) -> Result<String> {
        read(&self.mounts)
    }
}
