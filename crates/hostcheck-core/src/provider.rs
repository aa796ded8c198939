//! Collaborator contracts consumed by report assembly.
//!
//! The container manager and the runtime-info source live outside this
//! crate; they are reached only through these traits.

use std::collections::BTreeMap;

use hostcheck_common::error::Result;
use serde::{Deserialize, Serialize};

/// Version facts about the agent and its host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Version of the monitoring agent itself.
    pub agent_version: String,
    /// Human-readable operating system description.
    pub os_version: String,
    /// Kernel release string, e.g. `5.15.0-91-generic`.
    pub kernel_version: String,
    /// Container runtime version string.
    pub runtime_version: String,
}

/// A block device and its active I/O scheduler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskInfo {
    /// Device name, e.g. `sda`.
    pub name: String,
    /// Active scheduler name, e.g. `mq-deadline`.
    pub scheduler: String,
}

/// Machine facts relevant to validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineInfo {
    /// Disks keyed by `major:minor` device number.
    pub disk_map: BTreeMap<String, DiskInfo>,
}

/// Free-form debug output grouped by category, each an ordered list of lines.
pub type DebugInfo = BTreeMap<String, Vec<String>>;

/// Supplies version, machine, and debug facts.
pub trait ContainerManager {
    /// Returns agent, OS, kernel, and runtime versions.
    ///
    /// # Errors
    ///
    /// Returns an error if the facts cannot be gathered. Report assembly
    /// aborts on this error.
    fn version_info(&self) -> Result<VersionInfo>;

    /// Returns the disk-to-scheduler map.
    ///
    /// # Errors
    ///
    /// Returns an error if machine facts are unavailable.
    fn machine_info(&self) -> Result<MachineInfo>;

    /// Returns debug sections appended after the classified sections.
    fn debug_info(&self) -> DebugInfo;
}

/// Structured information reported by the container runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeInfo {
    /// Storage driver in use, e.g. `overlay2`.
    pub storage_driver: String,
    /// Server version reported by the runtime.
    pub server_version: String,
}

/// Fetches and validates the container runtime's own info.
pub trait RuntimeInfoProvider {
    /// Returns validated runtime info.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot be queried or its info is
    /// incomplete.
    fn validate_info(&self) -> Result<RuntimeInfo>;
}
