//! System-wide constants and default host paths.

/// Enabled cgroup subsystem table.
pub const PROC_CGROUPS: &str = "/proc/cgroups";

/// Mount information for the calling process, used to resolve cgroup mounts.
pub const PROC_SELF_MOUNTINFO: &str = "/proc/self/mountinfo";

/// System-wide mount table.
pub const PROC_MOUNTS: &str = "/proc/mounts";

/// Standard cgroup mount location. Also the cgroups v2 unified hierarchy.
pub const CGROUP_ROOT: &str = "/sys/fs/cgroup";

/// Block device directory holding per-disk queue settings.
pub const SYS_BLOCK: &str = "/sys/block";

/// Operating system identification file.
pub const OS_RELEASE: &str = "/etc/os-release";

/// Path handed to the cgroup mountpoint resolver.
pub const RESOLVER_ROOT: &str = "/";

/// Default container runtime binary.
pub const RUNTIME_BINARY: &str = "docker";

/// Name the report preamble gives the monitoring agent.
pub const AGENT_LABEL: &str = "Agent";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "hostcheck";
