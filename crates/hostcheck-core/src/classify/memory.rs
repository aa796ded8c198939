//! Hierarchical memory accounting sub-check.
//!
//! Decorates the fully recommended cgroup setup explanation; it assigns no
//! tier of its own.

use crate::cgroup::host::CgroupHost;
use crate::cgroup::{CgroupTable, check_present};

/// Control file exposing the v1 hierarchy mode.
pub const USE_HIERARCHY_FILE: &str = "memory.use_hierarchy";

/// Describes whether memory usage figures include descendant cgroups.
///
/// `available` is the table the caller already verified; the `memory`
/// subsystem is checked again here before any mount is probed.
#[must_use]
pub fn memory_accounting(host: &dyn CgroupHost, available: &CgroupTable) -> String {
    if check_present(available, &["memory"]).is_err() {
        return "\tHierarchical memory accounting status unknown: memory cgroup not enabled.\n"
            .to_owned();
    }
    let enabled = if host.is_unified() {
        true
    } else {
        match read_use_hierarchy(host) {
            Ok(flag) => flag == 1,
            Err(reason) => {
                return format!("\tHierarchical memory accounting status unknown: {reason}.\n");
            }
        }
    };
    if enabled {
        "\tHierarchical memory accounting enabled. Reported memory usage includes memory used \
         by child containers.\n"
            .to_owned()
    } else {
        "\tHierarchical memory accounting disabled. Memory usage does not include usage from \
         child containers.\n"
            .to_owned()
    }
}

fn read_use_hierarchy(host: &dyn CgroupHost) -> Result<i64, &'static str> {
    let mnt = host
        .find_mountpoint("memory")
        .map_err(|_| "memory cgroup not mounted")?;
    let path = mnt.join(USE_HIERARCHY_FILE);
    let content = std::fs::read_to_string(&path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "hierarchy interface unavailable");
        "hierarchy interface unavailable"
    })?;
    content
        .trim()
        .parse()
        .map_err(|_| "hierarchy interface unreadable")
}
