//! Cgroup subsystem setup policy.

use hostcheck_common::types::{Classification, SupportTier};

use super::cpu::cpu_cfs_bandwidth;
use super::memory::memory_accounting;
use crate::cgroup::host::CgroupHost;
use crate::cgroup::{CgroupTable, check_present, load_enabled};

/// Subsystems without which the agent cannot run.
pub const REQUIRED_SUBSYSTEMS: &[&str] = &["cpu", "cpuacct"];

/// Subsystems needed for full stats coverage.
pub const RECOMMENDED_SUBSYSTEMS: &[&str] = &["memory", "blkio", "cpuset", "devices", "freezer"];

fn describe_requirements() -> String {
    format!(
        "\tFollowing cgroups are required: [{}]\n\tFollowing other cgroups are recommended: [{}]\n",
        REQUIRED_SUBSYSTEMS.join(" "),
        RECOMMENDED_SUBSYSTEMS.join(" "),
    )
}

/// Classifies the enabled cgroup subsystems.
///
/// Missing required subsystems are unsupported, missing recommended ones
/// are supported, and a complete set is recommended. Only the complete
/// set runs the memory accounting and CFS bandwidth sub-checks.
#[must_use]
pub fn classify_cgroup_setup(host: &dyn CgroupHost) -> Classification {
    let desc = describe_requirements();
    let available = match load_enabled(host) {
        Ok(table) => table,
        Err(e) => {
            tracing::warn!(error = %e, "could not load cgroup subsystem table");
            return Classification::new(
                SupportTier::Unknown,
                format!("Could not parse /proc/cgroups.\n{desc}"),
            );
        }
    };
    if let Err(absent) = check_present(&available, REQUIRED_SUBSYSTEMS) {
        return Classification::new(SupportTier::Unsupported, format!("{absent}{desc}"));
    }
    if let Err(absent) = check_present(&available, RECOMMENDED_SUBSYSTEMS) {
        return Classification::new(SupportTier::Supported, format!("{absent}{desc}"));
    }
    Classification::new(SupportTier::Recommended, recommended_setup(host, &available, &desc))
}

/// Explanation for a host with every required and recommended subsystem.
fn recommended_setup(host: &dyn CgroupHost, available: &CgroupTable, desc: &str) -> String {
    let mut out = format!("Available cgroups: {available}\n");
    out.push_str(desc);
    out.push_str(&memory_accounting(host, available));
    out.push_str(&cpu_cfs_bandwidth(host, available));
    out
}
