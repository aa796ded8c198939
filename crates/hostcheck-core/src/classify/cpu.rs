//! CPU CFS bandwidth control sub-check.

use std::io::ErrorKind;

use crate::cgroup::host::CgroupHost;
use crate::cgroup::{CgroupTable, check_present};

/// Control file present only when the kernel has CFS bandwidth control.
pub const CFS_PERIOD_FILE: &str = "cpu.cfs_period_us";

/// Describes whether CFS bandwidth control is available.
///
/// Re-verifies that `cpu` is enabled in `available` before probing.
#[must_use]
pub fn cpu_cfs_bandwidth(host: &dyn CgroupHost, available: &CgroupTable) -> String {
    if check_present(available, &["cpu"]).is_err() {
        return "\tCpu cfs bandwidth status unknown: cpu cgroup not enabled.\n".to_owned();
    }
    let Ok(mnt) = host.find_mountpoint("cpu") else {
        return "\tCpu cfs bandwidth status unknown: cpu cgroup not mounted.\n".to_owned();
    };
    match std::fs::metadata(mnt.join(CFS_PERIOD_FILE)) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            "\tCpu cfs bandwidth is disabled. Recompile kernel with \"CONFIG_CFS_BANDWIDTH\" \
             enabled.\n"
                .to_owned()
        }
        _ => "\tCpu cfs bandwidth is enabled.\n".to_owned(),
    }
}
