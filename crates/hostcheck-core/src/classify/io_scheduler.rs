//! Block device I/O scheduler capability.
//!
//! Disk stats are only reportable under the completely fair queuing
//! scheduler. Multi-queue kernels no longer ship `cfq`, so such hosts
//! always land on supported.

use hostcheck_common::types::{Classification, SupportTier};

use crate::provider::{ContainerManager, MachineInfo};

/// Scheduler identifier that enables disk stats.
pub const CFQ_SCHEDULER: &str = "cfq";

/// Classifies block devices using the manager's machine info.
#[must_use]
pub fn classify_io_scheduler(manager: &dyn ContainerManager) -> Classification {
    match manager.machine_info() {
        Ok(info) => classify_disks(&info),
        Err(e) => {
            tracing::warn!(error = %e, "machine info unavailable");
            Classification::new(SupportTier::Unknown, "Machine info not available\n\t")
        }
    }
}

/// Recommended when at least one disk runs `cfq`, supported otherwise.
#[must_use]
pub fn classify_disks(info: &MachineInfo) -> Classification {
    let mut disks = String::new();
    let mut cfq = false;
    for disk in info.disk_map.values() {
        disks.push_str(&format!(
            "\t Disk \"{}\" Scheduler type \"{}\".\n",
            disk.name, disk.scheduler
        ));
        cfq |= disk.scheduler == CFQ_SCHEDULER;
    }
    if cfq {
        Classification::new(
            SupportTier::Recommended,
            format!(
                "At least one device supports '{CFQ_SCHEDULER}' I/O scheduler. Some disk stats \
                 can be reported.\n{disks}"
            ),
        )
    } else {
        Classification::new(
            SupportTier::Supported,
            format!(
                "None of the devices support '{CFQ_SCHEDULER}' I/O scheduler. No disk stats can \
                 be reported.\n{disks}"
            ),
        )
    }
}
