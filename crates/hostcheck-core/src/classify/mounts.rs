//! Cgroup mount location policy.

use std::path::Path;

use hostcheck_common::constants::CGROUP_ROOT;
use hostcheck_common::types::{Classification, SupportTier};

use crate::cgroup::host::CgroupHost;
use crate::cgroup::mount::cgroup_mount_lines;

/// Classifies where cgroups are mounted.
///
/// The parent of the `cpu` mount is taken as the cgroup root. Any
/// accessible root is supported; `/sys/fs/cgroup` is recommended.
#[must_use]
pub fn classify_cgroup_mounts(host: &dyn CgroupHost) -> Classification {
    classify_against(host, Path::new(CGROUP_ROOT))
}

fn classify_against(host: &dyn CgroupHost, recommended: &Path) -> Classification {
    let desc = format!(
        "\tAny cgroup mount point that is detectible and accessible is supported. {} is \
         recommended as a standard location.\n",
        recommended.display()
    );
    let Ok(cpu_mount) = host.find_mountpoint("cpu") else {
        return Classification::new(
            SupportTier::Unknown,
            format!("Could not locate cgroup mount point.\n{desc}"),
        );
    };
    let root = cpu_mount
        .parent()
        .map_or_else(|| cpu_mount.clone(), Path::to_path_buf);
    if !root.exists() {
        return Classification::new(
            SupportTier::Unsupported,
            format!("Cgroup mount directory {} inaccessible.\n{desc}", root.display()),
        );
    }
    let Ok(names) = entry_names(&root) else {
        return Classification::new(
            SupportTier::Unsupported,
            format!("Could not read cgroup mount directory {}.\n{desc}", root.display()),
        );
    };
    let Ok(mount_table) = host.mount_table() else {
        return Classification::new(
            SupportTier::Unsupported,
            format!("Could not read /proc/mounts.\n{desc}"),
        );
    };

    let mut out = format!("Cgroups are mounted at {}.\n", root.display());
    out.push_str("\tCgroup mount directories: ");
    for name in &names {
        out.push_str(name);
        out.push(' ');
    }
    out.push('\n');
    out.push_str(&desc);
    out.push_str("\tCgroup mounts:\n");
    for line in cgroup_mount_lines(&mount_table) {
        out.push('\t');
        out.push_str(line);
        out.push('\n');
    }

    let tier = if root.as_path() == recommended {
        SupportTier::Recommended
    } else {
        SupportTier::Supported
    };
    Classification::new(tier, out)
}

/// Immediate entry names of `dir`, sorted.
fn entry_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}
