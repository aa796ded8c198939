//! Cgroup mount discovery.
//!
//! Resolves where a cgroup v1 subsystem is mounted by scanning
//! `/proc/self/mountinfo`, and filters the system mount table down to
//! cgroup entries for display.

use std::path::{Path, PathBuf};

/// Marker identifying cgroup v1 entries in `/proc/mounts`.
pub const CGROUP_MOUNT_MARKER: &str = " cgroup ";

/// Finds the mount point of `subsystem` in `mountinfo` content.
///
/// A line matches when its filesystem type is `cgroup`, its super options
/// list `subsystem`, and its mount point lies under `root`. Returns the
/// first match in file order.
#[must_use]
pub fn find_cgroup_mountpoint(mountinfo: &str, root: &Path, subsystem: &str) -> Option<PathBuf> {
    mountinfo
        .lines()
        .filter_map(MountInfoEntry::parse)
        .filter(|entry| {
            entry.fs_type == "cgroup"
                && entry.super_options.split(',').any(|opt| opt == subsystem)
        })
        .map(|entry| PathBuf::from(unescape(entry.mount_point)))
        .find(|mount_point| mount_point.starts_with(root))
}

/// Returns the lines of a `/proc/mounts` table that describe cgroup mounts.
#[must_use]
pub fn cgroup_mount_lines(mounts: &str) -> Vec<&str> {
    mounts
        .lines()
        .filter(|line| line.contains(CGROUP_MOUNT_MARKER))
        .collect()
}

/// The fields of one mountinfo line that mount resolution needs.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MountInfoEntry<'a> {
    mount_point: &'a str,
    fs_type: &'a str,
    super_options: &'a str,
}

impl<'a> MountInfoEntry<'a> {
    /// Parses `id parent maj:min root mount_point opts [optional...] - fstype source super_opts`.
    fn parse(line: &'a str) -> Option<Self> {
        let (pre, post) = line.split_once(" - ")?;
        let mount_point = pre.split_whitespace().nth(4)?;
        let mut post = post.split_whitespace();
        let fs_type = post.next()?;
        let _source = post.next()?;
        let super_options = post.next()?;
        Some(Self {
            mount_point,
            fs_type,
            super_options,
        })
    }
}

/// Decodes the octal escapes (`\040` for space) mountinfo uses in paths.
fn unescape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut rest = field;
    while let Some(idx) = rest.find('\\') {
        out.push_str(&rest[..idx]);
        let code = rest.get(idx + 1..idx + 4);
        match code.and_then(|c| u8::from_str_radix(c, 8).ok()) {
            Some(byte) => {
                out.push(char::from(byte));
                rest = &rest[idx + 4..];
            }
            None => {
                out.push('\\');
                rest = &rest[idx + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOUNTINFO: &str = "\
22 1 8:1 / / rw,relatime shared:1 - ext4 /dev/sda1 rw,errors=remount-ro
25 22 0:21 / /sys/fs/cgroup ro,nosuid shared:9 - tmpfs tmpfs ro,mode=755
26 25 0:22 / /sys/fs/cgroup/cpu,cpuacct rw,nosuid shared:10 - cgroup cgroup rw,cpu,cpuacct
27 25 0:23 / /sys/fs/cgroup/memory rw,nosuid shared:11 - cgroup cgroup rw,memory
28 25 0:24 / /sys/fs/cgroup/cpuset rw,nosuid shared:12 - cgroup cgroup rw,cpuset
";

    #[test]
    fn resolves_comounted_subsystem() {
        let mnt = find_cgroup_mountpoint(MOUNTINFO, Path::new("/"), "cpuacct");
        assert_eq!(mnt, Some(PathBuf::from("/sys/fs/cgroup/cpu,cpuacct")));
    }

    #[test]
    fn matches_whole_option_only() {
        let mnt = find_cgroup_mountpoint(MOUNTINFO, Path::new("/"), "cpu");
        assert_eq!(mnt, Some(PathBuf::from("/sys/fs/cgroup/cpu,cpuacct")));
        assert_eq!(find_cgroup_mountpoint(MOUNTINFO, Path::new("/"), "mem"), None);
    }

    #[test]
    fn ignores_mounts_outside_root() {
        assert_eq!(
            find_cgroup_mountpoint(MOUNTINFO, Path::new("/mnt"), "memory"),
            None
        );
    }

    #[test]
    fn ignores_non_cgroup_filesystems() {
        let info = "30 22 0:30 / /data rw - ext4 /dev/sdb1 rw,memory\n";
        assert_eq!(find_cgroup_mountpoint(info, Path::new("/"), "memory"), None);
    }

    #[test]
    fn unified_hierarchy_does_not_resolve() {
        let info = "30 22 0:26 / /sys/fs/cgroup rw,nosuid shared:4 - cgroup2 cgroup2 rw,nsdelegate\n";
        assert_eq!(find_cgroup_mountpoint(info, Path::new("/"), "cpu"), None);
    }

    #[test]
    fn skips_malformed_lines() {
        let info = "garbage\n26 25 0:22 / /cg rw - cgroup cgroup rw,cpu\n";
        assert_eq!(
            find_cgroup_mountpoint(info, Path::new("/"), "cpu"),
            Some(PathBuf::from("/cg"))
        );
    }

    #[test]
    fn decodes_escaped_spaces() {
        let info = "26 25 0:22 / /cg\\040root/cpu rw - cgroup cgroup rw,cpu\n";
        assert_eq!(
            find_cgroup_mountpoint(info, Path::new("/"), "cpu"),
            Some(PathBuf::from("/cg root/cpu"))
        );
    }

    #[test]
    fn root_with_space_matches_decoded_mount_point() {
        let info = "26 25 0:22 / /cg\\040root/cpu rw - cgroup cgroup rw,cpu\n";
        assert_eq!(
            find_cgroup_mountpoint(info, Path::new("/cg root"), "cpu"),
            Some(PathBuf::from("/cg root/cpu"))
        );
        assert_eq!(find_cgroup_mountpoint(info, Path::new("/cg"), "cpu"), None);
    }

    #[test]
    fn filters_cgroup_mount_lines() {
        let mounts = "\
/dev/sda1 / ext4 rw 0 0
cgroup /sys/fs/cgroup/memory cgroup rw,memory 0 0
cgroup2 /sys/fs/cgroup/unified cgroup2 rw 0 0
cgroup /sys/fs/cgroup/cpu cgroup rw,cpu 0 0
";
        assert_eq!(
            cgroup_mount_lines(mounts),
            vec![
                "cgroup /sys/fs/cgroup/memory cgroup rw,memory 0 0",
                "cgroup /sys/fs/cgroup/cpu cgroup rw,cpu 0 0",
            ]
        );
    }
}
