//! Shared fixtures: a fake host tree on disk plus static collaborators.

#![allow(dead_code)]

use std::path::PathBuf;

use hostcheck_common::config::HostcheckConfig;
use hostcheck_common::error::{HostcheckError, Result};
use hostcheck_core::cgroup::host::ProcfsHost;
use hostcheck_core::provider::{
    ContainerManager, DebugInfo, DiskInfo, MachineInfo, RuntimeInfo, RuntimeInfoProvider,
    VersionInfo,
};

pub const ALL_SUBSYSTEMS: &[&str] = &[
    "cpuset", "cpu", "cpuacct", "blkio", "memory", "devices", "freezer",
];

/// A scratch `/proc` + cgroup v1 tree.
pub struct HostTree {
    pub dir: tempfile::TempDir,
}

impl HostTree {
    /// Builds a tree with `subsystems` enabled and cpu/memory mounted.
    pub fn new(subsystems: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let tree = Self { dir };
        std::fs::create_dir_all(tree.path("proc")).expect("mkdir proc");

        let mut table = "#subsys_name\thierarchy\tnum_cgroups\tenabled\n".to_owned();
        for (i, name) in subsystems.iter().enumerate() {
            table.push_str(&format!("{name}\t{}\t1\t1\n", i + 2));
        }
        std::fs::write(tree.path("proc/cgroups"), table).expect("write cgroups");

        let cpu = tree.path("cgroup/cpu,cpuacct");
        let memory = tree.path("cgroup/memory");
        std::fs::create_dir_all(&cpu).expect("mkdir cpu");
        std::fs::create_dir_all(&memory).expect("mkdir memory");
        std::fs::write(cpu.join("cpu.cfs_period_us"), "100000\n").expect("write period");
        std::fs::write(memory.join("memory.use_hierarchy"), "1\n").expect("write hierarchy");

        let mountinfo = format!(
            "22 1 8:1 / / rw,relatime shared:1 - ext4 /dev/sda1 rw\n\
             30 22 0:30 / {} rw,nosuid shared:10 - cgroup cgroup rw,cpu,cpuacct\n\
             31 22 0:31 / {} rw,nosuid shared:11 - cgroup cgroup rw,memory\n",
            cpu.display(),
            memory.display()
        );
        std::fs::write(tree.path("proc/mountinfo"), mountinfo).expect("write mountinfo");

        let mounts = format!(
            "/dev/sda1 / ext4 rw 0 0\n\
             cgroup {} cgroup rw,cpu,cpuacct 0 0\n\
             cgroup {} cgroup rw,memory 0 0\n",
            cpu.display(),
            memory.display()
        );
        std::fs::write(tree.path("proc/mounts"), mounts).expect("write mounts");
        tree
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn config(&self) -> HostcheckConfig {
        HostcheckConfig {
            proc_cgroups: self.path("proc/cgroups"),
            mountinfo: self.path("proc/mountinfo"),
            mounts: self.path("proc/mounts"),
            unified_root: self.dir.path().to_path_buf(),
            ..HostcheckConfig::default()
        }
    }

    pub fn host(&self) -> ProcfsHost {
        ProcfsHost::from_config(&self.config())
    }

    pub fn cgroup_root(&self) -> PathBuf {
        self.path("cgroup")
    }
}

/// Container manager with fixed answers.
pub struct StaticManager {
    pub versions: Option<VersionInfo>,
    pub schedulers: Option<Vec<(&'static str, &'static str)>>,
}

impl StaticManager {
    pub fn new(kernel: &str, runtime: &str) -> Self {
        Self {
            versions: Some(VersionInfo {
                agent_version: "0.1.0".to_owned(),
                os_version: "Fixture Linux 1.0".to_owned(),
                kernel_version: kernel.to_owned(),
                runtime_version: runtime.to_owned(),
            }),
            schedulers: Some(vec![("sda", "cfq"), ("sdb", "deadline")]),
        }
    }
}

impl ContainerManager for StaticManager {
    fn version_info(&self) -> Result<VersionInfo> {
        self.versions.clone().ok_or_else(|| HostcheckError::Provider {
            provider: "version info",
            message: "manager offline".to_owned(),
        })
    }

    fn machine_info(&self) -> Result<MachineInfo> {
        let schedulers = self.schedulers.as_ref().ok_or_else(|| HostcheckError::Provider {
            provider: "machine info",
            message: "manager offline".to_owned(),
        })?;
        Ok(MachineInfo {
            disk_map: schedulers
                .iter()
                .enumerate()
                .map(|(i, (name, scheduler))| {
                    (
                        format!("8:{}", i * 16),
                        DiskInfo {
                            name: (*name).to_owned(),
                            scheduler: (*scheduler).to_owned(),
                        },
                    )
                })
                .collect(),
        })
    }

    fn debug_info(&self) -> DebugInfo {
        DebugInfo::from([(
            "Fixture".to_owned(),
            vec!["line one".to_owned(), "line two".to_owned()],
        )])
    }
}

/// Runtime info source with a fixed driver, or a failure.
pub struct StaticRuntime(pub Option<&'static str>);

impl RuntimeInfoProvider for StaticRuntime {
    fn validate_info(&self) -> Result<RuntimeInfo> {
        self.0
            .map(|driver| RuntimeInfo {
                storage_driver: driver.to_owned(),
                server_version: "24.0.7".to_owned(),
            })
            .ok_or_else(|| HostcheckError::Provider {
                provider: "docker info",
                message: "Cannot connect to the Docker daemon".to_owned(),
            })
    }
}
