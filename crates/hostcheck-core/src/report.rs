//! Report assembly.
//!
//! Runs every classifier in a fixed order against one snapshot of host
//! facts and renders the results as `"<name>: <tier>\n\t<explanation>\n\n"`
//! sections, followed by the manager's debug sections.

use std::fmt;

use hostcheck_common::constants::AGENT_LABEL;
use hostcheck_common::error::Result;
use hostcheck_common::types::Classification;
use serde::Serialize;

use crate::cgroup::host::CgroupHost;
use crate::classify;
use crate::provider::{ContainerManager, DebugInfo, RuntimeInfoProvider};

/// Section title for the kernel classifier.
pub const KERNEL_SECTION: &str = "Kernel version";
/// Section title for the cgroup setup classifier.
pub const CGROUP_SETUP_SECTION: &str = "Cgroup setup";
/// Section title for the cgroup mount classifier.
pub const CGROUP_MOUNT_SECTION: &str = "Cgroup mount setup";
/// Section title for the runtime version classifier.
pub const RUNTIME_VERSION_SECTION: &str = "Docker version";
/// Section title for the runtime driver classifier.
pub const RUNTIME_DRIVER_SECTION: &str = "Docker driver setup";
/// Section title for the I/O scheduler classifier.
pub const BLOCK_DEVICE_SECTION: &str = "Block device setup";

/// Content of one report section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionBody {
    /// A classifier outcome.
    Classified(Classification),
    /// Free-form debug text from the container manager.
    Debug(String),
}

/// A named report section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Section title.
    pub name: String,
    /// Section content.
    pub body: SectionBody,
}

impl Section {
    fn classified(name: &str, result: Classification) -> Self {
        Self {
            name: name.to_owned(),
            body: SectionBody::Classified(result),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            SectionBody::Classified(c) => {
                write!(f, "{}: {}\n\t{}\n\n", self.name, c.tier, c.explanation)
            }
            SectionBody::Debug(text) => write!(f, "{}: \n\t{}\n\n", self.name, text),
        }
    }
}

/// The full validation report, sections in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Version of the monitoring agent.
    pub agent_version: String,
    /// Host operating system description.
    pub os_version: String,
    /// Ordered sections.
    pub sections: Vec<Section>,
}

impl Report {
    /// Returns the classification for the section called `name`.
    #[must_use]
    pub fn classification(&self, name: &str) -> Option<&Classification> {
        self.sections.iter().find_map(|s| match &s.body {
            SectionBody::Classified(c) if s.name == name => Some(c),
            _ => None,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{AGENT_LABEL} version: {}\n\n", self.agent_version)?;
        write!(f, "OS version: {}\n\n", self.os_version)?;
        for section in &self.sections {
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

fn debug_sections(debug: DebugInfo) -> impl Iterator<Item = Section> {
    debug.into_iter().map(|(category, lines)| Section {
        name: category,
        body: SectionBody::Debug(lines.join("\n\t")),
    })
}

/// Builds the validation report.
///
/// Classifiers run sequentially and each degrades to a tier on failure, so
/// every section is always present.
///
/// # Errors
///
/// Returns the manager's error if version info cannot be fetched; no
/// report is produced in that case.
pub fn assemble_report(
    manager: &dyn ContainerManager,
    runtime: &dyn RuntimeInfoProvider,
    host: &dyn CgroupHost,
) -> Result<Report> {
    let versions = manager.version_info()?;

    let mut sections = vec![
        Section::classified(
            KERNEL_SECTION,
            classify::classify_kernel_version(&versions.kernel_version),
        ),
        Section::classified(CGROUP_SETUP_SECTION, classify::classify_cgroup_setup(host)),
        Section::classified(CGROUP_MOUNT_SECTION, classify::classify_cgroup_mounts(host)),
        Section::classified(
            RUNTIME_VERSION_SECTION,
            classify::classify_runtime_version(&versions.runtime_version),
        ),
        Section::classified(RUNTIME_DRIVER_SECTION, classify::classify_runtime_driver(runtime)),
        Section::classified(BLOCK_DEVICE_SECTION, classify::classify_io_scheduler(manager)),
    ];
    for section in &sections {
        if let SectionBody::Classified(c) = &section.body {
            tracing::info!(section = %section.name, tier = c.tier.label(), "capability classified");
        }
    }
    sections.extend(debug_sections(manager.debug_info()));

    Ok(Report {
        agent_version: versions.agent_version,
        os_version: versions.os_version,
        sections,
    })
}

#[cfg(test)]
mod tests {
    use hostcheck_common::error::HostcheckError;
    use hostcheck_common::types::SupportTier;

    use super::*;
    use crate::cgroup::host::fake::FakeHost;
    use crate::provider::{MachineInfo, RuntimeInfo, VersionInfo};

    struct Manager {
        fail_versions: bool,
    }

    impl ContainerManager for Manager {
        fn version_info(&self) -> Result<VersionInfo> {
            if self.fail_versions {
                return Err(HostcheckError::Provider {
                    provider: "version info",
                    message: "unavailable".to_owned(),
                });
            }
            Ok(VersionInfo {
                agent_version: "0.1.0".to_owned(),
                os_version: "Test Linux".to_owned(),
                kernel_version: "2.6.32".to_owned(),
                runtime_version: "1.1.0".to_owned(),
            })
        }

        fn machine_info(&self) -> Result<MachineInfo> {
            Err(HostcheckError::Provider {
                provider: "machine info",
                message: "unavailable".to_owned(),
            })
        }

        fn debug_info(&self) -> DebugInfo {
            DebugInfo::from([
                ("Zeta".to_owned(), vec!["z1".to_owned()]),
                ("Alpha".to_owned(), vec!["a1".to_owned(), "a2".to_owned()]),
            ])
        }
    }

    struct Runtime;

    impl RuntimeInfoProvider for Runtime {
        fn validate_info(&self) -> Result<RuntimeInfo> {
            Ok(RuntimeInfo {
                storage_driver: "overlay2".to_owned(),
                server_version: "1.1.0".to_owned(),
            })
        }
    }

    #[test]
    fn version_fetch_failure_aborts_report() {
        let err = assemble_report(&Manager { fail_versions: true }, &Runtime, &FakeHost::default())
            .unwrap_err();
        assert!(matches!(err, HostcheckError::Provider { provider: "version info", .. }));
    }

    #[test]
    fn sections_follow_fixed_order() {
        let report =
            assemble_report(&Manager { fail_versions: false }, &Runtime, &FakeHost::default())
                .expect("report");
        let names: Vec<&str> = report.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                KERNEL_SECTION,
                CGROUP_SETUP_SECTION,
                CGROUP_MOUNT_SECTION,
                RUNTIME_VERSION_SECTION,
                RUNTIME_DRIVER_SECTION,
                BLOCK_DEVICE_SECTION,
                "Alpha",
                "Zeta",
            ]
        );
    }

    #[test]
    fn degraded_sections_still_render() {
        let report =
            assemble_report(&Manager { fail_versions: false }, &Runtime, &FakeHost::default())
                .expect("report");
        let tier = |name: &str| report.classification(name).map(|c| c.tier);
        assert_eq!(tier(KERNEL_SECTION), Some(SupportTier::Supported));
        assert_eq!(tier(CGROUP_SETUP_SECTION), Some(SupportTier::Unknown));
        assert_eq!(tier(CGROUP_MOUNT_SECTION), Some(SupportTier::Unknown));
        assert_eq!(tier(RUNTIME_VERSION_SECTION), Some(SupportTier::Supported));
        assert_eq!(tier(RUNTIME_DRIVER_SECTION), Some(SupportTier::Recommended));
        assert_eq!(tier(BLOCK_DEVICE_SECTION), Some(SupportTier::Unknown));
    }

    #[test]
    fn renders_three_part_sections() {
        let report =
            assemble_report(&Manager { fail_versions: false }, &Runtime, &FakeHost::default())
                .expect("report");
        let text = report.to_string();
        assert!(text.starts_with("Agent version: 0.1.0\n\nOS version: Test Linux\n\n"));
        assert!(text.contains(
            "Kernel version: [Supported, but not recommended]\n\tKernel version is 2.6.32."
        ));
        assert!(text.contains(
            "Docker driver setup: [Supported and recommended]\n\tStorage driver is overlay2.\n\n\n"
        ));
        assert!(text.ends_with("Alpha: \n\ta1\n\ta2\n\nZeta: \n\tz1\n\n"));
    }

    #[test]
    fn preamble_uses_agent_label() {
        let report = Report {
            agent_version: "9.9".to_owned(),
            os_version: "Unknown".to_owned(),
            sections: Vec::new(),
        };
        assert_eq!(
            report.to_string(),
            format!("{AGENT_LABEL} version: 9.9\n\nOS version: Unknown\n\n")
        );
    }

    #[test]
    fn serializes_to_json() {
        let report =
            assemble_report(&Manager { fail_versions: false }, &Runtime, &FakeHost::default())
                .expect("report");
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["sections"][0]["name"], "Kernel version");
        assert_eq!(json["sections"][0]["body"]["classified"]["tier"], "Supported");
        assert_eq!(json["sections"][6]["body"]["debug"], "a1\n\ta2");
    }
}
