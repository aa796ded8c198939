//! Cgroup subsystem inventory.
//!
//! Loads the enabled-subsystem table from the host and answers presence
//! and enablement queries against it. The table is rebuilt on every
//! validation pass and never cached.

pub mod host;
pub mod mount;

use std::collections::BTreeMap;
use std::fmt;

use hostcheck_common::error::{HostcheckError, Result};

use self::host::CgroupHost;

/// Subsystem name to enabled flag, as read from `/proc/cgroups`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CgroupTable(BTreeMap<String, u32>);

impl CgroupTable {
    /// Returns the enabled flag for `subsystem`, if listed.
    #[must_use]
    pub fn get(&self, subsystem: &str) -> Option<u32> {
        self.0.get(subsystem).copied()
    }

    /// Iterates over `(subsystem, enabled)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, enabled)| (name.as_str(), *enabled))
    }

    /// Returns the number of listed subsystems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no subsystem is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, u32)> for CgroupTable {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for CgroupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("map[")?;
        for (i, (name, enabled)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}:{enabled}")?;
        }
        f.write_str("]")
    }
}

/// Loads the enabled-subsystem table from the host.
///
/// # Errors
///
/// Returns an I/O error if the table is unreadable, or
/// [`HostcheckError::Parse`] if any entry is malformed. Nothing is
/// returned on a partial parse.
pub fn load_enabled(host: &dyn CgroupHost) -> Result<CgroupTable> {
    let content = host.subsystem_table()?;
    let table = parse_subsystem_table(&content)?;
    tracing::debug!(subsystems = table.len(), "loaded cgroup subsystem table");
    Ok(table)
}

/// Parses `/proc/cgroups` content.
///
/// The first line is a header. Every other non-blank line must hold
/// exactly four whitespace-separated fields: name, hierarchy id, cgroup
/// count, enabled flag.
///
/// # Errors
///
/// Returns [`HostcheckError::Parse`] naming the first malformed line.
pub fn parse_subsystem_table(content: &str) -> Result<CgroupTable> {
    content
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(parse_entry)
        .collect()
}

fn parse_entry(line: &str) -> Result<(String, u32)> {
    let malformed = || HostcheckError::Parse {
        what: "/proc/cgroups entry",
        input: line.to_owned(),
    };
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [name, hierarchy, count, enabled] = fields.as_slice() else {
        return Err(malformed());
    };
    if hierarchy.parse::<u32>().is_err() || count.parse::<u64>().is_err() {
        return Err(malformed());
    }
    let enabled = enabled.parse::<u32>().map_err(|_| malformed())?;
    Ok(((*name).to_owned(), enabled))
}

/// Why a desired subsystem failed the presence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsenceKind {
    /// Not listed in the table at all.
    Missing,
    /// Listed, but its enabled flag is not 1.
    Disabled,
}

/// The first desired subsystem that is missing or disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsystemAbsent {
    /// Offending subsystem name.
    pub subsystem: String,
    /// Whether it was missing or disabled.
    pub kind: AbsenceKind,
    /// Rendered dump of the whole available table.
    pub available: String,
}

impl fmt::Display for SubsystemAbsent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AbsenceKind::Missing => write!(f, "Missing cgroup {}.", self.subsystem)?,
            AbsenceKind::Disabled => write!(f, "Cgroup {} not enabled.", self.subsystem)?,
        }
        writeln!(f, " Available cgroups: {}", self.available)
    }
}

/// Checks that every `desired` subsystem is listed and enabled.
///
/// Walks `desired` in order and stops at the first failure.
///
/// # Errors
///
/// Returns the first missing or disabled subsystem together with a dump of
/// the full available table.
pub fn check_present(
    available: &CgroupTable,
    desired: &[&str],
) -> std::result::Result<(), SubsystemAbsent> {
    for &subsystem in desired {
        let kind = match available.get(subsystem) {
            None => AbsenceKind::Missing,
            Some(1) => continue,
            Some(_) => AbsenceKind::Disabled,
        };
        return Err(SubsystemAbsent {
            subsystem: subsystem.to_owned(),
            kind,
            available: available.to_string(),
        });
    }
    Ok(())
}
