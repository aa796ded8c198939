//! Container runtime version policy.

use hostcheck_common::types::{Classification, SupportTier};

use crate::version::{VersionTuple, parse_major_minor};

/// Oldest supported runtime.
pub const MIN_SUPPORTED: VersionTuple = VersionTuple::new(1, 0);

/// Oldest recommended runtime.
pub const MIN_RECOMMENDED: VersionTuple = VersionTuple::new(1, 2);

/// Classifies a container runtime version string.
#[must_use]
pub fn classify_runtime_version(version: &str) -> Classification {
    let desc = format!(
        "Docker version is {version}. Versions >= {MIN_SUPPORTED} are supported. \
         {MIN_RECOMMENDED}+ are recommended.\n"
    );
    let Ok(parsed) = parse_major_minor(version) else {
        return Classification::new(
            SupportTier::Unknown,
            format!("Could not parse docker version. {desc}\n\t"),
        );
    };
    let tier = if parsed < MIN_SUPPORTED {
        SupportTier::Unsupported
    } else if parsed < MIN_RECOMMENDED {
        SupportTier::Supported
    } else {
        SupportTier::Recommended
    };
    Classification::new(tier, desc)
}
