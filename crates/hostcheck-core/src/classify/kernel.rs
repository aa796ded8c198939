//! Kernel version policy.

use hostcheck_common::types::{Classification, SupportTier};

use crate::version::{VersionTuple, parse_major_minor};

/// Oldest supported kernel.
pub const MIN_SUPPORTED: VersionTuple = VersionTuple::new(2, 6);

/// Oldest recommended kernel.
pub const MIN_RECOMMENDED: VersionTuple = VersionTuple::new(3, 0);

/// Classifies a kernel release string.
///
/// Below 2.6 is unsupported, 3.0 and later is recommended, anything in
/// between is supported. An unparsable release is unknown.
#[must_use]
pub fn classify_kernel_version(version: &str) -> Classification {
    let desc = format!(
        "Kernel version is {version}. Versions >= {MIN_SUPPORTED} are supported. \
         {MIN_RECOMMENDED}+ are recommended.\n"
    );
    let Ok(parsed) = parse_major_minor(version) else {
        return Classification::new(
            SupportTier::Unknown,
            format!("Could not parse kernel version. {desc}"),
        );
    };
    let tier = if parsed < MIN_SUPPORTED {
        SupportTier::Unsupported
    } else if parsed >= MIN_RECOMMENDED {
        SupportTier::Recommended
    } else {
        SupportTier::Supported
    };
    Classification::new(tier, desc)
}
