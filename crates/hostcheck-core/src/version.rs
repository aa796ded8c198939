//! `major.minor` version extraction built on `nom`.
//!
//! Kernel releases and runtime versions carry arbitrary suffixes
//! (`3.10.0-957.el7.x86_64`, `1.13.1-rc2`); only the leading
//! `<int>.<int>` prefix matters for support policy.

use std::fmt;

use hostcheck_common::error::{HostcheckError, Result};
use nom::{
    IResult, Parser,
    character::complete::{char, digit1},
    combinator::map_res,
    sequence::separated_pair,
};

/// Leading `(major, minor)` pair of a version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTuple {
    /// Major version number.
    pub major: u32,
    /// Minor version number.
    pub minor: u32,
}

impl VersionTuple {
    /// Creates a version tuple.
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |digits: &str| digits.parse::<u32>()).parse(input)
}

fn major_minor(input: &str) -> IResult<&str, (u32, u32)> {
    separated_pair(number, char('.'), number).parse(input)
}

/// Parses the leading `<major>.<minor>` of `version`, discarding any suffix.
///
/// # Errors
///
/// Returns [`HostcheckError::Parse`] if `version` does not start with two
/// dot-separated integers. Callers treat this as "version unknown".
pub fn parse_major_minor(version: &str) -> Result<VersionTuple> {
    match major_minor(version) {
        Ok((_suffix, (major, minor))) => Ok(VersionTuple::new(major, minor)),
        Err(_) => {
            tracing::warn!(version, "failed to parse version");
            Err(HostcheckError::Parse {
                what: "version",
                input: version.to_owned(),
            })
        }
    }
}
