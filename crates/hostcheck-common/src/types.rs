//! Domain primitive types used across the hostcheck workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How well the host supports one capability axis.
///
/// Ordered by desirability: `Unknown < Unsupported < Supported < Recommended`.
/// `Unknown` means the probe could not decide and is never actionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SupportTier {
    /// The capability could not be determined.
    Unknown,
    /// The host does not meet the minimum requirement.
    Unsupported,
    /// Works, but not the recommended setup.
    Supported,
    /// Supported and recommended.
    Recommended,
}

impl SupportTier {
    /// Returns the bare tier word, e.g. `"Supported"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Unsupported => "Unsupported",
            Self::Supported => "Supported",
            Self::Recommended => "Recommended",
        }
    }

    /// Returns the bracketed qualifier printed in text reports.
    #[must_use]
    pub const fn qualifier(self) -> &'static str {
        match self {
            Self::Unknown => "[Unknown]",
            Self::Unsupported => "[Unsupported]",
            Self::Supported => "[Supported, but not recommended]",
            Self::Recommended => "[Supported and recommended]",
        }
    }
}

impl fmt::Display for SupportTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualifier())
    }
}

/// Outcome of one classifier: a tier and the text explaining it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Support tier assigned by the classifier.
    pub tier: SupportTier,
    /// Multi-line human-readable explanation.
    pub explanation: String,
}

impl Classification {
    /// Creates a classification from a tier and explanation.
    #[must_use]
    pub fn new(tier: SupportTier, explanation: impl Into<String>) -> Self {
        Self {
            tier,
            explanation: explanation.into(),
        }
    }
}
