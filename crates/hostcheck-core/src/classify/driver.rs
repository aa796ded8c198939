//! Container runtime driver setup.

use hostcheck_common::types::{Classification, SupportTier};

use crate::provider::RuntimeInfoProvider;

/// Classifies the runtime's storage driver setup.
///
/// Valid runtime info is recommended; any collaborator failure is
/// unsupported.
#[must_use]
pub fn classify_runtime_driver(runtime: &dyn RuntimeInfoProvider) -> Classification {
    match runtime.validate_info() {
        Ok(info) => Classification::new(
            SupportTier::Recommended,
            format!("Storage driver is {}.\n", info.storage_driver),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "runtime info unavailable");
            Classification::new(
                SupportTier::Unsupported,
                format!("Docker setup is invalid: {e}"),
            )
        }
    }
}
