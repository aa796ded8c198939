//! Capability classifiers.
//!
//! One classifier per capability axis. Each returns a
//! [`Classification`](hostcheck_common::types::Classification) and folds
//! every read or parse failure into a tier instead of returning an error.

pub mod cgroup_setup;
pub mod cpu;
pub mod driver;
pub mod io_scheduler;
pub mod kernel;
pub mod memory;
pub mod mounts;
pub mod runtime;

pub use cgroup_setup::classify_cgroup_setup;
pub use driver::classify_runtime_driver;
pub use io_scheduler::classify_io_scheduler;
pub use kernel::classify_kernel_version;
pub use mounts::classify_cgroup_mounts;
pub use runtime::classify_runtime_version;
