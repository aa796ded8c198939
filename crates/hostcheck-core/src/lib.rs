//! # hostcheck-core
//!
//! Host capability validation for a container-monitoring agent.
//!
//! This crate inspects host facts and maps each one to a
//! [`SupportTier`](hostcheck_common::types::SupportTier):
//! - **Versions**: kernel and container runtime version policy.
//! - **Cgroups**: enabled-subsystem inventory, mount discovery, memory
//!   accounting mode, and CPU CFS bandwidth control.
//! - **Block devices**: I/O scheduler capability.
//! - **Report**: ordered assembly of every classifier into one text blob.
//!
//! The subsystem table, mount resolution, unified detection and the mount
//! table come from the [`cgroup::host::CgroupHost`] trait; version, machine
//! and runtime facts come from the collaborator traits in [`provider`].
//! Controller files under a resolved mount point are read directly, so
//! tests point the resolver at a fixture tree.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod cgroup;
pub mod classify;
pub mod provider;
pub mod report;
pub mod version;
