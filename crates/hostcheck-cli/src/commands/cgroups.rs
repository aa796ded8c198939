//! `hostcheck cgroups`: List the enabled cgroup subsystems.

use clap::Args;
use hostcheck_common::config::HostcheckConfig;
use hostcheck_core::cgroup::{self, host::ProcfsHost};

use crate::output;

/// Arguments for the `cgroups` command.
#[derive(Args, Debug)]
pub struct CgroupsArgs {
    /// Only list subsystems whose enabled flag is 1.
    #[arg(short, long)]
    pub enabled: bool,
}

/// Executes the `cgroups` command.
///
/// # Errors
///
/// Returns an error if the subsystem table is unreadable or malformed.
pub fn execute(args: CgroupsArgs, config: &HostcheckConfig) -> anyhow::Result<()> {
    let host = ProcfsHost::from_config(config);
    let table = cgroup::load_enabled(&host)?;

    if table.is_empty() {
        println!("No cgroup subsystems found.");
        return Ok(());
    }
    print!("{}", output::format_subsystems(&table, args.enabled));
    Ok(())
}
