//! `hostcheck validate`: Run every capability check and print the report.

use clap::Args;
use hostcheck_common::config::HostcheckConfig;
use hostcheck_core::cgroup::host::ProcfsHost;
use hostcheck_core::report::assemble_report;

use crate::host::docker::DockerInfoProvider;
use crate::host::manager::HostManager;
use crate::output::{self, OutputFormat};

/// Arguments for the `validate` command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Executes the `validate` command.
///
/// # Errors
///
/// Returns an error if version info cannot be gathered or the report
/// cannot be serialized.
pub fn execute(args: ValidateArgs, config: &HostcheckConfig) -> anyhow::Result<()> {
    let manager = HostManager::new(config.clone());
    let runtime = DockerInfoProvider::new(&config.runtime_binary);
    let host = ProcfsHost::from_config(config);

    let report = assemble_report(&manager, &runtime, &host)?;
    print!("{}", output::render_report(&report, args.format)?);
    Ok(())
}
