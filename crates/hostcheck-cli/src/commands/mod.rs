//! CLI command definitions and dispatch.

pub mod cgroups;
pub mod validate;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use hostcheck_common::config::HostcheckConfig;
use hostcheck_common::constants::BIN_NAME;

/// hostcheck: validate host support for container monitoring.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// JSON file overriding the probed host paths.
    #[arg(long, global = true, env = "HOSTCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every capability check and print the report.
    Validate(validate::ValidateArgs),
    /// List the enabled cgroup subsystems.
    Cgroups(cgroups::CgroupsArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the command
/// fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => HostcheckConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => HostcheckConfig::default(),
    };
    tracing::debug!(?config, "configuration resolved");
    match cli.command {
        Command::Validate(args) => validate::execute(args, &config),
        Command::Cgroups(args) => cgroups::execute(args, &config),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn command_is_named_after_binary() {
        assert_eq!(Cli::command().get_name(), BIN_NAME);
    }

    #[test]
    fn validate_defaults_to_text() {
        let cli = Cli::try_parse_from(["hostcheck", "validate"]).expect("parse");
        assert!(matches!(
            cli.command,
            Command::Validate(validate::ValidateArgs {
                format: crate::output::OutputFormat::Text
            })
        ));
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["hostcheck", "cgroups", "--config", "/etc/hc.json"])
            .expect("parse");
        assert_eq!(cli.config, Some(PathBuf::from("/etc/hc.json")));
    }
}
