use clap::{CommandFactory, FromArgMatches, Parser};
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::{banner::BuildInfo, gateway};

/// Settings for the gateway handlers
#[derive(Parser, Debug)]
#[clap(long_about = None)]
pub struct CliArgs {
    /// Port to listen on when not running on AWS Lambda
    #[clap(long, env, value_parser)]
    pub port: Option<String>,

    /// Host to listen on (empty means all interfaces)
    #[clap(long, env, value_parser, default_value = "")]
    pub bind_host: String,
}

impl CliArgs {
    /// The argument parser, named and versioned after the running binary.
    pub fn command_for(build: &BuildInfo) -> clap::Command {
        Self::command().name(build.pkg_name).version(build.version)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// `<host>:<port>`, host usually empty
    pub listen_addr: String,
}

impl Config {
    pub fn load(build: &BuildInfo) -> Self {
        let matches = CliArgs::command_for(build).get_matches();
        let cli_args = CliArgs::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
        Self::from_args(cli_args)
    }

    pub fn from_args(cli_args: CliArgs) -> Self {
        Config {
            listen_addr: gateway::listen_addr(&cli_args.bind_host, cli_args.port.as_deref()),
        }
    }
}

pub static CONFIG: OnceCell<Config> = OnceCell::new();

/// Parses the command line once; later calls return the same config.
pub fn init(build: &BuildInfo) -> &'static Config {
    CONFIG.get_or_init(|| {
        debug!("Loading config CONFIG");
        Config::load(build)
    })
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::{CliArgs, Config};
    use crate::banner::BuildInfo;

    #[test]
    fn port_flag_forms_listen_addr() {
        let args = CliArgs::try_parse_from(["hello", "--port", "8080"]).unwrap();
        assert_eq!(Config::from_args(args).listen_addr, ":8080");
    }

    #[test]
    fn bind_host_is_prefixed() {
        let args = CliArgs::try_parse_from(["hello", "--port", "3000", "--bind-host", "127.0.0.1"]).unwrap();
        assert_eq!(Config::from_args(args).listen_addr, "127.0.0.1:3000");
    }

    #[test]
    fn missing_port_yields_bare_colon() {
        let args = CliArgs { port: None, bind_host: String::new() };
        assert_eq!(Config::from_args(args).listen_addr, ":");
    }

    #[test]
    fn version_is_the_binarys() {
        let build = BuildInfo {
            pkg_name: "welcome-gateway",
            version: "9.8.7",
            build_date: "2024-01-01",
            build_time: "00:00:00",
            git_commit_short: "a12dd5",
            git_dirty: "false",
            user_agent: "Gateway.Welcome/9.8.7",
        };
        let mut command = CliArgs::command_for(&build);
        assert_eq!(command.render_version(), "welcome-gateway 9.8.7\n");
        let err = command.try_get_matches_from_mut(["welcome", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
