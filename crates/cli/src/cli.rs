//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// memsensor - inspect memory-backed camera sensors and camera helpers
#[derive(Parser, Debug)]
#[command(
    name = "memsensor",
    author,
    version,
    about = "Inspect memory-backed camera sensors",
    long_about = "Builds a virtual camera sensor over a raw buffer description and reports\n\
                  what it offers: media bus codes, formats, sensor info, delays and the\n\
                  gain mapping of the selected camera helper."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "MEMSENSOR_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "MEMSENSOR_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the sensor described by a profile and print what it offers
    Info(InfoArgs),

    /// Validate a profile without printing sensor details
    Validate(ValidateArgs),

    /// List builtin camera helpers
    Helpers(HelpersArgs),
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to sensor profile (TOML or JSON)
    #[arg(short, long, default_value = "sensor.toml", env = "MEMSENSOR_CONFIG")]
    pub config: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to sensor profile to validate
    #[arg(short, long, default_value = "sensor.toml", env = "MEMSENSOR_CONFIG")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `helpers` command
#[derive(Parser, Debug)]
pub struct HelpersArgs {
    /// Linear gain to encode through every helper
    #[arg(long)]
    pub gain: Option<f64>,

    /// Gain code to decode through every helper
    #[arg(long)]
    pub code: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_info() {
        let cli = Cli::try_parse_from(["memsensor", "info", "--config", "imx219.toml", "--json"])
            .unwrap();
        match cli.command {
            Commands::Info(args) => {
                assert_eq!(args.config, PathBuf::from("imx219.toml"));
                assert!(args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_helpers_with_gain() {
        let cli = Cli::try_parse_from(["memsensor", "-vv", "helpers", "--gain", "2.5"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Helpers(args) => {
                assert_eq!(args.gain, Some(2.5));
                assert_eq!(args.code, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["memsensor", "-q", "-v", "helpers"]).is_err());
    }
}
