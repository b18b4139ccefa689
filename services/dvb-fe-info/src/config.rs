//! Configuration loaded from the command line

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Report layout written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed plain-text report
    #[default]
    Text,
    /// Single JSON object
    Json,
}

/// Application configuration
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dvb-fe-info",
    version,
    about = "Print the capabilities of a Linux DVB frontend",
    after_help = "Use the following format: dvb-fe-info /dev/dvb/adapterX/frontendY"
)]
pub struct Config {
    /// Frontend device node
    #[arg(value_name = "FRONTEND")]
    pub device: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "DVB_FE_INFO_FORMAT")]
    pub format: OutputFormat,
}

impl Config {
    /// Parse the process arguments, exiting with usage on error
    pub fn from_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_single_device() {
        let config = Config::try_parse_from(["dvb-fe-info", "/dev/dvb/adapter0/frontend0"]).unwrap();
        assert_eq!(config.device, PathBuf::from("/dev/dvb/adapter0/frontend0"));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_missing_device() {
        let err = Config::try_parse_from(["dvb-fe-info"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_device() {
        let err = Config::try_parse_from(["dvb-fe-info", "/dev/a", "/dev/b"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_json_format() {
        let config = Config::try_parse_from(["dvb-fe-info", "--format", "json", "/dev/a"]).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }
}
