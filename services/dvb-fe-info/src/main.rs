//! DVB frontend info - Linux DVB frontend capability dump
//!
//! Opens a frontend device node, queries FE_GET_INFO and FE_GET_PROPERTY,
//! and prints the capabilities, supported delivery systems and the kernel
//! DVB API version.

mod config;
mod frontend;
mod report;
mod tables;

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use config::Config;
use frontend::DvbFrontend;

fn main() -> Result<()> {
    // Initialize logging on stderr; stdout carries the report only
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Config::from_args();
    debug!("Configuration: {:?}", config);

    let frontend = DvbFrontend::open(&config.device)?;
    debug!("Querying {}", frontend.path().display());

    let stdout = std::io::stdout();
    report::run(&frontend, config.format, &mut stdout.lock())
}
