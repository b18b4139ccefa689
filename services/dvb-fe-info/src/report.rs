//! Report rendering
//!
//! Text output keeps the layout of the classic frontend info dump: each
//! section is followed by a blank line and the API version closes the report.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::config::OutputFormat;
use crate::frontend::{ApiVersion, Frontend, FrontendError, FrontendInfo, FrontendProperties};
use crate::tables::{delivery_system_name, verify_flag, CAPABILITIES};

#[derive(Debug, Serialize)]
pub struct FrequencyRange {
    pub min: u32,
    pub max: u32,
    pub stepsize: u32,
    pub tolerance: u32,
}

#[derive(Debug, Serialize)]
pub struct SymbolRateRange {
    pub min: u32,
    pub max: u32,
    pub tolerance: u32,
}

#[derive(Debug, Serialize)]
pub struct Capability {
    pub name: &'static str,
    pub supported: bool,
}

/// Everything gathered from one frontend
#[derive(Debug, Serialize)]
pub struct Report {
    pub name: String,
    pub frequency: FrequencyRange,
    pub symbol_rate: SymbolRateRange,
    pub caps: u32,
    pub capabilities: Vec<Capability>,
    pub delivery_systems: Vec<&'static str>,
    pub api_version: ApiVersion,
}

impl Report {
    pub fn new(info: &FrontendInfo, props: &FrontendProperties) -> Result<Self, FrontendError> {
        Ok(Self {
            name: info.name.clone(),
            frequency: FrequencyRange {
                min: info.frequency_min,
                max: info.frequency_max,
                stepsize: info.frequency_stepsize,
                tolerance: info.frequency_tolerance,
            },
            symbol_rate: SymbolRateRange {
                min: info.symbol_rate_min,
                max: info.symbol_rate_max,
                tolerance: info.symbol_rate_tolerance,
            },
            caps: info.caps,
            capabilities: CAPABILITIES
                .iter()
                .map(|&(mask, name)| Capability {
                    name,
                    supported: verify_flag(info.caps, mask),
                })
                .collect(),
            delivery_systems: delivery_system_names(&props.delivery_systems)?,
            api_version: props.api_version,
        })
    }
}

/// Resolve driver codes to names, failing on the first unknown code
pub fn delivery_system_names(codes: &[u8]) -> Result<Vec<&'static str>, FrontendError> {
    codes.iter().map(|&code| delivery_system_name(code)).collect()
}

/// Query `frontend` and write the report to `out`
///
/// In text mode the capability block is written and flushed before the
/// property query, so it stays visible if that query fails.
pub fn run<F: Frontend, W: Write>(frontend: &F, format: OutputFormat, out: &mut W) -> Result<()> {
    let info = frontend.get_info()?;
    info!("Frontend: {}", info.name);

    match format {
        OutputFormat::Text => {
            write_info(out, &info)?;
            out.flush()?;

            let props = frontend.query_properties()?;
            let names = delivery_system_names(&props.delivery_systems)?;
            write_properties(out, &names, props.api_version)?;
        }
        OutputFormat::Json => {
            let props = frontend.query_properties()?;
            let report = Report::new(&info, &props)?;
            serde_json::to_writer_pretty(&mut *out, &report).context("failed to encode report")?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Name, frequency, symbol rate and capability sections
pub fn write_info<W: Write>(out: &mut W, info: &FrontendInfo) -> std::io::Result<()> {
    writeln!(out, "{}", info.name)?;
    writeln!(out)?;

    writeln!(out, "Frequency properties:")?;
    writeln!(out, "FREQUENCY MIN: {}", info.frequency_min)?;
    writeln!(out, "FREQUENCY MAX: {}", info.frequency_max)?;
    writeln!(out, "FREQUENCY STEPSIZE: {}", info.frequency_stepsize)?;
    writeln!(out, "FREQUENCY TOLERANCE: {}", info.frequency_tolerance)?;
    writeln!(out)?;

    writeln!(out, "Symbol rate properties:")?;
    writeln!(out, "SYMBOL RATE MIN: {}", info.symbol_rate_min)?;
    writeln!(out, "SYMBOL RATE MAX: {}", info.symbol_rate_max)?;
    writeln!(out, "SYMBOL RATE TOLERANCE: {}", info.symbol_rate_tolerance)?;
    writeln!(out)?;

    writeln!(out, "Supported capabilities:")?;
    for &(mask, name) in CAPABILITIES {
        writeln!(out, "{}: {}", name, verify_flag(info.caps, mask) as u8)?;
    }
    writeln!(out)
}

/// Delivery system and API version sections
pub fn write_properties<W: Write>(
    out: &mut W,
    delivery_systems: &[&str],
    api_version: ApiVersion,
) -> std::io::Result<()> {
    writeln!(out, "Supported delivery systems:")?;
    for name in delivery_systems {
        writeln!(out, "{}", name)?;
    }
    writeln!(out)?;

    writeln!(out, "Linux DVB API Version: {}", api_version)
}
