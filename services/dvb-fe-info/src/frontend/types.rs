//! Frontend query results

use std::fmt;

use serde::Serialize;

use super::error::FrontendError;

/// Static frontend description returned by `FE_GET_INFO`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontendInfo {
    /// Driver-provided device name
    pub name: String,

    /// Frequency limits, in kHz for satellite and Hz otherwise
    pub frequency_min: u32,
    pub frequency_max: u32,
    pub frequency_stepsize: u32,
    pub frequency_tolerance: u32,

    /// Symbol rate limits in symbols per second
    pub symbol_rate_min: u32,
    pub symbol_rate_max: u32,
    pub symbol_rate_tolerance: u32,

    /// `enum fe_caps` bit set
    pub caps: u32,
}

/// Property commands understood by `FE_GET_PROPERTY`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum PropertyCommand {
    ApiVersion = 35,
    EnumDelsys = 44,
}

impl PropertyCommand {
    /// Kernel `DTV_*` command code
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ApiVersion => "DTV_API_VERSION",
            Self::EnumDelsys => "DTV_ENUM_DELSYS",
        }
    }
}

impl fmt::Display for PropertyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kernel DVB API version, packed as `major << 8 | minor`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApiVersion {
    pub major: u8,
    pub minor: u8,
}

impl ApiVersion {
    pub fn from_packed(data: u32) -> Self {
        Self {
            major: ((data >> 8) & 0xff) as u8,
            minor: (data & 0xff) as u8,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Value filled in by the driver for one property command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// `enum fe_delivery_system` codes, in driver order
    DeliverySystems(Vec<u8>),
    ApiVersion(ApiVersion),
}

impl PropertyValue {
    pub fn command(&self) -> PropertyCommand {
        match self {
            Self::DeliverySystems(_) => PropertyCommand::EnumDelsys,
            Self::ApiVersion(_) => PropertyCommand::ApiVersion,
        }
    }
}

/// Result of the fixed two-command property query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendProperties {
    pub delivery_systems: Vec<u8>,
    pub api_version: ApiVersion,
}

impl FrontendProperties {
    /// Commands issued, in this order
    pub const COMMANDS: [PropertyCommand; 2] =
        [PropertyCommand::EnumDelsys, PropertyCommand::ApiVersion];

    /// Pick the requested values out of a driver response
    pub fn from_values(values: Vec<PropertyValue>) -> Result<Self, FrontendError> {
        let mut delivery_systems = None;
        let mut api_version = None;

        for value in values {
            match value {
                PropertyValue::DeliverySystems(codes) => delivery_systems = Some(codes),
                PropertyValue::ApiVersion(version) => api_version = Some(version),
            }
        }

        Ok(Self {
            delivery_systems: delivery_systems
                .ok_or(FrontendError::MissingProperty(PropertyCommand::EnumDelsys))?,
            api_version: api_version
                .ok_or(FrontendError::MissingProperty(PropertyCommand::ApiVersion))?,
        })
    }
}
