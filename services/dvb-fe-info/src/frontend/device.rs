//! Frontend device node access via ioctl

use std::fs::File;
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::FrontendError;
use super::ioctl::{self, DtvProperties, DtvProperty, DvbFrontendInfo, DTV_BUFFER_LEN};
use super::types::{ApiVersion, FrontendInfo, PropertyCommand, PropertyValue};
use super::Frontend;

/// An open `/dev/dvb/adapterX/frontendY` node
///
/// The handle is closed when the value is dropped.
#[derive(Debug)]
pub struct DvbFrontend {
    path: PathBuf,
    file: File,
}

impl DvbFrontend {
    /// Open a frontend read-only
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FrontendError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| FrontendError::Open {
            path: path.clone(),
            source,
        })?;

        debug!("Opened frontend {}", path.display());
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Frontend for DvbFrontend {
    fn get_info(&self) -> Result<FrontendInfo, FrontendError> {
        let mut raw = DvbFrontendInfo::default();

        debug!("Issuing FE_GET_INFO on {}", self.path.display());
        // SAFETY: `raw` is a valid, writable `struct dvb_frontend_info` for
        // the duration of the call.
        unsafe { ioctl::fe_get_info(self.file.as_raw_fd(), &mut raw) }.map_err(|source| {
            FrontendError::Query {
                request: "FE_GET_INFO",
                source,
            }
        })?;

        Ok(FrontendInfo {
            name: raw.name(),
            frequency_min: raw.frequency_min,
            frequency_max: raw.frequency_max,
            frequency_stepsize: raw.frequency_stepsize,
            frequency_tolerance: raw.frequency_tolerance,
            symbol_rate_min: raw.symbol_rate_min,
            symbol_rate_max: raw.symbol_rate_max,
            symbol_rate_tolerance: raw.symbol_rate_tolerance,
            caps: raw.caps,
        })
    }

    fn get_properties(
        &self,
        commands: &[PropertyCommand],
    ) -> Result<Vec<PropertyValue>, FrontendError> {
        let mut props: Vec<DtvProperty> = commands
            .iter()
            .map(|cmd| DtvProperty::request(cmd.code()))
            .collect();
        let mut request = DtvProperties {
            num: props.len() as u32,
            props: props.as_mut_ptr(),
        };

        debug!(
            "Issuing FE_GET_PROPERTY on {} with {} command(s)",
            self.path.display(),
            request.num
        );
        // SAFETY: `request.props` points at `request.num` initialized
        // properties that outlive the call.
        unsafe { ioctl::fe_get_property(self.file.as_raw_fd(), &mut request) }.map_err(
            |source| FrontendError::Query {
                request: "FE_GET_PROPERTY",
                source,
            },
        )?;

        let values: Vec<PropertyValue> = commands
            .iter()
            .zip(&props)
            .map(|(&cmd, prop)| decode_property(cmd, prop))
            .collect();

        for value in &values {
            debug!("Driver filled {}", value.command());
        }
        Ok(values)
    }
}

fn decode_property(cmd: PropertyCommand, prop: &DtvProperty) -> PropertyValue {
    match cmd {
        PropertyCommand::EnumDelsys => {
            let buffer = prop.buffer();
            let mut len = buffer.len as usize;
            if len > DTV_BUFFER_LEN {
                warn!(
                    "Driver reported {} delivery systems, buffer holds {}",
                    len, DTV_BUFFER_LEN
                );
                len = DTV_BUFFER_LEN;
            }
            PropertyValue::DeliverySystems(buffer.data[..len].to_vec())
        }
        PropertyCommand::ApiVersion => {
            PropertyValue::ApiVersion(ApiVersion::from_packed(prop.data()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_path() {
        let err = DvbFrontend::open("/nonexistent/dvb/adapter0/frontend0").unwrap_err();
        match err {
            FrontendError::Open { path, source } => {
                assert_eq!(path, PathBuf::from("/nonexistent/dvb/adapter0/frontend0"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_query_non_dvb_file() {
        // A regular file rejects the frontend ioctls
        let frontend = DvbFrontend::open("/proc/self/stat").unwrap();
        assert_eq!(frontend.path(), Path::new("/proc/self/stat"));
        let err = frontend.get_info().unwrap_err();
        assert!(matches!(
            err,
            FrontendError::Query {
                request: "FE_GET_INFO",
                ..
            }
        ));
    }

    #[test]
    fn test_decode_delivery_systems() {
        let mut prop = DtvProperty::request(PropertyCommand::EnumDelsys.code());
        let mut buffer = prop.buffer();
        buffer.data[..2].copy_from_slice(&[5, 6]);
        buffer.len = 2;
        prop.u = ioctl::DtvPropertyValue { buffer };

        assert_eq!(
            decode_property(PropertyCommand::EnumDelsys, &prop),
            PropertyValue::DeliverySystems(vec![5, 6])
        );
    }

    #[test]
    fn test_decode_clamps_oversized_len() {
        let mut prop = DtvProperty::request(PropertyCommand::EnumDelsys.code());
        let mut buffer = prop.buffer();
        buffer.len = 1000;
        prop.u = ioctl::DtvPropertyValue { buffer };

        match decode_property(PropertyCommand::EnumDelsys, &prop) {
            PropertyValue::DeliverySystems(codes) => assert_eq!(codes.len(), DTV_BUFFER_LEN),
            other => panic!("unexpected value: {other:?}"),
        }
    }

    #[test]
    fn test_decode_api_version() {
        let mut prop = DtvProperty::request(PropertyCommand::ApiVersion.code());
        prop.u = ioctl::DtvPropertyValue { data: 0x0505 };

        assert_eq!(
            decode_property(PropertyCommand::ApiVersion, &prop),
            PropertyValue::ApiVersion(ApiVersion { major: 5, minor: 5 })
        );
    }
}
