//! DVB frontend queries
//!
//! Two read-only requests are made against a frontend:
//! 1. `FE_GET_INFO` for the static capability record
//! 2. `FE_GET_PROPERTY` for delivery systems and the API version

mod device;
mod error;
mod ioctl;
mod types;

pub use device::DvbFrontend;
pub use error::FrontendError;
pub use types::{ApiVersion, FrontendInfo, FrontendProperties, PropertyCommand, PropertyValue};

/// Source of frontend query results
pub trait Frontend {
    /// Static frontend description (`FE_GET_INFO`)
    fn get_info(&self) -> Result<FrontendInfo, FrontendError>;

    /// One value per command, in request order (`FE_GET_PROPERTY`)
    fn get_properties(
        &self,
        commands: &[PropertyCommand],
    ) -> Result<Vec<PropertyValue>, FrontendError>;

    /// Delivery systems and API version
    fn query_properties(&self) -> Result<FrontendProperties, FrontendError> {
        let values = self.get_properties(&FrontendProperties::COMMANDS)?;
        FrontendProperties::from_values(values)
    }
}
