//! Frontend query errors

use std::path::PathBuf;

use nix::errno::Errno;
use thiserror::Error;

use super::types::PropertyCommand;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("unable to open frontend {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to query ioctl {request}")]
    Query {
        request: &'static str,
        #[source]
        source: Errno,
    },

    #[error("unknown delivery system code {0}")]
    UnknownDeliverySystem(u8),

    #[error("driver response is missing property {0}")]
    MissingProperty(PropertyCommand),
}
