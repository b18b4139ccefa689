//! Static name tables for the kernel's DVB frontend enumerations
//!
//! Values mirror `include/uapi/linux/dvb/frontend.h` (Linux v5.10):
//! - `enum fe_caps` bit masks, in declaration order
//! - `enum fe_delivery_system` codes, indexed by numeric value

/// Pair each constant with its own identifier as the display name.
macro_rules! named {
    ($($name:ident),* $(,)?) => {
        &[$(($name, stringify!($name))),*]
    };
}

pub mod caps;
pub mod delsys;

pub use caps::{verify_flag, CAPABILITIES};
pub use delsys::delivery_system_name;
