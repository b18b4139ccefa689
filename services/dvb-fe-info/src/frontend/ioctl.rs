//! Kernel ABI for the DVB frontend ioctls
//!
//! Layouts follow `include/uapi/linux/dvb/frontend.h`:
//! - `FE_GET_INFO`     = `_IOR('o', 61, struct dvb_frontend_info)`
//! - `FE_GET_PROPERTY` = `_IOR('o', 83, struct dtv_properties)`

// Mirrors carry reserved and deprecated fields that are never read.
#![allow(dead_code)]

use std::ffi::c_void;
use std::ptr;

const DVB_IOC_MAGIC: u8 = b'o';
const FE_GET_INFO_NR: u8 = 61;
const FE_GET_PROPERTY_NR: u8 = 83;

/// Capacity of `dtv_property.u.buffer.data`
pub const DTV_BUFFER_LEN: usize = 32;

const MAX_DTV_STATS: usize = 4;

/// `struct dvb_frontend_info`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DvbFrontendInfo {
    pub name: [u8; 128],
    /// Deprecated `enum fe_type`
    pub fe_type: u32,
    pub frequency_min: u32,
    pub frequency_max: u32,
    pub frequency_stepsize: u32,
    pub frequency_tolerance: u32,
    pub symbol_rate_min: u32,
    pub symbol_rate_max: u32,
    pub symbol_rate_tolerance: u32,
    /// Deprecated
    pub notifier_delay: u32,
    pub caps: u32,
}

impl Default for DvbFrontendInfo {
    fn default() -> Self {
        Self {
            name: [0; 128],
            fe_type: 0,
            frequency_min: 0,
            frequency_max: 0,
            frequency_stepsize: 0,
            frequency_tolerance: 0,
            symbol_rate_min: 0,
            symbol_rate_max: 0,
            symbol_rate_tolerance: 0,
            notifier_delay: 0,
            caps: 0,
        }
    }
}

impl DvbFrontendInfo {
    /// Device name up to the first NUL
    pub fn name(&self) -> String {
        let end = self.name.iter().position(|&b| b == 0).unwrap_or(self.name.len());
        String::from_utf8_lossy(&self.name[..end]).into_owned()
    }
}

/// `struct dtv_stats`
#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct DtvStats {
    pub scale: u8,
    /// `uvalue` / `svalue` union
    pub value: u64,
}

/// `struct dtv_fe_stats`
#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct DtvFeStats {
    pub len: u8,
    pub stat: [DtvStats; MAX_DTV_STATS],
}

/// Anonymous `buffer` member of `dtv_property.u`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DtvBuffer {
    pub data: [u8; DTV_BUFFER_LEN],
    pub len: u32,
    pub reserved1: [u32; 3],
    pub reserved2: *mut c_void,
}

impl DtvBuffer {
    pub fn empty() -> Self {
        Self {
            data: [0; DTV_BUFFER_LEN],
            len: 0,
            reserved1: [0; 3],
            reserved2: ptr::null_mut(),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union DtvPropertyValue {
    pub data: u32,
    pub st: DtvFeStats,
    pub buffer: DtvBuffer,
}

/// `struct dtv_property` (packed)
#[repr(C, packed)]
#[derive(Clone, Copy)]
pub struct DtvProperty {
    pub cmd: u32,
    pub reserved: [u32; 3],
    pub u: DtvPropertyValue,
    pub result: i32,
}

impl DtvProperty {
    /// Request for `cmd` with a zeroed value area
    pub fn request(cmd: u32) -> Self {
        Self {
            cmd,
            reserved: [0; 3],
            // buffer is the largest member, so this zeroes the whole union
            u: DtvPropertyValue {
                buffer: DtvBuffer::empty(),
            },
            result: 0,
        }
    }

    /// Read `u.data`
    pub fn data(&self) -> u32 {
        let u = self.u;
        // SAFETY: every union member is plain integer data and the whole
        // union was initialized through `buffer` in `request`.
        unsafe { u.data }
    }

    /// Read `u.buffer`
    pub fn buffer(&self) -> DtvBuffer {
        let u = self.u;
        // SAFETY: see `data`.
        unsafe { u.buffer }
    }
}

/// `struct dtv_properties`
#[repr(C)]
#[derive(Debug)]
pub struct DtvProperties {
    pub num: u32,
    pub props: *mut DtvProperty,
}

nix::ioctl_read!(fe_get_info, DVB_IOC_MAGIC, FE_GET_INFO_NR, DvbFrontendInfo);
nix::ioctl_read!(fe_get_property, DVB_IOC_MAGIC, FE_GET_PROPERTY_NR, DtvProperties);
