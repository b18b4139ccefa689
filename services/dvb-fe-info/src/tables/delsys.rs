//! Delivery systems (`enum fe_delivery_system`)

use crate::frontend::FrontendError;

pub const SYS_UNDEFINED: u8 = 0;
pub const SYS_DVBC_ANNEX_A: u8 = 1;
pub const SYS_DVBC_ANNEX_B: u8 = 2;
pub const SYS_DVBT: u8 = 3;
pub const SYS_DSS: u8 = 4;
pub const SYS_DVBS: u8 = 5;
pub const SYS_DVBS2: u8 = 6;
pub const SYS_DVBH: u8 = 7;
pub const SYS_ISDBT: u8 = 8;
pub const SYS_ISDBS: u8 = 9;
pub const SYS_ISDBC: u8 = 10;
pub const SYS_ATSC: u8 = 11;
pub const SYS_ATSCMH: u8 = 12;
pub const SYS_DTMB: u8 = 13;
pub const SYS_CMMB: u8 = 14;
pub const SYS_DAB: u8 = 15;
pub const SYS_DVBT2: u8 = 16;
pub const SYS_TURBO: u8 = 17;
pub const SYS_DVBC_ANNEX_C: u8 = 18;

/// Indexed by code value: `DELIVERY_SYSTEMS[code].0 == code`
pub const DELIVERY_SYSTEMS: &[(u8, &str)] = named![
    SYS_UNDEFINED,
    SYS_DVBC_ANNEX_A,
    SYS_DVBC_ANNEX_B,
    SYS_DVBT,
    SYS_DSS,
    SYS_DVBS,
    SYS_DVBS2,
    SYS_DVBH,
    SYS_ISDBT,
    SYS_ISDBS,
    SYS_ISDBC,
    SYS_ATSC,
    SYS_ATSCMH,
    SYS_DTMB,
    SYS_CMMB,
    SYS_DAB,
    SYS_DVBT2,
    SYS_TURBO,
    SYS_DVBC_ANNEX_C,
];

/// Resolve a driver-reported delivery system code to its name
pub fn delivery_system_name(code: u8) -> Result<&'static str, FrontendError> {
    DELIVERY_SYSTEMS
        .get(code as usize)
        .map(|&(_, name)| name)
        .ok_or(FrontendError::UnknownDeliverySystem(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_code() {
        for (index, &(code, _)) in DELIVERY_SYSTEMS.iter().enumerate() {
            assert_eq!(index, code as usize);
        }
    }

    #[test]
    fn test_lookup_preserves_order() {
        let names: Vec<_> = [SYS_DVBT, SYS_DVBS2]
            .iter()
            .map(|&code| delivery_system_name(code).unwrap())
            .collect();
        assert_eq!(names, vec!["SYS_DVBT", "SYS_DVBS2"]);
    }

    #[test]
    fn test_lookup_edges() {
        assert_eq!(delivery_system_name(0).unwrap(), "SYS_UNDEFINED");
        assert_eq!(delivery_system_name(18).unwrap(), "SYS_DVBC_ANNEX_C");
    }

    #[test]
    fn test_unknown_code() {
        let err = delivery_system_name(19).unwrap_err();
        assert!(matches!(err, FrontendError::UnknownDeliverySystem(19)));
        assert_eq!(err.to_string(), "unknown delivery system code 19");
    }
}
