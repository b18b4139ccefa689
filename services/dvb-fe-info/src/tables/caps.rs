//! Frontend capability flags (`enum fe_caps`)

pub const FE_IS_STUPID: u32 = 0;
pub const FE_CAN_INVERSION_AUTO: u32 = 0x1;
pub const FE_CAN_FEC_1_2: u32 = 0x2;
pub const FE_CAN_FEC_2_3: u32 = 0x4;
pub const FE_CAN_FEC_3_4: u32 = 0x8;
pub const FE_CAN_FEC_4_5: u32 = 0x10;
pub const FE_CAN_FEC_5_6: u32 = 0x20;
pub const FE_CAN_FEC_6_7: u32 = 0x40;
pub const FE_CAN_FEC_7_8: u32 = 0x80;
pub const FE_CAN_FEC_8_9: u32 = 0x100;
pub const FE_CAN_FEC_AUTO: u32 = 0x200;
pub const FE_CAN_QPSK: u32 = 0x400;
pub const FE_CAN_QAM_16: u32 = 0x800;
pub const FE_CAN_QAM_32: u32 = 0x1000;
pub const FE_CAN_QAM_64: u32 = 0x2000;
pub const FE_CAN_QAM_128: u32 = 0x4000;
pub const FE_CAN_QAM_256: u32 = 0x8000;
pub const FE_CAN_QAM_AUTO: u32 = 0x10000;
pub const FE_CAN_TRANSMISSION_MODE_AUTO: u32 = 0x20000;
pub const FE_CAN_BANDWIDTH_AUTO: u32 = 0x40000;
pub const FE_CAN_GUARD_INTERVAL_AUTO: u32 = 0x80000;
pub const FE_CAN_HIERARCHY_AUTO: u32 = 0x100000;
pub const FE_CAN_8VSB: u32 = 0x200000;
pub const FE_CAN_16VSB: u32 = 0x400000;
pub const FE_HAS_EXTENDED_CAPS: u32 = 0x800000;
pub const FE_CAN_MULTISTREAM: u32 = 0x4000000;
pub const FE_CAN_TURBO_FEC: u32 = 0x8000000;
pub const FE_CAN_2G_MODULATION: u32 = 0x10000000;
pub const FE_NEEDS_BENDING: u32 = 0x20000000;
pub const FE_CAN_RECOVER: u32 = 0x40000000;
pub const FE_CAN_MUTE_TS: u32 = 0x80000000;

/// Capability masks with their names, in report order
pub const CAPABILITIES: &[(u32, &str)] = named![
    FE_IS_STUPID,
    FE_CAN_INVERSION_AUTO,
    FE_CAN_FEC_1_2,
    FE_CAN_FEC_2_3,
    FE_CAN_FEC_3_4,
    FE_CAN_FEC_4_5,
    FE_CAN_FEC_5_6,
    FE_CAN_FEC_6_7,
    FE_CAN_FEC_7_8,
    FE_CAN_FEC_8_9,
    FE_CAN_FEC_AUTO,
    FE_CAN_QPSK,
    FE_CAN_QAM_16,
    FE_CAN_QAM_32,
    FE_CAN_QAM_64,
    FE_CAN_QAM_128,
    FE_CAN_QAM_256,
    FE_CAN_QAM_AUTO,
    FE_CAN_TRANSMISSION_MODE_AUTO,
    FE_CAN_BANDWIDTH_AUTO,
    FE_CAN_GUARD_INTERVAL_AUTO,
    FE_CAN_HIERARCHY_AUTO,
    FE_CAN_8VSB,
    FE_CAN_16VSB,
    FE_HAS_EXTENDED_CAPS,
    FE_CAN_MULTISTREAM,
    FE_CAN_TURBO_FEC,
    FE_CAN_2G_MODULATION,
    FE_NEEDS_BENDING,
    FE_CAN_RECOVER,
    FE_CAN_MUTE_TS,
];

/// Test a capability mask against the driver-reported flags.
///
/// A non-zero mask is set when any of its bits is present in `caps`.
/// The zero mask (`FE_IS_STUPID`) is set only when `caps` has no bits at all.
pub fn verify_flag(caps: u32, mask: u32) -> bool {
    if mask == 0 {
        caps == 0
    } else {
        caps & mask != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reported(caps: u32) -> Vec<(&'static str, bool)> {
        CAPABILITIES
            .iter()
            .map(|&(mask, name)| (name, verify_flag(caps, mask)))
            .collect()
    }

    #[test]
    fn test_all_bits_set() {
        for (name, set) in reported(u32::MAX) {
            assert_eq!(set, name != "FE_IS_STUPID", "{}", name);
        }
    }

    #[test]
    fn test_no_bits_set() {
        for (name, set) in reported(0) {
            assert_eq!(set, name == "FE_IS_STUPID", "{}", name);
        }
    }

    #[test]
    fn test_single_matching_bit() {
        let flags = reported(FE_CAN_QPSK);
        let set: Vec<_> = flags.iter().filter(|(_, s)| *s).map(|(n, _)| *n).collect();
        assert_eq!(set, vec!["FE_CAN_QPSK"]);
    }

    #[test]
    fn test_non_matching_bit() {
        // 0x1000000 is not a declared capability
        let flags = reported(0x0100_0000);
        assert!(flags.iter().all(|(_, set)| !set));
    }

    #[test]
    fn test_table_order_and_size() {
        assert_eq!(CAPABILITIES.len(), 31);
        assert_eq!(CAPABILITIES[0], (0, "FE_IS_STUPID"));
        assert_eq!(CAPABILITIES[30], (0x8000_0000, "FE_CAN_MUTE_TS"));
    }
}
