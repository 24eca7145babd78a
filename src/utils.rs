//! Pure value transforms applied to raw register values.
//!
//! Registers arrive as JSON numbers and are handled as `f64` throughout; every transform
//! here is a single arithmetic step so fixed-point results are exact to the last digit.

use num_traits::ToPrimitive;

/// Amount added to a 16-bit total for every wrap reported by its resets register.
pub const RESET_WRAP: f64 = 65535.0;

pub type Lookup = [(u16, &'static str)];

pub const INVERTER_OPERATION_MODES: &Lookup = &[
    (0, "Waiting"),
    (1, "Checking"),
    (2, "Normal"),
    (3, "Off"),
    (4, "Permanent Fault"),
    (5, "Updating"),
    (6, "EPS Check"),
    (7, "EPS Mode"),
    (8, "Self Test"),
    (9, "Idle"),
    (10, "Standby"),
];

pub const BATTERY_OPERATION_MODES: &Lookup = &[
    (0, "Self Use Mode"),
    (1, "Force Time Use"),
    (2, "Back Up Mode"),
    (3, "Feed-in Priority"),
];

pub fn div10(value: f64) -> f64 {
    value / 10.0
}

pub fn div100(value: f64) -> f64 {
    value / 100.0
}

/// Reinterpret an unsigned 16-bit register as two's complement.
pub fn to_signed(value: f64) -> f64 {
    if value > 32767.0 {
        value - 65536.0
    } else {
        value
    }
}

/// Reinterpret an unsigned 32-bit quantity as two's complement.
pub fn to_signed32(value: f64) -> f64 {
    if value > 2147483647.0 {
        value - 4294967296.0
    } else {
        value
    }
}

pub fn twoway_div10(value: f64) -> f64 {
    to_signed(value) / 10.0
}

pub fn twoway_div100(value: f64) -> f64 {
    to_signed(value) / 100.0
}

/// Combine 16-bit registers into one value, least significant word first.
///
/// Returns `None` if a register is not a 16-bit unsigned integer.
pub fn pack_u16(registers: &[f64]) -> Option<f64> {
    let mut accumulator: u64 = 0;
    for (position, register) in registers.iter().enumerate() {
        if register.fract() != 0.0 || position >= 4 {
            return None;
        }
        let word = u64::from(register.to_u16()?);
        accumulator |= word << (16 * position);
    }
    accumulator.to_f64()
}

/// Rebuild a wrapped 16-bit total from its resets register.
pub fn resetting_counter(value: f64, resets: f64) -> f64 {
    value + resets * RESET_WRAP
}

/// Translate an enum register into its text, keeping unknown codes visible.
pub fn lookup(table: &Lookup, value: f64) -> String {
    value
        .to_u16()
        .filter(|_| value.fract() == 0.0)
        .and_then(|code| table.iter().find(|(c, _)| *c == code))
        .map(|(_, text)| text.to_string())
        .unwrap_or_else(|| format!("unmapped value '{}'", value))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn signed_16_bit_matches_twos_complement() {
        for raw in [0u16, 1, 0x7FFF, 0x8000, 0xFFFF] {
            assert_eq!(raw as i16 as f64, to_signed(raw as f64), "raw {:#x}", raw);
        }
    }

    #[test]
    fn signed_32_bit_matches_twos_complement() {
        for raw in [0u32, 1, 0x8000, 0xFFFF, 0x7FFF_FFFF, 0x8000_0000, 0xFFFF_FFFF] {
            assert_eq!(raw as i32 as f64, to_signed32(raw as f64), "raw {:#x}", raw);
        }
    }

    #[test]
    fn twoway_scaling() {
        assert_eq!(-15.7, twoway_div10(65379.0));
        assert_eq!(2.2, twoway_div10(22.0));
        assert_eq!(-1.0, twoway_div100(65436.0));
    }

    #[test]
    fn pack_then_scale_restores_quantity() {
        // 8478.7 kWh stored in tenths: 84787 = 0x1_4B33
        let energy: f64 = 8478.7;
        let tenths = (energy * 10.0).round() as u32;
        let low = (tenths & 0xFFFF) as f64;
        let high = (tenths >> 16) as f64;
        assert_eq!(19251.0, low);
        assert_eq!(1.0, high);
        assert_eq!(Some(84787.0), pack_u16(&[low, high]));
        assert_eq!(energy, div10(pack_u16(&[low, high]).unwrap()));
    }

    #[test]
    fn pack_negative_feed_in_power() {
        // -152 W as 32-bit two's complement split over two registers
        let packed = pack_u16(&[65384.0, 65535.0]).unwrap();
        assert_eq!(-152.0, to_signed32(packed));
    }

    #[test]
    fn pack_rejects_invalid_registers() {
        assert_eq!(None, pack_u16(&[-1.0, 0.0]));
        assert_eq!(None, pack_u16(&[1.5, 0.0]));
        assert_eq!(None, pack_u16(&[f64::NAN]));
        assert_eq!(None, pack_u16(&[70000.0, 0.0]));
        assert_eq!(None, pack_u16(&[70000.0, 1.0]));
        assert_eq!(None, pack_u16(&[0.0, 65536.0]));
        assert_eq!(Some(4294967295.0), pack_u16(&[65535.0, 65535.0]));
    }

    #[test]
    fn resets_reconstruct_total() {
        assert_eq!(65545.0, resetting_counter(10.0, 1.0));
        assert_eq!(13107.5, div10(resetting_counter(5.0, 2.0)));
        assert_eq!(42.0, resetting_counter(42.0, 0.0));
    }

    #[test]
    fn lookup_modes() {
        assert_eq!("Normal", lookup(INVERTER_OPERATION_MODES, 2.0));
        assert_eq!("Self Use Mode", lookup(BATTERY_OPERATION_MODES, 0.0));
        assert_eq!("unmapped value '42'", lookup(BATTERY_OPERATION_MODES, 42.0));
        assert_eq!("unmapped value '1.5'", lookup(BATTERY_OPERATION_MODES, 1.5));
    }
}
