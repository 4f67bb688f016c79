//! Unit families and magnitude scaling
//!
//! A family is an ordered ladder of universal units of one dimension with a
//! constant factor between adjacent rungs (1000 for SI, 1024 for IEC). The
//! scaler walks a value up or down its ladder until it lands in a readable
//! range, clamped at both family edges: a value past the top rung is shown
//! as a large number there, a value under the bottom rung as a sub-unit
//! decimal.

use caliper_core::UniversalUnit;
use thiserror::Error;

/// One dimension's ladder of scale prefixes, lowest magnitude first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitFamily {
    pub units: &'static [UniversalUnit],
    pub scale_factor: f64,
}

/// A value rescaled onto the unit it should be displayed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledValue {
    pub value: f64,
    pub unit: UniversalUnit,
}

/// Defects surfaced by [`validate_family_disjointness`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FamilyError {
    #[error("unit {unit} appears in more than one family")]
    Overlap { unit: UniversalUnit },
}

use caliper_core::UniversalUnit as U;

/// All registered families. Lookup takes the first family containing the
/// queried unit; [`validate_family_disjointness`] keeps "first" unambiguous.
pub const FAMILIES: &[UnitFamily] = &[
    // Bytes, SI (B -> kB -> ... -> YB)
    UnitFamily {
        units: &[
            U::Bytes,
            U::Kilobytes,
            U::Megabytes,
            U::Gigabytes,
            U::Terabytes,
            U::Petabytes,
            U::Exabytes,
            U::Zettabytes,
            U::Yottabytes,
        ],
        scale_factor: 1000.0,
    },
    // Byte rates, SI (B/s -> ... -> YB/s)
    UnitFamily {
        units: &[
            U::BytesPerSecond,
            U::KilobytesPerSecond,
            U::MegabytesPerSecond,
            U::GigabytesPerSecond,
            U::TerabytesPerSecond,
            U::PetabytesPerSecond,
            U::ExabytesPerSecond,
            U::ZettabytesPerSecond,
            U::YottabytesPerSecond,
        ],
        scale_factor: 1000.0,
    },
    // Bytes, IEC (KiB -> ... -> YiB)
    UnitFamily {
        units: &[
            U::Kibibytes,
            U::Mebibytes,
            U::Gibibytes,
            U::Tebibytes,
            U::Pebibytes,
            U::Exbibytes,
            U::Zebibytes,
            U::Yobibytes,
        ],
        scale_factor: 1024.0,
    },
    // Byte rates, IEC (KiB/s -> ... -> YiB/s)
    UnitFamily {
        units: &[
            U::KibibytesPerSecond,
            U::MebibytesPerSecond,
            U::GibibytesPerSecond,
            U::TebibytesPerSecond,
            U::PebibytesPerSecond,
            U::ExbibytesPerSecond,
            U::ZebibytesPerSecond,
            U::YobibytesPerSecond,
        ],
        scale_factor: 1024.0,
    },
    // Bits (b -> kb -> ... -> Yb)
    UnitFamily {
        units: &[
            U::Bits,
            U::Kilobits,
            U::Megabits,
            U::Gigabits,
            U::Terabits,
            U::Petabits,
            U::Exabits,
            U::Zettabits,
            U::Yottabits,
        ],
        scale_factor: 1000.0,
    },
    // Bit rates (b/s -> ... -> Yb/s)
    UnitFamily {
        units: &[
            U::BitsPerSecond,
            U::KilobitsPerSecond,
            U::MegabitsPerSecond,
            U::GigabitsPerSecond,
            U::TerabitsPerSecond,
            U::PetabitsPerSecond,
            U::ExabitsPerSecond,
            U::ZettabitsPerSecond,
            U::YottabitsPerSecond,
        ],
        scale_factor: 1000.0,
    },
    // Bit rates, IEC (Kib/s -> ... -> Yib/s)
    UnitFamily {
        units: &[
            U::KibibitsPerSecond,
            U::MebibitsPerSecond,
            U::GibibitsPerSecond,
            U::TebibitsPerSecond,
            U::PebibitsPerSecond,
            U::ExbibitsPerSecond,
            U::ZebibitsPerSecond,
            U::YobibitsPerSecond,
        ],
        scale_factor: 1024.0,
    },
];

/// The family a unit belongs to, if any. First match wins.
pub fn family_of(unit: UniversalUnit) -> Option<&'static UnitFamily> {
    FAMILIES.iter().find(|f| f.units.contains(&unit))
}

/// Rescale a value within its family.
///
/// Magnitude comparisons use the absolute value; the sign rides along
/// through the divisions and multiplications. The two loops cannot both
/// run for a factor greater than 1, and the index is bounded by the family
/// length, so termination is structural. A unit that is not a member of
/// `family` comes back unscaled (defensive; classification should make
/// this unreachable).
pub fn scale_within_family(value: f64, unit: UniversalUnit, family: &UnitFamily) -> ScaledValue {
    let Some(mut idx) = family.units.iter().position(|&u| u == unit) else {
        return ScaledValue { value, unit };
    };

    let mut scaled = value;
    while scaled.abs() >= family.scale_factor && idx < family.units.len() - 1 {
        scaled /= family.scale_factor;
        idx += 1;
    }
    while scaled.abs() < 1.0 && idx > 0 {
        scaled *= family.scale_factor;
        idx -= 1;
    }

    ScaledValue { value: scaled, unit: family.units[idx] }
}

/// Check that no unit is claimed by two families.
pub fn validate_family_disjointness() -> Result<(), FamilyError> {
    let mut seen = std::collections::HashSet::new();
    for family in FAMILIES {
        for &unit in family.units {
            if !seen.insert(unit) {
                return Err(FamilyError::Overlap { unit });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes_family() -> &'static UnitFamily {
        family_of(U::Bytes).unwrap()
    }

    #[test]
    fn test_scale_up_at_exact_factor() {
        let scaled = scale_within_family(1000.0, U::Bytes, bytes_family());
        assert_eq!(scaled, ScaledValue { value: 1.0, unit: U::Kilobytes });
    }

    #[test]
    fn test_below_factor_stays_put() {
        let scaled = scale_within_family(999.999, U::Bytes, bytes_family());
        assert_eq!(scaled, ScaledValue { value: 999.999, unit: U::Bytes });
    }

    #[test]
    fn test_scale_up_multiple_rungs() {
        let scaled = scale_within_family(2_500_000.0, U::Bytes, bytes_family());
        assert_eq!(scaled.unit, U::Megabytes);
        assert!((scaled.value - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_top_of_family_is_not_wrapped() {
        let scaled = scale_within_family(1034.0, U::Yottabytes, bytes_family());
        assert_eq!(scaled, ScaledValue { value: 1034.0, unit: U::Yottabytes });
    }

    #[test]
    fn test_scale_down_across_rungs() {
        let family = family_of(U::Kilobits).unwrap();
        let scaled = scale_within_family(0.5, U::Kilobits, family);
        assert_eq!(scaled, ScaledValue { value: 500.0, unit: U::Bits });
    }

    #[test]
    fn test_bottom_of_family_shows_sub_unit_decimal() {
        let scaled = scale_within_family(0.25, U::Bytes, bytes_family());
        assert_eq!(scaled, ScaledValue { value: 0.25, unit: U::Bytes });
    }

    #[test]
    fn test_zero_lands_on_family_floor() {
        for &start in bytes_family().units {
            let scaled = scale_within_family(0.0, start, bytes_family());
            assert_eq!(scaled, ScaledValue { value: 0.0, unit: U::Bytes });
        }
    }

    #[test]
    fn test_sign_is_preserved() {
        let scaled = scale_within_family(-1034.0, U::Bytes, bytes_family());
        assert_eq!(scaled.unit, U::Kilobytes);
        assert!((scaled.value + 1.034).abs() < 1e-12);

        let scaled = scale_within_family(-0.5, U::Kilobits, family_of(U::Kilobits).unwrap());
        assert_eq!(scaled, ScaledValue { value: -500.0, unit: U::Bits });
    }

    #[test]
    fn test_iec_families_scale_by_1024() {
        let family = family_of(U::Kibibytes).unwrap();
        let scaled = scale_within_family(1024.0, U::Kibibytes, family);
        assert_eq!(scaled, ScaledValue { value: 1.0, unit: U::Mebibytes });
    }

    #[test]
    fn test_non_member_comes_back_unscaled() {
        let scaled = scale_within_family(1234.0, U::Seconds, bytes_family());
        assert_eq!(scaled, ScaledValue { value: 1234.0, unit: U::Seconds });
    }

    #[test]
    fn test_families_are_disjoint() {
        assert_eq!(validate_family_disjointness(), Ok(()));
    }

    #[test]
    fn test_family_members_scale_up_into_their_own_family() {
        // Every non-top rung scaled at exactly the factor lands one rung up.
        for family in FAMILIES {
            for window in family.units.windows(2) {
                let scaled = scale_within_family(family.scale_factor, window[0], family);
                assert_eq!(scaled, ScaledValue { value: 1.0, unit: window[1] });
            }
        }
    }
}
