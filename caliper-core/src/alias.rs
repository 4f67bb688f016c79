//! Alias resolution
//!
//! Maps external-ecosystem unit identifiers onto the universal taxonomy.
//! Three vocabularies feed the table: AWS CloudWatch names (`"Bytes/Second"`),
//! UCUM codes (`"By/s"`) and OpenMetrics-style names (`"bytes_per_second"`).
//! Only the commonly-ingested units carry aliases; the rest are reachable
//! by their universal code alone.
//!
//! Resolution is deliberately permissive: an identifier nobody recognizes is
//! passed through untouched so the caller can still render something.

use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

use crate::name::display_name;
use crate::unit::UniversalUnit;

/// Outcome of resolving a raw unit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// Input was empty; there is no unit to speak of.
    Empty,
    /// Input named a universal unit, by code or by alias.
    Unit(UniversalUnit),
    /// Input is not in the taxonomy; carried through verbatim.
    Unknown(&'a str),
}

impl Resolved<'_> {
    /// The resolved universal unit, if any.
    pub fn unit(&self) -> Option<UniversalUnit> {
        match self {
            Resolved::Unit(u) => Some(*u),
            _ => None,
        }
    }
}

/// Table defects surfaced by [`validate_alias_disjointness`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("alias {identifier:?} maps to both {first} and {second}")]
    Collision {
        identifier: String,
        first: UniversalUnit,
        second: UniversalUnit,
    },
}

/// External identifiers that resolve to this unit.
///
/// Case-sensitive, exact strings; callers needing case-insensitivity
/// pre-normalize. The unit's own code is not repeated here unless an
/// external vocabulary happens to share it.
pub fn aliases(unit: UniversalUnit) -> &'static [&'static str] {
    match unit {
        // Time
        UniversalUnit::Nanoseconds => &["ns", "nanoseconds"],
        UniversalUnit::Microseconds => &["Microseconds", "us", "microseconds"],
        UniversalUnit::Milliseconds => &["Milliseconds", "ms", "milliseconds"],
        UniversalUnit::Seconds => &["Seconds", "s", "seconds"],
        UniversalUnit::Minutes => &["min", "minutes"],
        UniversalUnit::Hours => &["h", "hours"],
        UniversalUnit::Days => &["d", "days"],

        // Data
        UniversalUnit::Bytes => &["Bytes", "By", "bytes"],
        UniversalUnit::Kilobytes => &["Kilobytes", "kBy", "kilobytes"],
        UniversalUnit::Megabytes => &["Megabytes", "MBy", "megabytes"],
        UniversalUnit::Gigabytes => &["Gigabytes", "GBy", "gigabytes"],
        UniversalUnit::Terabytes => &["Terabytes", "TBy", "terabytes"],
        UniversalUnit::Petabytes => &["Petabytes", "PBy", "petabytes"],
        UniversalUnit::Exabytes => &["Exabytes", "EBy", "exabytes"],
        UniversalUnit::Zettabytes => &["Zettabytes", "ZBy", "zettabytes"],
        UniversalUnit::Yottabytes => &["Yottabytes", "YBy", "yottabytes"],

        // Binary (IEC) data
        UniversalUnit::Kibibytes => &["KiBy", "kibibytes"],
        UniversalUnit::Mebibytes => &["MiBy", "mebibytes"],
        UniversalUnit::Gibibytes => &["GiBy", "gibibytes"],
        UniversalUnit::Tebibytes => &["TiBy", "tebibytes"],
        UniversalUnit::Pebibytes => &["PiBy", "pebibytes"],
        UniversalUnit::Exbibytes => &["EiBy", "exbibytes"],
        UniversalUnit::Zebibytes => &["ZiBy", "zebibytes"],
        UniversalUnit::Yobibytes => &["YiBy", "yobibytes"],

        // Data rate
        UniversalUnit::BytesPerSecond => &["Bytes/Second", "By/s", "bytes_per_second"],
        UniversalUnit::KilobytesPerSecond => &["Kilobytes/Second", "kBy/s", "kilobytes_per_second"],
        UniversalUnit::MegabytesPerSecond => &["Megabytes/Second", "MBy/s", "megabytes_per_second"],
        UniversalUnit::GigabytesPerSecond => &["Gigabytes/Second", "GBy/s", "gigabytes_per_second"],
        UniversalUnit::TerabytesPerSecond => &["Terabytes/Second", "TBy/s", "terabytes_per_second"],
        UniversalUnit::PetabytesPerSecond => &["Petabytes/Second", "PBy/s", "petabytes_per_second"],
        UniversalUnit::ExabytesPerSecond => &["Exabytes/Second", "EBy/s", "exabytes_per_second"],
        UniversalUnit::ZettabytesPerSecond => {
            &["Zettabytes/Second", "ZBy/s", "zettabytes_per_second"]
        }
        UniversalUnit::YottabytesPerSecond => {
            &["Yottabytes/Second", "YBy/s", "yottabytes_per_second"]
        }

        // Binary (IEC) data rate
        UniversalUnit::KibibytesPerSecond => &["KiBy/s", "kibibytes_per_second"],
        UniversalUnit::MebibytesPerSecond => &["MiBy/s", "mebibytes_per_second"],
        UniversalUnit::GibibytesPerSecond => &["GiBy/s", "gibibytes_per_second"],
        UniversalUnit::TebibytesPerSecond => &["TiBy/s", "tebibytes_per_second"],
        UniversalUnit::PebibytesPerSecond => &["PiBy/s", "pebibytes_per_second"],
        UniversalUnit::ExbibytesPerSecond => &["EiBy/s", "exbibytes_per_second"],
        UniversalUnit::ZebibytesPerSecond => &["ZiBy/s", "zebibytes_per_second"],
        UniversalUnit::YobibytesPerSecond => &["YiBy/s", "yobibytes_per_second"],

        // Bits
        UniversalUnit::Bits => &["Bits", "bit", "bits"],
        UniversalUnit::Kilobits => &["Kilobits", "kbit", "kilobits"],
        UniversalUnit::Megabits => &["Megabits", "Mbit", "megabits"],
        UniversalUnit::Gigabits => &["Gigabits", "Gbit", "gigabits"],
        UniversalUnit::Terabits => &["Terabits", "Tbit", "terabits"],
        UniversalUnit::Petabits => &["Petabits", "Pbit", "petabits"],
        UniversalUnit::Exabits => &["Exabits", "Ebit", "exabits"],
        UniversalUnit::Zettabits => &["Zettabits", "Zbit", "zettabits"],
        UniversalUnit::Yottabits => &["Yottabits", "Ybit", "yottabits"],

        // Bit rate
        UniversalUnit::BitsPerSecond => &["Bits/Second", "bit/s", "bits_per_second"],
        UniversalUnit::KilobitsPerSecond => &["Kilobits/Second", "kbit/s", "kilobits_per_second"],
        UniversalUnit::MegabitsPerSecond => &["Megabits/Second", "Mbit/s", "megabits_per_second"],
        UniversalUnit::GigabitsPerSecond => &["Gigabits/Second", "Gbit/s", "gigabits_per_second"],
        UniversalUnit::TerabitsPerSecond => &["Terabits/Second", "Tbit/s", "terabits_per_second"],
        UniversalUnit::PetabitsPerSecond => &["Petabits/Second", "Pbit/s", "petabits_per_second"],
        UniversalUnit::ExabitsPerSecond => &["Exabits/Second", "Ebit/s", "exabits_per_second"],
        UniversalUnit::ZettabitsPerSecond => &["Zettabits/Second", "Zbit/s", "zettabits_per_second"],
        UniversalUnit::YottabitsPerSecond => &["Yottabits/Second", "Ybit/s", "yottabits_per_second"],

        // Binary (IEC) bit rate
        UniversalUnit::KibibitsPerSecond => &["Kibit/s", "kibibits_per_second"],
        UniversalUnit::MebibitsPerSecond => &["Mibit/s", "mebibits_per_second"],
        UniversalUnit::GibibitsPerSecond => &["Gibit/s", "gibibits_per_second"],
        UniversalUnit::TebibitsPerSecond => &["Tibit/s", "tebibits_per_second"],
        UniversalUnit::PebibitsPerSecond => &["Pibit/s", "pebibits_per_second"],
        UniversalUnit::ExbibitsPerSecond => &["Eibit/s", "exbibits_per_second"],
        UniversalUnit::ZebibitsPerSecond => &["Zibit/s", "zebibits_per_second"],
        UniversalUnit::YobibitsPerSecond => &["Yibit/s", "yobibits_per_second"],

        // Count
        UniversalUnit::Count => &["Count", "{count}", "count"],
        UniversalUnit::CountPerSecond => &["Count/Second", "{count}/s", "count_per_second"],
        UniversalUnit::CountPerMinute => &["{count}/min", "counts_per_minute"],

        // Operations
        UniversalUnit::OpsPerSecond => &["{ops}/s", "ops_per_second"],
        UniversalUnit::OpsPerMinute => &["{ops}/min", "ops_per_minute"],

        // Requests
        UniversalUnit::RequestsPerSecond => &["{requests}/s", "requests_per_second"],
        UniversalUnit::RequestsPerMinute => &["{requests}/min", "requests_per_minute"],

        // Reads/Writes
        UniversalUnit::ReadsPerSecond => &["{reads}/s", "reads_per_second"],
        UniversalUnit::WritesPerSecond => &["{writes}/s", "writes_per_second"],
        UniversalUnit::ReadsPerMinute => &["{reads}/min", "reads_per_minute"],
        UniversalUnit::WritesPerMinute => &["{writes}/min", "writes_per_minute"],

        // IO operations
        UniversalUnit::IoOpsPerSecond => &["{iops}/s", "io_ops_per_second"],

        // Percent / None
        UniversalUnit::Percent => &["Percent", "%", "ratio"],
        UniversalUnit::PercentUnit => &["percentunit"],
        UniversalUnit::None => &["None", "1", "none"],

        // Boolean. The upstream vocabularies give yes/no the same UCUM code
        // as true/false ({bool}); keeping it here would break alias
        // disjointness, so yes/no is reachable by its OpenMetrics name only.
        UniversalUnit::TrueFalse => &["{bool}", "boolean_true_false"],
        UniversalUnit::YesNo => &["boolean_yes_no"],

        _ => &[],
    }
}

/// Identifier index: code and aliases of every unit, first match in
/// taxonomy order wins.
static INDEX: LazyLock<HashMap<&'static str, UniversalUnit>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for unit in UniversalUnit::ALL {
        map.entry(unit.code()).or_insert(unit);
        for alias in aliases(unit) {
            map.entry(*alias).or_insert(unit);
        }
    }
    map
});

/// Resolve a raw unit string to a universal unit.
///
/// Empty input resolves to [`Resolved::Empty`]; an identifier matching a
/// unit code or alias resolves to that unit; anything else is passed
/// through as [`Resolved::Unknown`] so downstream formatting can fall back
/// to a literal suffix. Never fails.
pub fn resolve_universal_unit(raw: &str) -> Resolved<'_> {
    if raw.is_empty() {
        return Resolved::Empty;
    }
    match INDEX.get(raw) {
        Some(unit) => Resolved::Unit(*unit),
        None => Resolved::Unknown(raw),
    }
}

/// Display name for a raw unit string.
///
/// Empty input yields the `"-"` placeholder. A recognized unit yields its
/// display name; an unrecognized one yields the raw string itself (never
/// `"-"` once input was non-empty).
pub fn display_name_for(raw: &str) -> String {
    match resolve_universal_unit(raw) {
        Resolved::Empty => "-".to_string(),
        Resolved::Unit(unit) => display_name(unit).to_string(),
        Resolved::Unknown(raw) => raw.to_string(),
    }
}

/// Check that no external identifier appears in two different alias sets.
///
/// A collision here means some ingested unit string would silently name two
/// universal units; the table is curated to make this impossible, and the
/// exhaustive test over this function keeps it that way.
pub fn validate_alias_disjointness() -> Result<(), AliasError> {
    let mut seen: HashMap<&'static str, UniversalUnit> = HashMap::new();
    for unit in UniversalUnit::ALL {
        for &alias in aliases(unit) {
            if let Some(prior) = seen.insert(alias, unit) {
                return Err(AliasError::Collision {
                    identifier: alias.to_string(),
                    first: prior,
                    second: unit,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_codes_and_aliases() {
        assert_eq!(
            resolve_universal_unit("bytes_per_second"),
            Resolved::Unit(UniversalUnit::BytesPerSecond)
        );
        assert_eq!(
            resolve_universal_unit("By/s"),
            Resolved::Unit(UniversalUnit::BytesPerSecond)
        );
        assert_eq!(
            resolve_universal_unit("Seconds"),
            Resolved::Unit(UniversalUnit::Seconds)
        );
        assert_eq!(resolve_universal_unit("s"), Resolved::Unit(UniversalUnit::Seconds));
    }

    #[test]
    fn test_unknown_input_passes_through() {
        assert_eq!(
            resolve_universal_unit("unknown_unit"),
            Resolved::Unknown("unknown_unit")
        );
    }

    #[test]
    fn test_empty_input_resolves_to_nothing() {
        assert_eq!(resolve_universal_unit(""), Resolved::Empty);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(resolve_universal_unit("BYTES"), Resolved::Unknown("BYTES"));
    }

    #[test]
    fn test_first_taxonomy_match_wins() {
        // "bytes" is both an OpenMetrics alias of SI bytes and the code of
        // the IEC bytes unit; SI bytes comes first in taxonomy order.
        assert_eq!(resolve_universal_unit("bytes"), Resolved::Unit(UniversalUnit::Bytes));
        assert_eq!(resolve_universal_unit("bits"), Resolved::Unit(UniversalUnit::Bits));
        // The IEC units stay reachable through exact code lookup.
        assert_eq!(UniversalUnit::from_code("bytes"), Some(UniversalUnit::BytesIec));
    }

    #[test]
    fn test_bool_aliases_stay_disjoint() {
        assert_eq!(
            resolve_universal_unit("{bool}"),
            Resolved::Unit(UniversalUnit::TrueFalse)
        );
        assert_eq!(
            resolve_universal_unit("boolean_yes_no"),
            Resolved::Unit(UniversalUnit::YesNo)
        );
    }

    #[test]
    fn test_display_name_for() {
        assert_eq!(display_name_for(""), "-");
        assert_eq!(display_name_for("By"), "Bytes (B)");
        assert_eq!(display_name_for("Milliseconds"), "Milliseconds (ms)");
        assert_eq!(display_name_for("custom_widgets"), "custom_widgets");
    }

    #[test]
    fn test_alias_sets_are_disjoint() {
        assert_eq!(validate_alias_disjointness(), Ok(()));
    }

    #[test]
    fn test_alias_sets_never_shadow_earlier_units() {
        // No alias of a later unit may hide an earlier unit's code either;
        // the index is first-match so every code must resolve to its owner
        // unless an earlier unit deliberately claims it (the bytes/bits
        // IEC-vs-SI quirk covered above).
        for unit in UniversalUnit::ALL {
            let resolved = resolve_universal_unit(unit.code()).unit().unwrap();
            if unit != UniversalUnit::BytesIec && unit != UniversalUnit::BitsIec {
                assert_eq!(resolved, unit, "code {:?} resolves elsewhere", unit.code());
            }
        }
    }
}
