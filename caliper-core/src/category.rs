//! Unit category registries
//!
//! Two curated groupings of the taxonomy for selector UIs: a *base* set every
//! consumer shows, and an *additional* set of specialist units that extended
//! consumers merge in. Pure static data plus the merge operation; no state.

use serde::Serialize;

use crate::name::display_name;
use crate::unit::UniversalUnit;

/// Which consumer is asking for categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Alerts,
    Dashboards,
    Explorer,
}

/// One selectable unit inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitOption {
    pub id: UniversalUnit,
    pub name: String,
}

/// A named, ordered group of units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitCategory {
    pub name: String,
    pub units: Vec<UnitOption>,
}

use crate::unit::UniversalUnit as U;

/// Categories every consumer shows.
const BASE: &[(&str, &[UniversalUnit])] = &[
    (
        "Time",
        &[
            U::Seconds,
            U::Milliseconds,
            U::Microseconds,
            U::Nanoseconds,
            U::Minutes,
            U::Hours,
            U::Days,
        ],
    ),
    (
        "Data",
        &[
            U::Bytes,
            U::Kilobytes,
            U::Megabytes,
            U::Gigabytes,
            U::Terabytes,
            U::Petabytes,
            U::Exabytes,
            U::Zettabytes,
            U::Yottabytes,
            U::BytesIec,
            U::Kibibytes,
            U::Mebibytes,
            U::Gibibytes,
            U::Tebibytes,
            U::Pebibytes,
            U::Exbibytes,
            U::Zebibytes,
            U::Yobibytes,
            U::Bits,
            U::BitsIec,
            U::Kilobits,
            U::Megabits,
            U::Gigabits,
            U::Terabits,
            U::Petabits,
            U::Exabits,
            U::Zettabits,
            U::Yottabits,
        ],
    ),
    (
        "Data Rate",
        &[
            U::BytesPerSecond,
            U::KilobytesPerSecond,
            U::MegabytesPerSecond,
            U::GigabytesPerSecond,
            U::TerabytesPerSecond,
            U::PetabytesPerSecond,
            U::ExabytesPerSecond,
            U::ZettabytesPerSecond,
            U::YottabytesPerSecond,
            U::KibibytesPerSecond,
            U::MebibytesPerSecond,
            U::GibibytesPerSecond,
            U::TebibytesPerSecond,
            U::PebibytesPerSecond,
            U::ExbibytesPerSecond,
            U::ZebibytesPerSecond,
            U::YobibytesPerSecond,
            U::BitsPerSecond,
            U::KilobitsPerSecond,
            U::MegabitsPerSecond,
            U::GigabitsPerSecond,
            U::TerabitsPerSecond,
            U::PetabitsPerSecond,
            U::ExabitsPerSecond,
            U::ZettabitsPerSecond,
            U::YottabitsPerSecond,
            U::KibibitsPerSecond,
            U::MebibitsPerSecond,
            U::GibibitsPerSecond,
            U::TebibitsPerSecond,
            U::PebibitsPerSecond,
            U::ExbibitsPerSecond,
            U::ZebibitsPerSecond,
            U::YobibitsPerSecond,
        ],
    ),
    ("Count", &[U::Count, U::CountPerSecond, U::CountPerMinute]),
    (
        "Operations",
        &[
            U::OpsPerSecond,
            U::OpsPerMinute,
            U::RequestsPerSecond,
            U::RequestsPerMinute,
            U::ReadsPerSecond,
            U::WritesPerSecond,
            U::ReadsPerMinute,
            U::WritesPerMinute,
            U::IoOpsPerSecond,
        ],
    ),
    ("Percentage", &[U::Percent, U::PercentUnit]),
    ("Boolean", &[U::TrueFalse, U::YesNo]),
];

/// Specialist categories for consumers that opt into extended units.
const ADDITIONAL: &[(&str, &[UniversalUnit])] = &[
    (
        "Time",
        &[
            U::DurationMs,
            U::DurationS,
            U::DurationHms,
            U::DurationDhms,
            U::Timeticks,
            U::ClockMs,
            U::ClockS,
            U::Hertz,
        ],
    ),
    ("Data Rate", &[U::PacketsPerSecond]),
    ("Boolean", &[U::OnOff]),
    ("None", &[U::None]),
    (
        "Hash Rate",
        &[
            U::HashesPerSecond,
            U::KilohashesPerSecond,
            U::MegahashesPerSecond,
            U::GigahashesPerSecond,
            U::TerahashesPerSecond,
            U::PetahashesPerSecond,
            U::ExahashesPerSecond,
        ],
    ),
    (
        "Miscellaneous",
        &[
            U::Text,
            U::Short,
            U::Humidity,
            U::Decibel,
            U::Hexadecimal,
            U::Hexadecimal0x,
            U::ScientificNotation,
            U::LocaleFormat,
            U::Pixels,
        ],
    ),
    (
        "Acceleration",
        &[U::MetersPerSecondSquared, U::FeetPerSecondSquared, U::GUnit],
    ),
    (
        "Angular",
        &[U::Degree, U::Radian, U::Gradian, U::ArcMinute, U::ArcSecond],
    ),
    ("Area", &[U::SquareMeters, U::SquareFeet, U::SquareMiles]),
    (
        "FLOPs",
        &[
            U::Flops,
            U::Mflops,
            U::Gflops,
            U::Tflops,
            U::Pflops,
            U::Eflops,
            U::Zflops,
            U::Yflops,
        ],
    ),
    (
        "Concentration",
        &[
            U::PartsPerMillion,
            U::PartsPerBillion,
            U::NanogramsPerCubicMeter,
            U::NanogramsPerNormalCubicMeter,
            U::MicrogramsPerCubicMeter,
            U::MicrogramsPerNormalCubicMeter,
            U::MilligramsPerCubicMeter,
            U::MilligramsPerNormalCubicMeter,
            U::GramsPerCubicMeter,
            U::GramsPerNormalCubicMeter,
            U::MilligramsPerDeciliter,
            U::MillimolesPerLiter,
        ],
    ),
    (
        "Currency",
        &[
            U::CurrencyUsd,
            U::CurrencyGbp,
            U::CurrencyEur,
            U::CurrencyJpy,
            U::CurrencyRub,
            U::CurrencyUah,
            U::CurrencyBrl,
            U::CurrencyDkk,
            U::CurrencyIsk,
            U::CurrencyNok,
            U::CurrencySek,
            U::CurrencyCzk,
            U::CurrencyChf,
            U::CurrencyPln,
            U::CurrencyBtc,
            U::CurrencyMilliBtc,
            U::CurrencyMicroBtc,
            U::CurrencyZar,
            U::CurrencyInr,
            U::CurrencyKrw,
            U::CurrencyIdr,
            U::CurrencyPhp,
            U::CurrencyVnd,
        ],
    ),
    (
        "Datetime",
        &[
            U::DateTimeIso,
            U::DateTimeIsoNoDateIfToday,
            U::DateTimeUs,
            U::DateTimeUsNoDateIfToday,
            U::DateTimeLocal,
            U::DateTimeLocalNoDateIfToday,
            U::DateTimeSystem,
            U::DateTimeFromNow,
        ],
    ),
    (
        "Power/Electrical",
        &[
            U::Watt,
            U::Kilowatt,
            U::Megawatt,
            U::Gigawatt,
            U::Milliwatt,
            U::WattsPerSquareMeter,
            U::VoltAmpere,
            U::KilovoltAmpere,
            U::VoltAmpereReactive,
            U::KilovoltAmpereReactive,
            U::WattHour,
            U::WattHourPerKilogram,
            U::KilowattHour,
            U::KilowattMinute,
            U::AmpereHour,
            U::KiloampereHour,
            U::MilliampereHour,
            U::Joule,
            U::ElectronVolt,
            U::Ampere,
            U::Kiloampere,
            U::Milliampere,
            U::Volt,
            U::Kilovolt,
            U::Millivolt,
            U::DecibelMilliwatt,
            U::Ohm,
            U::Kiloohm,
            U::Megaohm,
            U::Farad,
            U::Microfarad,
            U::Nanofarad,
            U::Picofarad,
            U::Femtofarad,
            U::Henry,
            U::Millihenry,
            U::Microhenry,
            U::Lumens,
        ],
    ),
    (
        "Flow",
        &[
            U::GallonsPerMinute,
            U::CubicMetersPerSecond,
            U::CubicFeetPerSecond,
            U::CubicFeetPerMinute,
            U::LitersPerHour,
            U::LitersPerMinute,
            U::MillilitersPerMinute,
            U::Lux,
        ],
    ),
    (
        "Force",
        &[U::NewtonMeters, U::KilonewtonMeters, U::Newtons, U::Kilonewtons],
    ),
    ("Mass", &[U::Milligram, U::Gram, U::Pound, U::Kilogram, U::MetricTon]),
    (
        "Length",
        &[U::Millimeter, U::Inch, U::Foot, U::Meter, U::Kilometer, U::Mile],
    ),
    (
        "Pressure",
        &[
            U::Millibar,
            U::Bar,
            U::Kilobar,
            U::Pascal,
            U::Hectopascal,
            U::Kilopascal,
            U::InchesOfMercury,
            U::Psi,
        ],
    ),
    (
        "Radiation",
        &[
            U::Becquerel,
            U::Curie,
            U::Gray,
            U::Rad,
            U::Sievert,
            U::Millisievert,
            U::Microsievert,
            U::Rem,
            U::ExposureCoulombsPerKilogram,
            U::Roentgen,
            U::SievertsPerHour,
            U::MillisievertsPerHour,
            U::MicrosievertsPerHour,
        ],
    ),
    (
        "Rotation Speed",
        &[
            U::RevolutionsPerMinute,
            U::RotationHertz,
            U::RadiansPerSecond,
            U::DegreesPerSecond,
        ],
    ),
    ("Temperature", &[U::Celsius, U::Fahrenheit, U::Kelvin]),
    (
        "Velocity",
        &[U::MetersPerSecond, U::KilometersPerHour, U::MilesPerHour, U::Knots],
    ),
    (
        "Volume",
        &[
            U::Milliliter,
            U::Liter,
            U::CubicMeter,
            U::NormalCubicMeter,
            U::CubicDecimeter,
            U::Gallon,
        ],
    ),
];

fn build(table: &[(&str, &[UniversalUnit])]) -> Vec<UnitCategory> {
    table
        .iter()
        .map(|(name, units)| UnitCategory {
            name: name.to_string(),
            units: units
                .iter()
                .map(|&id| UnitOption {
                    id,
                    name: display_name(id).to_string(),
                })
                .collect(),
        })
        .collect()
}

/// The base category set.
pub fn base_categories() -> Vec<UnitCategory> {
    build(BASE)
}

/// The additional (specialist) category set.
pub fn additional_categories() -> Vec<UnitCategory> {
    build(ADDITIONAL)
}

/// Merge two category lists.
///
/// The result keeps `primary`'s category order; a category present in both
/// lists appears once, at its primary position, with the secondary units
/// appended after the primary ones. Categories only in `secondary` follow
/// at the end, in secondary order. Units are not de-duplicated; the source
/// tables are curated not to overlap.
pub fn merge_categories(
    primary: Vec<UnitCategory>,
    secondary: Vec<UnitCategory>,
) -> Vec<UnitCategory> {
    let mut merged = primary;
    let mut appended: Vec<UnitCategory> = Vec::new();

    for category in secondary {
        match merged.iter_mut().find(|c| c.name == category.name) {
            Some(existing) => existing.units.extend(category.units),
            None => appended.push(category),
        }
    }

    merged.extend(appended);
    merged
}

/// The categories a given consumer should present.
///
/// Dashboards opt into the extended unit set; alerts and the explorer show
/// the base set only.
pub fn categories_for(source: Source) -> Vec<UnitCategory> {
    match source {
        Source::Dashboards => merge_categories(base_categories(), additional_categories()),
        Source::Alerts | Source::Explorer => base_categories(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_has_expected_shape() {
        let base = base_categories();
        let names: Vec<&str> = base.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Time", "Data", "Data Rate", "Count", "Operations", "Percentage", "Boolean"]
        );
        assert_eq!(base[0].units[0].id, UniversalUnit::Seconds);
        assert_eq!(base[0].units[0].name, "Seconds (s)");
    }

    #[test]
    fn test_merge_appends_within_shared_categories() {
        let merged = merge_categories(base_categories(), additional_categories());

        let time = merged.iter().find(|c| c.name == "Time").unwrap();
        // Primary units first, in primary order...
        assert_eq!(time.units[0].id, UniversalUnit::Seconds);
        // ...then the secondary units, in secondary order.
        let tail: Vec<UniversalUnit> = time.units[7..].iter().map(|u| u.id).collect();
        assert_eq!(
            tail,
            [
                UniversalUnit::DurationMs,
                UniversalUnit::DurationS,
                UniversalUnit::DurationHms,
                UniversalUnit::DurationDhms,
                UniversalUnit::Timeticks,
                UniversalUnit::ClockMs,
                UniversalUnit::ClockS,
                UniversalUnit::Hertz,
            ]
        );
    }

    #[test]
    fn test_merge_keeps_primary_order_then_secondary_only() {
        let merged = merge_categories(base_categories(), additional_categories());
        let names: Vec<&str> = merged.iter().map(|c| c.name.as_str()).collect();

        // Primary categories keep their positions.
        assert_eq!(
            &names[..7],
            &["Time", "Data", "Data Rate", "Count", "Operations", "Percentage", "Boolean"]
        );
        // Secondary-only categories follow in secondary order.
        assert_eq!(names[7], "None");
        assert_eq!(names[8], "Hash Rate");
        assert_eq!(*names.last().unwrap(), "Volume");
    }

    #[test]
    fn test_merge_does_not_deduplicate_units() {
        let a = vec![UnitCategory {
            name: "X".into(),
            units: vec![UnitOption { id: UniversalUnit::Bytes, name: "b".into() }],
        }];
        let b = vec![UnitCategory {
            name: "X".into(),
            units: vec![UnitOption { id: UniversalUnit::Bytes, name: "b".into() }],
        }];
        let merged = merge_categories(a, b);
        assert_eq!(merged[0].units.len(), 2);
    }

    #[test]
    fn test_sources_select_their_sets() {
        assert_eq!(categories_for(Source::Alerts), base_categories());
        assert_eq!(categories_for(Source::Explorer), base_categories());
        assert_eq!(
            categories_for(Source::Dashboards),
            merge_categories(base_categories(), additional_categories())
        );
    }

    #[test]
    fn test_category_units_are_unique_across_both_sets() {
        // The no-dedup policy in merge_categories leans on this curation.
        let mut seen = std::collections::HashSet::new();
        for category in base_categories().iter().chain(additional_categories().iter()) {
            for option in &category.units {
                assert!(seen.insert(option.id), "{:?} listed twice", option.id);
            }
        }
    }
}
