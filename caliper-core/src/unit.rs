//! The universal unit taxonomy
//!
//! One closed enum covering every unit the engine can normalize to. Each
//! variant carries a stable string code used as the identity key in every
//! table (aliases, display names, categories, labels, families) and as the
//! wire form when a unit is persisted in dashboard JSON.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

/// A universal unit code.
///
/// The set is fixed at build time; external vocabularies map onto it through
/// the alias tables in [`crate::alias`]. Codes are opaque identifiers, not
/// display strings (see [`crate::name::display_name`] for those).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniversalUnit {
    // Time
    Days,
    Hours,
    Minutes,
    Seconds,
    Microseconds,
    Milliseconds,
    Nanoseconds,
    DurationMs,
    DurationS,
    DurationHms,
    DurationDhms,
    Timeticks,
    ClockMs,
    ClockS,
    Hertz,

    // Data
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
    Petabytes,
    Exabytes,
    Zettabytes,
    Yottabytes,

    // Binary (IEC) data
    BytesIec,
    Kibibytes,
    Mebibytes,
    Gibibytes,
    Tebibytes,
    Pebibytes,
    Exbibytes,
    Zebibytes,
    Yobibytes,

    // Data rate
    BytesPerSecond,
    KilobytesPerSecond,
    MegabytesPerSecond,
    GigabytesPerSecond,
    TerabytesPerSecond,
    PetabytesPerSecond,
    ExabytesPerSecond,
    ZettabytesPerSecond,
    YottabytesPerSecond,
    PacketsPerSecond,

    // Binary (IEC) data rate
    KibibytesPerSecond,
    MebibytesPerSecond,
    GibibytesPerSecond,
    TebibytesPerSecond,
    PebibytesPerSecond,
    ExbibytesPerSecond,
    ZebibytesPerSecond,
    YobibytesPerSecond,

    // Bits
    Bits,
    BitsIec,
    Kilobits,
    Megabits,
    Gigabits,
    Terabits,
    Petabits,
    Exabits,
    Zettabits,
    Yottabits,

    // Bit rate
    BitsPerSecond,
    KilobitsPerSecond,
    MegabitsPerSecond,
    GigabitsPerSecond,
    TerabitsPerSecond,
    PetabitsPerSecond,
    ExabitsPerSecond,
    ZettabitsPerSecond,
    YottabitsPerSecond,

    // Binary (IEC) bit rate
    KibibitsPerSecond,
    MebibitsPerSecond,
    GibibitsPerSecond,
    TebibitsPerSecond,
    PebibitsPerSecond,
    ExbibitsPerSecond,
    ZebibitsPerSecond,
    YobibitsPerSecond,

    // Count
    Count,
    CountPerSecond,
    CountPerMinute,

    // Operations
    OpsPerSecond,
    OpsPerMinute,

    // Requests
    RequestsPerSecond,
    RequestsPerMinute,

    // Reads/Writes
    ReadsPerSecond,
    WritesPerSecond,
    ReadsPerMinute,
    WritesPerMinute,

    // IO operations
    IoOpsPerSecond,

    // Percent
    Percent,
    PercentUnit,

    // Boolean
    TrueFalse,
    YesNo,
    OnOff,

    // None
    None,

    // Hash rate
    HashesPerSecond,
    KilohashesPerSecond,
    MegahashesPerSecond,
    GigahashesPerSecond,
    TerahashesPerSecond,
    PetahashesPerSecond,
    ExahashesPerSecond,

    // Miscellaneous
    Text,
    Short,
    Humidity,
    Decibel,
    Hexadecimal,
    Hexadecimal0x,
    ScientificNotation,
    LocaleFormat,
    Pixels,

    // Acceleration
    MetersPerSecondSquared,
    FeetPerSecondSquared,
    GUnit,

    // Angular
    Degree,
    Radian,
    Gradian,
    ArcMinute,
    ArcSecond,

    // Area
    SquareMeters,
    SquareFeet,
    SquareMiles,

    // FLOPs
    Flops,
    Mflops,
    Gflops,
    Tflops,
    Pflops,
    Eflops,
    Zflops,
    Yflops,

    // Concentration
    PartsPerMillion,
    PartsPerBillion,
    NanogramsPerCubicMeter,
    NanogramsPerNormalCubicMeter,
    MicrogramsPerCubicMeter,
    MicrogramsPerNormalCubicMeter,
    MilligramsPerCubicMeter,
    MilligramsPerNormalCubicMeter,
    GramsPerCubicMeter,
    GramsPerNormalCubicMeter,
    MilligramsPerDeciliter,
    MillimolesPerLiter,

    // Currency
    CurrencyUsd,
    CurrencyGbp,
    CurrencyEur,
    CurrencyJpy,
    CurrencyRub,
    CurrencyUah,
    CurrencyBrl,
    CurrencyDkk,
    CurrencyIsk,
    CurrencyNok,
    CurrencySek,
    CurrencyCzk,
    CurrencyChf,
    CurrencyPln,
    CurrencyBtc,
    CurrencyMilliBtc,
    CurrencyMicroBtc,
    CurrencyZar,
    CurrencyInr,
    CurrencyKrw,
    CurrencyIdr,
    CurrencyPhp,
    CurrencyVnd,

    // Datetime
    DateTimeIso,
    DateTimeIsoNoDateIfToday,
    DateTimeUs,
    DateTimeUsNoDateIfToday,
    DateTimeLocal,
    DateTimeLocalNoDateIfToday,
    DateTimeSystem,
    DateTimeFromNow,

    // Power/Electrical
    Watt,
    Kilowatt,
    Megawatt,
    Gigawatt,
    Milliwatt,
    WattsPerSquareMeter,
    VoltAmpere,
    KilovoltAmpere,
    VoltAmpereReactive,
    KilovoltAmpereReactive,
    WattHour,
    WattHourPerKilogram,
    KilowattHour,
    KilowattMinute,
    AmpereHour,
    KiloampereHour,
    MilliampereHour,
    Joule,
    ElectronVolt,
    Ampere,
    Kiloampere,
    Milliampere,
    Volt,
    Kilovolt,
    Millivolt,
    DecibelMilliwatt,
    Ohm,
    Kiloohm,
    Megaohm,
    Farad,
    Microfarad,
    Nanofarad,
    Picofarad,
    Femtofarad,
    Henry,
    Millihenry,
    Microhenry,
    Lumens,

    // Flow
    GallonsPerMinute,
    CubicMetersPerSecond,
    CubicFeetPerSecond,
    CubicFeetPerMinute,
    LitersPerHour,
    LitersPerMinute,
    MillilitersPerMinute,
    Lux,

    // Force
    NewtonMeters,
    KilonewtonMeters,
    Newtons,
    Kilonewtons,

    // Mass
    Milligram,
    Gram,
    Pound,
    Kilogram,
    MetricTon,

    // Length
    Millimeter,
    Inch,
    Foot,
    Meter,
    Kilometer,
    Mile,

    // Pressure
    Millibar,
    Bar,
    Kilobar,
    Pascal,
    Hectopascal,
    Kilopascal,
    InchesOfMercury,
    Psi,

    // Radiation
    Becquerel,
    Curie,
    Gray,
    Rad,
    Sievert,
    Millisievert,
    Microsievert,
    Rem,
    ExposureCoulombsPerKilogram,
    Roentgen,
    SievertsPerHour,
    MillisievertsPerHour,
    MicrosievertsPerHour,

    // Rotation speed
    RevolutionsPerMinute,
    RotationHertz,
    RadiansPerSecond,
    DegreesPerSecond,

    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,

    // Velocity
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
    Knots,

    // Volume
    Milliliter,
    Liter,
    CubicMeter,
    NormalCubicMeter,
    CubicDecimeter,
    Gallon,
}

impl UniversalUnit {
    /// Every member of the taxonomy, in canonical order.
    ///
    /// The order matters: alias resolution walks this list and the first
    /// unit whose code or alias set matches wins.
    pub const ALL: [UniversalUnit; 273] = [
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
        Self::Microseconds,
        Self::Milliseconds,
        Self::Nanoseconds,
        Self::DurationMs,
        Self::DurationS,
        Self::DurationHms,
        Self::DurationDhms,
        Self::Timeticks,
        Self::ClockMs,
        Self::ClockS,
        Self::Hertz,
        Self::Bytes,
        Self::Kilobytes,
        Self::Megabytes,
        Self::Gigabytes,
        Self::Terabytes,
        Self::Petabytes,
        Self::Exabytes,
        Self::Zettabytes,
        Self::Yottabytes,
        Self::BytesIec,
        Self::Kibibytes,
        Self::Mebibytes,
        Self::Gibibytes,
        Self::Tebibytes,
        Self::Pebibytes,
        Self::Exbibytes,
        Self::Zebibytes,
        Self::Yobibytes,
        Self::BytesPerSecond,
        Self::KilobytesPerSecond,
        Self::MegabytesPerSecond,
        Self::GigabytesPerSecond,
        Self::TerabytesPerSecond,
        Self::PetabytesPerSecond,
        Self::ExabytesPerSecond,
        Self::ZettabytesPerSecond,
        Self::YottabytesPerSecond,
        Self::PacketsPerSecond,
        Self::KibibytesPerSecond,
        Self::MebibytesPerSecond,
        Self::GibibytesPerSecond,
        Self::TebibytesPerSecond,
        Self::PebibytesPerSecond,
        Self::ExbibytesPerSecond,
        Self::ZebibytesPerSecond,
        Self::YobibytesPerSecond,
        Self::Bits,
        Self::BitsIec,
        Self::Kilobits,
        Self::Megabits,
        Self::Gigabits,
        Self::Terabits,
        Self::Petabits,
        Self::Exabits,
        Self::Zettabits,
        Self::Yottabits,
        Self::BitsPerSecond,
        Self::KilobitsPerSecond,
        Self::MegabitsPerSecond,
        Self::GigabitsPerSecond,
        Self::TerabitsPerSecond,
        Self::PetabitsPerSecond,
        Self::ExabitsPerSecond,
        Self::ZettabitsPerSecond,
        Self::YottabitsPerSecond,
        Self::KibibitsPerSecond,
        Self::MebibitsPerSecond,
        Self::GibibitsPerSecond,
        Self::TebibitsPerSecond,
        Self::PebibitsPerSecond,
        Self::ExbibitsPerSecond,
        Self::ZebibitsPerSecond,
        Self::YobibitsPerSecond,
        Self::Count,
        Self::CountPerSecond,
        Self::CountPerMinute,
        Self::OpsPerSecond,
        Self::OpsPerMinute,
        Self::RequestsPerSecond,
        Self::RequestsPerMinute,
        Self::ReadsPerSecond,
        Self::WritesPerSecond,
        Self::ReadsPerMinute,
        Self::WritesPerMinute,
        Self::IoOpsPerSecond,
        Self::Percent,
        Self::PercentUnit,
        Self::TrueFalse,
        Self::YesNo,
        Self::OnOff,
        Self::None,
        Self::HashesPerSecond,
        Self::KilohashesPerSecond,
        Self::MegahashesPerSecond,
        Self::GigahashesPerSecond,
        Self::TerahashesPerSecond,
        Self::PetahashesPerSecond,
        Self::ExahashesPerSecond,
        Self::Text,
        Self::Short,
        Self::Humidity,
        Self::Decibel,
        Self::Hexadecimal,
        Self::Hexadecimal0x,
        Self::ScientificNotation,
        Self::LocaleFormat,
        Self::Pixels,
        Self::MetersPerSecondSquared,
        Self::FeetPerSecondSquared,
        Self::GUnit,
        Self::Degree,
        Self::Radian,
        Self::Gradian,
        Self::ArcMinute,
        Self::ArcSecond,
        Self::SquareMeters,
        Self::SquareFeet,
        Self::SquareMiles,
        Self::Flops,
        Self::Mflops,
        Self::Gflops,
        Self::Tflops,
        Self::Pflops,
        Self::Eflops,
        Self::Zflops,
        Self::Yflops,
        Self::PartsPerMillion,
        Self::PartsPerBillion,
        Self::NanogramsPerCubicMeter,
        Self::NanogramsPerNormalCubicMeter,
        Self::MicrogramsPerCubicMeter,
        Self::MicrogramsPerNormalCubicMeter,
        Self::MilligramsPerCubicMeter,
        Self::MilligramsPerNormalCubicMeter,
        Self::GramsPerCubicMeter,
        Self::GramsPerNormalCubicMeter,
        Self::MilligramsPerDeciliter,
        Self::MillimolesPerLiter,
        Self::CurrencyUsd,
        Self::CurrencyGbp,
        Self::CurrencyEur,
        Self::CurrencyJpy,
        Self::CurrencyRub,
        Self::CurrencyUah,
        Self::CurrencyBrl,
        Self::CurrencyDkk,
        Self::CurrencyIsk,
        Self::CurrencyNok,
        Self::CurrencySek,
        Self::CurrencyCzk,
        Self::CurrencyChf,
        Self::CurrencyPln,
        Self::CurrencyBtc,
        Self::CurrencyMilliBtc,
        Self::CurrencyMicroBtc,
        Self::CurrencyZar,
        Self::CurrencyInr,
        Self::CurrencyKrw,
        Self::CurrencyIdr,
        Self::CurrencyPhp,
        Self::CurrencyVnd,
        Self::DateTimeIso,
        Self::DateTimeIsoNoDateIfToday,
        Self::DateTimeUs,
        Self::DateTimeUsNoDateIfToday,
        Self::DateTimeLocal,
        Self::DateTimeLocalNoDateIfToday,
        Self::DateTimeSystem,
        Self::DateTimeFromNow,
        Self::Watt,
        Self::Kilowatt,
        Self::Megawatt,
        Self::Gigawatt,
        Self::Milliwatt,
        Self::WattsPerSquareMeter,
        Self::VoltAmpere,
        Self::KilovoltAmpere,
        Self::VoltAmpereReactive,
        Self::KilovoltAmpereReactive,
        Self::WattHour,
        Self::WattHourPerKilogram,
        Self::KilowattHour,
        Self::KilowattMinute,
        Self::AmpereHour,
        Self::KiloampereHour,
        Self::MilliampereHour,
        Self::Joule,
        Self::ElectronVolt,
        Self::Ampere,
        Self::Kiloampere,
        Self::Milliampere,
        Self::Volt,
        Self::Kilovolt,
        Self::Millivolt,
        Self::DecibelMilliwatt,
        Self::Ohm,
        Self::Kiloohm,
        Self::Megaohm,
        Self::Farad,
        Self::Microfarad,
        Self::Nanofarad,
        Self::Picofarad,
        Self::Femtofarad,
        Self::Henry,
        Self::Millihenry,
        Self::Microhenry,
        Self::Lumens,
        Self::GallonsPerMinute,
        Self::CubicMetersPerSecond,
        Self::CubicFeetPerSecond,
        Self::CubicFeetPerMinute,
        Self::LitersPerHour,
        Self::LitersPerMinute,
        Self::MillilitersPerMinute,
        Self::Lux,
        Self::NewtonMeters,
        Self::KilonewtonMeters,
        Self::Newtons,
        Self::Kilonewtons,
        Self::Milligram,
        Self::Gram,
        Self::Pound,
        Self::Kilogram,
        Self::MetricTon,
        Self::Millimeter,
        Self::Inch,
        Self::Foot,
        Self::Meter,
        Self::Kilometer,
        Self::Mile,
        Self::Millibar,
        Self::Bar,
        Self::Kilobar,
        Self::Pascal,
        Self::Hectopascal,
        Self::Kilopascal,
        Self::InchesOfMercury,
        Self::Psi,
        Self::Becquerel,
        Self::Curie,
        Self::Gray,
        Self::Rad,
        Self::Sievert,
        Self::Millisievert,
        Self::Microsievert,
        Self::Rem,
        Self::ExposureCoulombsPerKilogram,
        Self::Roentgen,
        Self::SievertsPerHour,
        Self::MillisievertsPerHour,
        Self::MicrosievertsPerHour,
        Self::RevolutionsPerMinute,
        Self::RotationHertz,
        Self::RadiansPerSecond,
        Self::DegreesPerSecond,
        Self::Celsius,
        Self::Fahrenheit,
        Self::Kelvin,
        Self::MetersPerSecond,
        Self::KilometersPerHour,
        Self::MilesPerHour,
        Self::Knots,
        Self::Milliliter,
        Self::Liter,
        Self::CubicMeter,
        Self::NormalCubicMeter,
        Self::CubicDecimeter,
        Self::Gallon,
    ];

    /// The stable string code identifying this unit.
    pub fn code(self) -> &'static str {
        match self {
            // Time
            Self::Days => "d",
            Self::Hours => "h",
            Self::Minutes => "min",
            Self::Seconds => "s",
            Self::Microseconds => "us",
            Self::Milliseconds => "ms",
            Self::Nanoseconds => "ns",
            Self::DurationMs => "dtdurationms",
            Self::DurationS => "dtdurations",
            Self::DurationHms => "dthms",
            Self::DurationDhms => "dtdhms",
            Self::Timeticks => "timeticks",
            Self::ClockMs => "clockms",
            Self::ClockS => "clocks",
            Self::Hertz => "hertz",

            // Data
            Self::Bytes => "By",
            Self::Kilobytes => "kBy",
            Self::Megabytes => "MBy",
            Self::Gigabytes => "GBy",
            Self::Terabytes => "TBy",
            Self::Petabytes => "PBy",
            Self::Exabytes => "EBy",
            Self::Zettabytes => "ZBy",
            Self::Yottabytes => "YBy",

            // Binary (IEC) data
            Self::BytesIec => "bytes",
            Self::Kibibytes => "KiBy",
            Self::Mebibytes => "MiBy",
            Self::Gibibytes => "GiBy",
            Self::Tebibytes => "TiBy",
            Self::Pebibytes => "PiBy",
            Self::Exbibytes => "EiBy",
            Self::Zebibytes => "ZiBy",
            Self::Yobibytes => "YiBy",

            // Data rate
            Self::BytesPerSecond => "By/s",
            Self::KilobytesPerSecond => "kBy/s",
            Self::MegabytesPerSecond => "MBy/s",
            Self::GigabytesPerSecond => "GBy/s",
            Self::TerabytesPerSecond => "TBy/s",
            Self::PetabytesPerSecond => "PBy/s",
            Self::ExabytesPerSecond => "EBy/s",
            Self::ZettabytesPerSecond => "ZBy/s",
            Self::YottabytesPerSecond => "YBy/s",
            Self::PacketsPerSecond => "pps",

            // Binary (IEC) data rate
            Self::KibibytesPerSecond => "KiBy/s",
            Self::MebibytesPerSecond => "MiBy/s",
            Self::GibibytesPerSecond => "GiBy/s",
            Self::TebibytesPerSecond => "TiBy/s",
            Self::PebibytesPerSecond => "PiBy/s",
            Self::ExbibytesPerSecond => "EiBy/s",
            Self::ZebibytesPerSecond => "ZiBy/s",
            Self::YobibytesPerSecond => "YiBy/s",

            // Bits
            Self::Bits => "bit",
            Self::BitsIec => "bits",
            Self::Kilobits => "kbit",
            Self::Megabits => "Mbit",
            Self::Gigabits => "Gbit",
            Self::Terabits => "Tbit",
            Self::Petabits => "Pbit",
            Self::Exabits => "Ebit",
            Self::Zettabits => "Zbit",
            Self::Yottabits => "Ybit",

            // Bit rate
            Self::BitsPerSecond => "bit/s",
            Self::KilobitsPerSecond => "kbit/s",
            Self::MegabitsPerSecond => "Mbit/s",
            Self::GigabitsPerSecond => "Gbit/s",
            Self::TerabitsPerSecond => "Tbit/s",
            Self::PetabitsPerSecond => "Pbit/s",
            Self::ExabitsPerSecond => "Ebit/s",
            Self::ZettabitsPerSecond => "Zbit/s",
            Self::YottabitsPerSecond => "Ybit/s",

            // Binary (IEC) bit rate
            Self::KibibitsPerSecond => "Kibit/s",
            Self::MebibitsPerSecond => "Mibit/s",
            Self::GibibitsPerSecond => "Gibit/s",
            Self::TebibitsPerSecond => "Tibit/s",
            Self::PebibitsPerSecond => "Pibit/s",
            Self::ExbibitsPerSecond => "Eibit/s",
            Self::ZebibitsPerSecond => "Zibit/s",
            Self::YobibitsPerSecond => "Yibit/s",

            // Count
            Self::Count => "{count}",
            Self::CountPerSecond => "{count}/s",
            Self::CountPerMinute => "{count}/min",

            // Operations
            Self::OpsPerSecond => "{ops}/s",
            Self::OpsPerMinute => "{ops}/min",

            // Requests
            Self::RequestsPerSecond => "{req}/s",
            Self::RequestsPerMinute => "{req}/min",

            // Reads/Writes
            Self::ReadsPerSecond => "{read}/s",
            Self::WritesPerSecond => "{write}/s",
            Self::ReadsPerMinute => "{read}/min",
            Self::WritesPerMinute => "{write}/min",

            // IO operations
            Self::IoOpsPerSecond => "{iops}/s",

            // Percent
            Self::Percent => "%",
            Self::PercentUnit => "percentunit",

            // Boolean
            Self::TrueFalse => "{bool}",
            Self::YesNo => "{bool_yn}",
            Self::OnOff => "bool_on_off",

            // None
            Self::None => "1",

            // Hash rate
            Self::HashesPerSecond => "Hs",
            Self::KilohashesPerSecond => "KHs",
            Self::MegahashesPerSecond => "MHs",
            Self::GigahashesPerSecond => "GHs",
            Self::TerahashesPerSecond => "THs",
            Self::PetahashesPerSecond => "PHs",
            Self::ExahashesPerSecond => "EHs",

            // Miscellaneous
            Self::Text => "string",
            Self::Short => "short",
            Self::Humidity => "humidity",
            Self::Decibel => "dB",
            Self::Hexadecimal => "hex",
            Self::Hexadecimal0x => "hex0x",
            Self::ScientificNotation => "sci",
            Self::LocaleFormat => "locale",
            Self::Pixels => "pixel",

            // Acceleration
            Self::MetersPerSecondSquared => "accMS2",
            Self::FeetPerSecondSquared => "accFS2",
            Self::GUnit => "accG",

            // Angular
            Self::Degree => "degree",
            Self::Radian => "radian",
            Self::Gradian => "grad",
            Self::ArcMinute => "arcmin",
            Self::ArcSecond => "arcsec",

            // Area
            Self::SquareMeters => "areaM2",
            Self::SquareFeet => "areaF2",
            Self::SquareMiles => "areaMI2",

            // FLOPs
            Self::Flops => "flops",
            Self::Mflops => "mflops",
            Self::Gflops => "gflops",
            Self::Tflops => "tflops",
            Self::Pflops => "pflops",
            Self::Eflops => "eflops",
            Self::Zflops => "zflops",
            Self::Yflops => "yflops",

            // Concentration
            Self::PartsPerMillion => "ppm",
            Self::PartsPerBillion => "conppb",
            Self::NanogramsPerCubicMeter => "conngm3",
            Self::NanogramsPerNormalCubicMeter => "conngNm3",
            Self::MicrogramsPerCubicMeter => "conμgm3",
            Self::MicrogramsPerNormalCubicMeter => "conμgNm3",
            Self::MilligramsPerCubicMeter => "conmgm3",
            Self::MilligramsPerNormalCubicMeter => "conmgNm3",
            Self::GramsPerCubicMeter => "congm3",
            Self::GramsPerNormalCubicMeter => "congNm3",
            Self::MilligramsPerDeciliter => "conmgdL",
            Self::MillimolesPerLiter => "conmmolL",

            // Currency
            Self::CurrencyUsd => "currencyUSD",
            Self::CurrencyGbp => "currencyGBP",
            Self::CurrencyEur => "currencyEUR",
            Self::CurrencyJpy => "currencyJPY",
            Self::CurrencyRub => "currencyRUB",
            Self::CurrencyUah => "currencyUAH",
            Self::CurrencyBrl => "currencyBRL",
            Self::CurrencyDkk => "currencyDKK",
            Self::CurrencyIsk => "currencyISK",
            Self::CurrencyNok => "currencyNOK",
            Self::CurrencySek => "currencySEK",
            Self::CurrencyCzk => "currencyCZK",
            Self::CurrencyChf => "currencyCHF",
            Self::CurrencyPln => "currencyPLN",
            Self::CurrencyBtc => "currencyBTC",
            Self::CurrencyMilliBtc => "currencymBTC",
            Self::CurrencyMicroBtc => "currencyμBTC",
            Self::CurrencyZar => "currencyZAR",
            Self::CurrencyInr => "currencyINR",
            Self::CurrencyKrw => "currencyKRW",
            Self::CurrencyIdr => "currencyIDR",
            Self::CurrencyPhp => "currencyPHP",
            Self::CurrencyVnd => "currencyVND",

            // Datetime
            Self::DateTimeIso => "dateTimeAsIso",
            Self::DateTimeIsoNoDateIfToday => "dateTimeAsIsoNoDateIfToday",
            Self::DateTimeUs => "dateTimeAsUS",
            Self::DateTimeUsNoDateIfToday => "dateTimeAsUSNoDateIfToday",
            Self::DateTimeLocal => "dateTimeAsLocal",
            Self::DateTimeLocalNoDateIfToday => "dateTimeAsLocalNoDateIfToday",
            Self::DateTimeSystem => "dateTimeAsSystem",
            Self::DateTimeFromNow => "dateTimeFromNow",

            // Power/Electrical
            Self::Watt => "watt",
            Self::Kilowatt => "kwatt",
            Self::Megawatt => "megwatt",
            Self::Gigawatt => "gwatt",
            Self::Milliwatt => "mwatt",
            Self::WattsPerSquareMeter => "Wm2",
            Self::VoltAmpere => "voltamp",
            Self::KilovoltAmpere => "kvoltamp",
            Self::VoltAmpereReactive => "voltampreact",
            Self::KilovoltAmpereReactive => "kvoltampreact",
            Self::WattHour => "watth",
            Self::WattHourPerKilogram => "watthperkg",
            Self::KilowattHour => "kwatth",
            Self::KilowattMinute => "kwattm",
            Self::AmpereHour => "amph",
            Self::KiloampereHour => "kamph",
            Self::MilliampereHour => "mamph",
            Self::Joule => "joule",
            Self::ElectronVolt => "ev",
            Self::Ampere => "amp",
            Self::Kiloampere => "kamp",
            Self::Milliampere => "mamp",
            Self::Volt => "volt",
            Self::Kilovolt => "kvolt",
            Self::Millivolt => "mvolt",
            Self::DecibelMilliwatt => "dBm",
            Self::Ohm => "ohm",
            Self::Kiloohm => "kohm",
            Self::Megaohm => "Mohm",
            Self::Farad => "farad",
            Self::Microfarad => "µfarad",
            Self::Nanofarad => "nfarad",
            Self::Picofarad => "pfarad",
            Self::Femtofarad => "ffarad",
            Self::Henry => "henry",
            Self::Millihenry => "mhenry",
            Self::Microhenry => "µhenry",
            Self::Lumens => "lumens",

            // Flow
            Self::GallonsPerMinute => "flowgpm",
            Self::CubicMetersPerSecond => "flowcms",
            Self::CubicFeetPerSecond => "flowcfs",
            Self::CubicFeetPerMinute => "flowcfm",
            Self::LitersPerHour => "litreh",
            Self::LitersPerMinute => "flowlpm",
            Self::MillilitersPerMinute => "flowmlpm",
            Self::Lux => "lux",

            // Force
            Self::NewtonMeters => "forceNm",
            Self::KilonewtonMeters => "forcekNm",
            Self::Newtons => "forceN",
            Self::Kilonewtons => "forcekN",

            // Mass
            Self::Milligram => "massmg",
            Self::Gram => "massg",
            Self::Pound => "masslb",
            Self::Kilogram => "masskg",
            Self::MetricTon => "masst",

            // Length
            Self::Millimeter => "lengthmm",
            Self::Inch => "lengthin",
            Self::Foot => "lengthft",
            Self::Meter => "lengthm",
            Self::Kilometer => "lengthkm",
            Self::Mile => "lengthmi",

            // Pressure
            Self::Millibar => "pressurembar",
            Self::Bar => "pressurebar",
            Self::Kilobar => "pressurekbar",
            Self::Pascal => "pressurepa",
            Self::Hectopascal => "pressurehpa",
            Self::Kilopascal => "pressurekpa",
            Self::InchesOfMercury => "pressurehg",
            Self::Psi => "pressurepsi",

            // Radiation
            Self::Becquerel => "radbq",
            Self::Curie => "radci",
            Self::Gray => "radgy",
            Self::Rad => "radrad",
            Self::Sievert => "radsv",
            Self::Millisievert => "radmsv",
            Self::Microsievert => "radusv",
            Self::Rem => "radrem",
            Self::ExposureCoulombsPerKilogram => "radexpckg",
            Self::Roentgen => "radr",
            Self::SievertsPerHour => "radsvh",
            Self::MillisievertsPerHour => "radmsvh",
            Self::MicrosievertsPerHour => "radusvh",

            // Rotation speed
            Self::RevolutionsPerMinute => "rotrpm",
            Self::RotationHertz => "rothz",
            Self::RadiansPerSecond => "rotrads",
            Self::DegreesPerSecond => "rotdegs",

            // Temperature
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
            Self::Kelvin => "kelvin",

            // Velocity
            Self::MetersPerSecond => "velocityms",
            Self::KilometersPerHour => "velocitykmh",
            Self::MilesPerHour => "velocitymph",
            Self::Knots => "velocityknot",

            // Volume
            Self::Milliliter => "mlitre",
            Self::Liter => "litre",
            Self::CubicMeter => "m3",
            Self::NormalCubicMeter => "Nm3",
            Self::CubicDecimeter => "dm3",
            Self::Gallon => "gallons",
        }
    }

    /// Look up a unit by its exact code.
    ///
    /// This is code-only lookup; alias-aware resolution lives in
    /// [`crate::alias::resolve_universal_unit`].
    pub fn from_code(code: &str) -> Option<UniversalUnit> {
        Self::ALL.iter().copied().find(|u| u.code() == code)
    }
}

impl fmt::Display for UniversalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for UniversalUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

struct UnitVisitor;

impl Visitor<'_> for UnitVisitor {
    type Value = UniversalUnit;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a universal unit code")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<UniversalUnit, E> {
        UniversalUnit::from_code(value)
            .ok_or_else(|| E::custom(format!("unknown unit code: {}", value)))
    }
}

impl<'de> Deserialize<'de> for UniversalUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(UnitVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for unit in UniversalUnit::ALL {
            assert_eq!(UniversalUnit::from_code(unit.code()), Some(unit));
        }
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in UniversalUnit::ALL.iter().enumerate() {
            for b in &UniversalUnit::ALL[i + 1..] {
                assert_ne!(a.code(), b.code(), "{:?} and {:?} share a code", a, b);
            }
        }
    }

    #[test]
    fn test_all_covers_every_variant() {
        // ALL is the canonical enumeration; the resolution order and every
        // exhaustiveness check depend on it listing each variant exactly once.
        let mut seen = std::collections::HashSet::new();
        for unit in UniversalUnit::ALL {
            assert!(seen.insert(unit), "{:?} listed twice", unit);
        }
        assert_eq!(seen.len(), 273);
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(UniversalUnit::from_code("parsecs_per_fortnight"), None);
        assert_eq!(UniversalUnit::from_code(""), None);
    }

    #[test]
    fn test_serde_wire_form_is_the_code() {
        let json = serde_json::to_string(&UniversalUnit::Bytes).unwrap();
        assert_eq!(json, "\"By\"");

        let unit: UniversalUnit = serde_json::from_str("\"{count}/s\"").unwrap();
        assert_eq!(unit, UniversalUnit::CountPerSecond);

        assert!(serde_json::from_str::<UniversalUnit>("\"nope\"").is_err());
    }

    #[test]
    fn test_display_prints_the_code() {
        assert_eq!(UniversalUnit::BytesPerSecond.to_string(), "By/s");
        assert_eq!(UniversalUnit::Percent.to_string(), "%");
    }
}
