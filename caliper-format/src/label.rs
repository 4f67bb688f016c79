//! Display-label mapping
//!
//! Every universal unit renders through one of two label routes: a *base
//! formatter token* understood by the rendering primitive in
//! [`crate::render`], or an *additional label*, a short suffix used where no
//! token exists (the high-order byte/bit rungs the rendering primitive has
//! no vocabulary for). The completeness invariant - every unit has at least
//! one of the two - is what guarantees formatting is total over the
//! taxonomy, and is enforced by [`validate_label_completeness`].

use caliper_core::UniversalUnit;
use thiserror::Error;

/// Defects surfaced by [`validate_label_completeness`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("unit {unit} has neither a formatter token nor an additional label")]
    Missing { unit: UniversalUnit },
}

/// The formatter token a unit delegates to, when one exists.
pub fn format_token(unit: UniversalUnit) -> Option<&'static str> {
    let token = match unit {
        // Time
        UniversalUnit::Days => "d",
        UniversalUnit::Hours => "h",
        UniversalUnit::Minutes => "m",
        UniversalUnit::Seconds => "s",
        UniversalUnit::Milliseconds => "ms",
        UniversalUnit::Microseconds => "µs",
        UniversalUnit::Nanoseconds => "ns",
        UniversalUnit::DurationMs => "dtdurationms",
        UniversalUnit::DurationS => "dtdurations",
        UniversalUnit::DurationHms => "dthms",
        UniversalUnit::DurationDhms => "dtdhms",
        UniversalUnit::Timeticks => "timeticks",
        UniversalUnit::ClockMs => "clockms",
        UniversalUnit::ClockS => "clocks",
        UniversalUnit::Hertz => "hertz",

        // Data (SI); the exa-and-above rungs only have additional labels
        UniversalUnit::Bytes => "decbytes",
        UniversalUnit::Kilobytes => "deckbytes",
        UniversalUnit::Megabytes => "decmbytes",
        UniversalUnit::Gigabytes => "decgbytes",
        UniversalUnit::Terabytes => "dectbytes",
        UniversalUnit::Petabytes => "decpbytes",

        // Data (IEC)
        UniversalUnit::BytesIec => "bytes",
        UniversalUnit::Kibibytes => "kbytes",
        UniversalUnit::Mebibytes => "mbytes",
        UniversalUnit::Gibibytes => "gbytes",
        UniversalUnit::Tebibytes => "tbytes",
        UniversalUnit::Pebibytes => "pbytes",

        // Data rate
        UniversalUnit::BytesPerSecond => "Bps",
        UniversalUnit::KilobytesPerSecond => "KBs",
        UniversalUnit::MegabytesPerSecond => "MBs",
        UniversalUnit::GigabytesPerSecond => "GBs",
        UniversalUnit::TerabytesPerSecond => "TBs",
        UniversalUnit::PetabytesPerSecond => "PBs",
        UniversalUnit::PacketsPerSecond => "pps",

        // Data rate (IEC)
        UniversalUnit::KibibytesPerSecond => "KiBs",
        UniversalUnit::MebibytesPerSecond => "MiBs",
        UniversalUnit::GibibytesPerSecond => "GiBs",
        UniversalUnit::TebibytesPerSecond => "TiBs",
        UniversalUnit::PebibytesPerSecond => "PiBs",

        // Bits
        UniversalUnit::Bits => "decbits",
        UniversalUnit::BitsIec => "bits",

        // Bit rate
        UniversalUnit::BitsPerSecond => "bps",
        UniversalUnit::KilobitsPerSecond => "Kbits",
        UniversalUnit::MegabitsPerSecond => "Mbits",
        UniversalUnit::GigabitsPerSecond => "Gbits",
        UniversalUnit::TerabitsPerSecond => "Tbits",
        UniversalUnit::PetabitsPerSecond => "Pbits",

        // Bit rate (IEC)
        UniversalUnit::KibibitsPerSecond => "Kibits",
        UniversalUnit::MebibitsPerSecond => "Mibits",
        UniversalUnit::GibibitsPerSecond => "Gibits",
        UniversalUnit::TebibitsPerSecond => "Tibits",
        UniversalUnit::PebibitsPerSecond => "Pibits",

        // Count
        UniversalUnit::Count => "short",
        UniversalUnit::CountPerSecond => "cps",
        UniversalUnit::CountPerMinute => "cpm",

        // Operations
        UniversalUnit::OpsPerSecond => "ops",
        UniversalUnit::OpsPerMinute => "opm",

        // Requests
        UniversalUnit::RequestsPerSecond => "reqps",
        UniversalUnit::RequestsPerMinute => "reqpm",

        // Reads/Writes
        UniversalUnit::ReadsPerSecond => "rps",
        UniversalUnit::WritesPerSecond => "wps",
        UniversalUnit::ReadsPerMinute => "rpm",
        UniversalUnit::WritesPerMinute => "wpm",

        // IO operations
        UniversalUnit::IoOpsPerSecond => "iops",

        // Percent
        UniversalUnit::Percent => "percent",
        UniversalUnit::PercentUnit => "percentunit",

        // Boolean
        UniversalUnit::TrueFalse => "bool",
        UniversalUnit::YesNo => "bool_yes_no",
        UniversalUnit::OnOff => "bool_on_off",

        // None
        UniversalUnit::None => "none",

        // Hash rate
        UniversalUnit::HashesPerSecond => "Hs",
        UniversalUnit::KilohashesPerSecond => "KHs",
        UniversalUnit::MegahashesPerSecond => "MHs",
        UniversalUnit::GigahashesPerSecond => "GHs",
        UniversalUnit::TerahashesPerSecond => "THs",
        UniversalUnit::PetahashesPerSecond => "PHs",
        UniversalUnit::ExahashesPerSecond => "EHs",

        // Miscellaneous
        UniversalUnit::Text => "string",
        UniversalUnit::Short => "short",
        UniversalUnit::Humidity => "humidity",
        UniversalUnit::Decibel => "dB",
        UniversalUnit::Hexadecimal => "hex",
        UniversalUnit::Hexadecimal0x => "hex0x",
        UniversalUnit::ScientificNotation => "sci",
        UniversalUnit::LocaleFormat => "locale",
        UniversalUnit::Pixels => "pixel",

        // Acceleration
        UniversalUnit::MetersPerSecondSquared => "accMS2",
        UniversalUnit::FeetPerSecondSquared => "accFS2",
        UniversalUnit::GUnit => "accG",

        // Angular
        UniversalUnit::Degree => "degree",
        UniversalUnit::Radian => "radian",
        UniversalUnit::Gradian => "grad",
        UniversalUnit::ArcMinute => "arcmin",
        UniversalUnit::ArcSecond => "arcsec",

        // Area
        UniversalUnit::SquareMeters => "areaM2",
        UniversalUnit::SquareFeet => "areaF2",
        UniversalUnit::SquareMiles => "areaMI2",

        // FLOPs
        UniversalUnit::Flops => "flops",
        UniversalUnit::Mflops => "mflops",
        UniversalUnit::Gflops => "gflops",
        UniversalUnit::Tflops => "tflops",
        UniversalUnit::Pflops => "pflops",
        UniversalUnit::Eflops => "eflops",
        UniversalUnit::Zflops => "zflops",
        UniversalUnit::Yflops => "yflops",

        // Concentration
        UniversalUnit::PartsPerMillion => "ppm",
        UniversalUnit::PartsPerBillion => "conppb",
        UniversalUnit::NanogramsPerCubicMeter => "conngm3",
        UniversalUnit::NanogramsPerNormalCubicMeter => "conngNm3",
        UniversalUnit::MicrogramsPerCubicMeter => "conμgm3",
        UniversalUnit::MicrogramsPerNormalCubicMeter => "conμgNm3",
        UniversalUnit::MilligramsPerCubicMeter => "conmgm3",
        UniversalUnit::MilligramsPerNormalCubicMeter => "conmgNm3",
        UniversalUnit::GramsPerCubicMeter => "congm3",
        UniversalUnit::GramsPerNormalCubicMeter => "congNm3",
        UniversalUnit::MilligramsPerDeciliter => "conmgdL",
        UniversalUnit::MillimolesPerLiter => "conmmolL",

        // Currency
        UniversalUnit::CurrencyUsd => "currencyUSD",
        UniversalUnit::CurrencyGbp => "currencyGBP",
        UniversalUnit::CurrencyEur => "currencyEUR",
        UniversalUnit::CurrencyJpy => "currencyJPY",
        UniversalUnit::CurrencyRub => "currencyRUB",
        UniversalUnit::CurrencyUah => "currencyUAH",
        UniversalUnit::CurrencyBrl => "currencyBRL",
        UniversalUnit::CurrencyDkk => "currencyDKK",
        UniversalUnit::CurrencyIsk => "currencyISK",
        UniversalUnit::CurrencyNok => "currencyNOK",
        UniversalUnit::CurrencySek => "currencySEK",
        UniversalUnit::CurrencyCzk => "currencyCZK",
        UniversalUnit::CurrencyChf => "currencyCHF",
        UniversalUnit::CurrencyPln => "currencyPLN",
        UniversalUnit::CurrencyBtc => "currencyBTC",
        UniversalUnit::CurrencyMilliBtc => "currencymBTC",
        UniversalUnit::CurrencyMicroBtc => "currencyμBTC",
        UniversalUnit::CurrencyZar => "currencyZAR",
        UniversalUnit::CurrencyInr => "currencyINR",
        UniversalUnit::CurrencyKrw => "currencyKRW",
        UniversalUnit::CurrencyIdr => "currencyIDR",
        UniversalUnit::CurrencyPhp => "currencyPHP",
        UniversalUnit::CurrencyVnd => "currencyVND",

        // Datetime
        UniversalUnit::DateTimeIso => "dateTimeAsIso",
        UniversalUnit::DateTimeIsoNoDateIfToday => "dateTimeAsIsoNoDateIfToday",
        UniversalUnit::DateTimeUs => "dateTimeAsUS",
        UniversalUnit::DateTimeUsNoDateIfToday => "dateTimeAsUSNoDateIfToday",
        UniversalUnit::DateTimeLocal => "dateTimeAsLocal",
        UniversalUnit::DateTimeLocalNoDateIfToday => "dateTimeAsLocalNoDateIfToday",
        UniversalUnit::DateTimeSystem => "dateTimeAsSystem",
        UniversalUnit::DateTimeFromNow => "dateTimeFromNow",

        // Power/Electrical
        UniversalUnit::Watt => "watt",
        UniversalUnit::Kilowatt => "kwatt",
        UniversalUnit::Megawatt => "megwatt",
        UniversalUnit::Gigawatt => "gwatt",
        UniversalUnit::Milliwatt => "mwatt",
        UniversalUnit::WattsPerSquareMeter => "Wm2",
        UniversalUnit::VoltAmpere => "voltamp",
        UniversalUnit::KilovoltAmpere => "kvoltamp",
        UniversalUnit::VoltAmpereReactive => "voltampreact",
        UniversalUnit::KilovoltAmpereReactive => "kvoltampreact",
        UniversalUnit::WattHour => "watth",
        UniversalUnit::WattHourPerKilogram => "watthperkg",
        UniversalUnit::KilowattHour => "kwatth",
        UniversalUnit::KilowattMinute => "kwattm",
        UniversalUnit::AmpereHour => "amph",
        UniversalUnit::KiloampereHour => "kamph",
        UniversalUnit::MilliampereHour => "mamph",
        UniversalUnit::Joule => "joule",
        UniversalUnit::ElectronVolt => "ev",
        UniversalUnit::Ampere => "amp",
        UniversalUnit::Kiloampere => "kamp",
        UniversalUnit::Milliampere => "mamp",
        UniversalUnit::Volt => "volt",
        UniversalUnit::Kilovolt => "kvolt",
        UniversalUnit::Millivolt => "mvolt",
        UniversalUnit::DecibelMilliwatt => "dBm",
        UniversalUnit::Ohm => "ohm",
        UniversalUnit::Kiloohm => "kohm",
        UniversalUnit::Megaohm => "Mohm",
        UniversalUnit::Farad => "farad",
        UniversalUnit::Microfarad => "µfarad",
        UniversalUnit::Nanofarad => "nfarad",
        UniversalUnit::Picofarad => "pfarad",
        UniversalUnit::Femtofarad => "ffarad",
        UniversalUnit::Henry => "henry",
        UniversalUnit::Millihenry => "mhenry",
        UniversalUnit::Microhenry => "µhenry",
        UniversalUnit::Lumens => "lumens",

        // Flow
        UniversalUnit::GallonsPerMinute => "flowgpm",
        UniversalUnit::CubicMetersPerSecond => "flowcms",
        UniversalUnit::CubicFeetPerSecond => "flowcfs",
        UniversalUnit::CubicFeetPerMinute => "flowcfm",
        UniversalUnit::LitersPerHour => "litreh",
        UniversalUnit::LitersPerMinute => "flowlpm",
        UniversalUnit::MillilitersPerMinute => "flowmlpm",
        UniversalUnit::Lux => "lux",

        // Force
        UniversalUnit::NewtonMeters => "forceNm",
        UniversalUnit::KilonewtonMeters => "forcekNm",
        UniversalUnit::Newtons => "forceN",
        UniversalUnit::Kilonewtons => "forcekN",

        // Mass
        UniversalUnit::Milligram => "massmg",
        UniversalUnit::Gram => "massg",
        UniversalUnit::Pound => "masslb",
        UniversalUnit::Kilogram => "masskg",
        UniversalUnit::MetricTon => "masst",

        // Length
        UniversalUnit::Millimeter => "lengthmm",
        UniversalUnit::Inch => "lengthin",
        UniversalUnit::Foot => "lengthft",
        UniversalUnit::Meter => "lengthm",
        UniversalUnit::Kilometer => "lengthkm",
        UniversalUnit::Mile => "lengthmi",

        // Pressure
        UniversalUnit::Millibar => "pressurembar",
        UniversalUnit::Bar => "pressurebar",
        UniversalUnit::Kilobar => "pressurekbar",
        UniversalUnit::Pascal => "pressurepa",
        UniversalUnit::Hectopascal => "pressurehpa",
        UniversalUnit::Kilopascal => "pressurekpa",
        UniversalUnit::InchesOfMercury => "pressurehg",
        UniversalUnit::Psi => "pressurepsi",

        // Radiation
        UniversalUnit::Becquerel => "radbq",
        UniversalUnit::Curie => "radci",
        UniversalUnit::Gray => "radgy",
        UniversalUnit::Rad => "radrad",
        UniversalUnit::Sievert => "radsv",
        UniversalUnit::Millisievert => "radmsv",
        UniversalUnit::Microsievert => "radusv",
        UniversalUnit::Rem => "radrem",
        UniversalUnit::ExposureCoulombsPerKilogram => "radexpckg",
        UniversalUnit::Roentgen => "radr",
        UniversalUnit::SievertsPerHour => "radsvh",
        UniversalUnit::MillisievertsPerHour => "radmsvh",
        UniversalUnit::MicrosievertsPerHour => "radusvh",

        // Rotation speed
        UniversalUnit::RevolutionsPerMinute => "rotrpm",
        UniversalUnit::RotationHertz => "rothz",
        UniversalUnit::RadiansPerSecond => "rotrads",
        UniversalUnit::DegreesPerSecond => "rotdegs",

        // Temperature
        UniversalUnit::Celsius => "celsius",
        UniversalUnit::Fahrenheit => "fahrenheit",
        UniversalUnit::Kelvin => "kelvin",

        // Velocity
        UniversalUnit::MetersPerSecond => "velocityms",
        UniversalUnit::KilometersPerHour => "velocitykmh",
        UniversalUnit::MilesPerHour => "velocitymph",
        UniversalUnit::Knots => "velocityknot",

        // Volume
        UniversalUnit::Milliliter => "mlitre",
        UniversalUnit::Liter => "litre",
        UniversalUnit::CubicMeter => "m3",
        UniversalUnit::NormalCubicMeter => "Nm3",
        UniversalUnit::CubicDecimeter => "dm3",
        UniversalUnit::Gallon => "gallons",

        _ => return None,
    };
    Some(token)
}

/// The short suffix for units without a formatter token, plus the bit
/// ladder, whose suffixes override the token route.
pub fn additional_label(unit: UniversalUnit) -> Option<&'static str> {
    let label = match unit {
        // Data (SI), high order
        UniversalUnit::Exabytes => "EB",
        UniversalUnit::Zettabytes => "ZB",
        UniversalUnit::Yottabytes => "YB",

        // Data (IEC), high order
        UniversalUnit::Exbibytes => "EiB",
        UniversalUnit::Zebibytes => "ZiB",
        UniversalUnit::Yobibytes => "YiB",

        // Data rate, high order
        UniversalUnit::ExabytesPerSecond => "EB/s",
        UniversalUnit::ZettabytesPerSecond => "ZB/s",
        UniversalUnit::YottabytesPerSecond => "YB/s",

        // Data rate (IEC), high order
        UniversalUnit::ExbibytesPerSecond => "EiB/s",
        UniversalUnit::ZebibytesPerSecond => "ZiB/s",
        UniversalUnit::YobibytesPerSecond => "YiB/s",

        // Bits, whole ladder
        UniversalUnit::Bits => "b",
        UniversalUnit::Kilobits => "kb",
        UniversalUnit::Megabits => "Mb",
        UniversalUnit::Gigabits => "Gb",
        UniversalUnit::Terabits => "Tb",
        UniversalUnit::Petabits => "Pb",
        UniversalUnit::Exabits => "Eb",
        UniversalUnit::Zettabits => "Zb",
        UniversalUnit::Yottabits => "Yb",

        // Bit rate, high order
        UniversalUnit::ExabitsPerSecond => "Eb/s",
        UniversalUnit::ZettabitsPerSecond => "Zb/s",
        UniversalUnit::YottabitsPerSecond => "Yb/s",

        // Bit rate (IEC), high order
        UniversalUnit::ExbibitsPerSecond => "Eib/s",
        UniversalUnit::ZebibitsPerSecond => "Zib/s",
        UniversalUnit::YobibitsPerSecond => "Yib/s",

        _ => return None,
    };
    Some(label)
}

/// Check the completeness invariant: every unit can be labeled one way or
/// the other. A gap would render as a bare number at runtime; this check
/// and its exhaustive test catch the gap before release instead.
pub fn validate_label_completeness() -> Result<(), LabelError> {
    for unit in UniversalUnit::ALL {
        if format_token(unit).is_none() && additional_label(unit).is_none() {
            return Err(LabelError::Missing { unit });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_unit_has_a_label_route() {
        assert_eq!(validate_label_completeness(), Ok(()));
    }

    #[test]
    fn test_high_order_rungs_use_additional_labels() {
        assert_eq!(format_token(UniversalUnit::Yottabytes), None);
        assert_eq!(additional_label(UniversalUnit::Yottabytes), Some("YB"));
        assert_eq!(additional_label(UniversalUnit::YobibitsPerSecond), Some("Yib/s"));
    }

    #[test]
    fn test_bit_ladder_prefers_additional_labels() {
        // Bits carry both routes; the additional label wins at format time.
        assert_eq!(format_token(UniversalUnit::Bits), Some("decbits"));
        assert_eq!(additional_label(UniversalUnit::Bits), Some("b"));
        assert_eq!(additional_label(UniversalUnit::Kilobits), Some("kb"));
    }

    #[test]
    fn test_base_tokens() {
        assert_eq!(format_token(UniversalUnit::Bytes), Some("decbytes"));
        assert_eq!(format_token(UniversalUnit::Count), Some("short"));
        assert_eq!(format_token(UniversalUnit::Percent), Some("percent"));
        assert_eq!(format_token(UniversalUnit::CurrencyUsd), Some("currencyUSD"));
    }
}
