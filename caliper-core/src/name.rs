//! Human-readable unit names
//!
//! Total over the taxonomy: every unit has exactly one display name. These
//! are the strings shown in selector dropdowns and mismatch warnings, not
//! the short labels appended to formatted values.

use crate::unit::UniversalUnit;

/// The display name for a universal unit, e.g. `"Bytes (B)"`.
pub fn display_name(unit: UniversalUnit) -> &'static str {
    match unit {
        // Time
        UniversalUnit::Days => "Days",
        UniversalUnit::Hours => "Hours",
        UniversalUnit::Minutes => "Minutes",
        UniversalUnit::Seconds => "Seconds (s)",
        UniversalUnit::Microseconds => "Microseconds (µs)",
        UniversalUnit::Milliseconds => "Milliseconds (ms)",
        UniversalUnit::Nanoseconds => "Nanoseconds",
        UniversalUnit::DurationMs => "Duration (ms)",
        UniversalUnit::DurationS => "Duration (s)",
        UniversalUnit::DurationHms => "Duration (h:m:s)",
        UniversalUnit::DurationDhms => "Duration (d:h:m:s)",
        UniversalUnit::Timeticks => "Time ticks",
        UniversalUnit::ClockMs => "Clock (ms)",
        UniversalUnit::ClockS => "Clock (s)",
        UniversalUnit::Hertz => "Hertz (1/s)",

        // Data
        UniversalUnit::Bytes => "Bytes (B)",
        UniversalUnit::Kilobytes => "Kilobytes (KB)",
        UniversalUnit::Megabytes => "Megabytes (MB)",
        UniversalUnit::Gigabytes => "Gigabytes (GB)",
        UniversalUnit::Terabytes => "Terabytes (TB)",
        UniversalUnit::Petabytes => "Petabytes (PB)",
        UniversalUnit::Exabytes => "Exabytes (EB)",
        UniversalUnit::Zettabytes => "Zettabytes (ZB)",
        UniversalUnit::Yottabytes => "Yottabytes (YB)",

        // Binary (IEC) data
        UniversalUnit::BytesIec => "Bytes (B) (IEC)",
        UniversalUnit::Kibibytes => "Kibibytes (KiB)",
        UniversalUnit::Mebibytes => "Mebibytes (MiB)",
        UniversalUnit::Gibibytes => "Gibibytes (GiB)",
        UniversalUnit::Tebibytes => "Tebibytes (TiB)",
        UniversalUnit::Pebibytes => "Pebibytes (PiB)",
        UniversalUnit::Exbibytes => "Exbibytes (EiB)",
        UniversalUnit::Zebibytes => "Zebibytes (ZiB)",
        UniversalUnit::Yobibytes => "Yobibytes (YiB)",

        // Data rate
        UniversalUnit::BytesPerSecond => "Bytes/sec",
        UniversalUnit::KilobytesPerSecond => "Kilobytes/sec",
        UniversalUnit::MegabytesPerSecond => "Megabytes/sec",
        UniversalUnit::GigabytesPerSecond => "Gigabytes/sec",
        UniversalUnit::TerabytesPerSecond => "Terabytes/sec",
        UniversalUnit::PetabytesPerSecond => "Petabytes/sec",
        UniversalUnit::ExabytesPerSecond => "Exabytes/sec",
        UniversalUnit::ZettabytesPerSecond => "Zettabytes/sec",
        UniversalUnit::YottabytesPerSecond => "Yottabytes/sec",
        UniversalUnit::PacketsPerSecond => "Packets/sec",

        // Binary (IEC) data rate
        UniversalUnit::KibibytesPerSecond => "Kibibytes/sec (KiB/s)",
        UniversalUnit::MebibytesPerSecond => "Mebibytes/sec (MiB/s)",
        UniversalUnit::GibibytesPerSecond => "Gibibytes/sec (GiB/s)",
        UniversalUnit::TebibytesPerSecond => "Tebibytes/sec (TiB/s)",
        UniversalUnit::PebibytesPerSecond => "Pebibytes/sec (PiB/s)",
        UniversalUnit::ExbibytesPerSecond => "Exbibytes/sec (EiB/s)",
        UniversalUnit::ZebibytesPerSecond => "Zebibytes/sec (ZiB/s)",
        UniversalUnit::YobibytesPerSecond => "Yobibytes/sec (YiB/s)",

        // Bits
        UniversalUnit::Bits => "Bits (b)",
        UniversalUnit::BitsIec => "Bits (b) (IEC)",
        UniversalUnit::Kilobits => "Kilobits (Kb)",
        UniversalUnit::Megabits => "Megabits (Mb)",
        UniversalUnit::Gigabits => "Gigabits (Gb)",
        UniversalUnit::Terabits => "Terabits (Tb)",
        UniversalUnit::Petabits => "Petabits (Pb)",
        UniversalUnit::Exabits => "Exabits (Eb)",
        UniversalUnit::Zettabits => "Zettabits (Zb)",
        UniversalUnit::Yottabits => "Yottabits (Yb)",

        // Bit rate
        UniversalUnit::BitsPerSecond => "Bits/sec",
        UniversalUnit::KilobitsPerSecond => "Kilobits/sec",
        UniversalUnit::MegabitsPerSecond => "Megabits/sec",
        UniversalUnit::GigabitsPerSecond => "Gigabits/sec",
        UniversalUnit::TerabitsPerSecond => "Terabits/sec",
        UniversalUnit::PetabitsPerSecond => "Petabits/sec",
        UniversalUnit::ExabitsPerSecond => "Exabits/sec",
        UniversalUnit::ZettabitsPerSecond => "Zettabits/sec",
        UniversalUnit::YottabitsPerSecond => "Yottabits/sec",

        // Binary (IEC) bit rate
        UniversalUnit::KibibitsPerSecond => "Kibibits/sec",
        UniversalUnit::MebibitsPerSecond => "Mebibits/sec",
        UniversalUnit::GibibitsPerSecond => "Gibibits/sec",
        UniversalUnit::TebibitsPerSecond => "Tebibits/sec",
        UniversalUnit::PebibitsPerSecond => "Pebibits/sec",
        UniversalUnit::ExbibitsPerSecond => "Exbibits/sec",
        UniversalUnit::ZebibitsPerSecond => "Zebibits/sec",
        UniversalUnit::YobibitsPerSecond => "Yobibits/sec",

        // Count
        UniversalUnit::Count => "Count",
        UniversalUnit::CountPerSecond => "Count/sec",
        UniversalUnit::CountPerMinute => "Count/min",

        // Operations
        UniversalUnit::OpsPerSecond => "Ops/sec",
        UniversalUnit::OpsPerMinute => "Ops/min",

        // Requests
        UniversalUnit::RequestsPerSecond => "Requests/sec",
        UniversalUnit::RequestsPerMinute => "Requests/min",

        // Reads/Writes
        UniversalUnit::ReadsPerSecond => "Reads/sec",
        UniversalUnit::WritesPerSecond => "Writes/sec",
        UniversalUnit::ReadsPerMinute => "Reads/min",
        UniversalUnit::WritesPerMinute => "Writes/min",

        // IO operations
        UniversalUnit::IoOpsPerSecond => "IOPS/sec",

        // Percent
        UniversalUnit::Percent => "Percent (0 - 100)",
        UniversalUnit::PercentUnit => "Percent (0.0 - 1.0)",

        // Boolean
        UniversalUnit::TrueFalse => "True / False",
        UniversalUnit::YesNo => "Yes / No",
        UniversalUnit::OnOff => "On / Off",

        // None
        UniversalUnit::None => "None",

        // Hash rate
        UniversalUnit::HashesPerSecond => "Hashes/sec",
        UniversalUnit::KilohashesPerSecond => "Kilohashes/sec",
        UniversalUnit::MegahashesPerSecond => "Megahashes/sec",
        UniversalUnit::GigahashesPerSecond => "Gigahashes/sec",
        UniversalUnit::TerahashesPerSecond => "Terahashes/sec",
        UniversalUnit::PetahashesPerSecond => "Petahashes/sec",
        UniversalUnit::ExahashesPerSecond => "Exahashes/sec",

        // Miscellaneous
        UniversalUnit::Text => "String",
        UniversalUnit::Short => "Short",
        UniversalUnit::Humidity => "Humidity (%)",
        UniversalUnit::Decibel => "Decibel (dB)",
        UniversalUnit::Hexadecimal => "Hexadecimal",
        UniversalUnit::Hexadecimal0x => "Hexadecimal (0x)",
        UniversalUnit::ScientificNotation => "Scientific notation",
        UniversalUnit::LocaleFormat => "Locale format",
        UniversalUnit::Pixels => "Pixels",

        // Acceleration
        UniversalUnit::MetersPerSecondSquared => "Meters/sec²",
        UniversalUnit::FeetPerSecondSquared => "Feet/sec²",
        UniversalUnit::GUnit => "G unit",

        // Angular
        UniversalUnit::Degree => "Degrees (°)",
        UniversalUnit::Radian => "Radians",
        UniversalUnit::Gradian => "Gradians",
        UniversalUnit::ArcMinute => "Arc minutes",
        UniversalUnit::ArcSecond => "Arc seconds",

        // Area
        UniversalUnit::SquareMeters => "Square meters (m²)",
        UniversalUnit::SquareFeet => "Square feet (ft²)",
        UniversalUnit::SquareMiles => "Square miles (mi²)",

        // FLOPs
        UniversalUnit::Flops => "FLOPS",
        UniversalUnit::Mflops => "MFLOPS",
        UniversalUnit::Gflops => "GFLOPS",
        UniversalUnit::Tflops => "TFLOPS",
        UniversalUnit::Pflops => "PFLOPS",
        UniversalUnit::Eflops => "EFLOPS",
        UniversalUnit::Zflops => "ZFLOPS",
        UniversalUnit::Yflops => "YFLOPS",

        // Concentration
        UniversalUnit::PartsPerMillion => "Parts per million (ppm)",
        UniversalUnit::PartsPerBillion => "Parts per billion (ppb)",
        UniversalUnit::NanogramsPerCubicMeter => "Nanogram/m³ (ng/m³)",
        UniversalUnit::NanogramsPerNormalCubicMeter => "Nanogram/Nm³ (ng/Nm³)",
        UniversalUnit::MicrogramsPerCubicMeter => "Microgram/m³ (µg/m³)",
        UniversalUnit::MicrogramsPerNormalCubicMeter => "Microgram/Nm³ (µg/Nm³)",
        UniversalUnit::MilligramsPerCubicMeter => "Milligram/m³ (mg/m³)",
        UniversalUnit::MilligramsPerNormalCubicMeter => "Milligram/Nm³ (mg/Nm³)",
        UniversalUnit::GramsPerCubicMeter => "Gram/m³ (g/m³)",
        UniversalUnit::GramsPerNormalCubicMeter => "Gram/Nm³ (g/Nm³)",
        UniversalUnit::MilligramsPerDeciliter => "Milligrams per decilitre (mg/dL)",
        UniversalUnit::MillimolesPerLiter => "Millimoles per litre (mmol/L)",

        // Currency
        UniversalUnit::CurrencyUsd => "US Dollar (USD)",
        UniversalUnit::CurrencyGbp => "British Pound (GBP)",
        UniversalUnit::CurrencyEur => "Euro (EUR)",
        UniversalUnit::CurrencyJpy => "Japanese Yen (JPY)",
        UniversalUnit::CurrencyRub => "Russian Ruble (RUB)",
        UniversalUnit::CurrencyUah => "Ukrainian Hryvnia (UAH)",
        UniversalUnit::CurrencyBrl => "Brazilian Real (BRL)",
        UniversalUnit::CurrencyDkk => "Danish Krone (DKK)",
        UniversalUnit::CurrencyIsk => "Icelandic Króna (ISK)",
        UniversalUnit::CurrencyNok => "Norwegian Krone (NOK)",
        UniversalUnit::CurrencySek => "Swedish Krona (SEK)",
        UniversalUnit::CurrencyCzk => "Czech Koruna (CZK)",
        UniversalUnit::CurrencyChf => "Swiss Franc (CHF)",
        UniversalUnit::CurrencyPln => "Polish Złoty (PLN)",
        UniversalUnit::CurrencyBtc => "Bitcoin (BTC)",
        UniversalUnit::CurrencyMilliBtc => "Milli Bitcoin (mBTC)",
        UniversalUnit::CurrencyMicroBtc => "Micro Bitcoin (µBTC)",
        UniversalUnit::CurrencyZar => "South African Rand (ZAR)",
        UniversalUnit::CurrencyInr => "Indian Rupee (INR)",
        UniversalUnit::CurrencyKrw => "South Korean Won (KRW)",
        UniversalUnit::CurrencyIdr => "Indonesian Rupiah (IDR)",
        UniversalUnit::CurrencyPhp => "Philippine Peso (PHP)",
        UniversalUnit::CurrencyVnd => "Vietnamese Dong (VND)",

        // Datetime
        UniversalUnit::DateTimeIso => "Datetime ISO",
        UniversalUnit::DateTimeIsoNoDateIfToday => "Datetime ISO (no date if today)",
        UniversalUnit::DateTimeUs => "Datetime US",
        UniversalUnit::DateTimeUsNoDateIfToday => "Datetime US (no date if today)",
        UniversalUnit::DateTimeLocal => "Datetime local",
        UniversalUnit::DateTimeLocalNoDateIfToday => "Datetime local (no date if today)",
        UniversalUnit::DateTimeSystem => "Datetime default",
        UniversalUnit::DateTimeFromNow => "Relative time (from now)",

        // Power/Electrical
        UniversalUnit::Watt => "Watt (W)",
        UniversalUnit::Kilowatt => "Kilowatt (kW)",
        UniversalUnit::Megawatt => "Megawatt (MW)",
        UniversalUnit::Gigawatt => "Gigawatt (GW)",
        UniversalUnit::Milliwatt => "Milliwatt (mW)",
        UniversalUnit::WattsPerSquareMeter => "Watt per square meter (W/m²)",
        UniversalUnit::VoltAmpere => "Volt-ampere (VA)",
        UniversalUnit::KilovoltAmpere => "Kilovolt-ampere (kVA)",
        UniversalUnit::VoltAmpereReactive => "Volt-ampere reactive (VAr)",
        UniversalUnit::KilovoltAmpereReactive => "Kilovolt-ampere reactive (kVAr)",
        UniversalUnit::WattHour => "Watt-hour (Wh)",
        UniversalUnit::WattHourPerKilogram => "Watt-hour per kilogram (Wh/kg)",
        UniversalUnit::KilowattHour => "Kilowatt-hour (kWh)",
        UniversalUnit::KilowattMinute => "Kilowatt-minute (kW min)",
        UniversalUnit::AmpereHour => "Ampere-hour (Ah)",
        UniversalUnit::KiloampereHour => "Kiloampere-hour (kAh)",
        UniversalUnit::MilliampereHour => "Milliampere-hour (mAh)",
        UniversalUnit::Joule => "Joule (J)",
        UniversalUnit::ElectronVolt => "Electron volt (eV)",
        UniversalUnit::Ampere => "Ampere (A)",
        UniversalUnit::Kiloampere => "Kiloampere (kA)",
        UniversalUnit::Milliampere => "Milliampere (mA)",
        UniversalUnit::Volt => "Volt (V)",
        UniversalUnit::Kilovolt => "Kilovolt (kV)",
        UniversalUnit::Millivolt => "Millivolt (mV)",
        UniversalUnit::DecibelMilliwatt => "Decibel-milliwatt (dBm)",
        UniversalUnit::Ohm => "Ohm (Ω)",
        UniversalUnit::Kiloohm => "Kilohm (kΩ)",
        UniversalUnit::Megaohm => "Megohm (MΩ)",
        UniversalUnit::Farad => "Farad (F)",
        UniversalUnit::Microfarad => "Microfarad (µF)",
        UniversalUnit::Nanofarad => "Nanofarad (nF)",
        UniversalUnit::Picofarad => "Picofarad (pF)",
        UniversalUnit::Femtofarad => "Femtofarad (fF)",
        UniversalUnit::Henry => "Henry (H)",
        UniversalUnit::Millihenry => "Millihenry (mH)",
        UniversalUnit::Microhenry => "Microhenry (µH)",
        UniversalUnit::Lumens => "Lumens (lm)",

        // Flow
        UniversalUnit::GallonsPerMinute => "Gallons/min (gpm)",
        UniversalUnit::CubicMetersPerSecond => "Cubic meters/sec (cms)",
        UniversalUnit::CubicFeetPerSecond => "Cubic feet/sec (cfs)",
        UniversalUnit::CubicFeetPerMinute => "Cubic feet/min (cfm)",
        UniversalUnit::LitersPerHour => "Litres/hour",
        UniversalUnit::LitersPerMinute => "Litres/min (L/min)",
        UniversalUnit::MillilitersPerMinute => "Millilitres/min (mL/min)",
        UniversalUnit::Lux => "Lux (lx)",

        // Force
        UniversalUnit::NewtonMeters => "Newton-meters (Nm)",
        UniversalUnit::KilonewtonMeters => "Kilonewton-meters (kNm)",
        UniversalUnit::Newtons => "Newtons (N)",
        UniversalUnit::Kilonewtons => "Kilonewtons (kN)",

        // Mass
        UniversalUnit::Milligram => "Milligram (mg)",
        UniversalUnit::Gram => "Gram (g)",
        UniversalUnit::Pound => "Pound (lb)",
        UniversalUnit::Kilogram => "Kilogram (kg)",
        UniversalUnit::MetricTon => "Metric ton (t)",

        // Length
        UniversalUnit::Millimeter => "Millimeter (mm)",
        UniversalUnit::Inch => "Inch (in)",
        UniversalUnit::Foot => "Foot (ft)",
        UniversalUnit::Meter => "Meter (m)",
        UniversalUnit::Kilometer => "Kilometer (km)",
        UniversalUnit::Mile => "Mile (mi)",

        // Pressure
        UniversalUnit::Millibar => "Millibar (mbar)",
        UniversalUnit::Bar => "Bar (bar)",
        UniversalUnit::Kilobar => "Kilobar (kbar)",
        UniversalUnit::Pascal => "Pascal (Pa)",
        UniversalUnit::Hectopascal => "Hectopascal (hPa)",
        UniversalUnit::Kilopascal => "Kilopascal (kPa)",
        UniversalUnit::InchesOfMercury => "Inches of mercury (inHg)",
        UniversalUnit::Psi => "PSI",

        // Radiation
        UniversalUnit::Becquerel => "Becquerel (Bq)",
        UniversalUnit::Curie => "Curie (Ci)",
        UniversalUnit::Gray => "Gray (Gy)",
        UniversalUnit::Rad => "Rad",
        UniversalUnit::Sievert => "Sievert (Sv)",
        UniversalUnit::Millisievert => "Millisievert (mSv)",
        UniversalUnit::Microsievert => "Microsievert (µSv)",
        UniversalUnit::Rem => "Rem",
        UniversalUnit::ExposureCoulombsPerKilogram => "Exposure (C/kg)",
        UniversalUnit::Roentgen => "Roentgen (R)",
        UniversalUnit::SievertsPerHour => "Sievert/hour (Sv/h)",
        UniversalUnit::MillisievertsPerHour => "Millisievert/hour (mSv/h)",
        UniversalUnit::MicrosievertsPerHour => "Microsievert/hour (µSv/h)",

        // Rotation speed
        UniversalUnit::RevolutionsPerMinute => "Revolutions per minute (RPM)",
        UniversalUnit::RotationHertz => "Hertz (Hz)",
        UniversalUnit::RadiansPerSecond => "Radians per second (rad/s)",
        UniversalUnit::DegreesPerSecond => "Degrees per second (°/s)",

        // Temperature
        UniversalUnit::Celsius => "Celsius (°C)",
        UniversalUnit::Fahrenheit => "Fahrenheit (°F)",
        UniversalUnit::Kelvin => "Kelvin (K)",

        // Velocity
        UniversalUnit::MetersPerSecond => "Meters/second (m/s)",
        UniversalUnit::KilometersPerHour => "Kilometers/hour (km/h)",
        UniversalUnit::MilesPerHour => "Miles/hour (mph)",
        UniversalUnit::Knots => "Knots (kn)",

        // Volume
        UniversalUnit::Milliliter => "Millilitre (mL)",
        UniversalUnit::Liter => "Litre (L)",
        UniversalUnit::CubicMeter => "Cubic meter (m³)",
        UniversalUnit::NormalCubicMeter => "Normal cubic meter (Nm³)",
        UniversalUnit::CubicDecimeter => "Cubic decimeter (dm³)",
        UniversalUnit::Gallon => "Gallons (gal)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_unit_has_a_nonempty_name() {
        for unit in UniversalUnit::ALL {
            assert!(!display_name(unit).is_empty(), "{:?} has no name", unit);
        }
    }

    #[test]
    fn test_known_names() {
        assert_eq!(display_name(UniversalUnit::Bytes), "Bytes (B)");
        assert_eq!(display_name(UniversalUnit::Seconds), "Seconds (s)");
        assert_eq!(display_name(UniversalUnit::Percent), "Percent (0 - 100)");
        assert_eq!(display_name(UniversalUnit::KilowattMinute), "Kilowatt-minute (kW min)");
    }
}
