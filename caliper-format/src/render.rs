//! Numeric rendering primitive
//!
//! A token-keyed registry of small formatters: hand a value and a format
//! token to [`render`] and get the final text back. Tokens are the
//! vocabulary of [`crate::label::format_token`]; the registry owns
//! suffix/prefix placement, SI/IEC prefix ladders, the grouped "short"
//! style and the time threshold chains.
//!
//! Default decimal policy, when no override is given: values under 100 in
//! magnitude round to two fractional digits with trailing zeros trimmed,
//! larger magnitudes round to integers. An explicit decimal count renders
//! fixed-width instead.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Output of the rendering primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
}

enum Formatter {
    /// `"900 B"`
    Suffix(&'static str),
    /// `"456%"`, `"65psi"`
    SuffixTight(&'static str),
    /// `"$812"`
    Prefix(&'static str),
    /// SI prefix ladder scaling up by 1000 from a start rung.
    DecimalPrefix { unit: &'static str, offset: usize },
    /// IEC prefix ladder scaling up by 1024.
    BinaryPrefix { unit: &'static str },
    /// Grouped magnitude suffixes: K, Mil, Bil, Tri, ...
    Short,
    /// Bare number, no decoration.
    Number,
    Fn(fn(f64, Option<usize>) -> String),
}

const SI_PREFIXES: [&str; 14] = [
    "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];
const SI_NO_PREFIX: usize = 5;

const IEC_PREFIXES: [&str; 9] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi", "Yi"];

const SHORT_SUFFIXES: [&str; 9] = [
    "", " K", " Mil", " Bil", " Tri", " Quadr", " Quint", " Sext", " Sept",
];

/// Render a number according to the default or overridden decimal policy.
///
/// This is also the bare-number path used when a unit is labeled with an
/// additional suffix instead of a token.
pub fn render_number(value: f64, decimals: Option<usize>) -> String {
    match decimals {
        Some(d) => format!("{:.*}", d, value),
        None => {
            let rounded = if value.abs() < 100.0 {
                (value * 100.0).round() / 100.0
            } else {
                value.round()
            };
            // normalize -0
            let rounded = if rounded == 0.0 { 0.0 } else { rounded };
            format!("{}", rounded)
        }
    }
}

fn to_nanoseconds(v: f64, d: Option<usize>) -> String {
    let abs = v.abs();
    if abs < 1_000.0 {
        format!("{} ns", render_number(v, d))
    } else if abs < 1_000_000.0 {
        format!("{} µs", render_number(v / 1_000.0, d))
    } else if abs < 1_000_000_000.0 {
        format!("{} ms", render_number(v / 1_000_000.0, d))
    } else {
        to_seconds(v / 1_000_000_000.0, d)
    }
}

fn to_microseconds(v: f64, d: Option<usize>) -> String {
    let abs = v.abs();
    if abs < 1_000.0 {
        format!("{} µs", render_number(v, d))
    } else if abs < 1_000_000.0 {
        format!("{} ms", render_number(v / 1_000.0, d))
    } else {
        to_seconds(v / 1_000_000.0, d)
    }
}

fn to_milliseconds(v: f64, d: Option<usize>) -> String {
    if v.abs() < 1_000.0 {
        format!("{} ms", render_number(v, d))
    } else {
        to_seconds(v / 1_000.0, d)
    }
}

fn to_seconds(v: f64, d: Option<usize>) -> String {
    let abs = v.abs();
    if abs < 60.0 {
        format!("{} s", render_number(v, d))
    } else if abs < 3_600.0 {
        format!("{} mins", render_number(v / 60.0, d))
    } else if abs < 86_400.0 {
        format!("{} hours", render_number(v / 3_600.0, d))
    } else if abs < 604_800.0 {
        format!("{} days", render_number(v / 86_400.0, d))
    } else {
        format!("{} weeks", render_number(v / 604_800.0, d))
    }
}

fn to_minutes(v: f64, d: Option<usize>) -> String {
    let abs = v.abs();
    if abs < 60.0 {
        format!("{} min", render_number(v, d))
    } else if abs < 1_440.0 {
        format!("{} hours", render_number(v / 60.0, d))
    } else if abs < 10_080.0 {
        format!("{} days", render_number(v / 1_440.0, d))
    } else {
        format!("{} weeks", render_number(v / 10_080.0, d))
    }
}

fn to_hours(v: f64, d: Option<usize>) -> String {
    let abs = v.abs();
    if abs < 24.0 {
        format!("{} hours", render_number(v, d))
    } else if abs < 168.0 {
        format!("{} days", render_number(v / 24.0, d))
    } else {
        format!("{} weeks", render_number(v / 168.0, d))
    }
}

fn to_days(v: f64, d: Option<usize>) -> String {
    let abs = v.abs();
    if abs < 7.0 {
        format!("{} days", render_number(v, d))
    } else if abs < 365.0 {
        format!("{} weeks", render_number(v / 7.0, d))
    } else {
        format!("{} years", render_number(v / 365.0, d))
    }
}

// SNMP timeticks are hundredths of a second.
fn to_timeticks(v: f64, d: Option<usize>) -> String {
    to_seconds(v / 100.0, d)
}

fn percent_unit(v: f64, d: Option<usize>) -> String {
    format!("{}%", render_number(v * 100.0, d))
}

static REGISTRY: LazyLock<HashMap<&'static str, Formatter>> = LazyLock::new(|| {
    use Formatter::*;
    HashMap::from([
        // Time
        ("ns", Fn(to_nanoseconds)),
        ("µs", Fn(to_microseconds)),
        ("ms", Fn(to_milliseconds)),
        ("s", Fn(to_seconds)),
        ("m", Fn(to_minutes)),
        ("h", Fn(to_hours)),
        ("d", Fn(to_days)),
        ("timeticks", Fn(to_timeticks)),
        ("hertz", DecimalPrefix { unit: "Hz", offset: SI_NO_PREFIX }),

        // Data (SI)
        ("decbytes", Suffix("B")),
        ("deckbytes", Suffix("kB")),
        ("decmbytes", Suffix("MB")),
        ("decgbytes", Suffix("GB")),
        ("dectbytes", Suffix("TB")),
        ("decpbytes", Suffix("PB")),

        // Data (IEC); the base tokens scale themselves, binary style
        ("bytes", BinaryPrefix { unit: "B" }),
        ("kbytes", Suffix("KiB")),
        ("mbytes", Suffix("MiB")),
        ("gbytes", Suffix("GiB")),
        ("tbytes", Suffix("TiB")),
        ("pbytes", Suffix("PiB")),

        // Data rate
        ("Bps", Suffix("B/s")),
        ("KBs", Suffix("kB/s")),
        ("MBs", Suffix("MB/s")),
        ("GBs", Suffix("GB/s")),
        ("TBs", Suffix("TB/s")),
        ("PBs", Suffix("PB/s")),
        ("pps", Suffix("p/s")),
        ("KiBs", Suffix("KiB/s")),
        ("MiBs", Suffix("MiB/s")),
        ("GiBs", Suffix("GiB/s")),
        ("TiBs", Suffix("TiB/s")),
        ("PiBs", Suffix("PiB/s")),

        // Bits
        ("decbits", Suffix("b")),
        ("bits", BinaryPrefix { unit: "b" }),

        // Bit rate
        ("bps", Suffix("b/s")),
        ("Kbits", Suffix("kb/s")),
        ("Mbits", Suffix("Mb/s")),
        ("Gbits", Suffix("Gb/s")),
        ("Tbits", Suffix("Tb/s")),
        ("Pbits", Suffix("Pb/s")),
        ("Kibits", Suffix("Kib/s")),
        ("Mibits", Suffix("Mib/s")),
        ("Gibits", Suffix("Gib/s")),
        ("Tibits", Suffix("Tib/s")),
        ("Pibits", Suffix("Pib/s")),

        // Count and throughput
        ("short", Short),
        ("cps", Suffix("c/s")),
        ("cpm", Suffix("c/m")),
        ("ops", Suffix("ops/s")),
        ("opm", Suffix("ops/m")),
        ("reqps", Suffix("req/s")),
        ("reqpm", Suffix("req/m")),
        ("rps", Suffix("rd/s")),
        ("wps", Suffix("wr/s")),
        ("rpm", Suffix("rd/m")),
        ("wpm", Suffix("wr/m")),
        ("iops", Suffix("io/s")),

        // Percent / none / string
        ("percent", SuffixTight("%")),
        ("percentunit", Fn(percent_unit)),
        ("none", Number),
        ("string", Number),

        // Hash rate
        ("Hs", Suffix("H/s")),
        ("KHs", Suffix("kH/s")),
        ("MHs", Suffix("MH/s")),
        ("GHs", Suffix("GH/s")),
        ("THs", Suffix("TH/s")),
        ("PHs", Suffix("PH/s")),
        ("EHs", Suffix("EH/s")),

        // Miscellaneous
        ("humidity", Suffix("%H")),
        ("dB", Suffix("dB")),
        ("pixel", Suffix("px")),

        // Acceleration
        ("accMS2", Suffix("m/sec²")),
        ("accFS2", Suffix("f/sec²")),
        ("accG", Suffix("g")),

        // Angular
        ("degree", Suffix("°")),
        ("radian", Suffix("rad")),
        ("grad", Suffix("grad")),
        ("arcmin", Suffix("arcmin")),
        ("arcsec", Suffix("arcsec")),

        // Area
        ("areaM2", Suffix("m²")),
        ("areaF2", Suffix("ft²")),
        ("areaMI2", Suffix("mi²")),

        // FLOPs
        ("flops", Suffix("FLOPS")),
        ("mflops", Suffix("MFLOPS")),
        ("gflops", Suffix("GFLOPS")),
        ("tflops", Suffix("TFLOPS")),
        ("pflops", Suffix("PFLOPS")),
        ("eflops", Suffix("EFLOPS")),
        ("zflops", Suffix("ZFLOPS")),
        ("yflops", Suffix("YFLOPS")),

        // Concentration
        ("ppm", Suffix("ppm")),
        ("conppb", Suffix("ppb")),
        ("conngm3", Suffix("ng/m³")),
        ("conngNm3", Suffix("ng/Nm³")),
        ("conμgm3", Suffix("μg/m³")),
        ("conμgNm3", Suffix("μg/Nm³")),
        ("conmgm3", Suffix("mg/m³")),
        ("conmgNm3", Suffix("mg/Nm³")),
        ("congm3", Suffix("g/m³")),
        ("congNm3", Suffix("g/Nm³")),
        ("conmgdL", Suffix("mg/dL")),
        ("conmmolL", Suffix("mmol/L")),

        // Currency
        ("currencyUSD", Prefix("$")),
        ("currencyGBP", Prefix("£")),
        ("currencyEUR", Prefix("€")),
        ("currencyJPY", Prefix("¥")),
        ("currencyRUB", Prefix("₽")),
        ("currencyUAH", Prefix("₴")),
        ("currencyBRL", Prefix("R$")),
        ("currencyDKK", SuffixTight("kr")),
        ("currencyISK", SuffixTight("kr")),
        ("currencyNOK", SuffixTight("kr")),
        ("currencySEK", SuffixTight("kr")),
        ("currencyCZK", Prefix("czk")),
        ("currencyCHF", Prefix("CHF")),
        ("currencyPLN", Prefix("PLN")),
        ("currencyBTC", Prefix("฿")),
        ("currencymBTC", Prefix("mBTC")),
        ("currencyμBTC", Prefix("μBTC")),
        ("currencyZAR", Prefix("R")),
        ("currencyINR", Prefix("₹")),
        ("currencyKRW", Prefix("₩")),
        ("currencyIDR", Prefix("Rp")),
        ("currencyPHP", Prefix("PHP")),
        ("currencyVND", SuffixTight("đ")),

        // Power/Electrical
        ("watt", Suffix("W")),
        ("kwatt", Suffix("kW")),
        ("megwatt", Suffix("MW")),
        ("gwatt", Suffix("GW")),
        ("mwatt", Suffix("mW")),
        ("Wm2", Suffix("W/m²")),
        ("voltamp", Suffix("VA")),
        ("kvoltamp", Suffix("kVA")),
        ("voltampreact", Suffix("VAr")),
        ("kvoltampreact", Suffix("kVAr")),
        ("watth", Suffix("Wh")),
        ("watthperkg", Suffix("Wh/kg")),
        ("kwatth", Suffix("kWh")),
        ("kwattm", Suffix("kW-Min")),
        ("amph", Suffix("Ah")),
        ("kamph", Suffix("kAh")),
        ("mamph", Suffix("mAh")),
        ("joule", Suffix("J")),
        ("ev", Suffix("eV")),
        ("amp", Suffix("A")),
        ("kamp", Suffix("kA")),
        ("mamp", Suffix("mA")),
        ("volt", Suffix("V")),
        ("kvolt", Suffix("kV")),
        ("mvolt", Suffix("mV")),
        ("dBm", Suffix("dBm")),
        ("ohm", Suffix("Ω")),
        ("kohm", Suffix("kΩ")),
        ("Mohm", Suffix("MΩ")),
        ("farad", Suffix("F")),
        ("µfarad", Suffix("µF")),
        ("nfarad", Suffix("nF")),
        ("pfarad", Suffix("pF")),
        ("ffarad", Suffix("fF")),
        ("henry", Suffix("H")),
        ("mhenry", Suffix("mH")),
        ("µhenry", Suffix("µH")),
        ("lumens", Suffix("Lm")),

        // Flow
        ("flowgpm", Suffix("gpm")),
        ("flowcms", Suffix("cms")),
        ("flowcfs", Suffix("cfs")),
        ("flowcfm", Suffix("cfm")),
        ("litreh", Suffix("L/h")),
        ("flowlpm", Suffix("L/min")),
        ("flowmlpm", Suffix("mL/min")),
        ("lux", Suffix("lux")),

        // Force
        ("forceNm", Suffix("Nm")),
        ("forcekNm", Suffix("kNm")),
        ("forceN", Suffix("N")),
        ("forcekN", Suffix("kN")),

        // Mass
        ("massmg", Suffix("mg")),
        ("massg", Suffix("g")),
        ("masslb", Suffix("lb")),
        ("masskg", Suffix("kg")),
        ("masst", Suffix("t")),

        // Length
        ("lengthmm", Suffix("mm")),
        ("lengthin", Suffix("in")),
        ("lengthft", Suffix("ft")),
        ("lengthm", Suffix("m")),
        ("lengthkm", Suffix("km")),
        ("lengthmi", Suffix("mi")),

        // Pressure; the bar tokens climb the SI ladder
        ("pressurembar", DecimalPrefix { unit: "bar", offset: SI_NO_PREFIX - 1 }),
        ("pressurebar", DecimalPrefix { unit: "bar", offset: SI_NO_PREFIX }),
        ("pressurekbar", DecimalPrefix { unit: "bar", offset: SI_NO_PREFIX + 1 }),
        ("pressurepa", Suffix("Pa")),
        ("pressurehpa", Suffix("hPa")),
        ("pressurekpa", Suffix("kPa")),
        ("pressurehg", Suffix("\"Hg")),
        ("pressurepsi", SuffixTight("psi")),

        // Radiation
        ("radbq", Suffix("Bq")),
        ("radci", Suffix("Ci")),
        ("radgy", Suffix("Gy")),
        ("radrad", Suffix("rad")),
        ("radsv", Suffix("Sv")),
        ("radmsv", Suffix("mSv")),
        ("radusv", Suffix("µSv")),
        ("radrem", Suffix("rem")),
        ("radexpckg", Suffix("C/kg")),
        ("radr", Suffix("R")),
        ("radsvh", Suffix("Sv/h")),
        ("radmsvh", Suffix("mSv/h")),
        ("radusvh", Suffix("µSv/h")),

        // Rotation speed
        ("rotrpm", Suffix("rpm")),
        ("rothz", Suffix("Hz")),
        ("rotrads", Suffix("rad/s")),
        ("rotdegs", Suffix("°/s")),

        // Temperature
        ("celsius", Suffix("°C")),
        ("fahrenheit", Suffix("°F")),
        ("kelvin", Suffix("K")),

        // Velocity
        ("velocityms", Suffix("m/s")),
        ("velocitykmh", Suffix("km/h")),
        ("velocitymph", Suffix("mph")),
        ("velocityknot", Suffix("kn")),

        // Volume
        ("mlitre", Suffix("mL")),
        ("litre", Suffix("L")),
        ("m3", Suffix("m³")),
        ("Nm3", Suffix("Nm³")),
        ("dm3", Suffix("dm³")),
        ("gallons", Suffix("gal")),
    ])
});

/// Render a value with a format token.
///
/// An unknown token degrades to the bare number; the completeness checks in
/// [`crate::label`] keep that path out of normal operation.
pub fn render(value: f64, token: &str, decimals: Option<usize>) -> Rendered {
    let text = match REGISTRY.get(token) {
        Some(Formatter::Suffix(suffix)) => format!("{} {}", render_number(value, decimals), suffix),
        Some(Formatter::SuffixTight(suffix)) => {
            format!("{}{}", render_number(value, decimals), suffix)
        }
        Some(Formatter::Prefix(prefix)) => format!("{}{}", prefix, render_number(value, decimals)),
        Some(Formatter::DecimalPrefix { unit, offset }) => {
            let mut v = value;
            let mut idx = *offset;
            while v.abs() >= 1_000.0 && idx < SI_PREFIXES.len() - 1 {
                v /= 1_000.0;
                idx += 1;
            }
            format!("{} {}{}", render_number(v, decimals), SI_PREFIXES[idx], unit)
        }
        Some(Formatter::BinaryPrefix { unit }) => {
            let mut v = value;
            let mut idx = 0;
            while v.abs() >= 1_024.0 && idx < IEC_PREFIXES.len() - 1 {
                v /= 1_024.0;
                idx += 1;
            }
            format!("{} {}{}", render_number(v, decimals), IEC_PREFIXES[idx], unit)
        }
        Some(Formatter::Short) => {
            let mut v = value;
            let mut idx = 0;
            while v.abs() >= 1_000.0 && idx < SHORT_SUFFIXES.len() - 1 {
                v /= 1_000.0;
                idx += 1;
            }
            format!("{}{}", render_number(v, decimals), SHORT_SUFFIXES[idx])
        }
        Some(Formatter::Number) => render_number(value, decimals),
        Some(Formatter::Fn(f)) => f(value, decimals),
        None => render_number(value, decimals),
    };
    Rendered { text }
}

/// The plain suffix a token would append, for tokens that have one.
///
/// Family scaling uses this to label a landing unit whose token is a plain
/// suffix formatter; prefix-ladder and custom tokens have no single label.
pub fn label_for_token(token: &str) -> Option<&'static str> {
    match REGISTRY.get(token) {
        Some(Formatter::Suffix(suffix)) => Some(suffix),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_decimals_trim_and_round() {
        assert_eq!(render_number(864.0, None), "864");
        assert_eq!(render_number(1.034, None), "1.03");
        assert_eq!(render_number(1.0, None), "1");
        assert_eq!(render_number(100.006, None), "100");
        assert_eq!(render_number(-1.034, None), "-1.03");
        assert_eq!(render_number(0.5, None), "0.5");
    }

    #[test]
    fn test_decimal_override_is_fixed_width() {
        assert_eq!(render_number(1.0, Some(2)), "1.00");
        assert_eq!(render_number(1.034, Some(1)), "1.0");
    }

    #[test]
    fn test_suffix_and_prefix_placement() {
        assert_eq!(render(864.0, "decbytes", None).text, "864 B");
        assert_eq!(render(456.0, "percent", None).text, "456%");
        assert_eq!(render(812.0, "currencyUSD", None).text, "$812");
        assert_eq!(render(375.0, "currencyDKK", None).text, "375kr");
        assert_eq!(render(65.0, "pressurepsi", None).text, "65psi");
    }

    #[test]
    fn test_time_chains() {
        assert_eq!(render(1006.0, "ns", None).text, "1.01 µs");
        assert_eq!(render(100006.0, "µs", None).text, "100 ms");
        assert_eq!(render(1006.0, "ms", None).text, "1.01 s");
        assert_eq!(render(61.0, "s", None).text, "1.02 mins");
        assert_eq!(render(61.0, "m", None).text, "1.02 hours");
        assert_eq!(render(25.0, "h", None).text, "1.04 days");
        assert_eq!(render(31.0, "d", None).text, "4.43 weeks");
        assert_eq!(render(900.0, "timeticks", None).text, "9 s");
        assert_eq!(render(45.0, "s", None).text, "45 s");
    }

    #[test]
    fn test_short_scaling() {
        assert_eq!(render(100.0, "short", None).text, "100");
        assert_eq!(render(1_000.0, "short", None).text, "1 K");
        assert_eq!(render(100_000.0, "short", None).text, "100 K");
        assert_eq!(render(1_000_000.0, "short", None).text, "1 Mil");
        assert_eq!(render(1_000_000_000.0, "short", None).text, "1 Bil");
        assert_eq!(render(1_000_000_000_000.0, "short", None).text, "1 Tri");
    }

    #[test]
    fn test_binary_prefix_scaling() {
        assert_eq!(render(900.0, "bytes", None).text, "900 B");
        assert_eq!(render(999.0, "bits", None).text, "999 b");
        assert_eq!(render(1024.0, "bits", None).text, "1 Kib");
        assert_eq!(render(1536.0, "bytes", None).text, "1.5 KiB");
    }

    #[test]
    fn test_decimal_prefix_scaling() {
        assert_eq!(render(900.0, "hertz", None).text, "900 Hz");
        assert_eq!(render(45.0, "pressurembar", None).text, "45 mbar");
        assert_eq!(render(1013.0, "pressurembar", None).text, "1.01 bar");
        assert_eq!(render(27.0, "pressurebar", None).text, "27 bar");
        assert_eq!(render(62.0, "pressurekbar", None).text, "62 kbar");
    }

    #[test]
    fn test_percent_unit_multiplies() {
        assert_eq!(render(9.0, "percentunit", None).text, "900%");
        assert_eq!(render(0.155, "percentunit", None).text, "15.5%");
    }

    #[test]
    fn test_unknown_token_degrades_to_bare_number() {
        assert_eq!(render(742.0, "no_such_token", None).text, "742");
    }

    #[test]
    fn test_label_for_token() {
        assert_eq!(label_for_token("deckbytes"), Some("kB"));
        assert_eq!(label_for_token("Kibits"), Some("Kib/s"));
        assert_eq!(label_for_token("short"), None);
        assert_eq!(label_for_token("percent"), None);
    }
}
