//! The formatting pipeline
//!
//! Classifies a unit into its formatting strategy and produces the final
//! display string. Strategies, in dispatch order:
//!
//! 1. custom non-linear conversion ([`crate::convert`])
//! 2. family scaling + label ([`crate::family`], [`crate::label`])
//! 3. direct token pass-through ([`crate::render`])
//! 4. short-style fallback with the raw unit as a literal suffix
//!
//! Total over its inputs: unknown units render degraded, never panic.

use std::time::SystemTime;

use caliper_core::{resolve_universal_unit, Resolved, UniversalUnit};

use crate::convert::custom_format;
use crate::family::{family_of, scale_within_family};
use crate::label::{additional_label, format_token};
use crate::pad::{pad, PrecisionPolicy};
use crate::render::{label_for_token, render, render_number};

/// The short label a unit is displayed with, additional label first.
fn display_label(unit: UniversalUnit) -> Option<&'static str> {
    additional_label(unit).or_else(|| format_token(unit).and_then(label_for_token))
}

/// Format a value carrying a raw unit string.
///
/// The raw unit is resolved through the alias layer; an unrecognized string
/// renders in the generic short style with the raw unit appended verbatim,
/// and an empty one renders the short style alone.
pub fn format_value(
    value: f64,
    raw_unit: &str,
    policy: Option<&PrecisionPolicy>,
    decimals: Option<usize>,
) -> String {
    match resolve_universal_unit(raw_unit) {
        Resolved::Unit(unit) => format_unit(value, unit, policy, decimals),
        Resolved::Empty => render(value, "short", decimals).text,
        Resolved::Unknown(raw) => format!("{} {}", render(value, "short", decimals).text, raw),
    }
}

/// Format a value for an already-resolved universal unit.
pub fn format_unit(
    value: f64,
    unit: UniversalUnit,
    policy: Option<&PrecisionPolicy>,
    decimals: Option<usize>,
) -> String {
    if let Some(text) = custom_format(unit, value, SystemTime::now()) {
        return text;
    }

    if let Some(family) = family_of(unit) {
        let scaled = scale_within_family(value, unit, family);
        let mut number = render_number(scaled.value, decimals);
        if let Some(policy) = policy {
            if number.contains('.') {
                number = pad(&number, policy);
            }
        }
        return match display_label(scaled.unit) {
            Some(label) => format!("{} {}", number, label),
            // A label gap is a table defect caught by the completeness
            // check; at runtime the number still renders.
            None => number,
        };
    }

    if let Some(token) = format_token(unit) {
        return render(value, token, decimals).text;
    }

    match additional_label(unit) {
        Some(label) => format!("{} {}", render_number(value, decimals), label),
        None => render_number(value, decimals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caliper_core::UniversalUnit as U;

    fn fmt(value: f64, raw: &str) -> String {
        format_value(value, raw, None, None)
    }

    fn fmt_unit(value: f64, unit: UniversalUnit) -> String {
        format_unit(value, unit, None, None)
    }

    #[test]
    fn test_byte_ladder() {
        assert_eq!(fmt(900.0, "By"), "900 B");
        assert_eq!(fmt(1000.0, "By"), "1 kB");
        assert_eq!(fmt(1034.0, "By"), "1.03 kB");
        assert_eq!(fmt(512.0, "kBy"), "512 kB");
        assert_eq!(fmt(1034.0, "kBy"), "1.03 MB");
        assert_eq!(fmt(777.0, "MBy"), "777 MB");
        assert_eq!(fmt(1000.0, "PBy"), "1 EB");
        assert_eq!(fmt(1034.0, "ZBy"), "1.03 YB");
        assert_eq!(fmt(1034.0, "YBy"), "1034 YB");
    }

    #[test]
    fn test_byte_rate_ladder() {
        assert_eq!(fmt(480.0, "By/s"), "480 B/s");
        assert_eq!(fmt(1000.0, "By/s"), "1 kB/s");
        assert_eq!(fmt(995.0, "TBy/s"), "995 TB/s");
        assert_eq!(fmt(1000.0, "TBy/s"), "1 PB/s");
        assert_eq!(fmt(666.0, "YBy/s"), "666 YB/s");
        assert_eq!(fmt(1000.0, "EBy/s"), "1 ZB/s");
    }

    #[test]
    fn test_bit_ladders() {
        assert_eq!(fmt(250.0, "bit"), "250 b");
        assert_eq!(fmt(1000.0, "bit"), "1 kb");
        assert_eq!(fmt(0.5, "kbit"), "500 b");
        assert_eq!(fmt(0.001, "Mbit"), "1 kb");
        assert_eq!(fmt(965.0, "Ybit"), "965 Yb");
        assert_eq!(fmt(512.0, "bit/s"), "512 b/s");
        assert_eq!(fmt(1000.0, "bit/s"), "1 kb/s");
        assert_eq!(fmt(1000.0, "kbit/s"), "1 Mb/s");
        assert_eq!(fmt(1000.0, "Ebit/s"), "1 Zb/s");
        assert_eq!(fmt(1000.0, "Zbit/s"), "1 Yb/s");
    }

    #[test]
    fn test_iec_ladders() {
        assert_eq!(fmt(900.0, "KiBy"), "900 KiB");
        assert_eq!(fmt(1024.0, "KiBy"), "1 MiB");
        assert_eq!(fmt(900.0, "YiBy"), "900 YiB");
        assert_eq!(fmt(900.0, "KiBy/s"), "900 KiB/s");
        assert_eq!(fmt(900.0, "YiBy/s"), "900 YiB/s");
        assert_eq!(fmt(900.0, "Kibit/s"), "900 Kib/s");
        assert_eq!(fmt(900.0, "Yibit/s"), "900 Yib/s");
    }

    #[test]
    fn test_iec_base_units_scale_in_the_renderer() {
        assert_eq!(fmt_unit(900.0, U::BytesIec), "900 B");
        assert_eq!(fmt_unit(999.0, U::BitsIec), "999 b");
        assert_eq!(fmt_unit(1024.0, U::BitsIec), "1 Kib");
    }

    #[test]
    fn test_time_units_delegate_to_token_chains() {
        assert_eq!(fmt(61.0, "s"), "1.02 mins");
        assert_eq!(fmt(1006.0, "ms"), "1.01 s");
        assert_eq!(fmt(100006.0, "us"), "100 ms");
        assert_eq!(fmt(1006.0, "ns"), "1.01 µs");
        assert_eq!(fmt(61.0, "min"), "1.02 hours");
        assert_eq!(fmt(25.0, "h"), "1.04 days");
        assert_eq!(fmt(31.0, "d"), "4.43 weeks");
        assert_eq!(fmt(900.0, "timeticks"), "9 s");
        assert_eq!(fmt(900.0, "hertz"), "900 Hz");
    }

    #[test]
    fn test_custom_conversions_bypass_the_renderer() {
        assert_eq!(fmt(900.0, "dtdurationms"), "900 milliseconds");
        assert_eq!(fmt(900.0, "dtdurations"), "15 minutes");
        assert_eq!(fmt(90005.0, "dthms"), "25:00:05");
        assert_eq!(fmt(90005.0, "dtdhms"), "1 d 01:00:05");
        assert_eq!(fmt(900.0, "clockms"), "900ms");
        assert_eq!(fmt(900.0, "clocks"), "15m:00s:000ms");
        assert_eq!(fmt(1024.0, "hex"), "400");
        assert_eq!(fmt(1024.0, "hex0x"), "0x400");
        assert_eq!(fmt(900.0, "sci"), "9e+2");
        assert_eq!(fmt(678.0, "locale"), "678");
        assert_eq!(fmt(1.0, "{bool}"), "True");
        assert_eq!(fmt(1.0, "{bool_yn}"), "Yes");
        assert_eq!(fmt(1.0, "bool_on_off"), "On");
    }

    #[test]
    fn test_count_and_throughput() {
        assert_eq!(fmt(875.0, "{count}"), "875");
        assert_eq!(fmt(1000.0, "{count}"), "1 K");
        assert_eq!(fmt(1_000_000_000.0, "{count}"), "1 Bil");
        assert_eq!(fmt(640.0, "{count}/s"), "640 c/s");
        assert_eq!(fmt(450.0, "{count}/min"), "450 c/m");
        assert_eq!(fmt(780.0, "{ops}/s"), "780 ops/s");
        assert_eq!(fmt(615.0, "{req}/s"), "615 req/s");
        assert_eq!(fmt(505.0, "{read}/s"), "505 rd/s");
        assert_eq!(fmt(610.0, "{write}/s"), "610 wr/s");
        assert_eq!(fmt(777.0, "{iops}/s"), "777 io/s");
        assert_eq!(fmt(900.0, "pps"), "900 p/s");
    }

    #[test]
    fn test_percent_and_none() {
        assert_eq!(fmt(456.0, "%"), "456%");
        assert_eq!(fmt(9.0, "percentunit"), "900%");
        assert_eq!(fmt(742.0, "1"), "742");
    }

    #[test]
    fn test_direct_pass_through_samples() {
        assert_eq!(fmt(812.0, "currencyUSD"), "$812");
        assert_eq!(fmt(375.0, "currencyDKK"), "375kr");
        assert_eq!(fmt(366.0, "currencyVND"), "366đ");
        assert_eq!(fmt(678.0, "KHs"), "678 kH/s");
        assert_eq!(fmt(37.0, "celsius"), "37 °C");
        assert_eq!(fmt(1013.0, "pressurembar"), "1.01 bar");
        assert_eq!(fmt(65.0, "pressurepsi"), "65psi");
        assert_eq!(fmt(389.0, "kwattm"), "389 kW-Min");
        assert_eq!(fmt(654.0, "rotdegs"), "654 °/s");
        assert_eq!(fmt(900.0, "m3"), "900 m³");
        assert_eq!(fmt(555.0, "humidity"), "555 %H");
        assert_eq!(fmt(444.0, "pixel"), "444 px");
    }

    #[test]
    fn test_unresolved_unit_renders_with_literal_suffix() {
        assert_eq!(fmt(742.0, "unknown_unit"), "742 unknown_unit");
        assert_eq!(fmt(1500.0, "unknown_unit"), "1.5 K unknown_unit");
    }

    #[test]
    fn test_empty_unit_renders_short_style_alone() {
        assert_eq!(fmt(742.0, ""), "742");
        assert_eq!(fmt(1500.0, ""), "1.5 K");
    }

    #[test]
    fn test_negative_values_keep_their_sign_through_scaling() {
        assert_eq!(fmt(-1034.0, "By"), "-1.03 kB");
        assert_eq!(fmt(-0.5, "kbit"), "-500 b");
    }

    #[test]
    fn test_precision_policy_pads_scaled_fractions() {
        let policy = PrecisionPolicy { min_decimals: 3 };
        assert_eq!(format_value(1034.0, "By", Some(&policy), None), "1.030 kB");
        assert_eq!(format_value(1034.0, "By", Some(&policy), Some(3)), "1.034 kB");
        // No fractional separator, no padding.
        assert_eq!(format_value(1000.0, "By", Some(&policy), None), "1 kB");
    }

    #[test]
    fn test_decimal_override_renders_fixed_width() {
        assert_eq!(format_value(1000.0, "By", None, Some(2)), "1.00 kB");
        assert_eq!(format_value(456.0, "%", None, Some(1)), "456.0%");
    }

    #[test]
    fn test_formatting_is_total_over_the_taxonomy() {
        for unit in UniversalUnit::ALL {
            for value in [0.0, 0.5, 1.0, 900.0, 1034.0, -1034.0, 1e9] {
                let text = format_unit(value, unit, None, None);
                assert!(!text.is_empty(), "{:?} rendered empty for {}", unit, value);
            }
        }
    }

    #[test]
    fn test_aliases_format_like_their_unit() {
        assert_eq!(fmt(1034.0, "Bytes"), "1.03 kB");
        assert_eq!(fmt(1034.0, "bytes_per_second"), "1.03 kB/s");
        assert_eq!(fmt(61.0, "Seconds"), "1.02 mins");
    }
}
