//! Custom non-linear conversions
//!
//! The fixed set of units whose display is not "number + label": humanized
//! durations, zero-padded clocks, hexadecimal, scientific notation, locale
//! grouping, boolean word pairs and the datetime renderings. Each is a
//! small self-contained conversion from the raw value to its final string;
//! neither the rendering primitive nor the decimal-padding policy applies.
//!
//! Datetime values are epoch milliseconds. The conversions that depend on
//! the current instant take it as an argument so they stay deterministic
//! under test; [`crate::format::format_value`] passes the wall clock.

use std::time::SystemTime;

use caliper_core::UniversalUnit;
use chrono::{DateTime, Utc};

use crate::render::render_number;

/// Dispatch to a unit's custom conversion, if it has one.
pub fn custom_format(unit: UniversalUnit, value: f64, now: SystemTime) -> Option<String> {
    let text = match unit {
        UniversalUnit::DurationMs => humanize_duration_ms(value),
        UniversalUnit::DurationS => humanize_duration_ms(value * 1_000.0),
        UniversalUnit::DurationHms => clock_hms(value),
        UniversalUnit::DurationDhms => clock_dhms(value),
        UniversalUnit::ClockMs => clock(value),
        UniversalUnit::ClockS => clock(value * 1_000.0),
        UniversalUnit::Hexadecimal => hex(value, false),
        UniversalUnit::Hexadecimal0x => hex(value, true),
        UniversalUnit::ScientificNotation => scientific(value),
        UniversalUnit::LocaleFormat => locale_grouped(value),
        UniversalUnit::TrueFalse => bool_words(value, "True", "False"),
        UniversalUnit::YesNo => bool_words(value, "Yes", "No"),
        UniversalUnit::OnOff => bool_words(value, "On", "Off"),
        UniversalUnit::DateTimeIso => datetime(value, "%Y-%m-%d %H:%M:%S"),
        UniversalUnit::DateTimeIsoNoDateIfToday => {
            datetime_no_date_if_today(value, "%Y-%m-%d %H:%M:%S", now)
        }
        UniversalUnit::DateTimeUs => datetime(value, "%m/%d/%Y %-I:%M:%S %P"),
        UniversalUnit::DateTimeUsNoDateIfToday => {
            datetime_no_date_if_today(value, "%m/%d/%Y %-I:%M:%S %P", now)
        }
        UniversalUnit::DateTimeLocal => datetime(value, "%d/%m/%Y %H:%M:%S"),
        UniversalUnit::DateTimeLocalNoDateIfToday => {
            datetime_no_date_if_today(value, "%d/%m/%Y %H:%M:%S", now)
        }
        UniversalUnit::DateTimeSystem => datetime(value, "%Y-%m-%d %H:%M"),
        UniversalUnit::DateTimeFromNow => from_now_at(value, now),
        _ => return None,
    };
    Some(text)
}

const MS_UNITS: [(f64, &str, &str); 8] = [
    (31_536_000_000.0, "year", "years"),
    (2_592_000_000.0, "month", "months"),
    (604_800_000.0, "week", "weeks"),
    (86_400_000.0, "day", "days"),
    (3_600_000.0, "hour", "hours"),
    (60_000.0, "minute", "minutes"),
    (1_000.0, "second", "seconds"),
    (1.0, "millisecond", "milliseconds"),
];

/// `900 -> "900 milliseconds"`, `900_000 -> "15 minutes"`.
pub fn humanize_duration_ms(ms: f64) -> String {
    let abs = ms.abs();
    for (unit_ms, singular, plural) in MS_UNITS {
        if abs >= unit_ms {
            let count = render_number(ms / unit_ms, None);
            let noun = if count == "1" || count == "-1" { singular } else { plural };
            return format!("{} {}", count, noun);
        }
    }
    "0 milliseconds".to_string()
}

/// Seconds to a zero-padded `H:MM:SS` clock; hours are not wrapped into
/// days, `90005 -> "25:00:05"`.
pub fn clock_hms(seconds: f64) -> String {
    let total = seconds.round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!(
        "{}{:02}:{:02}:{:02}",
        sign,
        total / 3_600,
        total % 3_600 / 60,
        total % 60
    )
}

/// Seconds to `D d HH:MM:SS`, `90005 -> "1 d 01:00:05"`.
pub fn clock_dhms(seconds: f64) -> String {
    let total = seconds.round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    let days = total / 86_400;
    if days == 0 {
        return clock_hms(seconds);
    }
    let rem = total % 86_400;
    format!(
        "{}{} d {:02}:{:02}:{:02}",
        sign,
        days,
        rem / 3_600,
        rem % 3_600 / 60,
        rem % 60
    )
}

/// Milliseconds to the zero-padded clock display used by the clock units:
/// `900 -> "900ms"`, `900_000 -> "15m:00s:000ms"`.
pub fn clock(ms: f64) -> String {
    let total = ms.round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();

    if total < 1_000 {
        return format!("{}{}ms", sign, total);
    }

    let millis = total % 1_000;
    let seconds = total / 1_000 % 60;
    let minutes = total / 60_000 % 60;
    let hours = total / 3_600_000;

    if total < 60_000 {
        format!("{}{:02}s:{:03}ms", sign, seconds, millis)
    } else if total < 3_600_000 {
        format!("{}{:02}m:{:02}s:{:03}ms", sign, minutes, seconds, millis)
    } else {
        format!("{}{:02}h:{:02}m:{:02}s:{:03}ms", sign, hours, minutes, seconds, millis)
    }
}

/// `1024 -> "400"`, uppercase digits.
pub fn hex(value: f64, prefixed: bool) -> String {
    let n = value.round() as i64;
    let sign = if n < 0 { "-" } else { "" };
    let prefix = if prefixed { "0x" } else { "" };
    format!("{}{}{:X}", sign, prefix, n.unsigned_abs())
}

/// `900 -> "9e+2"`, JavaScript-style exponent sign.
pub fn scientific(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return if value == 0.0 { "0e+0".to_string() } else { format!("{}", value) };
    }

    let mut exp = value.abs().log10().floor() as i32;
    let mut mantissa = value / 10f64.powi(exp);
    // counter the float fuzz of the division
    mantissa = (mantissa * 1e12).round() / 1e12;
    if mantissa.abs() >= 10.0 {
        mantissa /= 10.0;
        exp += 1;
    }

    let sign = if exp < 0 { "-" } else { "+" };
    format!("{}e{}{}", mantissa, sign, exp.abs())
}

/// Thousands-grouped plain number, `1234567 -> "1,234,567"`.
pub fn locale_grouped(value: f64) -> String {
    let text = render_number(value, None);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Nonzero is truthy, the way the ingested 0/1 gauges expect.
pub fn bool_words(value: f64, truthy: &str, falsy: &str) -> String {
    if value != 0.0 {
        truthy.to_string()
    } else {
        falsy.to_string()
    }
}

fn datetime_utc(epoch_ms: f64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(epoch_ms as i64).unwrap_or(DateTime::UNIX_EPOCH)
}

fn datetime(epoch_ms: f64, format: &str) -> String {
    datetime_utc(epoch_ms).format(format).to_string()
}

fn datetime_no_date_if_today(epoch_ms: f64, format: &str, now: SystemTime) -> String {
    let value = datetime_utc(epoch_ms);
    let today = DateTime::<Utc>::from(now);
    if value.date_naive() == today.date_naive() {
        value.format("%H:%M:%S").to_string()
    } else {
        value.format(format).to_string()
    }
}

const SECOND_UNITS: [(i64, &str, &str); 6] = [
    (31_536_000, "year", "years"),
    (2_592_000, "month", "months"),
    (86_400, "day", "days"),
    (3_600, "hour", "hours"),
    (60, "minute", "minutes"),
    (1, "second", "seconds"),
];

/// Relative time between an epoch-millisecond value and a reference
/// instant, `"56 years ago"` / `"in 3 hours"`.
pub fn from_now_at(epoch_ms: f64, now: SystemTime) -> String {
    let value = datetime_utc(epoch_ms);
    let reference = DateTime::<Utc>::from(now);
    let delta = reference.signed_duration_since(value).num_seconds();

    if delta == 0 {
        return "just now".to_string();
    }

    let magnitude = delta.abs();
    let (count, noun) = SECOND_UNITS
        .iter()
        .find(|(unit, _, _)| magnitude >= *unit)
        .map(|(unit, singular, plural)| {
            let n = magnitude / unit;
            (n, if n == 1 { *singular } else { *plural })
        })
        .unwrap_or((magnitude, "seconds"));

    if delta > 0 {
        format!("{} {} ago", count, noun)
    } else {
        format!("in {} {}", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(epoch_ms: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_millis(epoch_ms)
    }

    #[test]
    fn test_humanized_durations() {
        assert_eq!(humanize_duration_ms(900.0), "900 milliseconds");
        assert_eq!(humanize_duration_ms(900_000.0), "15 minutes");
        assert_eq!(humanize_duration_ms(60_000.0), "1 minute");
        assert_eq!(humanize_duration_ms(0.0), "0 milliseconds");
        assert_eq!(humanize_duration_ms(172_800_000.0), "2 days");
    }

    #[test]
    fn test_hms_clocks() {
        assert_eq!(clock_hms(90_005.0), "25:00:05");
        assert_eq!(clock_hms(59.0), "00:00:59");
        assert_eq!(clock_dhms(90_005.0), "1 d 01:00:05");
        assert_eq!(clock_dhms(3_605.0), "01:00:05");
    }

    #[test]
    fn test_ms_clocks() {
        assert_eq!(clock(900.0), "900ms");
        assert_eq!(clock(1_500.0), "01s:500ms");
        assert_eq!(clock(900_000.0), "15m:00s:000ms");
        assert_eq!(clock(3_661_001.0), "01h:01m:01s:001ms");
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex(1024.0, false), "400");
        assert_eq!(hex(1024.0, true), "0x400");
        assert_eq!(hex(255.0, false), "FF");
        assert_eq!(hex(-1024.0, true), "-0x400");
    }

    #[test]
    fn test_scientific() {
        assert_eq!(scientific(900.0), "9e+2");
        assert_eq!(scientific(1234.0), "1.234e+3");
        assert_eq!(scientific(0.05), "5e-2");
        assert_eq!(scientific(0.0), "0e+0");
        assert_eq!(scientific(-900.0), "-9e+2");
    }

    #[test]
    fn test_locale_grouping() {
        assert_eq!(locale_grouped(678.0), "678");
        assert_eq!(locale_grouped(1_234_567.0), "1,234,567");
        assert_eq!(locale_grouped(-1_234.0), "-1,234");
        assert_eq!(locale_grouped(12.5), "12.5");
    }

    #[test]
    fn test_bool_words() {
        assert_eq!(bool_words(1.0, "True", "False"), "True");
        assert_eq!(bool_words(0.0, "Yes", "No"), "No");
        assert_eq!(bool_words(2.5, "On", "Off"), "On");
    }

    #[test]
    fn test_datetime_formats() {
        // 2021-02-03 04:05:06 UTC
        let ms = 1_612_325_106_000.0;
        assert_eq!(datetime(ms, "%Y-%m-%d %H:%M:%S"), "2021-02-03 04:05:06");
        assert_eq!(datetime(ms, "%m/%d/%Y %-I:%M:%S %P"), "02/03/2021 4:05:06 am");
    }

    #[test]
    fn test_no_date_if_today() {
        let ms = 1_612_325_106_000.0;
        let same_day = at(1_612_340_000_000);
        let other_day = at(1_612_500_000_000);
        assert_eq!(datetime_no_date_if_today(ms, "%Y-%m-%d %H:%M:%S", same_day), "04:05:06");
        assert_eq!(
            datetime_no_date_if_today(ms, "%Y-%m-%d %H:%M:%S", other_day),
            "2021-02-03 04:05:06"
        );
    }

    #[test]
    fn test_from_now() {
        let now = at(1_612_325_106_000);
        assert_eq!(from_now_at(1_612_325_106_000.0 - 7_200_000.0, now), "2 hours ago");
        assert_eq!(from_now_at(1_612_325_106_000.0 + 60_000.0, now), "in 1 minute");
        assert_eq!(from_now_at(900.0, now), "51 years ago");
        assert_eq!(from_now_at(1_612_325_106_000.0, now), "just now");
    }

    #[test]
    fn test_dispatch_covers_only_the_custom_set() {
        let now = at(0);
        assert!(custom_format(UniversalUnit::DurationHms, 90_005.0, now).is_some());
        assert!(custom_format(UniversalUnit::TrueFalse, 1.0, now).is_some());
        assert!(custom_format(UniversalUnit::Bytes, 1.0, now).is_none());
        assert!(custom_format(UniversalUnit::Percent, 1.0, now).is_none());
    }
}
