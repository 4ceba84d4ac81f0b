//! Timestamp resolution and ISO-8601 rendering in a fixed UTC offset.
//!
//! JeFit sessions carry a precise `starttime` (epoch seconds) only when the
//! in-app timer was used; older rows have just the calendar date. Hevy wants
//! a full ISO-8601 timestamp with a colon-separated offset either way.

use crate::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone, Utc};

/// Parse a caller-supplied timezone offset string into a fixed offset.
///
/// Accepted forms: `UTC` (any case), `Z`, `+HH:MM`, `-HH:MM`, `+HHMM`,
/// `-HHMM`, and a bare or signed 1-2 digit hour. A missing sign means east
/// of UTC. Anything else is rejected before any conversion work starts.
pub fn parse_offset(spec: &str) -> Result<FixedOffset> {
    let s = spec.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("utc") || s == "Z" {
        return Ok(Utc.fix());
    }

    let (sign, digits) = match s.as_bytes()[0] {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => (1, s),
    };

    let (hours, minutes) = if let Some((h, m)) = digits.split_once(':') {
        (parse_component(spec, h)?, parse_component(spec, m)?)
    } else if digits.len() == 4 {
        (
            parse_component(spec, &digits[..2])?,
            parse_component(spec, &digits[2..])?,
        )
    } else if !digits.is_empty() && digits.len() <= 2 {
        (parse_component(spec, digits)?, 0)
    } else {
        return Err(Error::Timezone(spec.to_string()));
    };

    if hours > 23 || minutes > 59 {
        return Err(Error::Timezone(spec.to_string()));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| Error::Timezone(spec.to_string()))
}

fn parse_component(spec: &str, digits: &str) -> Result<i32> {
    digits
        .parse::<i32>()
        .map_err(|_| Error::Timezone(spec.to_string()))
}

/// Resolve and render one record's timestamp.
///
/// Prefers `start_time` (epoch seconds, fractional part truncated) in the
/// given offset; falls back to `date` (`YYYY-MM-DD`) at midnight in the
/// same offset; falls back again to the raw date text with no offset
/// guarantee. The rendered offset always carries a colon separator.
pub fn format_row_timestamp(start_time: &str, date: &str, tz: FixedOffset) -> String {
    let start_time = start_time.trim();
    if !start_time.is_empty() {
        if let Ok(secs) = start_time.parse::<f64>() {
            if let Some(dt) = DateTime::from_timestamp(secs as i64, 0) {
                return render(dt.with_timezone(&tz));
            }
        }
        tracing::debug!("Unusable starttime {:?}, falling back to date", start_time);
    }

    let date = date.trim();
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        if let Some(midnight) = day.and_hms_opt(0, 0, 0) {
            if let Some(dt) = tz.from_local_datetime(&midnight).single() {
                return render(dt);
            }
        }
    }

    // Last resort: pass the raw date through untouched
    date.to_string()
}

fn render(dt: DateTime<FixedOffset>) -> String {
    insert_offset_colon(&dt.format("%Y-%m-%dT%H:%M:%S%z").to_string())
}

/// Rewrite a trailing `+HHMM`/`-HHMM` offset as `+HH:MM`/`-HH:MM`.
///
/// Left as-is when the offset already has a colon or the string is too
/// short to carry one.
pub fn insert_offset_colon(iso: &str) -> String {
    let bytes = iso.as_bytes();
    if iso.len() >= 5 {
        let tail = &iso[iso.len() - 5..];
        let sign = bytes[iso.len() - 5];
        if (sign == b'+' || sign == b'-') && !tail.contains(':') {
            let (head, mm) = iso.split_at(iso.len() - 2);
            return format!("{}:{}", head, mm);
        }
    }
    iso.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offset_utc_forms() {
        assert_eq!(parse_offset("UTC").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_offset("utc").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_offset("Z").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_offset("").unwrap().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_offset_colon_and_compact() {
        assert_eq!(parse_offset("+01:00").unwrap().local_minus_utc(), 3600);
        assert_eq!(parse_offset("-05:30").unwrap().local_minus_utc(), -(5 * 3600 + 30 * 60));
        assert_eq!(parse_offset("+0100").unwrap().local_minus_utc(), 3600);
        assert_eq!(parse_offset("-0500").unwrap().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_parse_offset_bare_hours() {
        assert_eq!(parse_offset("1").unwrap().local_minus_utc(), 3600);
        assert_eq!(parse_offset("+9").unwrap().local_minus_utc(), 9 * 3600);
        assert_eq!(parse_offset("-11").unwrap().local_minus_utc(), -11 * 3600);
    }

    #[test]
    fn test_parse_offset_rejects_garbage() {
        assert!(parse_offset("abc").is_err());
        assert!(parse_offset("+25:00").is_err());
        assert!(parse_offset("+01:75").is_err());
        assert!(parse_offset("+123").is_err());
    }

    #[test]
    fn test_epoch_preferred_over_date() {
        let tz = parse_offset("+01:00").unwrap();
        // 2024-01-01 12:00:00 UTC
        let rendered = format_row_timestamp("1704110400", "1999-09-09", tz);
        assert_eq!(rendered, "2024-01-01T13:00:00+01:00");
    }

    #[test]
    fn test_fractional_epoch_truncated() {
        let tz = parse_offset("UTC").unwrap();
        assert_eq!(
            format_row_timestamp("1704110400.75", "", tz),
            "2024-01-01T12:00:00+00:00"
        );
    }

    #[test]
    fn test_date_fallback_is_midnight_in_offset() {
        let tz = parse_offset("-05:00").unwrap();
        assert_eq!(
            format_row_timestamp("", "2024-03-15", tz),
            "2024-03-15T00:00:00-05:00"
        );
    }

    #[test]
    fn test_unparseable_inputs_fall_back_to_raw_date() {
        let tz = parse_offset("UTC").unwrap();
        assert_eq!(format_row_timestamp("not-a-number", "03/15/2024", tz), "03/15/2024");
        assert_eq!(format_row_timestamp("", "", tz), "");
    }

    #[test]
    fn test_insert_offset_colon() {
        assert_eq!(insert_offset_colon("2024-01-01T12:00:00+0100"), "2024-01-01T12:00:00+01:00");
        assert_eq!(insert_offset_colon("2024-01-01T12:00:00-0530"), "2024-01-01T12:00:00-05:30");
        assert_eq!(insert_offset_colon("2024-01-01T12:00:00+01:00"), "2024-01-01T12:00:00+01:00");
        assert_eq!(insert_offset_colon("2024"), "2024");
    }
}
