//! Convenience decoders for raw value strings.
//!
//! [`crate::iter::ValueIter`] yields bytes exactly as they appeared between
//! a pair of parentheses — no interpretation, no unit stripping. These two
//! functions cover the two value shapes DSMR telegrams actually use: a
//! decimal number (optionally followed by a `*unit` suffix) and a
//! `YYMMDDhhmmssX` timestamp. Turning a value into a typed sensor reading
//! beyond that is left to the caller; this crate does not know which OBIS
//! code means what.

use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

/// Parse a value's leading decimal number, discarding a trailing `*unit`
/// suffix if present (e.g. `b"001.234*kWh"` -> `1.234`).
///
/// Returns `None` if `value` is not UTF-8 or the numeric prefix does not
/// parse as a float.
pub fn decode_f64(value: &[u8]) -> Option<f64> {
    let text = core::str::from_utf8(value).ok()?;
    let numeric = text.split('*').next()?;
    numeric.parse::<f64>().ok()
}

/// Parse a DSMR timestamp value: six two-digit fields (`YYMMDDhhmmss`)
/// followed by a single daylight-saving marker, `S` (summer, UTC+2) or `W`
/// (winter, UTC+1).
///
/// Returns `None` for anything shorter than 13 bytes, a non-UTF-8 value, an
/// out-of-range calendar field, or a marker other than `S`/`W`.
pub fn decode_datetime(value: &[u8]) -> Option<OffsetDateTime> {
    let text = core::str::from_utf8(value).ok()?;
    if text.len() < 13 {
        return None;
    }

    let two = |range: core::ops::Range<usize>| -> Option<u8> { text.get(range)?.parse().ok() };

    let year = 2000 + i32::from(two(0..2)?);
    let month = match text.get(2..4)? {
        "01" => Month::January,
        "02" => Month::February,
        "03" => Month::March,
        "04" => Month::April,
        "05" => Month::May,
        "06" => Month::June,
        "07" => Month::July,
        "08" => Month::August,
        "09" => Month::September,
        "10" => Month::October,
        "11" => Month::November,
        "12" => Month::December,
        _ => return None,
    };
    let day = two(4..6)?;
    let hour = two(6..8)?;
    let minute = two(8..10)?;
    let second = two(10..12)?;

    let offset = match text.get(12..13)? {
        "W" => UtcOffset::from_hms(1, 0, 0).ok()?,
        "S" => UtcOffset::from_hms(2, 0, 0).ok()?,
        _ => return None,
    };

    let date = Date::from_calendar_date(year, month, day).ok()?;
    let time = Time::from_hms(hour, minute, second).ok()?;
    Some(PrimitiveDateTime::new(date, time).assume_offset(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn plain_decimal() {
        assert_eq!(decode_f64(b"123.456"), Some(123.456));
    }

    #[test]
    fn decimal_with_unit_suffix() {
        assert_eq!(decode_f64(b"00001.001*kWh"), Some(1.001));
    }

    #[test]
    fn non_numeric_value_fails() {
        assert_eq!(decode_f64(b"ISK5"), None);
    }

    #[test]
    fn winter_timestamp() {
        assert_eq!(
            decode_datetime(b"230101120000W"),
            Some(datetime!(2023-01-01 12:00:00 +01:00))
        );
    }

    #[test]
    fn summer_timestamp() {
        assert_eq!(
            decode_datetime(b"230701120000S"),
            Some(datetime!(2023-07-01 12:00:00 +02:00))
        );
    }

    #[test]
    fn missing_marker_fails() {
        assert_eq!(decode_datetime(b"2301011200001"), None);
    }

    #[test]
    fn too_short_fails() {
        assert_eq!(decode_datetime(b"2301"), None);
    }

    #[test]
    fn invalid_month_fails() {
        assert_eq!(decode_datetime(b"231301120000W"), None);
    }
}
