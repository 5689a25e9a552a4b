use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};

use crate::mseed_error::MSeedError;

/// A time value as nanoseconds since the Unix epoch (1970-01-01T00:00:00Z).
pub type NsTime = i64;

/// Nanoseconds per second.
pub const NSTMODULUS: i64 = 1_000_000_000;

/// A time broken down into the calendar fields stored in record headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokenDownTime {
    pub year: u16,
    pub day_of_year: u16,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
}

/// Break an epoch nanosecond time down into calendar components.
///
/// The year must fit the 16-bit header field, which holds for the entire
/// i64 nanosecond range.
pub fn nstime_to_time(nstime: NsTime) -> Result<BrokenDownTime, MSeedError> {
    let secs = nstime.div_euclid(NSTMODULUS);
    let nsec = nstime.rem_euclid(NSTMODULUS) as u32;
    let utc = DateTime::from_timestamp(secs, nsec).ok_or(MSeedError::TimeOutOfRange(nstime))?;

    let year = utc.year();
    if year < 0 || year > u16::MAX as i32 {
        return Err(MSeedError::TimeOutOfRange(nstime));
    }

    Ok(BrokenDownTime {
        year: year as u16,
        day_of_year: utc.ordinal() as u16,
        hour: utc.hour() as u8,
        minute: utc.minute() as u8,
        second: utc.second() as u8,
        nanosecond: utc.nanosecond() % 1_000_000_000,
    })
}

/// Time of the sample `offset` samples after `time` at `samprate`.
///
/// A positive rate is samples/second, a negative rate a period in
/// seconds/sample.  Integral rates are advanced with 128-bit integer
/// arithmetic so successive record start times carry no accumulated
/// rounding.
pub fn sample_time(time: NsTime, offset: i64, samprate: f64) -> NsTime {
    if offset == 0 || samprate == 0.0 {
        return time;
    }

    let span = if samprate > 0.0 {
        if samprate.fract() == 0.0 {
            let rate = samprate as i128;
            ((offset as i128 * NSTMODULUS as i128 + rate / 2) / rate) as i64
        } else {
            (offset as f64 * 1e9 / samprate + 0.5).floor() as i64
        }
    } else {
        (offset as f64 * 1e9 * -samprate + 0.5).floor() as i64
    };

    time + span
}

/// Split a time into the miniSEED 2 representation: a second-resolution
/// time, a fraction in tenths of milliseconds (0..9999) and a microsecond
/// offset in [-50, +49].
///
/// The input is first rounded to the nearest microsecond, losing nanosecond
/// resolution.  The returned second-resolution time combined with `fsec`
/// and `usec_offset` recovers the rounded value exactly.
pub fn split_fsec(nstime: NsTime) -> (NsTime, u16, i8) {
    // Round to nearest microsecond
    let usec_time = (nstime + if nstime >= 0 { 500 } else { -500 }) / 1000 * 1000;

    let total_usec = usec_time / 1000;
    let mut total_fsec = usec_time / 100_000;

    let mut usec_offset = total_usec - total_fsec * 100;

    // Keep the microsecond offset in [-50, +49]
    if usec_offset > 49 {
        total_fsec += 1;
        usec_offset -= 100;
    } else if usec_offset < -50 {
        total_fsec -= 1;
        usec_offset += 100;
    }

    let mut fsec_remainder = total_fsec % 10000;
    let mut seconds = total_fsec / 10000;

    // Borrow toward the preceding second for negative times
    if fsec_remainder < 0 {
        fsec_remainder += 10000;
        seconds -= 1;
    }

    (
        seconds * NSTMODULUS,
        fsec_remainder as u16,
        usec_offset as i8,
    )
}

/// Parse a UTC time string into epoch nanoseconds.
///
/// Accepts RFC 3339 (`2012-01-01T00:00:00Z`, with offset) or a naive
/// `YYYY-MM-DDThh:mm:ss[.f]` treated as UTC.
pub fn timestr_to_nstime(timestr: &str) -> Result<NsTime, MSeedError> {
    let utc: DateTime<Utc> = match DateTime::parse_from_rfc3339(timestr) {
        Ok(fixed) => fixed.with_timezone(&Utc),
        Err(_) => NaiveDateTime::parse_from_str(timestr, "%Y-%m-%dT%H:%M:%S%.f")?.and_utc(),
    };
    Ok(utc.timestamp() * NSTMODULUS + utc.timestamp_subsec_nanos() as i64)
}
