//! `FILETIME` and `SYSTEMTIME`, with conversions through [`chrono`].

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::co;
use crate::error::SysResult;

/// 100-nanosecond intervals between 1601-01-01 and 1970-01-01.
const UNIX_EPOCH_TICKS: u64 = 116_444_736_000_000_000;
const TICKS_PER_SEC: u64 = 10_000_000;

/// `FILETIME` struct: 100-nanosecond intervals since 1601-01-01 UTC, split
/// in two 32-bit halves.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileTime {
    pub low_date_time: u32,
    pub high_date_time: u32,
}

impl FileTime {
    /// Creates the struct from the 64-bit tick count.
    pub const fn from_ticks(ticks: u64) -> Self {
        Self {
            low_date_time: (ticks & 0xffff_ffff) as u32,
            high_date_time: (ticks >> 32) as u32,
        }
    }

    /// Returns the 64-bit tick count.
    pub const fn ticks(self) -> u64 {
        ((self.high_date_time as u64) << 32) | self.low_date_time as u64
    }
}

/// `SYSTEMTIME` struct: calendar date and time fields.
///
/// `day_of_week` counts from Sunday = 0; it's filled on output and ignored on
/// input.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SystemTime {
    pub year: u16,
    pub month: u16,
    pub day_of_week: u16,
    pub day: u16,
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
    pub milliseconds: u16,
}

impl TryFrom<FileTime> for DateTime<Utc> {
    type Error = co::SysError;

    fn try_from(ft: FileTime) -> Result<Self, Self::Error> {
        let rel = ft.ticks() as i128 - UNIX_EPOCH_TICKS as i128;
        let secs = rel.div_euclid(TICKS_PER_SEC as i128) as i64;
        let nanos = (rel.rem_euclid(TICKS_PER_SEC as i128) * 100) as u32;
        DateTime::from_timestamp(secs, nanos).ok_or(co::SysError::INVALID_PARAMETER)
    }
}

impl TryFrom<DateTime<Utc>> for FileTime {
    type Error = co::SysError;

    fn try_from(dt: DateTime<Utc>) -> Result<Self, Self::Error> {
        let rel = dt.timestamp() as i128 * TICKS_PER_SEC as i128
            + (dt.timestamp_subsec_nanos() / 100) as i128;
        let ticks = rel + UNIX_EPOCH_TICKS as i128;
        if ticks < 0 || ticks > u64::MAX as i128 {
            return Err(co::SysError::INVALID_PARAMETER);
        }
        Ok(Self::from_ticks(ticks as u64))
    }
}

impl TryFrom<SystemTime> for NaiveDateTime {
    type Error = co::SysError;

    fn try_from(st: SystemTime) -> Result<Self, Self::Error> {
        if st.milliseconds > 999 {
            return Err(co::SysError::INVALID_PARAMETER);
        }
        NaiveDate::from_ymd_opt(st.year as i32, st.month as u32, st.day as u32)
            .and_then(|d| {
                d.and_hms_milli_opt(
                    st.hour as u32,
                    st.minute as u32,
                    st.second as u32,
                    st.milliseconds as u32,
                )
            })
            .ok_or(co::SysError::INVALID_PARAMETER)
    }
}

impl TryFrom<NaiveDateTime> for SystemTime {
    type Error = co::SysError;

    fn try_from(dt: NaiveDateTime) -> Result<Self, Self::Error> {
        let year = u16::try_from(dt.year()).map_err(|_| co::SysError::INVALID_PARAMETER)?;
        Ok(Self {
            year,
            month: dt.month() as u16,
            day_of_week: dt.weekday().num_days_from_sunday() as u16,
            day: dt.day() as u16,
            hour: dt.hour() as u16,
            minute: dt.minute() as u16,
            second: dt.second() as u16,
            // Leap seconds report 1000+ ms in chrono.
            milliseconds: (dt.nanosecond() / 1_000_000).min(999) as u16,
        })
    }
}

/// Converts a `FILETIME` to a UTC `SYSTEMTIME`, like
/// `FileTimeToSystemTime`.
///
/// Values with the high bit set are rejected, as the native function does.
pub fn file_time_to_system_time(ft: &FileTime) -> SysResult<SystemTime> {
    if ft.ticks() >= 0x8000_0000_0000_0000 {
        return Err(co::SysError::INVALID_PARAMETER);
    }
    let dt = DateTime::<Utc>::try_from(*ft)?;
    SystemTime::try_from(dt.naive_utc())
}

/// Converts a UTC `SYSTEMTIME` to a `FILETIME`, like
/// `SystemTimeToFileTime`.
///
/// Years before 1601 and after 30827 are rejected. `day_of_week` is ignored.
pub fn system_time_to_file_time(st: &SystemTime) -> SysResult<FileTime> {
    if !(1601..=30827).contains(&st.year) {
        return Err(co::SysError::INVALID_PARAMETER);
    }
    let naive = NaiveDateTime::try_from(*st)?;
    FileTime::try_from(naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_time_epochs() {
        let st = file_time_to_system_time(&FileTime::default()).unwrap();
        assert_eq!((st.year, st.month, st.day), (1601, 1, 1));
        assert_eq!(st.day_of_week, 1); // Monday

        let unix = FileTime::from_ticks(UNIX_EPOCH_TICKS);
        let dt = DateTime::<Utc>::try_from(unix).unwrap();
        assert_eq!(dt.timestamp(), 0);
    }

    #[test]
    fn test_system_time_to_file_time() {
        let st = SystemTime {
            year: 2024,
            month: 2,
            day_of_week: 0,
            day: 29,
            hour: 13,
            minute: 45,
            second: 30,
            milliseconds: 250,
        };
        let ft = system_time_to_file_time(&st).unwrap();
        let back = file_time_to_system_time(&ft).unwrap();
        assert_eq!(back.day_of_week, 4); // Thursday
        assert_eq!(SystemTime { day_of_week: 0, ..back }, st);
    }

    #[test]
    fn test_invalid_inputs() {
        let bad_day = SystemTime { year: 2023, month: 2, day: 29, ..Default::default() };
        assert_eq!(system_time_to_file_time(&bad_day), Err(co::SysError::INVALID_PARAMETER));
        let too_old = SystemTime { year: 1500, month: 1, day: 1, ..Default::default() };
        assert!(system_time_to_file_time(&too_old).is_err());
        assert!(file_time_to_system_time(&FileTime::from_ticks(u64::MAX)).is_err());
    }

    #[test]
    fn test_ticks_split() {
        let ft = FileTime::from_ticks(0x0123_4567_89ab_cdef);
        assert_eq!(ft.high_date_time, 0x0123_4567);
        assert_eq!(ft.low_date_time, 0x89ab_cdef);
        assert_eq!(ft.ticks(), 0x0123_4567_89ab_cdef);
    }

    #[test]
    fn test_serde_field_names() {
        let st = SystemTime { year: 2000, month: 1, day: 1, ..Default::default() };
        let json = serde_json::to_value(st).unwrap();
        assert_eq!(json["year"], 2000);
        assert_eq!(json["milliseconds"], 0);
    }
}
