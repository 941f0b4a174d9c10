//! Local-time formatting used in front matter and asset names.

use chrono::{DateTime, Datelike, Local};

/// Front matter `date` / `updated` format.
pub const FRONT_MATTER_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Suffix appended to renamed assets.
pub const FILE_STAMP_FORMAT: &str = "%Y%m%d%H%M%S";

#[inline]
pub fn now() -> DateTime<Local> {
    Local::now()
}

pub fn front_matter_stamp(at: &DateTime<Local>) -> String {
    at.format(FRONT_MATTER_FORMAT).to_string()
}

pub fn file_stamp(at: &DateTime<Local>) -> String {
    at.format(FILE_STAMP_FORMAT).to_string()
}

pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stamps() {
        let at = Local.with_ymd_and_hms(2025, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(front_matter_stamp(&at), "2025-03-07 09:05:01");
        assert_eq!(file_stamp(&at), "20250307090501");
    }
}
