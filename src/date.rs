use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// A calendar day, written as `YYYY-MM-DD` on the wire and in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today's date in UTC.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Whole days from `earlier` to `self`.
    ///
    /// Floors the millisecond delta between the two UTC midnights, so it is
    /// only exact while both sides are UTC midnights.
    pub fn days_since(&self, earlier: CalendarDate) -> i64 {
        let delta = self.midnight_millis() - earlier.midnight_millis();
        delta.div_euclid(MILLIS_PER_DAY)
    }

    fn midnight_millis(&self) -> i64 {
        self.0
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or_default()
    }

    /// The date's digits read as one integer, e.g. `2024-01-15` -> `20240115`.
    pub fn digit_seed(&self) -> u64 {
        self.0
            .format("%Y%m%d")
            .to_string()
            .parse()
            .unwrap_or_default()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDateError(String);

impl fmt::Display for ParseDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date '{}', expected YYYY-MM-DD", self.0)
    }
}

impl std::error::Error for ParseDateError {}

impl FromStr for CalendarDate {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ParseDateError(s.to_string()))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn parses_and_prints_canonical_form() {
        let d = date("2024-01-05");
        assert_eq!(d.to_string(), "2024-01-05");
        assert!("2024-1-5x".parse::<CalendarDate>().is_err());
        assert!("2024-02-30".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn days_since_crosses_month_and_year() {
        assert_eq!(date("2024-03-01").days_since(date("2024-02-29")), 1);
        assert_eq!(date("2025-01-01").days_since(date("2024-12-31")), 1);
        assert_eq!(date("2024-01-10").days_since(date("2024-01-15")), -5);
        assert_eq!(date("2024-01-10").days_since(date("2024-01-10")), 0);
    }

    #[test]
    fn digit_seed_reads_date_digits() {
        assert_eq!(date("2024-01-15").digit_seed(), 20240115);
    }

    #[test]
    fn serde_uses_string_form() {
        let json = serde_json::to_string(&date("2023-07-04")).unwrap();
        assert_eq!(json, "\"2023-07-04\"");
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date("2023-07-04"));
        assert!(serde_json::from_str::<CalendarDate>("\"nope\"").is_err());
    }
}
