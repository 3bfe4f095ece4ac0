//! Date-only value type used for article payloads and store lookups.
//!
//! Articles carry a calendar date with no time-of-day and no timezone. The canonical text form
//! is `YYYY-MM-DD`; route parameters use the compact `YYYYMMDD` form. Calendar rules (month
//! lengths, leap years) are delegated to `chrono`.
//!
//! `chrono` on its own is lenient about field widths (`2016-9-2` parses with `%Y-%m-%d`), so the
//! exact shape of the input is checked before it is handed to the parser.

use crate::{ArticleError, ArticleResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Canonical payload format: `YYYY-MM-DD`.
pub const ARTICLE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Route parameter format: `YYYYMMDD`.
pub const PATH_DATE_FORMAT: &str = "%Y%m%d";

/// A calendar date without time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArticleDate(NaiveDate);

impl ArticleDate {
    /// Builds a date from its parts, or `None` if it is not a real calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses the canonical `YYYY-MM-DD` form.
    ///
    /// # Errors
    ///
    /// Returns `ArticleError::InvalidDateFormat` for anything that is not exactly four year
    /// digits, two month digits and two day digits separated by `-`, or that names a day that
    /// does not exist.
    pub fn parse(input: &str) -> ArticleResult<Self> {
        let bytes = input.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shape_ok {
            return Err(ArticleError::InvalidDateFormat);
        }

        NaiveDate::parse_from_str(input, ARTICLE_DATE_FORMAT)
            .map(Self)
            .map_err(|_| ArticleError::InvalidDateFormat)
    }

    /// Parses the compact `YYYYMMDD` form used in route parameters.
    pub fn parse_path_segment(input: &str) -> ArticleResult<Self> {
        if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ArticleError::InvalidDateFormat);
        }

        NaiveDate::parse_from_str(input, PATH_DATE_FORMAT)
            .map(Self)
            .map_err(|_| ArticleError::InvalidDateFormat)
    }

    /// Formats as `YYYYMMDD`, the inverse of [`ArticleDate::parse_path_segment`].
    pub fn to_path_segment(&self) -> String {
        self.0.format(PATH_DATE_FORMAT).to_string()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ArticleDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for ArticleDate {
    type Err = ArticleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ArticleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ARTICLE_DATE_FORMAT))
    }
}

impl serde::Serialize for ArticleDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ArticleDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ArticleDateVisitor;

        impl serde::de::Visitor<'_> for ArticleDateVisitor {
            type Value = ArticleDate;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a date string in YYYY-MM-DD format")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                ArticleDate::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ArticleDateVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_canonical_form() {
        let date = ArticleDate::parse("2016-09-22").expect("valid date should parse");
        assert_eq!((date.year(), date.month(), date.day()), (2016, 9, 22));
    }

    #[test]
    fn test_display_round_trips_canonical_form() {
        for s in ["2016-09-22", "2000-02-29", "0001-01-01", "9999-12-31"] {
            let date = ArticleDate::parse(s).expect("valid date should parse");
            assert_eq!(date.to_string(), s);
        }
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for s in [
            "invalid",
            "",
            "2016-9-22",
            "2016-09-2",
            "16-09-22",
            "2016/09/22",
            "2016-09-22T00:00:00Z",
            "2016-09-22 ",
            "+2016-09-22",
            "20160922",
        ] {
            let err = ArticleDate::parse(s).expect_err("malformed date should be rejected");
            assert!(matches!(err, ArticleError::InvalidDateFormat), "input {s:?}");
        }
    }

    #[test]
    fn test_parse_rejects_impossible_calendar_dates() {
        assert!(ArticleDate::parse("2016-13-01").is_err());
        assert!(ArticleDate::parse("2016-00-10").is_err());
        assert!(ArticleDate::parse("2016-04-31").is_err());
        assert!(ArticleDate::parse("2015-02-29").is_err());
        assert!(ArticleDate::parse("2016-02-29").is_ok());
    }

    #[test]
    fn test_path_segment_parses_compact_form() {
        let date = ArticleDate::parse_path_segment("20160922").expect("compact date should parse");
        assert_eq!(date, ArticleDate::parse("2016-09-22").unwrap());
        assert_eq!(date.to_path_segment(), "20160922");
    }

    #[test]
    fn test_path_segment_rejects_canonical_and_garbage() {
        assert!(ArticleDate::parse_path_segment("2016-09-22").is_err());
        assert!(ArticleDate::parse_path_segment("invalid-date").is_err());
        assert!(ArticleDate::parse_path_segment("20161301").is_err());
    }

    #[test]
    fn test_json_encoding_uses_canonical_form() {
        let date = ArticleDate::from_ymd(2021, 1, 2).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2021-01-02\"");

        let decoded: ArticleDate = serde_json::from_str("\"2021-01-02\"").unwrap();
        assert_eq!(decoded, date);
    }

    #[test]
    fn test_json_decoding_rejects_invalid_and_non_string_values() {
        assert!(serde_json::from_str::<ArticleDate>("\"invalid\"").is_err());
        assert!(serde_json::from_str::<ArticleDate>("20160922").is_err());
        assert!(serde_json::from_str::<ArticleDate>("null").is_err());
    }

    #[test]
    fn test_equality_is_by_calendar_date() {
        let a = ArticleDate::parse("2016-09-22").unwrap();
        let b: ArticleDate = "2016-09-22".parse().unwrap();
        let c = ArticleDate::parse("2016-09-23").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
    }
}
