use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

// 英語の曜日名（"Monday" など）でシリアライズ・パースする
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn computes_weekday_of_calendar_date() {
        for ((y, m, d), expected) in [
            ((2024, 6, 10), DayOfWeek::Monday),
            ((2024, 6, 11), DayOfWeek::Tuesday),
            ((2024, 6, 16), DayOfWeek::Sunday),
            ((2024, 2, 29), DayOfWeek::Thursday),
        ] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert_eq!(DayOfWeek::of(date), expected, "{date}");
        }
    }

    #[test]
    fn uses_full_english_names() {
        assert_eq!(DayOfWeek::Wednesday.to_string(), "Wednesday");
        assert_eq!(DayOfWeek::from_str("Friday").unwrap(), DayOfWeek::Friday);
        assert!(DayOfWeek::from_str("friday").is_err());
        assert_eq!(DayOfWeek::VARIANTS.len(), 7);
    }
}
