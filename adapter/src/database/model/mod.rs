use std::{collections::BTreeSet, str::FromStr};

use kernel::model::item::day::DayOfWeek;
use shared::error::{AppError, AppResult};

pub mod auth;
pub mod booking;
pub mod institution;
pub mod item;

// TEXT[] カラムに保存した曜日名を曜日の集合に戻す
pub fn parse_days(raw: Vec<String>) -> AppResult<BTreeSet<DayOfWeek>> {
    raw.iter()
        .map(|d| {
            DayOfWeek::from_str(d.trim())
                .map_err(|_| AppError::ConversionEntityError(format!("unknown weekday: {d}")))
        })
        .collect()
}

pub fn days_to_column(days: &BTreeSet<DayOfWeek>) -> Vec<String> {
    days.iter().map(ToString::to_string).collect()
}
