use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use strum::{Display, EnumString};

use crate::model::id::{InstitutionId, ItemId};

pub mod day;
pub mod event;

use day::DayOfWeek;

// bookings.type カラムに保存される予約対象の種別
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Event,
    Service,
}

#[derive(Debug, Clone)]
pub struct Event {
    pub id: ItemId,
    pub event_name: String,
    pub event_type: String,
    pub event_description: Option<String>,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub max_participants: i32,
}

#[derive(Debug, Clone)]
pub struct Service {
    pub id: ItemId,
    pub service_name: String,
    pub institution_id: InstitutionId,
    pub institution_name: String,
    pub service_description: Option<String>,
    pub appointment_duration: i32,
    pub daily_capacity: i32,
    pub days_of_week: BTreeSet<DayOfWeek>,
}

/// An event or a service that citizens can reserve against.
#[derive(Debug, Clone)]
pub enum BookableItem {
    Event(Event),
    Service(Service),
}

impl BookableItem {
    pub fn id(&self) -> ItemId {
        match self {
            BookableItem::Event(e) => e.id,
            BookableItem::Service(s) => s.id,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            BookableItem::Event(_) => ItemKind::Event,
            BookableItem::Service(_) => ItemKind::Service,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            BookableItem::Event(e) => &e.event_name,
            BookableItem::Service(s) => &s.service_name,
        }
    }

    /// Maximum number of bookings admitted for one date.
    pub fn capacity(&self) -> i64 {
        match self {
            BookableItem::Event(e) => i64::from(e.max_participants),
            BookableItem::Service(s) => i64::from(s.daily_capacity),
        }
    }

    /// Events accept only their fixed date; services accept any date whose
    /// weekday is in the allowed set.
    pub fn check_date(&self, booking_date: NaiveDate) -> AppResult<()> {
        match self {
            BookableItem::Event(e) => {
                if booking_date != e.event_date {
                    return Err(AppError::DateMismatch);
                }
            }
            BookableItem::Service(s) => {
                let day = DayOfWeek::of(booking_date);
                if !s.days_of_week.contains(&day) {
                    return Err(AppError::DayNotAvailable(day.to_string()));
                }
            }
        }
        Ok(())
    }

    pub fn check_capacity(&self, already_booked: i64) -> AppResult<()> {
        if already_booked >= self.capacity() {
            return Err(AppError::SlotFull);
        }
        Ok(())
    }

    // 日付の条件を先に判定し、その後に残り枠を判定する
    pub fn admit(&self, booking_date: NaiveDate, already_booked: i64) -> AppResult<()> {
        self.check_date(booking_date)?;
        self.check_capacity(already_booked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn monday_service() -> BookableItem {
        BookableItem::Service(Service {
            id: ItemId::new(1),
            service_name: "Passport renewal".into(),
            institution_id: InstitutionId::new(1),
            institution_name: "Department of Immigration".into(),
            service_description: None,
            appointment_duration: 15,
            daily_capacity: 2,
            days_of_week: BTreeSet::from([DayOfWeek::Monday]),
        })
    }

    fn single_seat_event() -> BookableItem {
        BookableItem::Event(Event {
            id: ItemId::new(7),
            event_name: "Tax clinic".into(),
            event_type: "workshop".into(),
            event_description: Some("Help with filing".into()),
            event_date: date(2024, 6, 10),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            max_participants: 1,
        })
    }

    #[test]
    fn service_admits_until_daily_capacity() {
        let monday_service = monday_service();
        let monday = date(2024, 6, 10);
        assert!(monday_service.admit(monday, 0).is_ok());
        assert!(monday_service.admit(monday, 1).is_ok());
        assert!(matches!(
            monday_service.admit(monday, 2),
            Err(AppError::SlotFull)
        ));
    }

    #[test]
    fn service_rejects_day_outside_allowed_set() {
        let err = monday_service().admit(date(2024, 6, 11), 0).unwrap_err();
        assert!(matches!(&err, AppError::DayNotAvailable(day) if day == "Tuesday"));
        assert!(err.to_string().contains("Tuesday"));
    }

    #[test]
    fn weekday_is_checked_before_capacity() {
        assert!(matches!(
            monday_service().admit(date(2024, 6, 11), 99),
            Err(AppError::DayNotAvailable(_))
        ));
    }

    #[test]
    fn event_requires_exact_date() {
        let single_seat_event = single_seat_event();
        assert!(matches!(
            single_seat_event.admit(date(2024, 6, 11), 0),
            Err(AppError::DateMismatch)
        ));
        assert!(single_seat_event.admit(date(2024, 6, 10), 0).is_ok());
        assert!(matches!(
            single_seat_event.admit(date(2024, 6, 10), 1),
            Err(AppError::SlotFull)
        ));
    }

    #[test]
    fn non_positive_capacity_rejects_every_attempt() {
        for capacity in [0, -3] {
            let BookableItem::Service(service) = monday_service() else {
                unreachable!()
            };
            let item = BookableItem::Service(Service {
                daily_capacity: capacity,
                ..service
            });
            assert!(matches!(
                item.admit(date(2024, 6, 10), 0),
                Err(AppError::SlotFull)
            ));
        }
    }

    #[test]
    fn item_kind_uses_lowercase_names() {
        assert_eq!(ItemKind::Service.to_string(), "service");
        assert_eq!(ItemKind::from_str("event").unwrap(), ItemKind::Event);
        assert!(ItemKind::from_str("institution").is_err());
    }
}
