use chrono::{NaiveDate, NaiveTime};
use kernel::model::{
    id::{InstitutionId, ItemId},
    item::{Event, Service},
};
use shared::error::AppError;

use super::parse_days;

#[derive(sqlx::FromRow)]
pub struct EventRow {
    pub event_id: ItemId,
    pub event_name: String,
    pub event_type: String,
    pub event_description: Option<String>,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub max_participants: i32,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
            event_id,
            event_name,
            event_type,
            event_description,
            event_date,
            start_time,
            end_time,
            max_participants,
        } = value;
        Event {
            id: event_id,
            event_name,
            event_type,
            event_description,
            event_date,
            start_time,
            end_time,
            max_participants,
        }
    }
}

// services と institutions を結合して取得する際に使う型
#[derive(sqlx::FromRow)]
pub struct ServiceRow {
    pub service_id: ItemId,
    pub service_name: String,
    pub institution_id: InstitutionId,
    pub institution_name: String,
    pub service_description: Option<String>,
    pub appointment_duration: i32,
    pub daily_capacity: i32,
    pub days_of_week: Vec<String>,
}

impl TryFrom<ServiceRow> for Service {
    type Error = AppError;

    fn try_from(value: ServiceRow) -> Result<Self, Self::Error> {
        let ServiceRow {
            service_id,
            service_name,
            institution_id,
            institution_name,
            service_description,
            appointment_duration,
            daily_capacity,
            days_of_week,
        } = value;
        Ok(Service {
            id: service_id,
            service_name,
            institution_id,
            institution_name,
            service_description,
            appointment_duration,
            daily_capacity,
            days_of_week: parse_days(days_of_week)?,
        })
    }
}
