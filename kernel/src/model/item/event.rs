use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};

use super::day::DayOfWeek;
use crate::model::id::InstitutionId;

pub struct CreateEvent {
    pub event_name: String,
    pub event_type: String,
    pub event_description: Option<String>,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub max_participants: i32,
}

pub struct CreateService {
    pub service_name: String,
    pub institution_id: InstitutionId,
    pub service_description: Option<String>,
    pub appointment_duration: i32,
    pub daily_capacity: i32,
    pub days_of_week: BTreeSet<DayOfWeek>,
}
