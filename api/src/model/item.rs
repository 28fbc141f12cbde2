use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use garde::Validate;
use kernel::model::{
    id::{InstitutionId, ItemId},
    item::{
        day::DayOfWeek,
        event::{CreateEvent, CreateService},
        Event, Service,
    },
};
use serde::{Deserialize, Serialize};

use super::not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[garde(custom(not_blank))]
    pub event_name: String,
    #[garde(custom(not_blank))]
    pub event_type: String,
    #[garde(skip)]
    pub event_description: Option<String>,
    #[garde(skip)]
    pub event_date: NaiveDate,
    #[garde(skip)]
    pub start_time: NaiveTime,
    #[garde(skip)]
    pub end_time: NaiveTime,
    // 0 以下でも登録は受け付ける（登録時にログで警告する）
    #[garde(skip)]
    pub max_participants: i32,
}

impl From<CreateEventRequest> for CreateEvent {
    fn from(value: CreateEventRequest) -> Self {
        let CreateEventRequest {
            event_name,
            event_type,
            event_description,
            event_date,
            start_time,
            end_time,
            max_participants,
        } = value;
        CreateEvent {
            event_name: event_name.trim().to_string(),
            event_type: event_type.trim().to_string(),
            event_description: event_description.filter(|d| !d.trim().is_empty()),
            event_date,
            start_time,
            end_time,
            max_participants,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[garde(custom(not_blank))]
    pub service_name: String,
    #[garde(skip)]
    pub institution_id: InstitutionId,
    #[garde(skip)]
    pub service_description: Option<String>,
    #[garde(range(min = 1))]
    pub appointment_duration: i32,
    #[garde(skip)]
    pub daily_capacity: i32,
    #[garde(length(min = 1))]
    pub days_of_week: Vec<DayOfWeek>,
}

impl From<CreateServiceRequest> for CreateService {
    fn from(value: CreateServiceRequest) -> Self {
        let CreateServiceRequest {
            service_name,
            institution_id,
            service_description,
            appointment_duration,
            daily_capacity,
            days_of_week,
        } = value;
        CreateService {
            service_name: service_name.trim().to_string(),
            institution_id,
            service_description: service_description.filter(|d| !d.trim().is_empty()),
            appointment_duration,
            daily_capacity,
            days_of_week: days_of_week.into_iter().collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemCreatedResponse {
    pub id: ItemId,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub events: Vec<EventResponse>,
}

impl From<Vec<Event>> for EventsResponse {
    fn from(value: Vec<Event>) -> Self {
        Self {
            events: value.into_iter().map(EventResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: ItemId,
    pub event_name: String,
    pub event_type: String,
    pub event_description: Option<String>,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub max_participants: i32,
}

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        let Event {
            id,
            event_name,
            event_type,
            event_description,
            event_date,
            start_time,
            end_time,
            max_participants,
        } = value;
        Self {
            id,
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

#[derive(Debug, Serialize)]
pub struct ServicesResponse {
    pub services: Vec<ServiceResponse>,
}

impl From<Vec<Service>> for ServicesResponse {
    fn from(value: Vec<Service>) -> Self {
        Self {
            services: value.into_iter().map(ServiceResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub id: ItemId,
    pub service_name: String,
    pub institution_id: InstitutionId,
    pub institution_name: String,
    pub service_description: Option<String>,
    pub appointment_duration: i32,
    pub daily_capacity: i32,
    pub days_of_week: BTreeSet<DayOfWeek>,
}

impl From<Service> for ServiceResponse {
    fn from(value: Service) -> Self {
        let Service {
            id,
            service_name,
            institution_id,
            institution_name,
            service_description,
            appointment_duration,
            daily_capacity,
            days_of_week,
        } = value;
        Self {
            id,
            service_name,
            institution_id,
            institution_name,
            service_description,
            appointment_duration,
            daily_capacity,
            days_of_week,
        }
    }
}
