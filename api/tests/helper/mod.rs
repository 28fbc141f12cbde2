#![allow(dead_code)]

use std::{
    collections::{BTreeSet, HashMap},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, NaiveTime};
use http_body_util::BodyExt;
use kernel::model::{
    booking::{event::CreateBooking, rank_within_groups, Booking, BookingSlot},
    id::{BookingId, InstitutionId, ItemId, UserId},
    item::{day::DayOfWeek, BookableItem, Event, ItemKind, Service},
};
use kernel::repository::{
    auth::MockAuthRepository, booking::BookingRepository, health::MockHealthCheckRepository,
    inquiry::MockInquiryRepository, institution::MockInstitutionRepository,
    item::MockItemRepository,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};
use tower::ServiceExt;

pub const ALICE: &str = "alice-token";
pub const BOB: &str = "bob-token";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn service(id: i64, name: &str, daily_capacity: i32, days: &[DayOfWeek]) -> BookableItem {
    BookableItem::Service(Service {
        id: ItemId::new(id),
        service_name: name.into(),
        institution_id: InstitutionId::new(1),
        institution_name: "Divisional Secretariat".into(),
        service_description: None,
        appointment_duration: 15,
        daily_capacity,
        days_of_week: days.iter().copied().collect::<BTreeSet<_>>(),
    })
}

pub fn event(id: i64, name: &str, event_date: NaiveDate, max_participants: i32) -> BookableItem {
    BookableItem::Event(Event {
        id: ItemId::new(id),
        event_name: name.into(),
        event_type: "clinic".into(),
        event_description: None,
        event_date,
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        max_participants,
    })
}

// PostgreSQL 実装と同じ判定（kernel の admit）を使うインメモリの予約ストア
#[derive(Default)]
pub struct InMemoryBookingRepository {
    items: HashMap<(ItemKind, ItemId), BookableItem>,
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    pub fn with_items(items: impl IntoIterator<Item = BookableItem>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| ((item.kind(), item.id()), item))
                .collect(),
            bookings: Mutex::default(),
        }
    }

    pub fn stored(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let item = self
            .items
            .get(&(event.kind, event.item_id))
            .ok_or_else(|| AppError::ItemNotFound("Item not found".into()))?;

        let mut bookings = self.bookings.lock().unwrap();
        let key = event.key();
        let already_booked = bookings.iter().filter(|b| b.key() == key).count() as i64;
        item.admit(event.booking_date, already_booked)?;

        let booking_id = BookingId::new(bookings.len() as i64 + 1);
        bookings.push(Booking {
            booking_id,
            user_id: event.user_id,
            kind: event.kind,
            item_id: event.item_id,
            booking_date: event.booking_date,
            created_at: event.created_at,
        });
        Ok(booking_id)
    }

    async fn find_slots_by_user_id(&self, user_id: UserId) -> AppResult<Vec<BookingSlot>> {
        let bookings = self.bookings.lock().unwrap();
        let ranks = rank_within_groups(bookings.iter().map(|b| (b.key(), b.booking_id)));

        let mut slots: Vec<BookingSlot> = bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .map(|b| BookingSlot {
                booking_id: b.booking_id,
                slot_id: ranks[&b.booking_id],
                kind: b.kind,
                item_id: b.item_id,
                item_name: self
                    .items
                    .get(&(b.kind, b.item_id))
                    .map(|i| i.name().to_string()),
                booking_date: b.booking_date,
                created_at: b.created_at,
            })
            .collect();
        slots.sort_by_key(|s| (s.booking_date, s.created_at, s.booking_id));
        Ok(slots)
    }

    async fn count_by_user_id(&self, user_id: UserId) -> AppResult<i64> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings.iter().filter(|b| b.user_id == user_id).count() as i64)
    }
}

pub fn auth_repository() -> MockAuthRepository {
    let mut auth = MockAuthRepository::new();
    auth.expect_fetch_user_id_from_token()
        .returning(|token| {
            Ok(match token.0.as_str() {
                ALICE => Some(UserId::new(1)),
                BOB => Some(UserId::new(2)),
                _ => None,
            })
        });
    auth
}

pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn new(
        booking: Arc<dyn BookingRepository>,
        item: MockItemRepository,
        institution: MockInstitutionRepository,
        health: MockHealthCheckRepository,
        inquiry: MockInquiryRepository,
        auth: MockAuthRepository,
    ) -> Self {
        let registry = AppRegistry::with_repositories(
            Arc::new(health),
            booking,
            Arc::new(item),
            Arc::new(institution),
            Arc::new(inquiry),
            Arc::new(auth),
        );
        Self {
            router: api::route::v1::routes().with_state(registry),
        }
    }

    pub fn with_bookings(booking: Arc<dyn BookingRepository>) -> Self {
        Self::new(
            booking,
            MockItemRepository::new(),
            MockInstitutionRepository::new(),
            MockHealthCheckRepository::new(),
            MockInquiryRepository::new(),
            auth_repository(),
        )
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut req = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let req = match body {
            Some(body) => req
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => req.body(Body::empty()).unwrap(),
        };

        let res = self.router.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn book(
        &self,
        token: &str,
        kind: &str,
        item_id: i64,
        booking_date: &str,
    ) -> (StatusCode, serde_json::Value) {
        self.send(
            Method::POST,
            "/api/v1/bookings",
            Some(token),
            Some(serde_json::json!({
                "type": kind,
                "item_id": item_id,
                "booking_date": booking_date,
            })),
        )
        .await
    }
}
