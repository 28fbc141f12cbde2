use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;
use kernel::model::{
    booking::{event::CreateBooking, BookingSlot},
    id::{BookingId, ItemId, UserId},
    item::ItemKind,
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

// 入力不足を独自のメッセージで返すため、各項目は Option で受けて変換時に検証する
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub item_id: Option<ItemIdField>,
    pub booking_date: Option<String>,
}

// フォームの select からは文字列で、その他のクライアントからは数値で届く
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemIdField {
    Number(i64),
    Text(String),
}

impl ItemIdField {
    // 未選択（空文字・0）は None
    fn parse(self) -> Result<Option<i64>, AppError> {
        let raw = match self {
            ItemIdField::Number(n) => n,
            ItemIdField::Text(s) if s.trim().is_empty() => return Ok(None),
            ItemIdField::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| AppError::InvalidInput(format!("Invalid item id: {s}")))?,
        };
        Ok((raw != 0).then_some(raw))
    }
}

#[derive(new)]
pub struct CreateBookingRequestWithUser(UserId, DateTime<Utc>, CreateBookingRequest);

impl TryFrom<CreateBookingRequestWithUser> for CreateBooking {
    type Error = AppError;

    fn try_from(value: CreateBookingRequestWithUser) -> Result<Self, Self::Error> {
        let CreateBookingRequestWithUser(
            user_id,
            created_at,
            CreateBookingRequest {
                kind,
                item_id,
                booking_date,
            },
        ) = value;

        let kind = kind
            .as_deref()
            .and_then(|k| ItemKind::from_str(k).ok())
            .ok_or_else(|| AppError::InvalidInput("Invalid booking type".into()))?;

        let item_id = item_id.map(ItemIdField::parse).transpose()?.flatten();
        let (Some(item_id), Some(booking_date)) =
            (item_id, booking_date.filter(|d| !d.trim().is_empty()))
        else {
            return Err(AppError::InvalidInput("Item and date are required".into()));
        };

        let booking_date = NaiveDate::parse_from_str(booking_date.trim(), "%Y-%m-%d")
            .map_err(|_| {
                AppError::InvalidInput(format!(
                    "Invalid booking date: {booking_date} (expected YYYY-MM-DD)"
                ))
            })?;

        Ok(CreateBooking::new(
            user_id,
            kind,
            ItemId::new(item_id),
            booking_date,
            created_at,
        ))
    }
}

#[derive(Debug, Serialize)]
pub struct CreateBookingResponse {
    pub success: bool,
    pub booking_number: BookingId,
    pub message: String,
}

impl From<BookingId> for CreateBookingResponse {
    fn from(booking_number: BookingId) -> Self {
        Self {
            success: true,
            booking_number,
            message: "Booking confirmed".into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingsResponse {
    pub bookings: Vec<BookingSlotResponse>,
}

impl From<Vec<BookingSlot>> for BookingsResponse {
    fn from(value: Vec<BookingSlot>) -> Self {
        Self {
            bookings: value.into_iter().map(BookingSlotResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingSlotResponse {
    pub booking_number: BookingId,
    pub slot_id: i64,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub item_name: Option<String>,
    pub booking_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<BookingSlot> for BookingSlotResponse {
    fn from(value: BookingSlot) -> Self {
        let BookingSlot {
            booking_id,
            slot_id,
            kind,
            item_id: _,
            item_name,
            booking_date,
            created_at,
        } = value;
        Self {
            booking_number: booking_id,
            slot_id,
            kind,
            item_name,
            booking_date,
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingCountResponse {
    pub count: i64,
}
