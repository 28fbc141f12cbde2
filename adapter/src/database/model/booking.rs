use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    booking::BookingSlot,
    id::{BookingId, ItemId},
    item::ItemKind,
};
use shared::error::AppError;

// 予約履歴を枠番号付きで取得する際に使う型
#[derive(sqlx::FromRow)]
pub struct BookingSlotRow {
    pub booking_id: BookingId,
    pub slot_id: i64,
    pub kind: String,
    pub item_id: ItemId,
    pub item_name: Option<String>,
    pub booking_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BookingSlotRow> for BookingSlot {
    type Error = AppError;

    fn try_from(value: BookingSlotRow) -> Result<Self, Self::Error> {
        let BookingSlotRow {
            booking_id,
            slot_id,
            kind,
            item_id,
            item_name,
            booking_date,
            created_at,
        } = value;
        let kind = ItemKind::from_str(&kind)
            .map_err(|_| AppError::ConversionEntityError(format!("unknown booking type: {kind}")))?;
        Ok(BookingSlot {
            booking_id,
            slot_id,
            kind,
            item_id,
            item_name,
            booking_date,
            created_at,
        })
    }
}
