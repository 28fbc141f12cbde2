use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;

use crate::model::{
    id::{ItemId, UserId},
    item::ItemKind,
};

use super::BookingKey;

#[derive(new, Debug, Clone)]
pub struct CreateBooking {
    pub user_id: UserId,
    pub kind: ItemKind,
    pub item_id: ItemId,
    pub booking_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl CreateBooking {
    pub fn key(&self) -> BookingKey {
        BookingKey {
            kind: self.kind,
            item_id: self.item_id,
            booking_date: self.booking_date,
        }
    }
}
