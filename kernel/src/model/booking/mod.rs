use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{
    id::{BookingId, ItemId, UserId},
    item::ItemKind,
};

pub mod event;

// 定員・枠番号の集計単位となる (種別, 対象 ID, 予約日) の組
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingKey {
    pub kind: ItemKind,
    pub item_id: ItemId,
    pub booking_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub kind: ItemKind,
    pub item_id: ItemId,
    pub booking_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn key(&self) -> BookingKey {
        BookingKey {
            kind: self.kind,
            item_id: self.item_id,
            booking_date: self.booking_date,
        }
    }
}

// 予約履歴の 1 行。slot_id は同じ対象・同じ日付の予約の中での 1 始まりの順位
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSlot {
    pub booking_id: BookingId,
    pub slot_id: i64,
    pub kind: ItemKind,
    pub item_id: ItemId,
    pub item_name: Option<String>,
    pub booking_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Ranks every booking within its (kind, item, date) group by booking id,
/// starting at 1.
pub fn rank_within_groups<I>(bookings: I) -> HashMap<BookingId, i64>
where
    I: IntoIterator<Item = (BookingKey, BookingId)>,
{
    let mut groups: HashMap<BookingKey, Vec<BookingId>> = HashMap::new();
    for (key, id) in bookings {
        groups.entry(key).or_default().push(id);
    }

    groups
        .into_values()
        .flat_map(|mut ids| {
            ids.sort_unstable();
            ids.into_iter()
                .enumerate()
                .map(|(i, id)| (id, i as i64 + 1))
        })
        .collect()
}
