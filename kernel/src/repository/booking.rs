use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::{event::CreateBooking, BookingSlot},
    id::{BookingId, UserId},
};

#[cfg_attr(feature = "test-utils", mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 対象の存在確認・日付判定・残り枠判定を行い、通過したら予約を登録する
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // ユーザーの予約を枠番号付きで取得する
    async fn find_slots_by_user_id(&self, user_id: UserId) -> AppResult<Vec<BookingSlot>>;
    // ユーザーの予約件数を取得する
    async fn count_by_user_id(&self, user_id: UserId) -> AppResult<i64>;
}
