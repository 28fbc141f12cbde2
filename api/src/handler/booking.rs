use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use chrono::Utc;
use kernel::model::booking::event::CreateBooking;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingCountResponse, BookingsResponse, CreateBookingRequest,
        CreateBookingRequestWithUser, CreateBookingResponse,
    },
};

pub async fn create_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreateBookingResponse>)> {
    let Json(req) = payload?;
    let event =
        CreateBooking::try_from(CreateBookingRequestWithUser::new(user.id(), Utc::now(), req))?;
    let key = event.key();

    match registry.booking_repository().create(event).await {
        Ok(booking_id) => {
            tracing::info!(
                %booking_id,
                user_id = %user.id(),
                kind = %key.kind,
                item_id = %key.item_id,
                booking_date = %key.booking_date,
                "booking admitted"
            );
            Ok((StatusCode::CREATED, Json(booking_id.into())))
        }
        Err(e) => {
            // 拒否は想定内の結果なので INFO で残す（サーバーエラーは IntoResponse 側で ERROR）
            if !e.status_code().is_server_error() {
                tracing::info!(
                    reason = e.code(),
                    user_id = %user.id(),
                    kind = %key.kind,
                    item_id = %key.item_id,
                    booking_date = %key.booking_date,
                    "booking rejected"
                );
            }
            Err(e)
        }
    }
}

pub async fn show_booking_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_slots_by_user_id(user.id())
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_booking_count(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingCountResponse>> {
    registry
        .booking_repository()
        .count_by_user_id(user.id())
        .await
        .map(|count| Json(BookingCountResponse { count }))
}
