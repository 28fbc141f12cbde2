use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use kernel::model::inquiry::event::CreateInquiry;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::inquiry::{CreateInquiryRequest, InquiryCreatedResponse};

// 問い合わせはログインしていない利用者からも受け付ける
pub async fn submit_inquiry(
    State(registry): State<AppRegistry>,
    payload: Result<Json<CreateInquiryRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<InquiryCreatedResponse>)> {
    let Json(req) = payload?;
    let event = CreateInquiry::try_from(req)?;

    let id = registry.inquiry_repository().create(event).await?;
    tracing::info!(inquiry_id = %id, "inquiry submitted");
    Ok((StatusCode::CREATED, Json(id.into())))
}
