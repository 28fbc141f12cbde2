use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedUser,
    model::item::{
        CreateEventRequest, CreateServiceRequest, EventsResponse, ItemCreatedResponse,
        ServicesResponse,
    },
};

pub async fn register_event(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ItemCreatedResponse>)> {
    let Json(req) = payload?;
    req.validate()?;

    registry
        .item_repository()
        .create_event(req.into())
        .await
        .map(|id| {
            (
                StatusCode::CREATED,
                Json(ItemCreatedResponse {
                    id,
                    message: "Event added successfully".into(),
                }),
            )
        })
}

pub async fn show_event_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventsResponse>> {
    registry
        .item_repository()
        .find_all_events()
        .await
        .map(EventsResponse::from)
        .map(Json)
}

pub async fn register_service(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    payload: Result<Json<CreateServiceRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ItemCreatedResponse>)> {
    let Json(req) = payload?;
    req.validate()?;

    registry
        .item_repository()
        .create_service(req.into())
        .await
        .map(|id| {
            (
                StatusCode::CREATED,
                Json(ItemCreatedResponse {
                    id,
                    message: "Service created successfully".into(),
                }),
            )
        })
}

pub async fn show_service_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ServicesResponse>> {
    registry
        .item_repository()
        .find_all_services()
        .await
        .map(ServicesResponse::from)
        .map(Json)
}
