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
    model::institution::{
        CreateInstitutionRequest, InstitutionCreatedResponse, InstitutionSummariesResponse,
        InstitutionsResponse,
    },
};

pub async fn register_institution(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    payload: Result<Json<CreateInstitutionRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<InstitutionCreatedResponse>)> {
    let Json(req) = payload?;
    req.validate()?;

    registry
        .institution_repository()
        .create(req.into())
        .await
        .map(|id| {
            (
                StatusCode::CREATED,
                Json(InstitutionCreatedResponse {
                    id,
                    message: "Institution added successfully".into(),
                }),
            )
        })
}

pub async fn show_institution_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<InstitutionSummariesResponse>> {
    registry
        .institution_repository()
        .find_all_summaries()
        .await
        .map(InstitutionSummariesResponse::from)
        .map(Json)
}

pub async fn show_institution_detail_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<InstitutionsResponse>> {
    registry
        .institution_repository()
        .find_all()
        .await
        .map(InstitutionsResponse::from)
        .map(Json)
}
