use axum::{extract::State, http::StatusCode};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::extractor::AuthorizedUser;

pub async fn logout(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .auth_repository()
        .delete_token(&user.access_token)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
