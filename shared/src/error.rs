use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not logged in")]
    UnauthenticatedError,
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    ValidationError(#[from] garde::Report),
    #[error(transparent)]
    MalformedBody(#[from] JsonRejection),
    #[error("{0}")]
    ItemNotFound(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("Booking date must match event date")]
    DateMismatch,
    #[error("Service not available on {0}")]
    DayNotAvailable(String),
    #[error("Selected slot is full")]
    SlotFull,
    #[error("トランザクションを実行できませんでした。")]
    TransactionError(#[source] sqlx::Error),
    #[error("データベース処理実行中にエラーが発生しました。")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("{0}")]
    ConversionEntityError(String),
}

impl AppError {
    // クライアントが機械的に判別するためのコード。メッセージとは独立させる
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UnauthenticatedError => "UNAUTHENTICATED",
            AppError::InvalidInput(_)
            | AppError::ValidationError(_)
            | AppError::MalformedBody(_) => "INVALID_INPUT",
            AppError::ItemNotFound(_) => "ITEM_NOT_FOUND",
            AppError::EntityNotFound(_) => "NOT_FOUND",
            AppError::DateMismatch => "DATE_MISMATCH",
            AppError::DayNotAvailable(_) => "DAY_NOT_AVAILABLE",
            AppError::SlotFull => "SLOT_FULL",
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::ConversionEntityError(_) => "STORAGE_FAILURE",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::InvalidInput(_)
            | AppError::ValidationError(_)
            | AppError::MalformedBody(_)
            | AppError::DateMismatch
            | AppError::DayNotAvailable(_)
            | AppError::SlotFull => StatusCode::BAD_REQUEST,
            AppError::ItemNotFound(_) | AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::ConversionEntityError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();

        // 内部エラーの詳細はログにだけ出し、クライアントには汎用メッセージを返す
        let message = if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
            "Server error".to_string()
        } else {
            self.to_string()
        };

        (
            status_code,
            Json(json!({
                "code": self.code(),
                "error": message,
            })),
        )
            .into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
