use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::InquiryId, inquiry::event::CreateInquiry};
use kernel::repository::inquiry::InquiryRepository;
use shared::error::{AppError, AppResult};

use crate::database::ConnectionPool;

#[derive(new)]
pub struct InquiryRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl InquiryRepository for InquiryRepositoryImpl {
    async fn create(&self, event: CreateInquiry) -> AppResult<InquiryId> {
        sqlx::query_scalar(
            r#"
                INSERT INTO inquiries (name, email, inquiry)
                VALUES ($1, $2, $3)
                RETURNING inquiry_id
            "#,
        )
        .bind(event.name)
        .bind(event.email)
        .bind(event.inquiry)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }
}
