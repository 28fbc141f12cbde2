use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::InquiryId, inquiry::event::CreateInquiry};

#[cfg_attr(feature = "test-utils", mockall::automock)]
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn create(&self, event: CreateInquiry) -> AppResult<InquiryId>;
}
