use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::InstitutionId,
    institution::{event::CreateInstitution, Institution, InstitutionSummary},
};

#[cfg_attr(feature = "test-utils", mockall::automock)]
#[async_trait]
pub trait InstitutionRepository: Send + Sync {
    async fn create(&self, event: CreateInstitution) -> AppResult<InstitutionId>;
    async fn find_all_summaries(&self) -> AppResult<Vec<InstitutionSummary>>;
    async fn find_all(&self) -> AppResult<Vec<Institution>>;
}
