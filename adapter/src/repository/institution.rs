use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::InstitutionId,
    institution::{event::CreateInstitution, Institution, InstitutionSummary},
};
use kernel::repository::institution::InstitutionRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::{
        days_to_column,
        institution::{InstitutionRow, InstitutionSummaryRow},
    },
    ConnectionPool,
};

#[derive(new)]
pub struct InstitutionRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl InstitutionRepository for InstitutionRepositoryImpl {
    async fn create(&self, event: CreateInstitution) -> AppResult<InstitutionId> {
        sqlx::query_scalar(
            r#"
                INSERT INTO institutions
                (office_name, department_or_ministry, office_type, office_address,
                district, official_email, office_phone, working_days)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING institution_id
            "#,
        )
        .bind(event.office_name)
        .bind(event.department_or_ministry)
        .bind(event.office_type)
        .bind(event.office_address)
        .bind(event.district)
        .bind(event.official_email)
        .bind(event.office_phone)
        .bind(days_to_column(&event.working_days))
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_all_summaries(&self) -> AppResult<Vec<InstitutionSummary>> {
        let rows: Vec<InstitutionSummaryRow> = sqlx::query_as(
            r#"
                SELECT institution_id, office_name
                FROM institutions
                ORDER BY office_name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(InstitutionSummary::from).collect())
    }

    async fn find_all(&self) -> AppResult<Vec<Institution>> {
        let rows: Vec<InstitutionRow> = sqlx::query_as(
            r#"
                SELECT
                institution_id,
                office_name,
                department_or_ministry,
                office_type,
                office_address,
                district,
                official_email,
                office_phone,
                working_days
                FROM institutions
                ORDER BY institution_id DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Institution::try_from).collect()
    }
}
