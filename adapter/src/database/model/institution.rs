use kernel::model::{
    id::InstitutionId,
    institution::{Institution, InstitutionSummary},
};
use shared::error::AppError;

use super::parse_days;

#[derive(sqlx::FromRow)]
pub struct InstitutionRow {
    pub institution_id: InstitutionId,
    pub office_name: String,
    pub department_or_ministry: String,
    pub office_type: String,
    pub office_address: String,
    pub district: String,
    pub official_email: String,
    pub office_phone: Option<String>,
    pub working_days: Vec<String>,
}

impl TryFrom<InstitutionRow> for Institution {
    type Error = AppError;

    fn try_from(value: InstitutionRow) -> Result<Self, Self::Error> {
        let InstitutionRow {
            institution_id,
            office_name,
            department_or_ministry,
            office_type,
            office_address,
            district,
            official_email,
            office_phone,
            working_days,
        } = value;
        Ok(Institution {
            id: institution_id,
            office_name,
            department_or_ministry,
            office_type,
            office_address,
            district,
            official_email,
            office_phone,
            working_days: parse_days(working_days)?,
        })
    }
}

#[derive(sqlx::FromRow)]
pub struct InstitutionSummaryRow {
    pub institution_id: InstitutionId,
    pub office_name: String,
}

impl From<InstitutionSummaryRow> for InstitutionSummary {
    fn from(value: InstitutionSummaryRow) -> Self {
        let InstitutionSummaryRow {
            institution_id,
            office_name,
        } = value;
        InstitutionSummary {
            id: institution_id,
            office_name,
        }
    }
}
