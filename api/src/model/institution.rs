use std::collections::BTreeSet;

use garde::Validate;
use kernel::model::{
    id::InstitutionId,
    institution::{event::CreateInstitution, Institution, InstitutionSummary},
    item::day::DayOfWeek,
};
use serde::{Deserialize, Serialize};

use super::not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateInstitutionRequest {
    #[garde(custom(not_blank))]
    pub office_name: String,
    #[garde(custom(not_blank))]
    pub department_or_ministry: String,
    #[garde(custom(not_blank))]
    pub office_type: String,
    #[garde(custom(not_blank))]
    pub office_address: String,
    #[garde(custom(not_blank))]
    pub district: String,
    #[garde(email)]
    pub official_email: String,
    #[garde(skip)]
    pub office_phone: Option<String>,
    #[garde(length(min = 1))]
    pub working_days: Vec<DayOfWeek>,
}

impl From<CreateInstitutionRequest> for CreateInstitution {
    fn from(value: CreateInstitutionRequest) -> Self {
        let CreateInstitutionRequest {
            office_name,
            department_or_ministry,
            office_type,
            office_address,
            district,
            official_email,
            office_phone,
            working_days,
        } = value;
        CreateInstitution {
            office_name: office_name.trim().to_string(),
            department_or_ministry: department_or_ministry.trim().to_string(),
            office_type: office_type.trim().to_string(),
            office_address: office_address.trim().to_string(),
            district: district.trim().to_string(),
            official_email: official_email.trim().to_string(),
            office_phone: office_phone.filter(|p| !p.trim().is_empty()),
            working_days: working_days.into_iter().collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InstitutionCreatedResponse {
    pub id: InstitutionId,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct InstitutionSummariesResponse {
    pub institutions: Vec<InstitutionSummaryResponse>,
}

impl From<Vec<InstitutionSummary>> for InstitutionSummariesResponse {
    fn from(value: Vec<InstitutionSummary>) -> Self {
        Self {
            institutions: value
                .into_iter()
                .map(|InstitutionSummary { id, office_name }| InstitutionSummaryResponse {
                    id,
                    office_name,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InstitutionSummaryResponse {
    pub id: InstitutionId,
    pub office_name: String,
}

#[derive(Debug, Serialize)]
pub struct InstitutionsResponse {
    pub institutions: Vec<InstitutionResponse>,
}

impl From<Vec<Institution>> for InstitutionsResponse {
    fn from(value: Vec<Institution>) -> Self {
        Self {
            institutions: value.into_iter().map(InstitutionResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InstitutionResponse {
    pub id: InstitutionId,
    pub office_name: String,
    pub department_or_ministry: String,
    pub office_type: String,
    pub office_address: String,
    pub district: String,
    pub official_email: String,
    pub office_phone: Option<String>,
    pub working_days: BTreeSet<DayOfWeek>,
}

impl From<Institution> for InstitutionResponse {
    fn from(value: Institution) -> Self {
        let Institution {
            id,
            office_name,
            department_or_ministry,
            office_type,
            office_address,
            district,
            official_email,
            office_phone,
            working_days,
        } = value;
        Self {
            id,
            office_name,
            department_or_ministry,
            office_type,
            office_address,
            district,
            official_email,
            office_phone,
            working_days,
        }
    }
}
