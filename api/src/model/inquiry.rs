use kernel::model::{id::InquiryId, inquiry::event::CreateInquiry};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

#[derive(Debug, Deserialize)]
pub struct CreateInquiryRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub inquiry: Option<String>,
}

impl TryFrom<CreateInquiryRequest> for CreateInquiry {
    type Error = AppError;

    fn try_from(value: CreateInquiryRequest) -> Result<Self, Self::Error> {
        let filled = |v: Option<String>| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let CreateInquiryRequest {
            name,
            email,
            inquiry,
        } = value;

        let (Some(name), Some(email), Some(inquiry)) = (filled(name), filled(email), filled(inquiry))
        else {
            return Err(AppError::InvalidInput("All fields are required".into()));
        };
        Ok(CreateInquiry {
            name,
            email,
            inquiry,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct InquiryCreatedResponse {
    pub id: InquiryId,
    pub message: String,
}

impl From<InquiryId> for InquiryCreatedResponse {
    fn from(id: InquiryId) -> Self {
        Self {
            id,
            message: "Inquiry submitted successfully".into(),
        }
    }
}
