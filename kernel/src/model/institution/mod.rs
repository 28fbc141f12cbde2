use std::collections::BTreeSet;

use crate::model::{id::InstitutionId, item::day::DayOfWeek};

pub mod event;

#[derive(Debug, Clone)]
pub struct Institution {
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

// 選択肢の表示用に ID と名称だけを持つ型
#[derive(Debug, Clone)]
pub struct InstitutionSummary {
    pub id: InstitutionId,
    pub office_name: String,
}
