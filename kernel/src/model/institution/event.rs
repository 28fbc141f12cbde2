use std::collections::BTreeSet;

use crate::model::item::day::DayOfWeek;

pub struct CreateInstitution {
    pub office_name: String,
    pub department_or_ministry: String,
    pub office_type: String,
    pub office_address: String,
    pub district: String,
    pub official_email: String,
    pub office_phone: Option<String>,
    pub working_days: BTreeSet<DayOfWeek>,
}
