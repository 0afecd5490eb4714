//! Write shape, as accepted by `POST /employees/` and `PUT /employees/{id}/`.
//!
//! Associations are flattened to the bare reference id plus their local
//! attributes.  The record itself carries no `id`; the server assigns it
//! on create and takes it from the path on update.

use serde::{Deserialize, Serialize};
use super::{
    EducationLevel,
    Gender,
    MaritalStatus,
    ProficiencyLevel,
};

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct EmployeePayload {
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
    pub date_of_birth: String,
    pub gender: Option<Gender>,
    pub nationality: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub passport_info: PassportPayload,
    pub family: FamilyPayload,
    pub educations: Vec<EducationPayload>,
    pub work_experiences: Vec<WorkExperiencePayload>,
    pub skills: Vec<SkillEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub languages: Vec<LanguageEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PassportPayload {
    pub passport_number: String,
    pub issued_by: String,
    pub date_issued: String,
    pub date_expiry: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FamilyPayload {
    pub marital_status: Option<MaritalStatus>,
    pub number_of_children: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EducationPayload {
    pub education_level: EducationLevel,
    pub institution: String,
    pub graduation_year: u32,
    pub specialty: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct WorkExperiencePayload {
    pub employer: String,
    pub position: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub responsibilities: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SkillEntry {
    pub skill_id: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CertificationEntry {
    pub certification_id: i64,
    pub date_obtained: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LanguageEntry {
    pub language_id: i64,
    pub proficiency_level: ProficiencyLevel,
}
