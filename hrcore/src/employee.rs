use serde::{Deserialize, Serialize};
use crate::reference::Reference;

mod choice;
mod impls;
pub mod payload;

pub use choice::{
    EducationLevel,
    Gender,
    MaritalStatus,
    ProficiencyLevel,
};

// Read shape, as returned by `GET /employees/` and `GET /employees/{id}/`.
// Associations nest the full reference entity; everything other than the
// id defaults so that abbreviated listing records still decode.

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Employee {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub patronymic: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub passport_info: Option<PassportInfo>,
    #[serde(default)]
    pub family: Option<Family>,
    #[serde(default)]
    pub educations: Vec<Education>,
    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(default)]
    pub skills_info: Vec<EmployeeSkill>,
    #[serde(default)]
    pub certifications_info: Vec<EmployeeCertification>,
    #[serde(default)]
    pub languages_info: Vec<EmployeeLanguage>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Employees(Vec<Employee>);

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PassportInfo {
    #[serde(default)]
    pub passport_number: String,
    #[serde(default)]
    pub issued_by: String,
    #[serde(default)]
    pub date_issued: Option<String>,
    #[serde(default)]
    pub date_expiry: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Family {
    #[serde(default)]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default)]
    pub number_of_children: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Education {
    #[serde(default)]
    pub education_level: Option<EducationLevel>,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub graduation_year: Option<u32>,
    #[serde(default)]
    pub specialty: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct WorkExperience {
    #[serde(default)]
    pub employer: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub start_date: String,
    /// Absent while the position is current.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub responsibilities: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EmployeeSkill {
    pub skill: Reference,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EmployeeCertification {
    pub certification: Reference,
    pub date_obtained: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EmployeeLanguage {
    pub language: Reference,
    pub proficiency_level: ProficiencyLevel,
}

/// A single rendered entry of the listing and search views.
#[derive(Clone, Debug, PartialEq)]
pub struct ListEntry {
    pub id: i64,
    pub label: String,
    pub href: String,
}
