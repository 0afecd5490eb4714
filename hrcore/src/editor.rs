//! Edit shape of the employee record and its mutation contract.
//!
//! The editor holds an [`EmployeeDraft`] for its whole lifetime.  It is
//! seeded either empty (create mode) or from the read shape of an existing
//! record (edit mode), mutated one leaf at a time, and finally reduced to
//! the write shape by [`EmployeeDraft::to_payload`], which drops every
//! sub-collection entry that lacks one of its required fields.

use crate::employee::{
    EducationLevel,
    Gender,
    MaritalStatus,
    ProficiencyLevel,
};

mod convert;
mod field;
mod impls;
mod row;

pub use field::{
    CertificationField,
    EducationField,
    EmployeeField,
    FamilyField,
    LanguageField,
    PassportField,
    RowField,
    SkillField,
    WorkExperienceField,
};
pub use row::Row;

/// Locally generated identity of a sub-collection element, stable across
/// removals of its siblings.  Never sent to the server.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RowKey(u64);

/// Fixed for the lifetime of an editor; decided by the presence of an id.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Create,
    Edit(i64),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Collection {
    Educations,
    WorkExperiences,
    Skills,
    Certifications,
    Languages,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub patronymic: String,
    pub date_of_birth: String,
    pub gender: Option<Gender>,
    pub nationality: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub passport_info: PassportDraft,
    pub family: FamilyDraft,
    pub educations: Vec<EducationRow>,
    pub work_experiences: Vec<WorkExperienceRow>,
    pub skills: Vec<SkillRow>,
    pub certifications: Vec<CertificationRow>,
    pub languages: Vec<LanguageRow>,
    next_key: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PassportDraft {
    pub passport_number: String,
    pub issued_by: String,
    pub date_issued: String,
    pub date_expiry: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FamilyDraft {
    pub marital_status: Option<MaritalStatus>,
    pub number_of_children: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EducationRow {
    key: RowKey,
    pub education_level: Option<EducationLevel>,
    pub institution: String,
    pub graduation_year: Option<u32>,
    pub specialty: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkExperienceRow {
    key: RowKey,
    pub employer: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillRow {
    key: RowKey,
    pub skill_id: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CertificationRow {
    key: RowKey,
    pub certification_id: Option<i64>,
    pub date_obtained: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LanguageRow {
    key: RowKey,
    pub language_id: Option<i64>,
    pub proficiency_level: Option<ProficiencyLevel>,
}
