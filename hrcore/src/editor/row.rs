use std::str::FromStr;
use crate::{
    employee::payload::{
        CertificationEntry,
        EducationPayload,
        LanguageEntry,
        SkillEntry,
        WorkExperiencePayload,
    },
    error::ValueError,
};
use super::*;

/// An element of one of the editable sub-collections.
pub trait Row: Clone + Default {
    type Field: Copy;
    const COLLECTION: Collection;

    fn key(&self) -> RowKey;
    /// The empty-field template appended by the editor.
    fn with_key(key: RowKey) -> Self;
    fn get(&self, field: Self::Field) -> String;
    fn set(&mut self, field: Self::Field, value: &str) -> Result<(), ValueError>;
}

/// Empty input clears an enumerated choice.
pub(super) fn parse_choice<T>(value: &str) -> Result<Option<T>, ValueError>
where
    T: FromStr<Err = ValueError>,
{
    match value.trim() {
        "" => Ok(None),
        s => Ok(Some(s.parse()?)),
    }
}

pub(super) fn parse_number<T: FromStr>(value: &str) -> Result<Option<T>, ValueError> {
    match value.trim() {
        "" => Ok(None),
        s => s.parse()
            .map(Some)
            .map_err(|_| ValueError::InvalidNumber(s.to_string())),
    }
}

pub(super) fn show<T: ToString>(value: &Option<T>) -> String {
    value.as_ref()
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn required(value: &str, field: &'static str) -> Result<String, ValueError> {
    if value.trim().is_empty() {
        Err(ValueError::Incomplete(field))
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

impl Row for EducationRow {
    type Field = EducationField;
    const COLLECTION: Collection = Collection::Educations;

    fn key(&self) -> RowKey {
        self.key
    }

    fn with_key(key: RowKey) -> Self {
        Self { key, .. Default::default() }
    }

    fn get(&self, field: EducationField) -> String {
        match field {
            EducationField::EducationLevel => show(&self.education_level),
            EducationField::Institution => self.institution.clone(),
            EducationField::GraduationYear => show(&self.graduation_year),
            EducationField::Specialty => self.specialty.clone(),
        }
    }

    fn set(&mut self, field: EducationField, value: &str) -> Result<(), ValueError> {
        match field {
            EducationField::EducationLevel => self.education_level = parse_choice(value)?,
            EducationField::Institution => self.institution = value.to_string(),
            EducationField::GraduationYear => self.graduation_year = parse_number(value)?,
            EducationField::Specialty => self.specialty = value.to_string(),
        }
        Ok(())
    }
}

impl Row for WorkExperienceRow {
    type Field = WorkExperienceField;
    const COLLECTION: Collection = Collection::WorkExperiences;

    fn key(&self) -> RowKey {
        self.key
    }

    fn with_key(key: RowKey) -> Self {
        Self { key, .. Default::default() }
    }

    fn get(&self, field: WorkExperienceField) -> String {
        match field {
            WorkExperienceField::Employer => self.employer.clone(),
            WorkExperienceField::Position => self.position.clone(),
            WorkExperienceField::StartDate => self.start_date.clone(),
            WorkExperienceField::EndDate => self.end_date.clone(),
            WorkExperienceField::Responsibilities => self.responsibilities.clone(),
        }
    }

    fn set(&mut self, field: WorkExperienceField, value: &str) -> Result<(), ValueError> {
        let value = value.to_string();
        match field {
            WorkExperienceField::Employer => self.employer = value,
            WorkExperienceField::Position => self.position = value,
            WorkExperienceField::StartDate => self.start_date = value,
            WorkExperienceField::EndDate => self.end_date = value,
            WorkExperienceField::Responsibilities => self.responsibilities = value,
        }
        Ok(())
    }
}

impl Row for SkillRow {
    type Field = SkillField;
    const COLLECTION: Collection = Collection::Skills;

    fn key(&self) -> RowKey {
        self.key
    }

    fn with_key(key: RowKey) -> Self {
        Self { key, .. Default::default() }
    }

    fn get(&self, field: SkillField) -> String {
        match field {
            SkillField::SkillId => show(&self.skill_id),
        }
    }

    fn set(&mut self, field: SkillField, value: &str) -> Result<(), ValueError> {
        match field {
            SkillField::SkillId => self.skill_id = parse_number(value)?,
        }
        Ok(())
    }
}

impl Row for CertificationRow {
    type Field = CertificationField;
    const COLLECTION: Collection = Collection::Certifications;

    fn key(&self) -> RowKey {
        self.key
    }

    fn with_key(key: RowKey) -> Self {
        Self { key, .. Default::default() }
    }

    fn get(&self, field: CertificationField) -> String {
        match field {
            CertificationField::CertificationId => show(&self.certification_id),
            CertificationField::DateObtained => self.date_obtained.clone(),
        }
    }

    fn set(&mut self, field: CertificationField, value: &str) -> Result<(), ValueError> {
        match field {
            CertificationField::CertificationId => self.certification_id = parse_number(value)?,
            CertificationField::DateObtained => self.date_obtained = value.to_string(),
        }
        Ok(())
    }
}

impl Row for LanguageRow {
    type Field = LanguageField;
    const COLLECTION: Collection = Collection::Languages;

    fn key(&self) -> RowKey {
        self.key
    }

    fn with_key(key: RowKey) -> Self {
        Self { key, .. Default::default() }
    }

    fn get(&self, field: LanguageField) -> String {
        match field {
            LanguageField::LanguageId => show(&self.language_id),
            LanguageField::ProficiencyLevel => show(&self.proficiency_level),
        }
    }

    fn set(&mut self, field: LanguageField, value: &str) -> Result<(), ValueError> {
        match field {
            LanguageField::LanguageId => self.language_id = parse_number(value)?,
            LanguageField::ProficiencyLevel => self.proficiency_level = parse_choice(value)?,
        }
        Ok(())
    }
}

// Conversions into the write shape fail with `Incomplete` naming the first
// missing required field; the editor drops such entries on submission.

impl TryFrom<&EducationRow> for EducationPayload {
    type Error = ValueError;

    fn try_from(row: &EducationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            education_level: row.education_level
                .ok_or(ValueError::Incomplete("education_level"))?,
            institution: required(&row.institution, "institution")?,
            graduation_year: row.graduation_year
                .ok_or(ValueError::Incomplete("graduation_year"))?,
            specialty: required(&row.specialty, "specialty")?,
        })
    }
}

impl TryFrom<&WorkExperienceRow> for WorkExperiencePayload {
    type Error = ValueError;

    fn try_from(row: &WorkExperienceRow) -> Result<Self, Self::Error> {
        Ok(Self {
            employer: required(&row.employer, "employer")?,
            position: required(&row.position, "position")?,
            start_date: required(&row.start_date, "start_date")?,
            end_date: optional(&row.end_date),
            responsibilities: optional(&row.responsibilities),
        })
    }
}

impl TryFrom<&SkillRow> for SkillEntry {
    type Error = ValueError;

    fn try_from(row: &SkillRow) -> Result<Self, Self::Error> {
        Ok(Self {
            skill_id: row.skill_id.ok_or(ValueError::Incomplete("skill_id"))?,
        })
    }
}

impl TryFrom<&CertificationRow> for CertificationEntry {
    type Error = ValueError;

    fn try_from(row: &CertificationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            certification_id: row.certification_id
                .ok_or(ValueError::Incomplete("certification_id"))?,
            date_obtained: required(&row.date_obtained, "date_obtained")?,
        })
    }
}

impl TryFrom<&LanguageRow> for LanguageEntry {
    type Error = ValueError;

    fn try_from(row: &LanguageRow) -> Result<Self, Self::Error> {
        Ok(Self {
            language_id: row.language_id
                .ok_or(ValueError::Incomplete("language_id"))?,
            proficiency_level: row.proficiency_level
                .ok_or(ValueError::Incomplete("proficiency_level"))?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_helpers() -> anyhow::Result<()> {
        assert_eq!(parse_number::<u32>("")?, None);
        assert_eq!(parse_number::<u32>(" 2019 ")?, Some(2019));
        assert_eq!(
            parse_number::<i64>("abc"),
            Err(ValueError::InvalidNumber("abc".to_string())),
        );
        assert_eq!(parse_choice::<ProficiencyLevel>("")?, None);
        assert_eq!(
            parse_choice::<ProficiencyLevel>("advanced")?,
            Some(ProficiencyLevel::Advanced),
        );
        Ok(())
    }

    #[test]
    fn incomplete_education() -> anyhow::Result<()> {
        let mut row = EducationRow::with_key(RowKey(0));
        row.set(EducationField::EducationLevel, "master")?;
        row.set(EducationField::Institution, "MSU")?;
        row.set(EducationField::Specialty, "Mathematics")?;
        assert_eq!(
            EducationPayload::try_from(&row),
            Err(ValueError::Incomplete("graduation_year")),
        );
        row.set(EducationField::GraduationYear, "2015")?;
        assert_eq!(EducationPayload::try_from(&row)?, EducationPayload {
            education_level: EducationLevel::Master,
            institution: "MSU".to_string(),
            graduation_year: 2015,
            specialty: "Mathematics".to_string(),
        });
        Ok(())
    }

    #[test]
    fn work_experience_optional_fields() -> anyhow::Result<()> {
        let mut row = WorkExperienceRow::with_key(RowKey(3));
        row.set(WorkExperienceField::Employer, "Acme")?;
        row.set(WorkExperienceField::Position, "Engineer")?;
        assert!(WorkExperiencePayload::try_from(&row).is_err());
        row.set(WorkExperienceField::StartDate, "2019-03-01")?;
        let payload = WorkExperiencePayload::try_from(&row)?;
        assert_eq!(payload.end_date, None);
        assert_eq!(payload.responsibilities, None);
        assert_eq!(row.get(WorkExperienceField::EndDate), "");
        Ok(())
    }

    #[test]
    fn association_getters_round_trip() -> anyhow::Result<()> {
        let mut row = LanguageRow::with_key(RowKey(1));
        assert_eq!(row.get(LanguageField::LanguageId), "");
        row.set(LanguageField::LanguageId, "5")?;
        row.set(LanguageField::ProficiencyLevel, "native")?;
        assert_eq!(row.get(LanguageField::LanguageId), "5");
        assert_eq!(row.get(LanguageField::ProficiencyLevel), "native");
        // clearing the selection empties the association again
        row.set(LanguageField::LanguageId, "")?;
        assert!(LanguageEntry::try_from(&row).is_err());
        Ok(())
    }
}
