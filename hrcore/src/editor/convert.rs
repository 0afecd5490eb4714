use crate::employee::{
    Employee,
    Education,
    EmployeeCertification,
    EmployeeLanguage,
    EmployeeSkill,
    Family,
    PassportInfo,
    WorkExperience,
};
use super::*;

// Read shape -> edit shape.  Associations reduce to the bare reference id
// plus their own attributes; absent dates become empty strings so inputs
// can bind to them.  Every element receives a fresh key.

impl From<Employee> for EmployeeDraft {
    fn from(employee: Employee) -> Self {
        let mut draft = EmployeeDraft {
            first_name: employee.first_name,
            last_name: employee.last_name,
            patronymic: employee.patronymic.unwrap_or_default(),
            date_of_birth: employee.date_of_birth.unwrap_or_default(),
            gender: employee.gender,
            nationality: employee.nationality,
            email: employee.email,
            phone_number: employee.phone_number,
            address: employee.address,
            passport_info: employee.passport_info
                .map(PassportDraft::from)
                .unwrap_or_default(),
            family: employee.family
                .map(FamilyDraft::from)
                .unwrap_or_default(),
            .. Default::default()
        };
        draft.educations = employee.educations.into_iter()
            .map(|item| EducationRow::seed(draft.next_key(), item))
            .collect();
        draft.work_experiences = employee.work_experiences.into_iter()
            .map(|item| WorkExperienceRow::seed(draft.next_key(), item))
            .collect();
        draft.skills = employee.skills_info.into_iter()
            .map(|item| SkillRow::seed(draft.next_key(), item))
            .collect();
        draft.certifications = employee.certifications_info.into_iter()
            .map(|item| CertificationRow::seed(draft.next_key(), item))
            .collect();
        draft.languages = employee.languages_info.into_iter()
            .map(|item| LanguageRow::seed(draft.next_key(), item))
            .collect();
        draft
    }
}

impl From<PassportInfo> for PassportDraft {
    fn from(passport: PassportInfo) -> Self {
        Self {
            passport_number: passport.passport_number,
            issued_by: passport.issued_by,
            date_issued: passport.date_issued.unwrap_or_default(),
            date_expiry: passport.date_expiry.unwrap_or_default(),
        }
    }
}

impl From<Family> for FamilyDraft {
    fn from(family: Family) -> Self {
        Self {
            marital_status: family.marital_status,
            number_of_children: family.number_of_children,
        }
    }
}

trait Seed<T> {
    fn seed(key: RowKey, item: T) -> Self;
}

impl Seed<Education> for EducationRow {
    fn seed(key: RowKey, item: Education) -> Self {
        Self {
            key,
            education_level: item.education_level,
            institution: item.institution,
            graduation_year: item.graduation_year,
            specialty: item.specialty,
        }
    }
}

impl Seed<WorkExperience> for WorkExperienceRow {
    fn seed(key: RowKey, item: WorkExperience) -> Self {
        Self {
            key,
            employer: item.employer,
            position: item.position,
            start_date: item.start_date,
            end_date: item.end_date.unwrap_or_default(),
            responsibilities: item.responsibilities.unwrap_or_default(),
        }
    }
}

impl Seed<EmployeeSkill> for SkillRow {
    fn seed(key: RowKey, item: EmployeeSkill) -> Self {
        Self {
            key,
            skill_id: Some(item.skill.id),
        }
    }
}

impl Seed<EmployeeCertification> for CertificationRow {
    fn seed(key: RowKey, item: EmployeeCertification) -> Self {
        Self {
            key,
            certification_id: Some(item.certification.id),
            date_obtained: item.date_obtained,
        }
    }
}

impl Seed<EmployeeLanguage> for LanguageRow {
    fn seed(key: RowKey, item: EmployeeLanguage) -> Self {
        Self {
            key,
            language_id: Some(item.language.id),
            proficiency_level: Some(item.proficiency_level),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn smoke() -> anyhow::Result<()> {
        let employee: Employee = serde_json::from_str(r#"{
            "id": 9,
            "first_name": "Ivan",
            "last_name": "Petrov",
            "passport_info": {
                "passport_number": "4510 123456",
                "issued_by": "FMS",
                "date_issued": null
            },
            "family": null,
            "skills_info": [
                {"skill": {"id": 2, "name": "Rust"}},
                {"skill": {"id": 5, "name": "SQL"}}
            ],
            "languages_info": [
                {"language": {"id": 1, "name": "English"}, "proficiency_level": "advanced"}
            ]
        }"#)?;
        let draft = EmployeeDraft::from(employee);
        assert_eq!(draft.first_name, "Ivan");
        assert_eq!(draft.date_of_birth, "");
        assert_eq!(draft.passport_info.date_issued, "");
        assert_eq!(draft.passport_info.date_expiry, "");
        assert_eq!(draft.family, FamilyDraft::default());
        assert_eq!(draft.skills.iter()
            .map(|row| row.skill_id)
            .collect::<Vec<_>>(), [Some(2), Some(5)]);
        assert_eq!(draft.languages[0].proficiency_level, Some(ProficiencyLevel::Advanced));

        let mut keys = draft.keys(Collection::Skills);
        keys.extend(draft.keys(Collection::Languages));
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 3);
        Ok(())
    }
}
