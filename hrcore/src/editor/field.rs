use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::Collection;

// Each field enum names its wire key (also the `name` of the bound input)
// and a human label.
macro_rules! named_fields {
    ($name:ident { $($variant:ident => ($key:literal, $label:literal)),* $(,)? }) => {
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),*
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)*
                    s => Err(ValueError::Unsupported(s.to_string())),
                }
            }
        }
    };
}

named_fields!(EmployeeField {
    FirstName => ("first_name", "First name"),
    LastName => ("last_name", "Last name"),
    Patronymic => ("patronymic", "Patronymic"),
    DateOfBirth => ("date_of_birth", "Date of birth"),
    Gender => ("gender", "Gender"),
    Nationality => ("nationality", "Nationality"),
    Email => ("email", "Email"),
    PhoneNumber => ("phone_number", "Phone number"),
    Address => ("address", "Address"),
});

named_fields!(PassportField {
    PassportNumber => ("passport_number", "Passport number"),
    IssuedBy => ("issued_by", "Issued by"),
    DateIssued => ("date_issued", "Date issued"),
    DateExpiry => ("date_expiry", "Expiry date"),
});

named_fields!(FamilyField {
    MaritalStatus => ("marital_status", "Marital status"),
    NumberOfChildren => ("number_of_children", "Number of children"),
});

named_fields!(EducationField {
    EducationLevel => ("education_level", "Education level"),
    Institution => ("institution", "Institution"),
    GraduationYear => ("graduation_year", "Graduation year"),
    Specialty => ("specialty", "Specialty"),
});

named_fields!(WorkExperienceField {
    Employer => ("employer", "Employer"),
    Position => ("position", "Position"),
    StartDate => ("start_date", "Start date"),
    EndDate => ("end_date", "End date"),
    Responsibilities => ("responsibilities", "Responsibilities"),
});

named_fields!(SkillField {
    SkillId => ("skill_id", "Skill"),
});

named_fields!(CertificationField {
    CertificationId => ("certification_id", "Certification"),
    DateObtained => ("date_obtained", "Date obtained"),
});

named_fields!(LanguageField {
    LanguageId => ("language_id", "Language"),
    ProficiencyLevel => ("proficiency_level", "Proficiency level"),
});

/// A key within one element of a sub-collection; the variant names the
/// collection.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RowField {
    Education(EducationField),
    WorkExperience(WorkExperienceField),
    Skill(SkillField),
    Certification(CertificationField),
    Language(LanguageField),
}

impl RowField {
    pub fn collection(&self) -> Collection {
        match self {
            RowField::Education(_) => Collection::Educations,
            RowField::WorkExperience(_) => Collection::WorkExperiences,
            RowField::Skill(_) => Collection::Skills,
            RowField::Certification(_) => Collection::Certifications,
            RowField::Language(_) => Collection::Languages,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RowField::Education(field) => field.name(),
            RowField::WorkExperience(field) => field.name(),
            RowField::Skill(field) => field.name(),
            RowField::Certification(field) => field.name(),
            RowField::Language(field) => field.name(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowField::Education(field) => field.label(),
            RowField::WorkExperience(field) => field.label(),
            RowField::Skill(field) => field.label(),
            RowField::Certification(field) => field.label(),
            RowField::Language(field) => field.label(),
        }
    }
}

impl From<EducationField> for RowField {
    fn from(field: EducationField) -> Self {
        RowField::Education(field)
    }
}

impl From<WorkExperienceField> for RowField {
    fn from(field: WorkExperienceField) -> Self {
        RowField::WorkExperience(field)
    }
}

impl From<SkillField> for RowField {
    fn from(field: SkillField) -> Self {
        RowField::Skill(field)
    }
}

impl From<CertificationField> for RowField {
    fn from(field: CertificationField) -> Self {
        RowField::Certification(field)
    }
}

impl From<LanguageField> for RowField {
    fn from(field: LanguageField) -> Self {
        RowField::Language(field)
    }
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Educations,
        Collection::WorkExperiences,
        Collection::Skills,
        Collection::Certifications,
        Collection::Languages,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Educations => "educations",
            Collection::WorkExperiences => "work_experiences",
            Collection::Skills => "skills",
            Collection::Certifications => "certifications",
            Collection::Languages => "languages",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Collection::Educations => "Education",
            Collection::WorkExperiences => "Work experience",
            Collection::Skills => "Skills",
            Collection::Certifications => "Certifications",
            Collection::Languages => "Languages",
        }
    }

    pub fn add_label(&self) -> &'static str {
        match self {
            Collection::Educations => "Add education",
            Collection::WorkExperiences => "Add work experience",
            Collection::Skills => "Add skill",
            Collection::Certifications => "Add certification",
            Collection::Languages => "Add language",
        }
    }

}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;
    use super::*;
    use crate::error::ValueError;

    #[test]
    fn smoke() -> anyhow::Result<()> {
        assert_eq!(EmployeeField::PhoneNumber.to_string(), "phone_number");
        assert_eq!(EmployeeField::from_str("date_of_birth")?, EmployeeField::DateOfBirth);
        assert_eq!(PassportField::DateExpiry.label(), "Expiry date");
        assert_eq!(EmployeeField::ALL.len(), 9);
        assert!(matches!(
            FamilyField::from_str("spouse")
                .expect_err("should be an error"),
            ValueError::Unsupported(s) if s == "spouse",
        ));
        Ok(())
    }
}
