use serde::{Deserialize, Serialize};
use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Secondary,
    Bachelor,
    Master,
    Phd,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Native,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl MaritalStatus {
    pub const ALL: [MaritalStatus; 4] = [
        MaritalStatus::Single,
        MaritalStatus::Married,
        MaritalStatus::Divorced,
        MaritalStatus::Widowed,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "single",
            MaritalStatus::Married => "married",
            MaritalStatus::Divorced => "divorced",
            MaritalStatus::Widowed => "widowed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
        }
    }
}

impl FromStr for MaritalStatus {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(MaritalStatus::Single),
            "married" => Ok(MaritalStatus::Married),
            "divorced" => Ok(MaritalStatus::Divorced),
            "widowed" => Ok(MaritalStatus::Widowed),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::Secondary,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::Phd,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            EducationLevel::Secondary => "secondary",
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::Master => "master",
            EducationLevel::Phd => "phd",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::Secondary => "Secondary",
            EducationLevel::Bachelor => "Bachelor",
            EducationLevel::Master => "Master",
            EducationLevel::Phd => "PhD",
        }
    }
}

impl FromStr for EducationLevel {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "secondary" => Ok(EducationLevel::Secondary),
            "bachelor" => Ok(EducationLevel::Bachelor),
            "master" => Ok(EducationLevel::Master),
            "phd" => Ok(EducationLevel::Phd),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl ProficiencyLevel {
    pub const ALL: [ProficiencyLevel; 4] = [
        ProficiencyLevel::Beginner,
        ProficiencyLevel::Intermediate,
        ProficiencyLevel::Advanced,
        ProficiencyLevel::Native,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "beginner",
            ProficiencyLevel::Intermediate => "intermediate",
            ProficiencyLevel::Advanced => "advanced",
            ProficiencyLevel::Native => "native",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "Beginner",
            ProficiencyLevel::Intermediate => "Intermediate",
            ProficiencyLevel::Advanced => "Advanced",
            ProficiencyLevel::Native => "Native",
        }
    }
}

impl FromStr for ProficiencyLevel {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(ProficiencyLevel::Beginner),
            "intermediate" => Ok(ProficiencyLevel::Intermediate),
            "advanced" => Ok(ProficiencyLevel::Advanced),
            "native" => Ok(ProficiencyLevel::Native),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

// Display renders the wire code, which is also the value bound by selects.
macro_rules! choice_impls {
    ($($t:ty),*) => {$(
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl $t {
            pub fn options() -> Vec<(String, String)> {
                options(&Self::ALL, Self::label)
            }
        }
    )*};
}

choice_impls!(Gender, MaritalStatus, EducationLevel, ProficiencyLevel);

/// `(value, label)` pairs for a select control.
fn options<T: Copy + fmt::Display>(
    all: &[T],
    label: fn(&T) -> &'static str,
) -> Vec<(String, String)> {
    all.iter()
        .map(|choice| (choice.to_string(), label(choice).to_string()))
        .collect()
}
