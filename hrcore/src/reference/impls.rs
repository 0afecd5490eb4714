use std::{
    fmt,
    ops::Deref,
    str::FromStr,
};
use crate::error::ValueError;
use super::*;

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 3] = [
        ReferenceKind::Skill,
        ReferenceKind::Certification,
        ReferenceKind::Language,
    ];

    /// Collection path on the remote API, e.g. `/skills/`.
    pub fn collection_path(&self) -> &'static str {
        match self {
            ReferenceKind::Skill => "/skills/",
            ReferenceKind::Certification => "/certifications/",
            ReferenceKind::Language => "/languages/",
        }
    }

    /// Client route of the create form, e.g. `/skills/new`.
    pub fn new_href(&self) -> &'static str {
        match self {
            ReferenceKind::Skill => "/skills/new",
            ReferenceKind::Certification => "/certifications/new",
            ReferenceKind::Language => "/languages/new",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReferenceKind::Skill => "Skill",
            ReferenceKind::Certification => "Certification",
            ReferenceKind::Language => "Language",
        }
    }

    pub fn generic_failure(&self) -> &'static str {
        match self {
            ReferenceKind::Skill => "An error occurred while adding the skill.",
            ReferenceKind::Certification => "An error occurred while adding the certification.",
            ReferenceKind::Language => "An error occurred while adding the language.",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

impl From<ReferenceKind> for &'static str {
    fn from(kind: ReferenceKind) -> &'static str {
        match kind {
            ReferenceKind::Skill => "skill",
            ReferenceKind::Certification => "certification",
            ReferenceKind::Language => "language",
        }
    }
}

impl FromStr for ReferenceKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skill" => Ok(ReferenceKind::Skill),
            "certification" => Ok(ReferenceKind::Certification),
            "language" => Ok(ReferenceKind::Language),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl From<Vec<Reference>> for References {
    fn from(args: Vec<Reference>) -> Self {
        Self(args)
    }
}

impl<const N: usize> From<[Reference; N]> for References {
    fn from(args: [Reference; N]) -> Self {
        Self(args.into())
    }
}

impl Deref for References {
    type Target = Vec<Reference>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl References {
    /// `(value, label)` pairs for a select control; the value is the id.
    pub fn options(&self) -> Vec<(String, String)> {
        self.0.iter()
            .map(|reference| (reference.id.to_string(), reference.name.clone()))
            .collect()
    }
}

impl From<&str> for NewReference {
    fn from(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}
