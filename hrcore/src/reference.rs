use serde::{Deserialize, Serialize};

mod impls;

/// The three kinds of named lookup records attached to employees by id.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Skill,
    Certification,
    Language,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Reference {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct References(Vec<Reference>);

/// Body of the create request for any reference kind.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NewReference {
    pub name: String,
}
