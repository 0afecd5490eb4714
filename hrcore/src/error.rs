use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("unsupported value: {0:?}")]
    Unsupported(String),
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    #[error("no row with key {0}")]
    UnknownRow(u64),
    #[error("entry is missing required field {0}")]
    Incomplete(&'static str),
    #[error("{0} is required.")]
    Required(&'static str),
}

/// Per-field validation messages as returned by a 400-class response,
/// e.g. `{"name": ["skill with this name already exists."]}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BackendError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("unexpected status {0}")]
    Status(u16),
}

impl FieldErrors {
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0.get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // Nested objects (e.g. errors within `passport_info`) are skipped; only
    // top-level lists of messages are kept.
    fn from_body(body: &str) -> Self {
        let Ok(map) = serde_json::from_str::<BTreeMap<String, serde_json::Value>>(body) else {
            return Self::default();
        };
        Self(map.into_iter()
            .filter_map(|(field, value)| {
                serde_json::from_value::<Vec<String>>(value)
                    .ok()
                    .map(|messages| (field, messages))
            })
            .collect())
    }
}

impl From<BTreeMap<String, Vec<String>>> for FieldErrors {
    fn from(value: BTreeMap<String, Vec<String>>) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FieldErrors {
    fn from(args: [(&str, &str); N]) -> Self {
        let mut inner = BTreeMap::<String, Vec<String>>::new();
        for (field, message) in args {
            inner.entry(field.to_string())
                .or_default()
                .push(message.to_string());
        }
        Self(inner)
    }
}

impl BackendError {
    /// Classify a non-success response body.  Client errors carrying a
    /// field-keyed JSON object become `Validation`, anything else keeps
    /// only the status.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        if (400..500).contains(&status) {
            let errors = FieldErrors::from_body(body);
            if !errors.is_empty() {
                return Self::Validation(errors);
            }
        }
        Self::Status(status)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_))
    }
}
