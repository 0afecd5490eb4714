use thiserror::Error;
use crate::{
    error::{BackendError, ValueError},
    reference::ReferenceKind,
};

pub const CONNECTIVITY_FAILURE: &str =
    "A network error occurred. Check your connection and try again.";
pub const DECODE_FAILURE: &str =
    "The server returned an unexpected response. Please try again later.";
pub const EMPLOYEE_FAILURE: &str = "An error occurred while saving the employee.";

/// What a form was submitting, which selects the fields consulted for a
/// server message and the generic fallback.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Subject {
    Employee,
    Reference(ReferenceKind),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Value(#[from] ValueError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl Subject {
    fn name_fields(&self) -> &'static [&'static str] {
        match self {
            Subject::Employee => &["name", "first_name", "last_name"],
            Subject::Reference(_) => &["name"],
        }
    }

    fn generic_failure(&self) -> &'static str {
        match self {
            Subject::Employee => EMPLOYEE_FAILURE,
            Subject::Reference(kind) => kind.generic_failure(),
        }
    }
}

impl SubmitError {
    /// The single message shown to the user.
    pub fn message(&self, subject: Subject) -> String {
        match self {
            SubmitError::Value(e) => e.to_string(),
            SubmitError::Backend(BackendError::Validation(errors)) => subject.name_fields()
                .iter()
                .find_map(|field| errors.first(field))
                .unwrap_or(subject.generic_failure())
                .to_string(),
            SubmitError::Backend(BackendError::Decode(_)) => DECODE_FAILURE.to_string(),
            SubmitError::Backend(e) if e.is_transport() => CONNECTIVITY_FAILURE.to_string(),
            SubmitError::Backend(_) => subject.generic_failure().to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::error::FieldErrors;
    use super::*;

    #[test]
    fn smoke() {
        let subject = Subject::Reference(ReferenceKind::Skill);
        let err = SubmitError::from(BackendError::Validation(FieldErrors::from([
            ("name", "skill with this name already exists."),
        ])));
        assert_eq!(err.message(subject), "skill with this name already exists.");

        let err = SubmitError::from(BackendError::Validation(FieldErrors::from([
            ("detail", "something else"),
        ])));
        assert_eq!(err.message(subject), "An error occurred while adding the skill.");

        let err = SubmitError::from(BackendError::Status(500));
        assert_eq!(err.message(subject), "An error occurred while adding the skill.");

        let err = SubmitError::from(BackendError::Transport("refused".to_string()));
        assert_eq!(err.message(subject), CONNECTIVITY_FAILURE);

        // a readable status with an unreadable body is not a connection problem
        let err = SubmitError::from(BackendError::Decode("expected value".to_string()));
        assert_eq!(err.message(subject), DECODE_FAILURE);

        let err = SubmitError::from(ValueError::Required("Name"));
        assert_eq!(err.message(subject), "Name is required.");
    }

    #[test]
    fn employee_name_fields() {
        let err = SubmitError::from(BackendError::Validation(FieldErrors::from([
            ("email", "Enter a valid email address."),
            ("last_name", "This field may not be blank."),
        ])));
        assert_eq!(err.message(Subject::Employee), "This field may not be blank.");

        let err = SubmitError::from(BackendError::Validation(FieldErrors::from([
            ("email", "Enter a valid email address."),
        ])));
        assert_eq!(err.message(Subject::Employee), EMPLOYEE_FAILURE);
    }
}
