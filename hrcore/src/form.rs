//! The load and submit workflows behind each form, independent of any
//! rendering.  Views call these with whatever [`Platform`] they hold and
//! act on the outcome (navigate to the returned href, or show
//! [`SubmitError::message`]).

use crate::{
    editor::{EmployeeDraft, Mode},
    employee::Employees,
    error::{BackendError, ValueError},
    platform::{EmployeeBackend, ReferenceBackend},
    reference::{ReferenceKind, References},
    route,
};

mod message;
pub use message::{
    Subject,
    SubmitError,
    CONNECTIVITY_FAILURE,
    DECODE_FAILURE,
    EMPLOYEE_FAILURE,
};

/// Options for one association select.  A failed fetch is logged and
/// leaves the options empty; it never blocks the rest of the form.
pub async fn load_references(
    platform: &impl ReferenceBackend,
    kind: ReferenceKind,
) -> References {
    match platform.list_references(kind).await {
        Ok(references) => references,
        Err(e) => {
            log::warn!("failed to load {kind} options: {e}");
            References::default()
        }
    }
}

/// The initial editor state for the mode.
pub async fn load_draft(
    platform: &impl EmployeeBackend,
    mode: Mode,
) -> Result<EmployeeDraft, BackendError> {
    match mode {
        Mode::Create => Ok(EmployeeDraft::default()),
        Mode::Edit(id) => Ok(platform.get_employee(id).await?.into()),
    }
}

/// Check, shape and send the draft; on success returns the href of the
/// record's detail view.  The draft is never modified.
pub async fn submit_employee(
    platform: &impl EmployeeBackend,
    mode: Mode,
    draft: &EmployeeDraft,
) -> Result<String, SubmitError> {
    if let Some(label) = draft.missing_required() {
        return Err(ValueError::Required(label).into());
    }
    let payload = draft.to_payload();
    let href = match mode {
        Mode::Create => {
            let employee = platform.create_employee(&payload).await?;
            log::info!("created employee {}", employee.id);
            employee.href()
        }
        Mode::Edit(id) => {
            platform.update_employee(id, &payload).await?;
            log::info!("updated employee {id}");
            route::employee_href(id)
        }
    };
    Ok(href)
}

/// Create a reference entity; on success returns the href of the root view.
pub async fn submit_reference(
    platform: &impl ReferenceBackend,
    kind: ReferenceKind,
    name: &str,
) -> Result<String, SubmitError> {
    if name.trim().is_empty() {
        return Err(ValueError::Required("Name").into());
    }
    let reference = platform.create_reference(kind, name).await?;
    log::info!("created {kind} {}: {:?}", reference.id, reference.name);
    Ok(route::EMPLOYEE_LISTING.to_string())
}

/// Employees matching the query; an empty query issues no request.
pub async fn search(
    platform: &impl EmployeeBackend,
    query: &str,
) -> Result<Employees, BackendError> {
    if query.trim().is_empty() {
        return Ok(Employees::default());
    }
    log::trace!("searching employees for {query:?}");
    platform.list_employees(Some(query)).await
}
