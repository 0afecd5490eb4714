use async_trait::async_trait;
use crate::{
    employee::{
        Employee,
        Employees,
        payload::EmployeePayload,
    },
    error::BackendError,
    reference::{
        Reference,
        ReferenceKind,
        References,
    },
};

// Futures produced by a browser HTTP client are not `Send`, hence `?Send`
// throughout.

#[async_trait(?Send)]
pub trait EmployeeBackend {
    /// `GET /employees/`, optionally filtered by `?search=`.
    async fn list_employees(
        &self,
        search: Option<&str>,
    ) -> Result<Employees, BackendError>;
    async fn get_employee(
        &self,
        id: i64,
    ) -> Result<Employee, BackendError>;
    async fn create_employee(
        &self,
        payload: &EmployeePayload,
    ) -> Result<Employee, BackendError>;
    async fn update_employee(
        &self,
        id: i64,
        payload: &EmployeePayload,
    ) -> Result<Employee, BackendError>;
}

#[async_trait(?Send)]
pub trait ReferenceBackend {
    async fn list_references(
        &self,
        kind: ReferenceKind,
    ) -> Result<References, BackendError>;
    async fn create_reference(
        &self,
        kind: ReferenceKind,
        name: &str,
    ) -> Result<Reference, BackendError>;
}

/// Everything the views need from the remote API.
pub trait Platform: EmployeeBackend + ReferenceBackend {}

impl<P: EmployeeBackend + ReferenceBackend> Platform for P {}
