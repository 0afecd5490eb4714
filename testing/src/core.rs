use async_trait::async_trait;
use mockall::mock;
use hrcore::{
    employee::{
        Employee,
        Employees,
        payload::EmployeePayload,
    },
    error::BackendError,
    platform::{
        EmployeeBackend,
        ReferenceBackend,
    },
    reference::{
        Reference,
        ReferenceKind,
        References,
    },
};

mock! {
    pub Platform {
        pub async fn employee_list(
            &self,
            search: Option<String>,
        ) -> Result<Employees, BackendError>;
        pub async fn employee_get(
            &self,
            id: i64,
        ) -> Result<Employee, BackendError>;
        pub async fn employee_create(
            &self,
            payload: &EmployeePayload,
        ) -> Result<Employee, BackendError>;
        pub async fn employee_update(
            &self,
            id: i64,
            payload: &EmployeePayload,
        ) -> Result<Employee, BackendError>;
        pub async fn reference_list(
            &self,
            kind: ReferenceKind,
        ) -> Result<References, BackendError>;
        pub async fn reference_create(
            &self,
            kind: ReferenceKind,
            name: &str,
        ) -> Result<Reference, BackendError>;
    }
}

#[async_trait(?Send)]
impl EmployeeBackend for MockPlatform {
    async fn list_employees(
        &self,
        search: Option<&str>,
    ) -> Result<Employees, BackendError> {
        self.employee_list(search.map(str::to_string)).await
    }
    async fn get_employee(
        &self,
        id: i64,
    ) -> Result<Employee, BackendError> {
        self.employee_get(id).await
    }
    async fn create_employee(
        &self,
        payload: &EmployeePayload,
    ) -> Result<Employee, BackendError> {
        self.employee_create(payload).await
    }
    async fn update_employee(
        &self,
        id: i64,
        payload: &EmployeePayload,
    ) -> Result<Employee, BackendError> {
        self.employee_update(id, payload).await
    }
}

#[async_trait(?Send)]
impl ReferenceBackend for MockPlatform {
    async fn list_references(
        &self,
        kind: ReferenceKind,
    ) -> Result<References, BackendError> {
        self.reference_list(kind).await
    }
    async fn create_reference(
        &self,
        kind: ReferenceKind,
        name: &str,
    ) -> Result<Reference, BackendError> {
        self.reference_create(kind, name).await
    }
}
