use async_trait::async_trait;
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
        NewReference,
        Reference,
        ReferenceKind,
        References,
    },
};
use serde::{de::DeserializeOwned, Serialize};
use crate::conf::Config;

/// The remote REST API reached over HTTP.
#[derive(Clone, Debug)]
pub struct HttpPlatform {
    base: String,
    client: reqwest::Client,
}

fn transport(e: reqwest::Error) -> BackendError {
    if e.is_decode() {
        BackendError::Decode(e.to_string())
    } else {
        BackendError::Transport(e.to_string())
    }
}

#[cfg(feature = "csr")]
fn origin() -> Option<String> {
    leptos::prelude::window().location().origin().ok()
}

#[cfg(not(feature = "csr"))]
fn origin() -> Option<String> {
    None
}

impl From<&Config> for HttpPlatform {
    fn from(config: &Config) -> Self {
        Self::new(config.resolve(origin().as_deref()))
    }
}

impl HttpPlatform {
    pub fn new(base: String) -> Self {
        Self {
            base,
            client: reqwest::Client::new(),
        }
    }

    /// `path` is an API path such as `/employees/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    fn employee_url(&self, id: i64) -> String {
        self.url(&format!("/employees/{id}/"))
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, BackendError> {
        let response = request.send()
            .await
            .map_err(transport)?;
        let status = response.status();
        if status.is_success() {
            response.json::<T>()
                .await
                .map_err(|e| BackendError::Decode(e.to_string()))
        } else {
            let body = response.text()
                .await
                .unwrap_or_default();
            log::debug!("request failed with {status}: {body}");
            Err(BackendError::from_status_body(status.as_u16(), &body))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, BackendError> {
        log::trace!("GET {url}");
        self.request_json(self.client.get(url)).await
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::trace!("POST {url}");
        self.request_json(self.client.post(url).json(body)).await
    }

    async fn put_json<B, T>(&self, url: &str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::trace!("PUT {url}");
        self.request_json(self.client.put(url).json(body)).await
    }
}

#[async_trait(?Send)]
impl EmployeeBackend for HttpPlatform {
    async fn list_employees(
        &self,
        search: Option<&str>,
    ) -> Result<Employees, BackendError> {
        let url = self.url("/employees/");
        let mut request = self.client.get(&url);
        if let Some(search) = search {
            request = request.query(&[("search", search)]);
        }
        log::trace!("GET {url} search={search:?}");
        self.request_json(request).await
    }

    async fn get_employee(
        &self,
        id: i64,
    ) -> Result<Employee, BackendError> {
        self.get_json(&self.employee_url(id)).await
    }

    async fn create_employee(
        &self,
        payload: &EmployeePayload,
    ) -> Result<Employee, BackendError> {
        self.post_json(&self.url("/employees/"), payload).await
    }

    async fn update_employee(
        &self,
        id: i64,
        payload: &EmployeePayload,
    ) -> Result<Employee, BackendError> {
        self.put_json(&self.employee_url(id), payload).await
    }
}

#[async_trait(?Send)]
impl ReferenceBackend for HttpPlatform {
    async fn list_references(
        &self,
        kind: ReferenceKind,
    ) -> Result<References, BackendError> {
        self.get_json(&self.url(kind.collection_path())).await
    }

    async fn create_reference(
        &self,
        kind: ReferenceKind,
        name: &str,
    ) -> Result<Reference, BackendError> {
        self.post_json(&self.url(kind.collection_path()), &NewReference::from(name)).await
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn urls() {
        let platform = HttpPlatform::from(&Config::new(Some("http://localhost:8000/api/")));
        assert_eq!(platform.url("/employees/"), "http://localhost:8000/api/employees/");
        assert_eq!(platform.employee_url(7), "http://localhost:8000/api/employees/7/");
        assert_eq!(
            platform.url(ReferenceKind::Certification.collection_path()),
            "http://localhost:8000/api/certifications/",
        );
    }
}
