use http::status::StatusCode;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    #[error("404 Not Found")]
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn not_found() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "404 Not Found");
    }
}
