use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error, PartialEq)]
pub enum CustomersError {
    #[error("Could not find resource")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Customer {0} was modified by another request")]
    Conflict(i64),

    #[error("A server error occurred")]
    DatabaseError,

    #[error("Unexpected error occurred")]
    UnexpectedError,
}

#[derive(Debug, Serialize)]
struct Messages(Vec<String>);

impl From<Vec<&String>> for Messages {
    fn from(s: Vec<&String>) -> Self {
        Self(s.iter().map(|s| s.to_string()).collect::<Vec<String>>())
    }
}

impl ResponseError for CustomersError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_)
            | Self::DatabaseError
            | Self::UnexpectedError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::NotFound => HttpResponse::NotFound().finish(),
            Self::BadRequest(error) => {
                HttpResponse::BadRequest().json(Messages::from(vec![error]))
            }
            Self::Conflict(_) => {
                HttpResponse::InternalServerError().json(Messages(vec![self.to_string()]))
            }
            Self::DatabaseError | Self::UnexpectedError => {
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}

impl From<sqlx::Error> for CustomersError {
    fn from(e: sqlx::Error) -> CustomersError {
        error!(err = ?e, "SQLx error occurred");
        CustomersError::DatabaseError
    }
}

impl From<serde_json::Error> for CustomersError {
    fn from(e: serde_json::Error) -> CustomersError {
        use serde_json::error::Category::*;
        debug!(err = ?e, "JSON Serde error occurred");

        match e.classify() {
            Syntax | Data | Eof => CustomersError::BadRequest(e.to_string()),
            Io => CustomersError::UnexpectedError,
        }
    }
}
