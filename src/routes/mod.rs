mod customers;
mod health_check;

use actix_web::{
    error::{JsonPayloadError, PathError},
    HttpRequest,
};
use tracing::warn;

use crate::CustomersError;

pub use customers::*;
pub use health_check::health_check;

/// Malformed or incomplete request bodies are reported as a 400 before any
/// store access happens
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), error = %err, "rejected request body");
    let error = match err {
        JsonPayloadError::Deserialize(e) => CustomersError::from(e),
        other => CustomersError::BadRequest(other.to_string()),
    };
    error.into()
}

/// Route parameters that don't parse, e.g. `/customers/abc`, are a 400
/// rather than actix's default 404
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), error = %err, "rejected route parameter");
    CustomersError::BadRequest(err.to_string()).into()
}
