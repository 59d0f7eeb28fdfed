use actix_web::{
    error::{InternalError, QueryPayloadError},
    HttpRequest, ResponseError,
};

use crate::core::AppError;

/// Render malformed query strings with the same error body as `AppError`
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = req.path(), error = %err, "Rejected malformed request");
    let response = AppError::validation(err.to_string()).error_response();
    InternalError::from_response(err, response).into()
}
