//! JSON error responses shared by every resource.
//!
//! Every failure is rendered as `{"message": ...}`. Validation failures carry
//! an object keyed by the offending field; everything else carries a string.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use sea_orm::DbErr;
use serde_json::json;
use std::collections::BTreeMap;
use validator::{ValidationError, ValidationErrors};

#[derive(Debug, Display)]
pub enum ApiError {
    /// One or more required body fields are absent.
    #[display(fmt = "Invalid request: {}", _0)]
    Validation(ValidationErrors),
    /// The body is not JSON or a field has the wrong type.
    #[display(fmt = "Malformed request body: {}", _0)]
    MalformedBody(String),
    #[display(fmt = "{} {} not found", resource, id)]
    NotFound { resource: &'static str, id: i32 },
    /// No route matched, or the path id is not an integer.
    #[display(fmt = "The requested URL was not found on the server.")]
    RouteNotFound,
    #[display(fmt = "Storage error: {}", _0)]
    Storage(DbErr),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        ApiError::NotFound { resource, id }
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        log::error!("Database error: {}", err);
        ApiError::Storage(err)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Validation(errors) => json!(field_messages(errors)),
            ApiError::MalformedBody(detail) => json!({ "body": detail }),
            // Storage details stay in the log.
            ApiError::Storage(_) => json!("Internal server error"),
            other => json!(other.to_string()),
        };

        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}

/// First message per field, in field order.
fn field_messages(errors: &ValidationErrors) -> BTreeMap<&'static str, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| errs.first().map(|err| (field, describe(err))))
        .collect()
}

fn describe(err: &ValidationError) -> String {
    match (&err.message, err.code.as_ref()) {
        (Some(message), _) => message.to_string(),
        (None, "required") => "Missing required parameter".to_string(),
        (None, code) => code.to_string(),
    }
}

/// Fallback for unmatched routes.
pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::RouteNotFound)
}
