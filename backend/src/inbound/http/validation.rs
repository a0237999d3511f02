//! Shared validation helpers for inbound HTTP adapters.
//!
//! Path identifiers and decoder failures all surface as
//! [`ErrorCode::InvalidRequest`](crate::domain::ErrorCode::InvalidRequest)
//! with a `details` object naming the offending field.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::web::{JsonConfig, QueryConfig};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, RecipeId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidRecipeId,
    InvalidBody,
    InvalidQuery,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidRecipeId => "invalid_recipe_id",
            ErrorCode::InvalidBody => "invalid_body",
            ErrorCode::InvalidQuery => "invalid_query",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

/// Parse a recipe identifier taken from the request path.
pub(crate) fn parse_recipe_id(value: String, field: FieldName) -> Result<RecipeId, Error> {
    value.parse::<RecipeId>().map_err(|err| {
        ValidationError::new(field.as_str(), err.to_string())
            .with_value(ErrorCode::InvalidRecipeId, value)
    })
}

fn invalid_body_error(err: &JsonPayloadError) -> Error {
    ValidationError::new("body", err.to_string()).with_code(ErrorCode::InvalidBody)
}

fn invalid_query_error(err: &QueryPayloadError) -> Error {
    ValidationError::new("query", err.to_string()).with_code(ErrorCode::InvalidQuery)
}

/// JSON extractor configuration that reports decode failures as domain
/// errors instead of actix's plain-text default.
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        debug!(error = %err, path = %req.path(), "rejected request body");
        invalid_body_error(&err).into()
    })
}

/// Query extractor configuration matching [`json_config`].
pub fn query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, req: &HttpRequest| {
        debug!(error = %err, path = %req.path(), "rejected query string");
        invalid_query_error(&err).into()
    })
}
