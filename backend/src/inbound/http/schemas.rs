//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework agnostic by not deriving `ToSchema`; the
//! wrappers here mirror their serialised shape for documentation only.

use utoipa::ToSchema;

/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// Missing or malformed input.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No record with the requested id.
    #[schema(rename = "not_found")]
    NotFound,
    /// The email address is already registered.
    #[schema(rename = "conflict")]
    Conflict,
    /// The database is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// Unexpected server failure; the message is redacted.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error envelope returned by every handled failure.
#[derive(ToSchema)]
#[schema(as = Error)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    #[schema(example = "user 7 not found")]
    message: String,
    /// Numeric HTTP status, repeated for clients that only see the body.
    #[schema(example = 404)]
    status_code: u16,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "6f9619ff-8b86-d011-b42d-00cf4fc964ff")]
    trace_id: Option<String>,
    /// Field-level context, e.g. `{"field": "email", "code": "missing_field"}`.
    details: Option<serde_json::Value>,
}
