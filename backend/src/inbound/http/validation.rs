//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every validation failure is an `invalid_request` error whose details name
//! the offending field and a stable sub-code, for example
//! `{"field": "email", "code": "missing_field"}`.

use serde_json::json;

use crate::domain::{Error, PersonValidationError, UserValidationError};

/// Validation sub-codes reported under `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidValue,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidValue => "invalid_value",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

fn field_error(field: &str, code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {field}"),
    )
}

/// Unwrap an optional body field or report it as missing.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn user_validation_error(err: UserValidationError) -> Error {
    field_error(err.field(), ErrorCode::InvalidValue, err.to_string())
}

pub(crate) fn person_validation_error(err: PersonValidationError) -> Error {
    field_error(err.field(), ErrorCode::InvalidValue, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainCode;
    use rstest::rstest;

    const EMAIL: FieldName = FieldName::new("email");

    #[rstest]
    fn missing_fields_name_the_field() {
        let err = require::<String>(None, EMAIL).expect_err("missing");

        assert_eq!(err.code(), DomainCode::InvalidRequest);
        assert_eq!(err.message(), "missing required field: email");
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "email", "code": "missing_field" }))
        );
    }

    #[rstest]
    fn present_fields_pass_through() {
        assert_eq!(require(Some(3), EMAIL).expect("present"), 3);
    }

    #[rstest]
    #[case(UserValidationError::InvalidEmail, "email")]
    #[case(UserValidationError::EmptyPassword, "password")]
    fn user_validation_reports_field(#[case] err: UserValidationError, #[case] field: &str) {
        let error = user_validation_error(err);
        assert_eq!(
            error.details(),
            Some(&json!({ "field": field, "code": "invalid_value" }))
        );
    }

    #[rstest]
    fn person_validation_keeps_the_domain_message() {
        let error = person_validation_error(PersonValidationError::EmptyName);
        assert_eq!(error.message(), "name must not be empty");
    }
}
