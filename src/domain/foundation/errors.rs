//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction and form validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    OutOfRange,
    InvalidFormat,
    DuplicateOption,

    // Not found errors
    OptionNotFound,
    ItemNotFound,

    // State errors
    InvalidNavigation,
    LastRowRequired,
    DecisionIncomplete,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::DuplicateOption => "DUPLICATE_OPTION",
            ErrorCode::OptionNotFound => "OPTION_NOT_FOUND",
            ErrorCode::ItemNotFound => "ITEM_NOT_FOUND",
            ErrorCode::InvalidNavigation => "INVALID_NAVIGATION",
            ErrorCode::LastRowRequired => "LAST_ROW_REQUIRED",
            ErrorCode::DecisionIncomplete => "DECISION_INCOMPLETE",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates an error for an option index that does not exist.
    pub fn option_not_found(index: usize) -> Self {
        Self::new(ErrorCode::OptionNotFound, format!("No option at index {}", index))
            .with_detail("index", index.to_string())
    }

    /// Creates an error for an option name already used by another row.
    pub fn duplicate_option(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(
            ErrorCode::DuplicateOption,
            format!("An option named '{}' already exists", name),
        )
        .with_detail("name", name)
    }

    /// Creates an error for an item index that does not exist.
    pub fn item_not_found(list: impl Into<String>, index: usize) -> Self {
        let list = list.into();
        Self::new(
            ErrorCode::ItemNotFound,
            format!("No item at index {} in {}", index, list),
        )
        .with_detail("list", list)
        .with_detail("index", index.to_string())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let (code, field) = match &err {
            ValidationError::EmptyField { field } => (ErrorCode::EmptyField, field.clone()),
            ValidationError::OutOfRange { field, .. } => (ErrorCode::OutOfRange, field.clone()),
            ValidationError::InvalidFormat { field, .. } => (ErrorCode::InvalidFormat, field.clone()),
        };
        DomainError::new(code, err.to_string()).with_detail("field", field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("reasoning");
        assert_eq!(format!("{}", err), "Field 'reasoning' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("weight", 1, 5, 9);
        assert_eq!(
            format!("{}", err),
            "Field 'weight' must be between 1 and 5, got 9"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("path", "unknown route");
        assert_eq!(
            format!("{}", err),
            "Field 'path' has invalid format: unknown route"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::LastRowRequired, "At least one row is required");
        assert_eq!(format!("{}", err), "[LAST_ROW_REQUIRED] At least one row is required");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::DecisionIncomplete, "Decision incomplete")
            .with_detail("field", "choice")
            .with_detail("reason", "blank");

        assert_eq!(err.details.get("field"), Some(&"choice".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"blank".to_string()));
    }

    #[test]
    fn option_not_found_records_index() {
        let err = DomainError::option_not_found(4);
        assert_eq!(err.code, ErrorCode::OptionNotFound);
        assert_eq!(err.details.get("index"), Some(&"4".to_string()));
    }

    #[test]
    fn validation_error_converts_to_domain_error() {
        let err: DomainError = ValidationError::empty_field("next_steps").into();
        assert_eq!(err.code, ErrorCode::EmptyField);
        assert_eq!(err.details.get("field"), Some(&"next_steps".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::OptionNotFound), "OPTION_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::InvalidNavigation), "INVALID_NAVIGATION");
        assert_eq!(format!("{}", ErrorCode::DuplicateOption), "DUPLICATE_OPTION");
    }
}
