//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
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
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
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
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Not found errors
    AlternativeNotFound,
    FactorNotFound,

    // State errors
    DuplicateId,
    IndexOutOfBounds,
    GestureAlreadyActive,
    GestureMismatch,
    NoActiveGesture,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::AlternativeNotFound => "ALTERNATIVE_NOT_FOUND",
            ErrorCode::FactorNotFound => "FACTOR_NOT_FOUND",
            ErrorCode::DuplicateId => "DUPLICATE_ID",
            ErrorCode::IndexOutOfBounds => "INDEX_OUT_OF_BOUNDS",
            ErrorCode::GestureAlreadyActive => "GESTURE_ALREADY_ACTIVE",
            ErrorCode::GestureMismatch => "GESTURE_MISMATCH",
            ErrorCode::NoActiveGesture => "NO_ACTIVE_GESTURE",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
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

    /// Creates an alternative-not-found error for the given id.
    pub fn alternative_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(
            ErrorCode::AlternativeNotFound,
            format!("Alternative '{}' is not on the board", id),
        )
        .with_detail("alternative_id", id)
    }

    /// Creates a factor-not-found error for the given id.
    pub fn factor_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(
            ErrorCode::FactorNotFound,
            format!("Factor '{}' is not on the board", id),
        )
        .with_detail("factor_id", id)
    }

    /// Creates a duplicate-id error for an entity kind.
    pub fn duplicate_id(kind: &str, id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(
            ErrorCode::DuplicateId,
            format!("{} '{}' is already on the board", kind, id),
        )
        .with_detail("id", id)
    }

    /// Creates an index-out-of-bounds error for a reorder command.
    pub fn index_out_of_bounds(field: &str, index: usize, len: usize) -> Self {
        Self::new(
            ErrorCode::IndexOutOfBounds,
            format!("Index {} is out of range for {} of length {}", index, field, len),
        )
        .with_detail("field", field.to_string())
        .with_detail("index", index.to_string())
        .with_detail("len", len.to_string())
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
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        DomainError::new(code, err.to_string())
    }
}
