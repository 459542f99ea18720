use chrono::NaiveDate;
use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found for this id: {id}")]
    UserNotFound { id: u64 },

    #[error("User is under the minimum age: {age} < {minimum}")]
    UnderMinimumAge { age: u32, minimum: u32 },

    #[error("User can't change birth date")]
    BirthDateImmutable,

    #[error("Field '{field}' not found on User")]
    UnknownField { field: String },

    #[error("fromDate {from} must be strictly before toDate {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn user_not_found(id: u64) -> Self {
        Self::UserNotFound { id }
    }

    pub fn under_minimum_age(age: u32, minimum: u32) -> Self {
        Self::UnderMinimumAge { age, minimum }
    }

    pub fn birth_date_immutable() -> Self {
        Self::BirthDateImmutable
    }

    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    pub fn invalid_date_range(from: NaiveDate, to: NaiveDate) -> Self {
        Self::InvalidDateRange { from, to }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
