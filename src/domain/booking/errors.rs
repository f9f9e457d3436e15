//! Booking-specific error types.

use crate::domain::foundation::{BookingId, DomainError, ErrorCode, ValidationError};

use super::BookingStatus;

/// Booking-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// A required field was missing or malformed.
    InvalidInput(ValidationError),
    /// Booking was not found.
    NotFound(BookingId),
    /// Requested status is not one of the known values.
    InvalidStatus(String),
    /// Transition rejected by the strict lifecycle policy.
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
    /// Store failure; nothing was written.
    Infrastructure(String),
}

impl BookingError {
    pub fn not_found(id: BookingId) -> Self {
        BookingError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        BookingError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::InvalidInput(_) => ErrorCode::ValidationFailed,
            BookingError::NotFound(_) => ErrorCode::BookingNotFound,
            BookingError::InvalidStatus(_) => ErrorCode::InvalidStatus,
            BookingError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            BookingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            BookingError::InvalidInput(err) => format!("Invalid input: {}", err),
            BookingError::NotFound(id) => format!("Booking not found: {}", id),
            BookingError::InvalidStatus(status) => format!("Invalid status: {}", status),
            BookingError::InvalidTransition { from, to } => {
                format!("Cannot change booking status from {} to {}", from, to)
            }
            BookingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BookingError {}

impl From<ValidationError> for BookingError {
    fn from(err: ValidationError) -> Self {
        BookingError::InvalidInput(err)
    }
}

impl From<DomainError> for BookingError {
    fn from(err: DomainError) -> Self {
        BookingError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_variants() {
        assert_eq!(
            BookingError::not_found(BookingId::new(1)).code(),
            ErrorCode::BookingNotFound
        );
        assert_eq!(
            BookingError::InvalidStatus("x".into()).code(),
            ErrorCode::InvalidStatus
        );
        assert_eq!(
            BookingError::from(ValidationError::empty_field("userId")).code(),
            ErrorCode::ValidationFailed
        );
    }

    #[test]
    fn domain_errors_become_infrastructure() {
        let err: BookingError = DomainError::database("connection reset").into();
        assert!(matches!(err, BookingError::Infrastructure(msg) if msg.contains("connection reset")));
    }

    #[test]
    fn transition_message_names_both_states() {
        let err = BookingError::InvalidTransition {
            from: BookingStatus::Completed,
            to: BookingStatus::Pending,
        };
        assert_eq!(err.message(), "Cannot change booking status from completed to pending");
    }
}
