//! Quote-specific error types.

use thiserror::Error;

use crate::domain::foundation::{AccommodationId, DomainError, ValidationError};

/// Errors raised while computing a quote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Invalid package id: {0}")]
    InvalidPackage(String),

    /// `None` when the request named no accommodation at all.
    #[error("Accommodation not found")]
    AccommodationNotFound(Option<AccommodationId>),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Quote total exceeds the supported amount")]
    AmountOutOfRange,

    #[error("Quote calculation failed: {0}")]
    Infrastructure(String),
}

impl From<DomainError> for QuoteError {
    fn from(err: DomainError) -> Self {
        QuoteError::Infrastructure(err.to_string())
    }
}
