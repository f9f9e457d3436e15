//! Catalog-specific error types.

use thiserror::Error;

use crate::domain::foundation::{AccommodationId, ActivityId, DomainError};

/// Errors raised by catalog queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Accommodation not found: {0}")]
    AccommodationNotFound(AccommodationId),

    #[error("Activity not found: {0}")]
    ActivityNotFound(ActivityId),

    #[error("Catalog store failure: {0}")]
    Infrastructure(String),
}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        CatalogError::Infrastructure(err.to_string())
    }
}
