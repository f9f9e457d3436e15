//! PostgreSQL adapters - Database implementations for the ports.
//!
//! - `PostgresCatalogReader` - Active accommodation/activity queries
//! - `PostgresBookingRepository` - Transactional booking writes and reads

mod booking_repository;
mod catalog_reader;

pub use booking_repository::PostgresBookingRepository;
pub use catalog_reader::PostgresCatalogReader;

use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};

use crate::domain::foundation::DomainError;

/// Reads one column, turning decode failures into `DatabaseError`.
fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}
