//! PostgreSQL implementation of CatalogReader.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::catalog::{Accommodation, Activity};
use crate::domain::foundation::{AccommodationId, ActivityId, DomainError, Money, Timestamp};
use crate::ports::CatalogReader;

use super::column;

const ACCOMMODATION_COLUMNS: &str = "id, name, type, description, price_per_night, max_guests, \
     amenities, image_url, is_active, created_at";

const ACTIVITY_COLUMNS: &str = "id, name, category, description, price, duration_minutes, \
     max_participants, location, image_url, is_active, created_at";

/// PostgreSQL implementation of CatalogReader.
#[derive(Clone)]
pub struct PostgresCatalogReader {
    pool: PgPool,
}

impl PostgresCatalogReader {
    /// Creates a new PostgresCatalogReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogReader for PostgresCatalogReader {
    async fn list_accommodations(&self) -> Result<Vec<Accommodation>, DomainError> {
        let sql = format!(
            "SELECT {} FROM accommodations WHERE is_active = true ORDER BY price_per_night ASC, id ASC",
            ACCOMMODATION_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch accommodations: {}", e)))?;

        rows.iter().map(row_to_accommodation).collect()
    }

    async fn get_accommodation(
        &self,
        id: AccommodationId,
    ) -> Result<Option<Accommodation>, DomainError> {
        let sql = format!(
            "SELECT {} FROM accommodations WHERE id = $1 AND is_active = true",
            ACCOMMODATION_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch accommodation: {}", e)))?;

        row.as_ref().map(row_to_accommodation).transpose()
    }

    async fn list_activities(&self, category: Option<&str>) -> Result<Vec<Activity>, DomainError> {
        let sql = format!(
            "SELECT {} FROM activities \
             WHERE is_active = true AND ($1::text IS NULL OR category = $1) \
             ORDER BY category ASC, price ASC, id ASC",
            ACTIVITY_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch activities: {}", e)))?;

        rows.iter().map(row_to_activity).collect()
    }

    async fn get_activity(&self, id: ActivityId) -> Result<Option<Activity>, DomainError> {
        let sql = format!(
            "SELECT {} FROM activities WHERE id = $1 AND is_active = true",
            ACTIVITY_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch activity: {}", e)))?;

        row.as_ref().map(row_to_activity).transpose()
    }

    async fn list_categories(&self) -> Result<Vec<String>, DomainError> {
        let categories: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT category FROM activities WHERE is_active = true ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch categories: {}", e)))?;

        Ok(categories.into_iter().map(|(c,)| c).collect())
    }

    async fn find_activities(&self, ids: &[ActivityId]) -> Result<Vec<Activity>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw_ids: Vec<i64> = ids.iter().map(ActivityId::value).collect();
        let sql = format!(
            "SELECT {} FROM activities WHERE id = ANY($1) AND is_active = true ORDER BY id ASC",
            ACTIVITY_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(raw_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch activities: {}", e)))?;

        rows.iter().map(row_to_activity).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_accommodation(row: &PgRow) -> Result<Accommodation, DomainError> {
    Ok(Accommodation {
        id: AccommodationId::new(column(row, "id")?),
        name: column(row, "name")?,
        kind: column(row, "type")?,
        description: column(row, "description")?,
        price_per_night: Money::new(column(row, "price_per_night")?),
        max_guests: column(row, "max_guests")?,
        amenities: column(row, "amenities")?,
        image_url: column(row, "image_url")?,
        is_active: column(row, "is_active")?,
        created_at: Timestamp::from_datetime(column(row, "created_at")?),
    })
}

fn row_to_activity(row: &PgRow) -> Result<Activity, DomainError> {
    Ok(Activity {
        id: ActivityId::new(column(row, "id")?),
        name: column(row, "name")?,
        category: column(row, "category")?,
        description: column(row, "description")?,
        price: Money::new(column(row, "price")?),
        duration_minutes: column(row, "duration_minutes")?,
        max_participants: column(row, "max_participants")?,
        location: column(row, "location")?,
        image_url: column(row, "image_url")?,
        is_active: column(row, "is_active")?,
        created_at: Timestamp::from_datetime(column(row, "created_at")?),
    })
}
