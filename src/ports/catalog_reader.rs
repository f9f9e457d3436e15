//! Catalog reader port.
//!
//! Every method only ever sees active rows; inactive accommodations and
//! activities behave exactly like missing ones.

use async_trait::async_trait;

use crate::domain::catalog::{Accommodation, Activity};
use crate::domain::foundation::{AccommodationId, ActivityId, DomainError};

/// Read-only port over the accommodation and activity tables.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// Active accommodations, cheapest first.
    async fn list_accommodations(&self) -> Result<Vec<Accommodation>, DomainError>;

    /// A single active accommodation.
    async fn get_accommodation(
        &self,
        id: AccommodationId,
    ) -> Result<Option<Accommodation>, DomainError>;

    /// Active activities ordered by category then price, optionally
    /// restricted to one category.
    async fn list_activities(&self, category: Option<&str>) -> Result<Vec<Activity>, DomainError>;

    /// A single active activity.
    async fn get_activity(&self, id: ActivityId) -> Result<Option<Activity>, DomainError>;

    /// Distinct categories of active activities, alphabetically.
    async fn list_categories(&self) -> Result<Vec<String>, DomainError>;

    /// Active activities whose id is in `ids`, ordered by id.
    ///
    /// Each matching activity appears once regardless of how often its id is
    /// repeated. Unknown or inactive ids are skipped.
    async fn find_activities(&self, ids: &[ActivityId]) -> Result<Vec<Activity>, DomainError>;
}
