//! Accommodation queries.

use std::sync::Arc;

use crate::domain::catalog::{Accommodation, CatalogError};
use crate::domain::foundation::AccommodationId;
use crate::ports::CatalogReader;

/// Handler listing active accommodations, cheapest first.
pub struct ListAccommodationsHandler {
    catalog: Arc<dyn CatalogReader>,
}

impl ListAccommodationsHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<Accommodation>, CatalogError> {
        Ok(self.catalog.list_accommodations().await?)
    }
}

/// Query for a single accommodation.
#[derive(Debug, Clone, Copy)]
pub struct GetAccommodationQuery {
    pub accommodation_id: AccommodationId,
}

/// Handler fetching one active accommodation.
pub struct GetAccommodationHandler {
    catalog: Arc<dyn CatalogReader>,
}

impl GetAccommodationHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetAccommodationQuery) -> Result<Accommodation, CatalogError> {
        self.catalog
            .get_accommodation(query.accommodation_id)
            .await?
            .ok_or(CatalogError::AccommodationNotFound(query.accommodation_id))
    }
}
