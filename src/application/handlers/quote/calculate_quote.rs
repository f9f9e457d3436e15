//! CalculateQuoteHandler - Prices a package selection without persisting it.

use std::sync::Arc;

use crate::domain::foundation::{AccommodationId, ActivityId, ValidationError};
use crate::domain::package::PackageRegistry;
use crate::domain::pricing::{PricingEngine, Quote, QuoteError, QuoteOptions};
use crate::ports::CatalogReader;

/// Command to compute a quote.
#[derive(Debug, Clone)]
pub struct CalculateQuoteCommand {
    pub package_id: String,
    /// Resolved only after the package, so a missing id reports as not found.
    pub accommodation_id: Option<AccommodationId>,
    pub activity_ids: Vec<ActivityId>,
    pub num_people: i64,
    pub options: QuoteOptions,
}

/// Handler resolving catalog data and running the pricing engine.
pub struct CalculateQuoteHandler {
    catalog: Arc<dyn CatalogReader>,
    registry: PackageRegistry,
    engine: PricingEngine,
}

impl CalculateQuoteHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self {
            catalog,
            registry: PackageRegistry,
            engine: PricingEngine,
        }
    }

    pub async fn handle(&self, cmd: CalculateQuoteCommand) -> Result<Quote, QuoteError> {
        let num_people = u32::try_from(cmd.num_people)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "numPeople",
                    format!("must be between 1 and {}", u32::MAX),
                )
            })?;

        let package = self
            .registry
            .lookup(&cmd.package_id)
            .ok_or_else(|| QuoteError::InvalidPackage(cmd.package_id.clone()))?;

        let accommodation_id = cmd
            .accommodation_id
            .ok_or(QuoteError::AccommodationNotFound(None))?;
        let accommodation = self
            .catalog
            .get_accommodation(accommodation_id)
            .await?
            .ok_or(QuoteError::AccommodationNotFound(Some(accommodation_id)))?;

        // Unknown or inactive activities simply drop out of the quote.
        let activities = if cmd.activity_ids.is_empty() {
            Vec::new()
        } else {
            self.catalog.find_activities(&cmd.activity_ids).await?
        };

        self.engine
            .quote(package, &accommodation, &activities, num_people, cmd.options)
    }
}
