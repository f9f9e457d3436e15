//! Shared state for every router.

use std::sync::Arc;

use crate::application::{
    CalculateQuoteHandler, CreateBookingHandler, GetAccommodationHandler, GetActivityHandler,
    GetBookingHandler, ListAccommodationsHandler, ListActivitiesHandler, ListBookingsHandler,
    ListCategoriesHandler, ListPackagesHandler, UpdateBookingStatusHandler,
};
use crate::config::FeatureFlags;
use crate::ports::{BookingRepository, CatalogReader};

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogReader>,
    pub bookings: Arc<dyn BookingRepository>,
    pub features: FeatureFlags,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogReader>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self {
            catalog,
            bookings,
            features: FeatureFlags::default(),
        }
    }

    pub fn with_features(mut self, features: FeatureFlags) -> Self {
        self.features = features;
        self
    }

    pub fn list_accommodations_handler(&self) -> ListAccommodationsHandler {
        ListAccommodationsHandler::new(self.catalog.clone())
    }

    pub fn get_accommodation_handler(&self) -> GetAccommodationHandler {
        GetAccommodationHandler::new(self.catalog.clone())
    }

    pub fn list_activities_handler(&self) -> ListActivitiesHandler {
        ListActivitiesHandler::new(self.catalog.clone())
    }

    pub fn get_activity_handler(&self) -> GetActivityHandler {
        GetActivityHandler::new(self.catalog.clone())
    }

    pub fn list_categories_handler(&self) -> ListCategoriesHandler {
        ListCategoriesHandler::new(self.catalog.clone())
    }

    pub fn list_packages_handler(&self) -> ListPackagesHandler {
        ListPackagesHandler::default()
    }

    pub fn calculate_quote_handler(&self) -> CalculateQuoteHandler {
        CalculateQuoteHandler::new(self.catalog.clone())
    }

    pub fn create_booking_handler(&self) -> CreateBookingHandler {
        CreateBookingHandler::new(self.bookings.clone())
    }

    pub fn get_booking_handler(&self) -> GetBookingHandler {
        GetBookingHandler::new(self.bookings.clone())
    }

    pub fn list_bookings_handler(&self) -> ListBookingsHandler {
        ListBookingsHandler::new(self.bookings.clone())
    }

    pub fn update_booking_status_handler(&self) -> UpdateBookingStatusHandler {
        UpdateBookingStatusHandler::new(self.bookings.clone())
            .with_strict_transitions(self.features.strict_status_transitions)
    }
}
