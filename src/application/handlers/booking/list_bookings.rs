//! ListBookingsHandler - Query handler for the booking list.

use std::sync::Arc;

use crate::domain::booking::{Booking, BookingError, BookingListFilter, BookingStatus};
use crate::ports::BookingRepository;

/// Raw listing parameters; `status` is matched exactly against known values.
#[derive(Debug, Clone, Default)]
pub struct ListBookingsQuery {
    pub status: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

pub struct ListBookingsHandler {
    repository: Arc<dyn BookingRepository>,
}

impl ListBookingsHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListBookingsQuery) -> Result<Vec<Booking>, BookingError> {
        let status = match query.status.as_deref().filter(|s| !s.is_empty()) {
            None => None,
            Some(raw) => match raw.parse::<BookingStatus>() {
                Ok(status) => Some(status),
                // No stored booking can carry an unknown status.
                Err(_) => return Ok(Vec::new()),
            },
        };

        let filter = BookingListFilter::new(status, query.limit, query.offset);
        Ok(self.repository.list(&filter).await?)
    }
}
