//! UpdateBookingStatusHandler - Command handler for booking status changes.
//!
//! By default any of the four statuses may be set from any other. With
//! strict transitions enabled the booking lifecycle graph is enforced.

use std::sync::Arc;

use crate::domain::booking::{Booking, BookingError, BookingStatus};
use crate::domain::foundation::{BookingId, StateMachine};
use crate::ports::BookingRepository;

#[derive(Debug, Clone)]
pub struct UpdateBookingStatusCommand {
    pub booking_id: BookingId,
    pub status: Option<String>,
}

pub struct UpdateBookingStatusHandler {
    repository: Arc<dyn BookingRepository>,
    strict_transitions: bool,
}

impl UpdateBookingStatusHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self {
            repository,
            strict_transitions: false,
        }
    }

    /// Enforce the lifecycle graph instead of accepting any known status.
    pub fn with_strict_transitions(mut self, strict: bool) -> Self {
        self.strict_transitions = strict;
        self
    }

    pub async fn handle(&self, cmd: UpdateBookingStatusCommand) -> Result<Booking, BookingError> {
        let raw = cmd.status.unwrap_or_default();
        let target: BookingStatus = raw
            .parse()
            .map_err(|_| BookingError::InvalidStatus(raw.clone()))?;

        let booking = if self.strict_transitions {
            self.transition(cmd.booking_id, target).await?
        } else {
            self.repository
                .update_status(cmd.booking_id, target)
                .await?
                .ok_or_else(|| BookingError::not_found(cmd.booking_id))?
        };

        tracing::info!(booking_id = %booking.id, status = %booking.status, "Booking status changed");

        Ok(booking)
    }

    /// Checks the lifecycle graph, then writes only if the status is still the
    /// one that was checked. A lost race re-checks against the newer status;
    /// the graph only moves forward, so this settles.
    async fn transition(&self, id: BookingId, target: BookingStatus) -> Result<Booking, BookingError> {
        loop {
            let current = self
                .repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| BookingError::not_found(id))?;
            if !current.status.can_transition_to(&target) {
                return Err(BookingError::InvalidTransition {
                    from: current.status,
                    to: target,
                });
            }

            if let Some(booking) = self
                .repository
                .update_status_if(id, current.status, target)
                .await?
            {
                return Ok(booking);
            }
            tracing::debug!(booking_id = %id, "Booking status changed concurrently, re-checking");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryBookingRepository;
    use crate::domain::booking::{
        BookingActivity, BookingListFilter, CreatedBooking, NewBooking, Payment, PriceBreakdown,
    };
    use crate::domain::foundation::{AccommodationId, DomainError, Money, PackageId, UserId};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicBool, Ordering};

    async fn repo_with_pending_booking() -> (Arc<InMemoryBookingRepository>, BookingId) {
        let repo = Arc::new(InMemoryBookingRepository::new());
        let created = repo
            .create(&NewBooking {
                user_id: UserId::new("user-1").unwrap(),
                package_id: PackageId::new("pkg_1night").unwrap(),
                accommodation_id: AccommodationId::new(1),
                activity_ids: vec![],
                check_in: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                check_out: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
                num_people: 1,
                price: PriceBreakdown {
                    total_price: Money::new(349_900),
                    ..PriceBreakdown::default()
                },
            })
            .await
            .unwrap();
        (repo, created.booking.id)
    }

    fn command(id: BookingId, status: &str) -> UpdateBookingStatusCommand {
        UpdateBookingStatusCommand {
            booking_id: id,
            status: Some(status.to_string()),
        }
    }

    #[tokio::test]
    async fn pending_can_jump_straight_to_completed() {
        let (repo, id) = repo_with_pending_booking().await;
        let handler = UpdateBookingStatusHandler::new(repo);

        let booking = handler.handle(command(id, "completed")).await.unwrap();
        assert_eq!(booking.status, BookingStatus::Completed);
    }

    #[tokio::test]
    async fn unknown_status_is_rejected() {
        let (repo, id) = repo_with_pending_booking().await;
        let handler = UpdateBookingStatusHandler::new(repo);

        let err = handler.handle(command(id, "Confirmed")).await.unwrap_err();
        assert_eq!(err, BookingError::InvalidStatus("Confirmed".to_string()));
    }

    #[tokio::test]
    async fn missing_status_is_rejected() {
        let (repo, id) = repo_with_pending_booking().await;
        let handler = UpdateBookingStatusHandler::new(repo);

        let result = handler
            .handle(UpdateBookingStatusCommand {
                booking_id: id,
                status: None,
            })
            .await;
        assert!(matches!(result, Err(BookingError::InvalidStatus(_))));
    }

    #[tokio::test]
    async fn unknown_booking_is_not_found() {
        let handler = UpdateBookingStatusHandler::new(Arc::new(InMemoryBookingRepository::new()));
        let err = handler
            .handle(command(BookingId::new(12), "cancelled"))
            .await
            .unwrap_err();
        assert_eq!(err, BookingError::NotFound(BookingId::new(12)));
    }

    #[tokio::test]
    async fn strict_mode_enforces_lifecycle() {
        let (repo, id) = repo_with_pending_booking().await;
        let handler = UpdateBookingStatusHandler::new(repo).with_strict_transitions(true);

        let err = handler.handle(command(id, "completed")).await.unwrap_err();
        assert_eq!(
            err,
            BookingError::InvalidTransition {
                from: BookingStatus::Pending,
                to: BookingStatus::Completed,
            }
        );

        handler.handle(command(id, "confirmed")).await.unwrap();
        let booking = handler.handle(command(id, "completed")).await.unwrap();
        assert_eq!(booking.status, BookingStatus::Completed);
    }

    #[tokio::test]
    async fn strict_mode_still_reports_missing_booking() {
        let handler = UpdateBookingStatusHandler::new(Arc::new(InMemoryBookingRepository::new()))
            .with_strict_transitions(true);
        let err = handler
            .handle(command(BookingId::new(3), "confirmed"))
            .await
            .unwrap_err();
        assert_eq!(err, BookingError::NotFound(BookingId::new(3)));
    }

    /// Lets another writer cancel the booking right after the first read.
    struct CancelledMidway {
        inner: InMemoryBookingRepository,
        raced: AtomicBool,
    }

    #[async_trait]
    impl BookingRepository for CancelledMidway {
        async fn create(&self, booking: &NewBooking) -> Result<CreatedBooking, DomainError> {
            self.inner.create(booking).await
        }

        async fn find_by_id(&self, id: BookingId) -> Result<Option<Booking>, DomainError> {
            let found = self.inner.find_by_id(id).await?;
            if !self.raced.swap(true, Ordering::SeqCst) {
                self.inner.update_status(id, BookingStatus::Cancelled).await?;
            }
            Ok(found)
        }

        async fn find_activities(&self, id: BookingId) -> Result<Vec<BookingActivity>, DomainError> {
            self.inner.find_activities(id).await
        }

        async fn find_payment(&self, id: BookingId) -> Result<Option<Payment>, DomainError> {
            self.inner.find_payment(id).await
        }

        async fn list(&self, filter: &BookingListFilter) -> Result<Vec<Booking>, DomainError> {
            self.inner.list(filter).await
        }

        async fn update_status(
            &self,
            id: BookingId,
            status: BookingStatus,
        ) -> Result<Option<Booking>, DomainError> {
            self.inner.update_status(id, status).await
        }

        async fn update_status_if(
            &self,
            id: BookingId,
            expected: BookingStatus,
            status: BookingStatus,
        ) -> Result<Option<Booking>, DomainError> {
            self.inner.update_status_if(id, expected, status).await
        }
    }

    #[tokio::test]
    async fn strict_mode_rechecks_after_concurrent_change() {
        let (repo, id) = repo_with_pending_booking().await;
        let inner = Arc::try_unwrap(repo).ok().unwrap();
        let racing = Arc::new(CancelledMidway {
            inner,
            raced: AtomicBool::new(false),
        });
        let handler = UpdateBookingStatusHandler::new(racing.clone()).with_strict_transitions(true);

        let err = handler.handle(command(id, "confirmed")).await.unwrap_err();

        assert_eq!(
            err,
            BookingError::InvalidTransition {
                from: BookingStatus::Cancelled,
                to: BookingStatus::Confirmed,
            }
        );
        let stored = racing.inner.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.status, BookingStatus::Cancelled);
    }
}
