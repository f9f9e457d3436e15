//! In-memory booking repository.
//!
//! A create call stages every row first and publishes them under a single
//! write lock, so a failure at any step leaves no trace, matching the
//! transactional PostgreSQL adapter.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::booking::{
    Booking, BookingActivity, BookingDetails, BookingListFilter, BookingStatus, CreatedBooking,
    NewBooking, Payment, PaymentStatus,
};
use crate::domain::foundation::{BookingId, DomainError, Timestamp};
use crate::ports::BookingRepository;

/// Step of the booking transaction at which a simulated failure is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePoint {
    /// Fail inserting the booking row.
    Booking,
    /// Fail inserting the n-th (zero based) activity assignment.
    Assignment(usize),
    /// Fail inserting the payment row.
    Payment,
}

#[derive(Debug, Default)]
struct Tables {
    bookings: Vec<Booking>,
    activities: Vec<BookingActivity>,
    payments: Vec<Payment>,
    next_booking_id: i64,
    next_row_id: i64,
}

impl Tables {
    fn next_booking_id(&mut self) -> BookingId {
        self.next_booking_id += 1;
        BookingId::new(self.next_booking_id)
    }

    fn next_row_id(&mut self) -> i64 {
        self.next_row_id += 1;
        self.next_row_id
    }
}

/// In-memory bookings, assignments and payments.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    tables: RwLock<Tables>,
    failure: Option<FailurePoint>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose `create` fails at the given step.
    pub fn failing_at(point: FailurePoint) -> Self {
        Self {
            failure: Some(point),
            ..Self::default()
        }
    }

    /// Stores pre-built rows as-is (the payment may be absent).
    pub async fn import(&self, details: BookingDetails) {
        let mut tables = self.tables.write().await;
        tables.next_booking_id = tables.next_booking_id.max(details.booking.id.value());
        tables.bookings.push(details.booking);
        tables.activities.extend(details.activities);
        tables.payments.extend(details.payment);
    }

    pub async fn booking_count(&self) -> usize {
        self.tables.read().await.bookings.len()
    }

    pub async fn assignment_count(&self) -> usize {
        self.tables.read().await.activities.len()
    }

    pub async fn payment_count(&self) -> usize {
        self.tables.read().await.payments.len()
    }

    fn fail_if(&self, point: FailurePoint) -> Result<(), DomainError> {
        if self.failure == Some(point) {
            return Err(DomainError::database(format!(
                "Simulated failure at {:?}",
                point
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, new_booking: &NewBooking) -> Result<CreatedBooking, DomainError> {
        let mut tables = self.tables.write().await;
        let mut staged = Tables {
            next_booking_id: tables.next_booking_id,
            next_row_id: tables.next_row_id,
            ..Tables::default()
        };
        let now = Timestamp::now();

        self.fail_if(FailurePoint::Booking)?;
        let booking = Booking {
            id: staged.next_booking_id(),
            user_id: new_booking.user_id.clone(),
            package_id: new_booking.package_id.clone(),
            accommodation_id: new_booking.accommodation_id,
            check_in: new_booking.check_in,
            check_out: new_booking.check_out,
            num_people: new_booking.num_people,
            price: new_booking.price,
            status: BookingStatus::Pending,
            created_at: now,
        };

        for (index, activity_id) in new_booking.activity_ids.iter().enumerate() {
            self.fail_if(FailurePoint::Assignment(index))?;
            let id = staged.next_row_id();
            staged.activities.push(BookingActivity {
                id,
                booking_id: booking.id,
                activity_id: *activity_id,
                activity_date: new_booking.check_in,
                status: BookingStatus::Pending,
                created_at: now,
            });
        }

        self.fail_if(FailurePoint::Payment)?;
        let payment_id = staged.next_row_id();
        staged.payments.push(Payment {
            id: payment_id,
            booking_id: booking.id,
            amount: new_booking.price.total_price,
            status: PaymentStatus::Pending,
            created_at: now,
        });

        let activities = staged.activities.clone();
        tables.next_booking_id = staged.next_booking_id;
        tables.next_row_id = staged.next_row_id;
        tables.bookings.push(booking.clone());
        tables.activities.append(&mut staged.activities);
        tables.payments.append(&mut staged.payments);

        Ok(CreatedBooking {
            booking,
            activities,
        })
    }

    async fn find_by_id(&self, id: BookingId) -> Result<Option<Booking>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .bookings
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn find_activities(&self, id: BookingId) -> Result<Vec<BookingActivity>, DomainError> {
        let mut rows: Vec<BookingActivity> = self
            .tables
            .read()
            .await
            .activities
            .iter()
            .filter(|a| a.booking_id == id)
            .cloned()
            .collect();
        rows.sort_by_key(|a| a.id);
        Ok(rows)
    }

    async fn find_payment(&self, id: BookingId) -> Result<Option<Payment>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .payments
            .iter()
            .filter(|p| p.booking_id == id)
            .min_by_key(|p| p.id)
            .cloned())
    }

    async fn list(&self, filter: &BookingListFilter) -> Result<Vec<Booking>, DomainError> {
        let mut rows: Vec<Booking> = self
            .tables
            .read()
            .await
            .bookings
            .iter()
            .filter(|b| filter.status.map_or(true, |s| b.status == s))
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Option<Booking>, DomainError> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .map(|booking| {
                booking.status = status;
                booking.clone()
            }))
    }

    async fn update_status_if(
        &self,
        id: BookingId,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> Result<Option<Booking>, DomainError> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .bookings
            .iter_mut()
            .find(|b| b.id == id && b.status == expected)
            .map(|booking| {
                booking.status = status;
                booking.clone()
            }))
    }
}
