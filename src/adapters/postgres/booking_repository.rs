//! PostgreSQL implementation of BookingRepository.
//!
//! The booking, its assignments and its payment are inserted inside one
//! transaction. Returning early with `?` drops the transaction, which rolls it
//! back and hands the connection back to the pool.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::booking::{
    Booking, BookingActivity, BookingListFilter, BookingStatus, CreatedBooking, NewBooking,
    Payment, PaymentStatus, PriceBreakdown,
};
use crate::domain::foundation::{
    AccommodationId, ActivityId, BookingId, DomainError, Money, PackageId, Timestamp, UserId,
};
use crate::ports::BookingRepository;

use super::column;

const BOOKING_COLUMNS: &str = "booking_id, user_id, package_id, accommodation_id, \
     check_in_date, check_out_date, num_people, base_price, discount_amount, \
     additional_cost, total_price, status, created_at";

const ASSIGNMENT_COLUMNS: &str = "id, booking_id, activity_id, activity_date, status, created_at";

const PAYMENT_COLUMNS: &str = "id, booking_id, amount, status, created_at";

/// PostgreSQL implementation of BookingRepository.
#[derive(Clone)]
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    /// Creates a new PostgresBookingRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn create(&self, new_booking: &NewBooking) -> Result<CreatedBooking, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::database(format!("Failed to begin transaction: {}", e))
        })?;

        let booking = insert_booking(&mut tx, new_booking).await?;

        let mut activities = Vec::with_capacity(new_booking.activity_ids.len());
        for activity_id in &new_booking.activity_ids {
            let assignment =
                insert_assignment(&mut tx, booking.id, *activity_id, new_booking.check_in).await?;
            activities.push(assignment);
        }

        insert_payment(&mut tx, booking.id, new_booking.price.total_price).await?;

        tx.commit().await.map_err(|e| {
            DomainError::database(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(CreatedBooking {
            booking,
            activities,
        })
    }

    async fn find_by_id(&self, id: BookingId) -> Result<Option<Booking>, DomainError> {
        let sql = format!("SELECT {} FROM bookings WHERE booking_id = $1", BOOKING_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch booking: {}", e)))?;

        row.as_ref().map(row_to_booking).transpose()
    }

    async fn find_activities(&self, id: BookingId) -> Result<Vec<BookingActivity>, DomainError> {
        let sql = format!(
            "SELECT {} FROM booking_activities WHERE booking_id = $1 ORDER BY id ASC",
            ASSIGNMENT_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to fetch booking activities: {}", e))
            })?;

        rows.iter().map(row_to_assignment).collect()
    }

    async fn find_payment(&self, id: BookingId) -> Result<Option<Payment>, DomainError> {
        let sql = format!(
            "SELECT {} FROM payments WHERE booking_id = $1 ORDER BY id ASC LIMIT 1",
            PAYMENT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch payment: {}", e)))?;

        row.as_ref().map(row_to_payment).transpose()
    }

    async fn list(&self, filter: &BookingListFilter) -> Result<Vec<Booking>, DomainError> {
        let sql = format!(
            "SELECT {} FROM bookings \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY created_at DESC, booking_id DESC \
             LIMIT $2 OFFSET $3",
            BOOKING_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(i64::from(filter.limit))
            .bind(i64::from(filter.offset))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to list bookings: {}", e)))?;

        rows.iter().map(row_to_booking).collect()
    }

    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Option<Booking>, DomainError> {
        let sql = format!(
            "UPDATE bookings SET status = $1 WHERE booking_id = $2 RETURNING {}",
            BOOKING_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(status.as_str())
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update booking status: {}", e)))?;

        row.as_ref().map(row_to_booking).transpose()
    }

    async fn update_status_if(
        &self,
        id: BookingId,
        expected: BookingStatus,
        status: BookingStatus,
    ) -> Result<Option<Booking>, DomainError> {
        let sql = format!(
            "UPDATE bookings SET status = $1 WHERE booking_id = $2 AND status = $3 RETURNING {}",
            BOOKING_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(status.as_str())
            .bind(id.value())
            .bind(expected.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update booking status: {}", e)))?;

        row.as_ref().map(row_to_booking).transpose()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Transaction steps
// ════════════════════════════════════════════════════════════════════════════

async fn insert_booking(
    tx: &mut Transaction<'_, Postgres>,
    booking: &NewBooking,
) -> Result<Booking, DomainError> {
    let sql = format!(
        r#"
        INSERT INTO bookings (
            user_id, package_id, accommodation_id,
            check_in_date, check_out_date, num_people,
            base_price, discount_amount, additional_cost, total_price,
            status
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {}
        "#,
        BOOKING_COLUMNS
    );
    let row = sqlx::query(&sql)
        .bind(booking.user_id.as_str())
        .bind(booking.package_id.as_str())
        .bind(booking.accommodation_id.value())
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.num_people)
        .bind(booking.price.base_price.value())
        .bind(booking.price.discount_amount.value())
        .bind(booking.price.additional_cost.value())
        .bind(booking.price.total_price.value())
        .bind(BookingStatus::Pending.as_str())
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert booking: {}", e)))?;

    row_to_booking(&row)
}

async fn insert_assignment(
    tx: &mut Transaction<'_, Postgres>,
    booking_id: BookingId,
    activity_id: ActivityId,
    activity_date: NaiveDate,
) -> Result<BookingActivity, DomainError> {
    let sql = format!(
        "INSERT INTO booking_activities (booking_id, activity_id, activity_date, status) \
         VALUES ($1, $2, $3, $4) RETURNING {}",
        ASSIGNMENT_COLUMNS
    );
    let row = sqlx::query(&sql)
        .bind(booking_id.value())
        .bind(activity_id.value())
        .bind(activity_date)
        .bind(BookingStatus::Pending.as_str())
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to insert booking activity: {}", e))
                .with_detail("activity_id", activity_id.to_string())
        })?;

    row_to_assignment(&row)
}

async fn insert_payment(
    tx: &mut Transaction<'_, Postgres>,
    booking_id: BookingId,
    amount: Money,
) -> Result<(), DomainError> {
    sqlx::query("INSERT INTO payments (booking_id, amount, status) VALUES ($1, $2, $3)")
        .bind(booking_id.value())
        .bind(amount.value())
        .bind(PaymentStatus::Pending.as_str())
        .execute(&mut **tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert payment: {}", e)))?;

    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn str_to_booking_status(s: &str) -> Result<BookingStatus, DomainError> {
    s.parse()
        .map_err(|_| DomainError::database(format!("Invalid booking status: {}", s)))
}

fn str_to_payment_status(s: &str) -> Result<PaymentStatus, DomainError> {
    s.parse()
        .map_err(|_| DomainError::database(format!("Invalid payment status: {}", s)))
}

fn row_to_booking(row: &PgRow) -> Result<Booking, DomainError> {
    let user_id: String = column(row, "user_id")?;
    let package_id: String = column(row, "package_id")?;
    let status: String = column(row, "status")?;

    Ok(Booking {
        id: BookingId::new(column(row, "booking_id")?),
        user_id: UserId::new(user_id)
            .map_err(|e| DomainError::database(format!("Invalid user_id: {}", e)))?,
        package_id: PackageId::new(package_id)
            .map_err(|e| DomainError::database(format!("Invalid package_id: {}", e)))?,
        accommodation_id: AccommodationId::new(column(row, "accommodation_id")?),
        check_in: column(row, "check_in_date")?,
        check_out: column(row, "check_out_date")?,
        num_people: column(row, "num_people")?,
        price: PriceBreakdown {
            base_price: Money::new(column(row, "base_price")?),
            discount_amount: Money::new(column(row, "discount_amount")?),
            additional_cost: Money::new(column(row, "additional_cost")?),
            total_price: Money::new(column(row, "total_price")?),
        },
        status: str_to_booking_status(&status)?,
        created_at: Timestamp::from_datetime(column(row, "created_at")?),
    })
}

fn row_to_assignment(row: &PgRow) -> Result<BookingActivity, DomainError> {
    let status: String = column(row, "status")?;

    Ok(BookingActivity {
        id: column(row, "id")?,
        booking_id: BookingId::new(column(row, "booking_id")?),
        activity_id: ActivityId::new(column(row, "activity_id")?),
        activity_date: column(row, "activity_date")?,
        status: str_to_booking_status(&status)?,
        created_at: Timestamp::from_datetime(column(row, "created_at")?),
    })
}

fn row_to_payment(row: &PgRow) -> Result<Payment, DomainError> {
    let status: String = column(row, "status")?;

    Ok(Payment {
        id: column(row, "id")?,
        booking_id: BookingId::new(column(row, "booking_id")?),
        amount: Money::new(column(row, "amount")?),
        status: str_to_payment_status(&status)?,
        created_at: Timestamp::from_datetime(column(row, "created_at")?),
    })
}
