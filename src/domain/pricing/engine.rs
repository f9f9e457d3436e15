//! Quote calculation rules.

use crate::domain::catalog::{Accommodation, Activity};
use crate::domain::foundation::{Money, Percentage};
use crate::domain::package::Package;

use super::errors::QuoteError;
use super::quote::{
    AccommodationLine, ActivityLine, DiscountReason, Quote, QuoteOptions, QuotePricing,
};

/// Flat airport/terminal pickup fee per booking.
pub const PICKUP_COST: Money = Money::new(30_000);

/// Flat private guide fee per booking.
pub const GUIDE_COST: Money = Money::new(50_000);

/// Travel insurance fee, charged per person.
pub const INSURANCE_COST_PER_PERSON: Money = Money::new(20_000);

pub const EARLY_BOOKING_DISCOUNT: Percentage = Percentage::new(10);

pub const GROUP_DISCOUNT: Percentage = Percentage::new(15);

/// Party size from which the group discount applies.
pub const GROUP_DISCOUNT_MIN_PEOPLE: u32 = 4;

/// Pure quote calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine;

impl PricingEngine {
    /// Prices a package stay.
    ///
    /// `activities` must already be resolved to active catalog rows; ids that
    /// did not resolve simply contribute nothing. `num_people` is expected to
    /// be at least 1. Fails with `AmountOutOfRange` when any intermediate
    /// amount leaves the `Money` range.
    pub fn quote(
        &self,
        package: &Package,
        accommodation: &Accommodation,
        activities: &[Activity],
        num_people: u32,
        options: QuoteOptions,
    ) -> Result<Quote, QuoteError> {
        let people = i64::from(num_people);

        let accommodation_cost = accommodation
            .stay_cost(package.nights, num_people)
            .ok_or(QuoteError::AmountOutOfRange)?;
        let activities_cost = activities
            .iter()
            .try_fold(Money::ZERO, |total, a| total.checked_add(a.price))
            .and_then(|total| total.checked_mul(people))
            .ok_or(QuoteError::AmountOutOfRange)?;

        let pickup_cost = PICKUP_COST.when(options.pickup);
        let guide_cost = GUIDE_COST.when(options.guide);
        let insurance_cost = INSURANCE_COST_PER_PERSON
            .checked_mul(people)
            .ok_or(QuoteError::AmountOutOfRange)?
            .when(options.insurance);

        let subtotal = [
            accommodation_cost,
            activities_cost,
            pickup_cost,
            guide_cost,
            insurance_cost,
        ]
        .into_iter()
        .try_fold(package.base_price, Money::checked_add)
        .ok_or(QuoteError::AmountOutOfRange)?;

        let (discount_rate, discount_reason) = resolve_discount(num_people, options);
        let discount_amount = discount_rate.of(subtotal);

        Ok(Quote {
            package: package.clone(),
            accommodation: AccommodationLine::new(accommodation, package.nights, accommodation_cost),
            activities: activities.iter().map(ActivityLine::from).collect(),
            options,
            pricing: QuotePricing {
                base_price: package.base_price,
                accommodation_cost,
                activities_cost,
                pickup_cost,
                guide_cost,
                insurance_cost,
                subtotal,
                discount_rate,
                discount_reason,
                discount_amount,
                total_price: subtotal - discount_amount,
            },
            num_people,
        })
    }
}

/// Discounts do not stack. The group rule runs last: it keeps the larger
/// rate but always takes over the reason, even if a future early-booking rate
/// were to exceed the group rate.
fn resolve_discount(num_people: u32, options: QuoteOptions) -> (Percentage, Option<DiscountReason>) {
    let mut rate = Percentage::ZERO;
    let mut reason = None;

    if options.early_booking {
        rate = EARLY_BOOKING_DISCOUNT;
        reason = Some(DiscountReason::EarlyBooking);
    }

    if num_people >= GROUP_DISCOUNT_MIN_PEOPLE {
        rate = rate.max(GROUP_DISCOUNT);
        reason = Some(DiscountReason::Group);
    }

    (rate, reason)
}
