//! Quote value types.

use serde::Deserialize;

use crate::domain::catalog::{Accommodation, Activity};
use crate::domain::foundation::{AccommodationId, ActivityId, Money, Percentage};
use crate::domain::package::Package;

/// Optional extras a customer can add to a quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteOptions {
    pub pickup: bool,
    pub guide: bool,
    pub insurance: bool,
    pub early_booking: bool,
}

/// Why a discount was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountReason {
    EarlyBooking,
    Group,
}

impl DiscountReason {
    /// Human-readable label shown next to the discount.
    pub fn label(&self) -> &'static str {
        match self {
            DiscountReason::EarlyBooking => "early booking discount",
            DiscountReason::Group => "group discount (4+ people)",
        }
    }
}

/// Accommodation portion of a quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccommodationLine {
    pub id: AccommodationId,
    pub name: String,
    pub price_per_night: Money,
    pub nights: u32,
    pub total: Money,
}

impl AccommodationLine {
    pub(super) fn new(accommodation: &Accommodation, nights: u32, total: Money) -> Self {
        Self {
            id: accommodation.id,
            name: accommodation.name.clone(),
            price_per_night: accommodation.price_per_night,
            nights,
            total,
        }
    }
}

/// One priced activity in a quote (per-person price).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLine {
    pub id: ActivityId,
    pub name: String,
    pub price: Money,
}

impl From<&Activity> for ActivityLine {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name.clone(),
            price: activity.price,
        }
    }
}

/// Every cost component of a quote plus the aggregates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotePricing {
    pub base_price: Money,
    pub accommodation_cost: Money,
    pub activities_cost: Money,
    pub pickup_cost: Money,
    pub guide_cost: Money,
    pub insurance_cost: Money,
    pub subtotal: Money,
    pub discount_rate: Percentage,
    pub discount_reason: Option<DiscountReason>,
    pub discount_amount: Money,
    pub total_price: Money,
}

impl QuotePricing {
    /// Sum of the optional extras (pickup, guide, insurance).
    pub fn additional_cost(&self) -> Money {
        self.pickup_cost + self.guide_cost + self.insurance_cost
    }
}

/// A computed price breakdown. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub package: Package,
    pub accommodation: AccommodationLine,
    pub activities: Vec<ActivityLine>,
    pub options: QuoteOptions,
    pub pricing: QuotePricing,
    pub num_people: u32,
}
