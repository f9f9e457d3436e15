//! Pricing module - Quote computation for package bookings.
//!
//! The engine is a pure function over already-resolved catalog data. Looking
//! up the package, accommodation and activities is the job of the
//! `CalculateQuoteHandler` in the application layer.

mod engine;
mod errors;
mod quote;

pub use engine::{
    PricingEngine, EARLY_BOOKING_DISCOUNT, GROUP_DISCOUNT, GROUP_DISCOUNT_MIN_PEOPLE,
    GUIDE_COST, INSURANCE_COST_PER_PERSON, PICKUP_COST,
};
pub use errors::QuoteError;
pub use quote::{AccommodationLine, ActivityLine, DiscountReason, Quote, QuoteOptions, QuotePricing};
