//! HTTP DTOs for quote endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccommodationId, ActivityId, Money};
use crate::domain::package::Package;
use crate::domain::pricing::{AccommodationLine, ActivityLine, Quote, QuoteOptions, QuotePricing};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/quotes/calculate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateQuoteRequest {
    /// Missing is treated like an unknown package.
    #[serde(default)]
    pub package_id: String,
    /// Missing is reported after the package check, as not found.
    #[serde(default)]
    pub accommodation_id: Option<AccommodationId>,
    #[serde(default)]
    pub activity_ids: Vec<ActivityId>,
    #[serde(default = "default_num_people")]
    pub num_people: i64,
    #[serde(default)]
    pub options: QuoteOptions,
}

fn default_num_people() -> i64 {
    1
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
pub struct PackagesResponse {
    pub success: bool,
    pub packages: &'static [Package],
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub success: bool,
    pub quote: QuoteDto,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDto {
    pub package: Package,
    pub accommodation: AccommodationLineDto,
    pub activities: Vec<ActivityLineDto>,
    pub options: QuoteOptionsDto,
    pub pricing: PricingDto,
    pub num_people: u32,
}

impl From<Quote> for QuoteDto {
    fn from(quote: Quote) -> Self {
        Self {
            options: QuoteOptionsDto::new(quote.options, &quote.pricing),
            pricing: (&quote.pricing).into(),
            accommodation: quote.accommodation.into(),
            activities: quote.activities.into_iter().map(Into::into).collect(),
            package: quote.package,
            num_people: quote.num_people,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationLineDto {
    pub id: AccommodationId,
    pub name: String,
    pub price_per_night: Money,
    pub nights: u32,
    pub total: Money,
}

impl From<AccommodationLine> for AccommodationLineDto {
    fn from(line: AccommodationLine) -> Self {
        Self {
            id: line.id,
            name: line.name,
            price_per_night: line.price_per_night,
            nights: line.nights,
            total: line.total,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActivityLineDto {
    pub id: ActivityId,
    pub name: String,
    pub price: Money,
}

impl From<ActivityLine> for ActivityLineDto {
    fn from(line: ActivityLine) -> Self {
        Self {
            id: line.id,
            name: line.name,
            price: line.price,
        }
    }
}

/// One optional extra; `cost` only appears when the extra was chosen.
#[derive(Debug, Serialize)]
pub struct OptionLineDto {
    pub included: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Money>,
}

impl OptionLineDto {
    fn new(included: bool, cost: Money) -> Self {
        Self {
            included,
            cost: included.then_some(cost),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuoteOptionsDto {
    pub pickup: OptionLineDto,
    pub guide: OptionLineDto,
    pub insurance: OptionLineDto,
}

impl QuoteOptionsDto {
    fn new(options: QuoteOptions, pricing: &QuotePricing) -> Self {
        Self {
            pickup: OptionLineDto::new(options.pickup, pricing.pickup_cost),
            guide: OptionLineDto::new(options.guide, pricing.guide_cost),
            insurance: OptionLineDto::new(options.insurance, pricing.insurance_cost),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingDto {
    pub base_price: Money,
    pub accommodation_cost: Money,
    pub activities_cost: Money,
    pub additional_cost: Money,
    pub subtotal: Money,
    /// Fraction of the subtotal, e.g. `0.15`.
    pub discount_rate: f64,
    /// Empty when no discount applies.
    pub discount_reason: &'static str,
    pub discount_amount: Money,
    pub total_price: Money,
}

impl From<&QuotePricing> for PricingDto {
    fn from(pricing: &QuotePricing) -> Self {
        Self {
            base_price: pricing.base_price,
            accommodation_cost: pricing.accommodation_cost,
            activities_cost: pricing.activities_cost,
            additional_cost: pricing.additional_cost(),
            subtotal: pricing.subtotal,
            discount_rate: pricing.discount_rate.as_fraction(),
            discount_reason: pricing.discount_reason.map_or("", |r| r.label()),
            discount_amount: pricing.discount_amount,
            total_price: pricing.total_price,
        }
    }
}
