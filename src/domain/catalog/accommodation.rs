//! Accommodation catalog entry.

use serde::Serialize;

use crate::domain::foundation::{AccommodationId, Money, Timestamp};

/// A place to stay, priced per person per night.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub id: AccommodationId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: Option<String>,
    pub price_per_night: Money,
    pub max_guests: i32,
    pub amenities: Vec<String>,
    pub image_url: Option<String>,
    #[serde(skip)]
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl Accommodation {
    /// Cost of staying `nights` nights for a party of `num_people`, or `None`
    /// if it does not fit in a `Money`.
    pub fn stay_cost(&self, nights: u32, num_people: u32) -> Option<Money> {
        self.price_per_night
            .checked_mul(i64::from(nights))?
            .checked_mul(i64::from(num_people))
    }
}
