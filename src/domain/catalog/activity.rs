//! Activity catalog entry.

use serde::Serialize;

use crate::domain::foundation::{ActivityId, Money, Timestamp};

/// A leisure activity priced per participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub price: Money,
    pub duration_minutes: i32,
    pub max_participants: i32,
    pub location: Option<String>,
    pub image_url: Option<String>,
    #[serde(skip)]
    pub is_active: bool,
    pub created_at: Timestamp,
}
