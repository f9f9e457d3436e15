//! HTTP DTOs for catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Accommodation, Activity};

/// Query string of the activity list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityListParams {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccommodationListResponse {
    pub success: bool,
    pub count: usize,
    pub accommodations: Vec<Accommodation>,
}

impl From<Vec<Accommodation>> for AccommodationListResponse {
    fn from(accommodations: Vec<Accommodation>) -> Self {
        Self {
            success: true,
            count: accommodations.len(),
            accommodations,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AccommodationResponse {
    pub success: bool,
    pub accommodation: Accommodation,
}

#[derive(Debug, Serialize)]
pub struct ActivityListResponse {
    pub success: bool,
    pub count: usize,
    pub activities: Vec<Activity>,
}

impl From<Vec<Activity>> for ActivityListResponse {
    fn from(activities: Vec<Activity>) -> Self {
        Self {
            success: true,
            count: activities.len(),
            activities,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub success: bool,
    pub activity: Activity,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<String>,
}
