//! In-memory catalog.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::catalog::{Accommodation, Activity};
use crate::domain::foundation::{AccommodationId, ActivityId, DomainError};
use crate::ports::CatalogReader;

/// In-memory accommodation and activity tables.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    accommodations: RwLock<Vec<Accommodation>>,
    activities: RwLock<Vec<Activity>>,
    unavailable: bool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog whose every read fails, as if the store were down.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_accommodation(mut self, accommodation: Accommodation) -> Self {
        self.accommodations.get_mut().push(accommodation);
        self
    }

    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activities.get_mut().push(activity);
        self
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable {
            return Err(DomainError::database("Catalog store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogReader for InMemoryCatalog {
    async fn list_accommodations(&self) -> Result<Vec<Accommodation>, DomainError> {
        self.check_available()?;
        let mut active: Vec<Accommodation> = self
            .accommodations
            .read()
            .await
            .iter()
            .filter(|a| a.is_active)
            .cloned()
            .collect();
        active.sort_by_key(|a| (a.price_per_night, a.id));
        Ok(active)
    }

    async fn get_accommodation(
        &self,
        id: AccommodationId,
    ) -> Result<Option<Accommodation>, DomainError> {
        self.check_available()?;
        Ok(self
            .accommodations
            .read()
            .await
            .iter()
            .find(|a| a.id == id && a.is_active)
            .cloned())
    }

    async fn list_activities(&self, category: Option<&str>) -> Result<Vec<Activity>, DomainError> {
        self.check_available()?;
        let mut active: Vec<Activity> = self
            .activities
            .read()
            .await
            .iter()
            .filter(|a| a.is_active)
            .filter(|a| category.map_or(true, |c| a.category == c))
            .cloned()
            .collect();
        active.sort_by(|a, b| {
            (&a.category, a.price, a.id).cmp(&(&b.category, b.price, b.id))
        });
        Ok(active)
    }

    async fn get_activity(&self, id: ActivityId) -> Result<Option<Activity>, DomainError> {
        self.check_available()?;
        Ok(self
            .activities
            .read()
            .await
            .iter()
            .find(|a| a.id == id && a.is_active)
            .cloned())
    }

    async fn list_categories(&self) -> Result<Vec<String>, DomainError> {
        self.check_available()?;
        let mut categories: Vec<String> = self
            .activities
            .read()
            .await
            .iter()
            .filter(|a| a.is_active)
            .map(|a| a.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    async fn find_activities(&self, ids: &[ActivityId]) -> Result<Vec<Activity>, DomainError> {
        self.check_available()?;
        let mut found: Vec<Activity> = self
            .activities
            .read()
            .await
            .iter()
            .filter(|a| a.is_active && ids.contains(&a.id))
            .cloned()
            .collect();
        found.sort_by_key(|a| a.id);
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Money, Timestamp};

    fn accommodation(id: i64, price: i64, active: bool) -> Accommodation {
        Accommodation {
            id: AccommodationId::new(id),
            name: format!("Stay {}", id),
            kind: "hotel".to_string(),
            description: None,
            price_per_night: Money::new(price),
            max_guests: 4,
            amenities: vec![],
            image_url: None,
            is_active: active,
            created_at: Timestamp::now(),
        }
    }

    fn activity(id: i64, category: &str, price: i64, active: bool) -> Activity {
        Activity {
            id: ActivityId::new(id),
            name: format!("Activity {}", id),
            category: category.to_string(),
            description: None,
            price: Money::new(price),
            duration_minutes: 90,
            max_participants: 8,
            location: None,
            image_url: None,
            is_active: active,
            created_at: Timestamp::now(),
        }
    }

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new()
            .with_accommodation(accommodation(1, 150_000, true))
            .with_accommodation(accommodation(2, 90_000, true))
            .with_accommodation(accommodation(3, 10_000, false))
            .with_activity(activity(1, "water", 50_000, true))
            .with_activity(activity(2, "land", 70_000, true))
            .with_activity(activity(3, "land", 30_000, true))
            .with_activity(activity(4, "air", 10_000, false))
    }

    #[tokio::test]
    async fn accommodations_are_active_and_cheapest_first() {
        let list = catalog().list_accommodations().await.unwrap();
        let ids: Vec<i64> = list.iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn inactive_accommodation_is_not_found() {
        let catalog = catalog();
        assert!(catalog
            .get_accommodation(AccommodationId::new(3))
            .await
            .unwrap()
            .is_none());
        assert!(catalog
            .get_accommodation(AccommodationId::new(1))
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn activities_ordered_by_category_then_price() {
        let list = catalog().list_activities(None).await.unwrap();
        let ids: Vec<i64> = list.iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let land = catalog().list_activities(Some("land")).await.unwrap();
        assert_eq!(land.len(), 2);
    }

    #[tokio::test]
    async fn categories_are_distinct_and_exclude_inactive() {
        let categories = catalog().list_categories().await.unwrap();
        assert_eq!(categories, vec!["land".to_string(), "water".to_string()]);
    }

    #[tokio::test]
    async fn find_activities_skips_unknown_inactive_and_duplicates() {
        let ids = [
            ActivityId::new(2),
            ActivityId::new(2),
            ActivityId::new(4),
            ActivityId::new(99),
            ActivityId::new(1),
        ];
        let found = catalog().find_activities(&ids).await.unwrap();
        let found_ids: Vec<i64> = found.iter().map(|a| a.id.value()).collect();
        assert_eq!(found_ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn unavailable_catalog_fails_every_read() {
        let catalog = InMemoryCatalog::unavailable();
        assert!(catalog.list_accommodations().await.is_err());
        assert!(catalog.list_categories().await.is_err());
    }
}
