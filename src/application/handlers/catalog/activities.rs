//! Activity queries.

use std::sync::Arc;

use crate::domain::catalog::{Activity, CatalogError};
use crate::domain::foundation::ActivityId;
use crate::ports::CatalogReader;

/// Query for the activity list; an empty category means no filter.
#[derive(Debug, Clone, Default)]
pub struct ListActivitiesQuery {
    pub category: Option<String>,
}

pub struct ListActivitiesHandler {
    catalog: Arc<dyn CatalogReader>,
}

impl ListActivitiesHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: ListActivitiesQuery) -> Result<Vec<Activity>, CatalogError> {
        let category = query.category.as_deref().filter(|c| !c.is_empty());
        Ok(self.catalog.list_activities(category).await?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GetActivityQuery {
    pub activity_id: ActivityId,
}

pub struct GetActivityHandler {
    catalog: Arc<dyn CatalogReader>,
}

impl GetActivityHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetActivityQuery) -> Result<Activity, CatalogError> {
        self.catalog
            .get_activity(query.activity_id)
            .await?
            .ok_or(CatalogError::ActivityNotFound(query.activity_id))
    }
}

/// Handler listing distinct categories of active activities.
pub struct ListCategoriesHandler {
    catalog: Arc<dyn CatalogReader>,
}

impl ListCategoriesHandler {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.catalog.list_categories().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalog;
    use crate::domain::foundation::{Money, Timestamp};

    fn activity(id: i64, category: &str, price: i64, active: bool) -> Activity {
        Activity {
            id: ActivityId::new(id),
            name: format!("Activity {}", id),
            category: category.to_string(),
            description: None,
            price: Money::new(price),
            duration_minutes: 90,
            max_participants: 8,
            location: Some("Harbour".to_string()),
            image_url: None,
            is_active: active,
            created_at: Timestamp::now(),
        }
    }

    fn catalog() -> Arc<dyn CatalogReader> {
        Arc::new(
            InMemoryCatalog::new()
                .with_activity(activity(1, "water", 50_000, true))
                .with_activity(activity(2, "land", 30_000, true))
                .with_activity(activity(3, "water", 20_000, true))
                .with_activity(activity(4, "night", 10_000, false)),
        )
    }

    #[tokio::test]
    async fn lists_by_category_then_price() {
        let list = ListActivitiesHandler::new(catalog())
            .handle(ListActivitiesQuery::default())
            .await
            .unwrap();
        let ids: Vec<i64> = list.iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn empty_category_means_no_filter() {
        let handler = ListActivitiesHandler::new(catalog());
        let all = handler
            .handle(ListActivitiesQuery {
                category: Some(String::new()),
            })
            .await
            .unwrap();
        assert_eq!(all.len(), 3);

        let water = handler
            .handle(ListActivitiesQuery {
                category: Some("water".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(water.len(), 2);
    }

    #[tokio::test]
    async fn missing_activity_is_not_found() {
        let handler = GetActivityHandler::new(catalog());
        let err = handler
            .handle(GetActivityQuery {
                activity_id: ActivityId::new(4),
            })
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::ActivityNotFound(ActivityId::new(4)));
    }

    #[tokio::test]
    async fn categories_skip_inactive_rows() {
        let categories = ListCategoriesHandler::new(catalog()).handle().await.unwrap();
        assert_eq!(categories, vec!["land".to_string(), "water".to_string()]);
    }
}
