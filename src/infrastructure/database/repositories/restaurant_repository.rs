//! SeaORM implementation of RestaurantRepository

use async_trait::async_trait;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::debug;

use crate::domain::{
    DomainError, DomainResult, NewRestaurant, Restaurant, RestaurantChanges,
    RestaurantPageRequest, RestaurantRepository, RestaurantSortField, SortDirection,
};
use crate::infrastructure::database::entities::restaurant;

pub struct SeaOrmRestaurantRepository {
    db: DatabaseConnection,
}

impl SeaOrmRestaurantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Whitelisted sort field → column. Every variant maps explicitly.
fn sort_column(field: RestaurantSortField) -> restaurant::Column {
    match field {
        RestaurantSortField::Name => restaurant::Column::Name,
        RestaurantSortField::Category => restaurant::Column::Category,
        RestaurantSortField::Description => restaurant::Column::Description,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

/// `%phrase%` with LIKE wildcards in the phrase matched literally.
fn contains_literal(phrase: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(phrase.len() + 2);
    pattern.push('%');
    for c in phrase.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    LikeExpr::new(pattern).escape('\\')
}

fn model_to_domain(model: restaurant::Model) -> Restaurant {
    Restaurant {
        id: model.id,
        created_by_id: model.created_by_id,
        name: model.name,
        description: model.description,
        category: model.category,
        has_delivery: model.has_delivery,
        contact_email: model.contact_email,
        contact_number: model.contact_number,
        city: model.city,
        street: model.street,
        postal_code: model.postal_code,
    }
}

#[async_trait]
impl RestaurantRepository for SeaOrmRestaurantRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Restaurant>> {
        let model = restaurant::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_page(
        &self,
        request: &RestaurantPageRequest,
    ) -> DomainResult<(Vec<Restaurant>, u64)> {
        let mut query = restaurant::Entity::find();

        if let Some(ref phrase) = request.search_phrase {
            query = query.filter(
                Condition::any()
                    .add(restaurant::Column::Name.like(contains_literal(phrase)))
                    .add(restaurant::Column::Description.like(contains_literal(phrase))),
            );
        }

        let total = query.clone().count(&self.db).await?;

        if let Some((field, direction)) = request.sort {
            query = query.order_by(sort_column(field), sort_order(direction));
        }
        // Ties and unsorted pages fall back to insertion order.
        query = query.order_by_asc(restaurant::Column::Id);

        let models = query
            .offset(request.pagination.offset())
            .limit(u64::from(request.pagination.limit))
            .all(&self.db)
            .await?;

        debug!(
            total,
            returned = models.len(),
            page = request.pagination.page,
            "Restaurant page loaded"
        );

        Ok((models.into_iter().map(model_to_domain).collect(), total))
    }

    async fn create(
        &self,
        created_by_id: &str,
        restaurant: NewRestaurant,
    ) -> DomainResult<Restaurant> {
        let model = restaurant::ActiveModel {
            created_by_id: Set(created_by_id.to_string()),
            name: Set(restaurant.name),
            description: Set(restaurant.description),
            category: Set(restaurant.category),
            has_delivery: Set(restaurant.has_delivery),
            contact_email: Set(restaurant.contact_email),
            contact_number: Set(restaurant.contact_number),
            city: Set(restaurant.city),
            street: Set(restaurant.street),
            postal_code: Set(restaurant.postal_code),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(model_to_domain(model))
    }

    async fn update(&self, id: i32, changes: RestaurantChanges) -> DomainResult<Restaurant> {
        let existing = restaurant::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("Restaurant", "id", id))?;

        let mut active: restaurant::ActiveModel = existing.into();
        active.name = Set(changes.name);
        active.description = Set(changes.description);
        active.has_delivery = Set(changes.has_delivery);

        let updated = active.update(&self.db).await?;
        Ok(model_to_domain(updated))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = restaurant::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Restaurant", "id", id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RestaurantQuery;
    use crate::test_support::{memory_db, new_restaurant};

    async fn repo_with(names: &[(&str, Option<&str>)]) -> SeaOrmRestaurantRepository {
        let repo = SeaOrmRestaurantRepository::new(memory_db().await);
        for (name, category) in names {
            let mut restaurant = new_restaurant(name);
            restaurant.category = category.map(str::to_string);
            repo.create("owner", restaurant).await.unwrap();
        }
        repo
    }

    fn request(page: u32, size: u32, sort_by: Option<&str>, dir: Option<SortDirection>) -> RestaurantPageRequest {
        RestaurantQuery {
            page_number: page,
            page_size: size,
            sort_by: sort_by.map(str::to_string),
            sort_direction: dir,
            search_phrase: None,
        }
        .into_page_request()
        .unwrap()
    }

    #[tokio::test]
    async fn unsorted_pages_follow_insertion_order() {
        let names: Vec<String> = (0..12).map(|i| format!("R{i:02}")).collect();
        let entries: Vec<(&str, Option<&str>)> = names.iter().map(|n| (n.as_str(), None)).collect();
        let repo = repo_with(&entries).await;

        let (first, total) = repo.find_page(&request(1, 5, None, None)).await.unwrap();
        let (third, _) = repo.find_page(&request(3, 5, None, None)).await.unwrap();

        assert_eq!(total, 12);
        assert_eq!(first.len(), 5);
        assert_eq!(first[0].name, "R00");
        assert_eq!(third.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(), ["R10", "R11"]);
    }

    #[tokio::test]
    async fn sorts_by_category_descending() {
        let repo = repo_with(&[
            ("A", Some("Italian")),
            ("B", Some("Asian")),
            ("C", Some("Mexican")),
        ])
        .await;

        let (page, _) = repo
            .find_page(&request(1, 5, Some("Category"), Some(SortDirection::Desc)))
            .await
            .unwrap();
        let categories: Vec<_> = page.iter().filter_map(|r| r.category.as_deref()).collect();
        assert_eq!(categories, ["Mexican", "Italian", "Asian"]);
    }

    #[tokio::test]
    async fn page_past_end_keeps_total() {
        let repo = repo_with(&[("A", None), ("B", None)]).await;

        let (page, total) = repo.find_page(&request(9, 15, None, None)).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(total, 2);
    }

    #[tokio::test]
    async fn update_replaces_descriptive_fields_only() {
        let repo = repo_with(&[("Old", Some("Fast Food"))]).await;
        let changes = RestaurantChanges {
            name: "New".into(),
            description: None,
            has_delivery: true,
        };

        let updated = repo.update(1, changes).await.unwrap();
        assert_eq!(updated.name, "New");
        assert_eq!(updated.description, None);
        assert_eq!(updated.category.as_deref(), Some("Fast Food"));
        assert_eq!(updated.created_by_id, "owner");
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() {
        let repo = repo_with(&[
            ("50% off", None),
            ("500 Club", None),
            ("Bar_1", None),
            ("Bar21", None),
        ])
        .await;
        let search = |phrase: &str| {
            let mut req = request(1, 15, None, None);
            req.search_phrase = Some(phrase.to_string());
            req
        };

        let (page, total) = repo.find_page(&search("50%")).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(page[0].name, "50% off");

        let (page, _) = repo.find_page(&search("bar_")).await.unwrap();
        assert_eq!(page.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(), ["Bar_1"]);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let repo = repo_with(&[]).await;
        assert!(matches!(
            repo.delete(5).await,
            Err(DomainError::NotFound { .. })
        ));
    }
}
