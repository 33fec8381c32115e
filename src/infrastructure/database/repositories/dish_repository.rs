//! SeaORM implementation of DishRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{Dish, DishRepository, DomainError, DomainResult, NewDish};
use crate::infrastructure::database::entities::dish;

pub struct SeaOrmDishRepository {
    db: DatabaseConnection,
}

impl SeaOrmDishRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: dish::Model) -> Dish {
    Dish {
        id: model.id,
        restaurant_id: model.restaurant_id,
        name: model.name,
        description: model.description,
        price: model.price,
    }
}

#[async_trait]
impl DishRepository for SeaOrmDishRepository {
    async fn find_by_id_and_restaurant(
        &self,
        restaurant_id: i32,
        dish_id: i32,
    ) -> DomainResult<Option<Dish>> {
        let model = dish::Entity::find_by_id(dish_id)
            .filter(dish::Column::RestaurantId.eq(restaurant_id))
            .one(&self.db)
            .await?;

        Ok(model.map(model_to_domain))
    }

    async fn find_for_restaurant(&self, restaurant_id: i32) -> DomainResult<Vec<Dish>> {
        let models = dish::Entity::find()
            .filter(dish::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(dish::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn create(&self, restaurant_id: i32, dish: NewDish) -> DomainResult<Dish> {
        let model = dish::ActiveModel {
            restaurant_id: Set(restaurant_id),
            name: Set(dish.name),
            description: Set(dish.description),
            price: Set(dish.price),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(model_to_domain(model))
    }

    async fn delete(&self, dish_id: i32) -> DomainResult<()> {
        let result = dish::Entity::delete_by_id(dish_id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Dish", "id", dish_id));
        }

        Ok(())
    }

    async fn delete_for_restaurant(&self, restaurant_id: i32) -> DomainResult<u64> {
        let result = dish::Entity::delete_many()
            .filter(dish::Column::RestaurantId.eq(restaurant_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
