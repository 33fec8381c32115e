//! Dish DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Dish, NewDish};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DishDto {
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

impl From<Dish> for DishDto {
    fn from(d: Dish) -> Self {
        Self {
            id: d.id,
            restaurant_id: d.restaurant_id,
            name: d.name,
            description: d.description,
            price: d.price,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDishDto {
    #[validate(length(min = 1, max = 100, message = "name must be 1–100 characters"))]
    pub name: String,
    pub description: Option<String>,
    /// Defaults to 0 when omitted
    #[serde(default)]
    pub price: Decimal,
}

impl From<CreateDishDto> for NewDish {
    fn from(dto: CreateDishDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
        }
    }
}
