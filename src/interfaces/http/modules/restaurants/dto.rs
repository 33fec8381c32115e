//! Restaurant DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{NewRestaurant, Restaurant, RestaurantChanges};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub has_delivery: bool,
    pub contact_email: Option<String>,
    pub contact_number: Option<String>,
    pub city: String,
    pub street: String,
    pub postal_code: Option<String>,
    pub created_by_id: String,
}

impl From<Restaurant> for RestaurantDto {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            category: r.category,
            has_delivery: r.has_delivery,
            contact_email: r.contact_email,
            contact_number: r.contact_number,
            city: r.city,
            street: r.street,
            postal_code: r.postal_code,
            created_by_id: r.created_by_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantDto {
    #[validate(length(min = 1, max = 25, message = "name must be 1–25 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub has_delivery: bool,
    #[validate(email(message = "invalid email format"))]
    pub contact_email: Option<String>,
    pub contact_number: Option<String>,
    #[validate(length(min = 1, max = 50, message = "city must be 1–50 characters"))]
    pub city: String,
    #[validate(length(min = 1, max = 50, message = "street must be 1–50 characters"))]
    pub street: String,
    pub postal_code: Option<String>,
}

impl From<CreateRestaurantDto> for NewRestaurant {
    fn from(dto: CreateRestaurantDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            category: dto.category,
            has_delivery: dto.has_delivery,
            contact_email: dto.contact_email,
            contact_number: dto.contact_number,
            city: dto.city,
            street: dto.street,
            postal_code: dto.postal_code,
        }
    }
}

/// Full replacement of name, description and delivery flag
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantDto {
    #[validate(length(min = 1, max = 25, message = "name must be 1–25 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub has_delivery: bool,
}

impl From<UpdateRestaurantDto> for RestaurantChanges {
    fn from(dto: UpdateRestaurantDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            has_delivery: dto.has_delivery,
        }
    }
}
