//! Dish API handlers
//!
//! Every route resolves the parent restaurant first; a missing restaurant
//! and a dish outside it both answer 404.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};

use super::dto::{CreateDishDto, DishDto};
use crate::application::DishService;
use crate::interfaces::http::common::{error_response, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::RequireUser;

#[derive(Clone)]
pub struct DishHandlerState {
    pub dishes: DishService,
}

#[utoipa::path(
    get,
    path = "/api/restaurant/{restaurant_id}/dish",
    tag = "Dishes",
    params(("restaurant_id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Dishes of the restaurant", body = ApiResponse<Vec<DishDto>>),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn list_dishes(
    State(state): State<DishHandlerState>,
    Path(restaurant_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<DishDto>>>, ApiError> {
    let dishes = state.dishes.list(restaurant_id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        dishes.into_iter().map(DishDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/restaurant/{restaurant_id}/dish/{dish_id}",
    tag = "Dishes",
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID"),
        ("dish_id" = i32, Path, description = "Dish ID")
    ),
    responses(
        (status = 200, description = "Dish details", body = ApiResponse<DishDto>),
        (status = 404, description = "Restaurant or dish not found")
    )
)]
pub async fn get_dish(
    State(state): State<DishHandlerState>,
    Path((restaurant_id, dish_id)): Path<(i32, i32)>,
) -> Result<Json<ApiResponse<DishDto>>, ApiError> {
    let dish = state
        .dishes
        .get(restaurant_id, dish_id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(DishDto::from(dish))))
}

#[utoipa::path(
    post,
    path = "/api/restaurant/{restaurant_id}/dish",
    tag = "Dishes",
    security(("bearer_auth" = [])),
    params(("restaurant_id" = i32, Path, description = "Restaurant ID")),
    request_body = CreateDishDto,
    responses(
        (status = 201, description = "Dish created", body = ApiResponse<DishDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn create_dish(
    State(state): State<DishHandlerState>,
    _user: RequireUser,
    Path(restaurant_id): Path<i32>,
    ValidatedJson(request): ValidatedJson<CreateDishDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ApiResponse<DishDto>>), ApiError>
{
    let dish = state
        .dishes
        .create(restaurant_id, request.into())
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        [(
            header::LOCATION,
            format!("/api/restaurant/{}/dish/{}", restaurant_id, dish.id),
        )],
        Json(ApiResponse::success(DishDto::from(dish))),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/restaurant/{restaurant_id}/dish/{dish_id}",
    tag = "Dishes",
    security(("bearer_auth" = [])),
    params(
        ("restaurant_id" = i32, Path, description = "Restaurant ID"),
        ("dish_id" = i32, Path, description = "Dish ID")
    ),
    responses(
        (status = 204, description = "Dish deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Restaurant or dish not found")
    )
)]
pub async fn delete_dish(
    State(state): State<DishHandlerState>,
    _user: RequireUser,
    Path((restaurant_id, dish_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    state
        .dishes
        .delete(restaurant_id, dish_id)
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/restaurant/{restaurant_id}/dish",
    tag = "Dishes",
    security(("bearer_auth" = [])),
    params(("restaurant_id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 204, description = "All dishes removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn delete_all_dishes(
    State(state): State<DishHandlerState>,
    _user: RequireUser,
    Path(restaurant_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .dishes
        .delete_all(restaurant_id)
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
