//! Restaurant API handlers
//!
//! Reads are public. Mutations need a bearer token; update and delete are
//! additionally limited to the owner (or an admin) by `RestaurantService`.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};

use super::dto::{CreateRestaurantDto, RestaurantDto, UpdateRestaurantDto};
use crate::application::RestaurantService;
use crate::domain::RestaurantQuery;
use crate::interfaces::http::common::{
    error_response, ApiError, ApiResponse, PaginatedResponse, ValidatedJson, ValidatedQuery,
};
use crate::interfaces::http::middleware::RequireUser;

#[derive(Clone)]
pub struct RestaurantHandlerState {
    pub restaurants: RestaurantService,
}

#[utoipa::path(
    get,
    path = "/api/restaurant",
    tag = "Restaurants",
    params(RestaurantQuery),
    responses(
        (status = 200, description = "Restaurant page", body = ApiResponse<PaginatedResponse<RestaurantDto>>),
        (status = 400, description = "Invalid paging or sorting parameters")
    )
)]
pub async fn list_restaurants(
    State(state): State<RestaurantHandlerState>,
    ValidatedQuery(query): ValidatedQuery<RestaurantQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<RestaurantDto>>>, ApiError> {
    let page = state.restaurants.list(query).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(PaginatedResponse::from(page))))
}

#[utoipa::path(
    get,
    path = "/api/restaurant/{restaurant_id}",
    tag = "Restaurants",
    params(("restaurant_id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Restaurant details", body = ApiResponse<RestaurantDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_restaurant(
    State(state): State<RestaurantHandlerState>,
    Path(restaurant_id): Path<i32>,
) -> Result<Json<ApiResponse<RestaurantDto>>, ApiError> {
    let restaurant = state
        .restaurants
        .get(restaurant_id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(RestaurantDto::from(restaurant))))
}

#[utoipa::path(
    post,
    path = "/api/restaurant",
    tag = "Restaurants",
    security(("bearer_auth" = [])),
    request_body = CreateRestaurantDto,
    responses(
        (status = 201, description = "Restaurant created", body = ApiResponse<RestaurantDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_restaurant(
    State(state): State<RestaurantHandlerState>,
    RequireUser(caller): RequireUser,
    ValidatedJson(request): ValidatedJson<CreateRestaurantDto>,
) -> Result<
    (StatusCode, [(header::HeaderName, String); 1], Json<ApiResponse<RestaurantDto>>),
    ApiError,
> {
    let restaurant = state
        .restaurants
        .create(&caller, request.into())
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/restaurant/{}", restaurant.id))],
        Json(ApiResponse::success(RestaurantDto::from(restaurant))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/restaurant/{restaurant_id}",
    tag = "Restaurants",
    security(("bearer_auth" = [])),
    params(("restaurant_id" = i32, Path, description = "Restaurant ID")),
    request_body = UpdateRestaurantDto,
    responses(
        (status = 200, description = "Restaurant updated", body = ApiResponse<RestaurantDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller does not own the restaurant"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_restaurant(
    State(state): State<RestaurantHandlerState>,
    RequireUser(caller): RequireUser,
    Path(restaurant_id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRestaurantDto>,
) -> Result<Json<ApiResponse<RestaurantDto>>, ApiError> {
    let restaurant = state
        .restaurants
        .update(&caller, restaurant_id, request.into())
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(RestaurantDto::from(restaurant))))
}

#[utoipa::path(
    delete,
    path = "/api/restaurant/{restaurant_id}",
    tag = "Restaurants",
    security(("bearer_auth" = [])),
    params(("restaurant_id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 204, description = "Restaurant deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller does not own the restaurant"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_restaurant(
    State(state): State<RestaurantHandlerState>,
    RequireUser(caller): RequireUser,
    Path(restaurant_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .restaurants
        .delete(&caller, restaurant_id)
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};
    use serde_json::json;

    use crate::domain::UserRole;
    use crate::test_support::{seed_restaurant, seed_user, TestApp};

    fn restaurant_body(name: &str) -> serde_json::Value {
        json!({
            "name": name,
            "category": "Italian",
            "hasDelivery": true,
            "city": "Krakow",
            "street": "Dluga 5",
        })
    }

    #[tokio::test]
    async fn list_with_valid_query_returns_ok() {
        let app = TestApp::new().await;
        for query in [
            "pageNumber=1&pageSize=10&sortBy=Name",
            "pageNumber=2&pageSize=5&sortBy=Category&sortDirection=DESC",
            "pageNumber=1&pageSize=15",
        ] {
            let (status, _, _) = app.get(&format!("/api/restaurant?{query}"), None).await;
            assert_eq!(status, StatusCode::OK, "{query}");
        }
    }

    #[tokio::test]
    async fn list_with_invalid_query_returns_bad_request() {
        let app = TestApp::new().await;
        for uri in [
            "/api/restaurant",
            "/api/restaurant?pageNumber=1&pageSize=115",
            "/api/restaurant?pageNumber=0&pageSize=10",
            "/api/restaurant?pageNumber=1&pageSize=15&sortBy=ContactNumber",
        ] {
            let (status, _, body) = app.get(uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["success"], false);
        }
    }

    #[tokio::test]
    async fn list_reports_page_metadata() {
        let app = TestApp::new().await;
        let owner = seed_user(&app.repos, "owner@test.pl").await;
        for i in 0..7 {
            seed_restaurant(&app.repos, &owner.id, &format!("R{i}")).await;
        }

        let (status, _, body) = app
            .get("/api/restaurant?pageNumber=2&pageSize=5", None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let page = &body["data"];
        assert_eq!(page["items"].as_array().unwrap().len(), 2);
        assert_eq!(page["totalItemsCount"], 7);
        assert_eq!(page["totalPages"], 2);
        assert_eq!(page["itemsFrom"], 6);
        assert_eq!(page["itemsTo"], 10);
    }

    #[tokio::test]
    async fn create_returns_created_with_location() {
        let app = TestApp::new().await;
        let owner = seed_user(&app.repos, "owner@test.pl").await;
        let token = app.token_for(&owner);

        let (status, headers, body) = app
            .post("/api/restaurant", Some(&token), restaurant_body("Trattoria"))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["data"]["id"].as_i64().unwrap();
        assert_eq!(
            headers.get(header::LOCATION).unwrap(),
            &format!("/api/restaurant/{id}")
        );
        assert_eq!(body["data"]["createdById"], owner.id);
    }

    #[tokio::test]
    async fn create_with_invalid_model_returns_bad_request() {
        let app = TestApp::new().await;
        let owner = seed_user(&app.repos, "owner@test.pl").await;
        let token = app.token_for(&owner);

        let too_long = restaurant_body("A name that is definitely over 25 chars");
        let (status, _, body) = app.post("/api/restaurant", Some(&token), too_long).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["details"]["name"].is_array());

        let (status, _, _) = app
            .post("/api/restaurant", Some(&token), json!({ "name": "No address" }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn mutations_without_token_are_unauthorized() {
        let app = TestApp::new().await;
        let owner = seed_user(&app.repos, "owner@test.pl").await;
        let restaurant = seed_restaurant(&app.repos, &owner.id, "Test").await;

        let (status, _, _) = app
            .post("/api/restaurant", None, restaurant_body("Trattoria"))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _, _) = app
            .delete(&format!("/api/restaurant/{}", restaurant.id), None)
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        // Authentication is checked before the body is parsed.
        let (status, _, _) = app
            .post("/api/restaurant", None, json!({ "name": "" }))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _, _) = app
            .put(&format!("/api/restaurant/{}", restaurant.id), None, json!({}))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn delete_by_owner_returns_no_content() {
        let app = TestApp::new().await;
        let owner = seed_user(&app.repos, "owner@test.pl").await;
        let restaurant = seed_restaurant(&app.repos, &owner.id, "Test").await;
        let uri = format!("/api/restaurant/{}", restaurant.id);

        let (status, _, _) = app.delete(&uri, Some(&app.token_for(&owner))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _, _) = app.get(&uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_by_other_user_returns_forbidden() {
        let app = TestApp::new().await;
        let owner = seed_user(&app.repos, "owner@test.pl").await;
        let other = seed_user(&app.repos, "other@test.pl").await;
        let restaurant = seed_restaurant(&app.repos, &owner.id, "Test").await;
        let uri = format!("/api/restaurant/{}", restaurant.id);

        let (status, _, _) = app.delete(&uri, Some(&app.token_for(&other))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _, _) = app.get(&uri, None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn delete_by_admin_overrides_ownership() {
        let app = TestApp::new().await;
        let owner = seed_user(&app.repos, "owner@test.pl").await;
        let restaurant = seed_restaurant(&app.repos, &owner.id, "Test").await;
        let admin_token = app.token_with_role("admin-id", UserRole::Admin);

        let (status, _, _) = app
            .delete(&format!("/api/restaurant/{}", restaurant.id), Some(&admin_token))
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn delete_missing_returns_not_found() {
        let app = TestApp::new().await;
        let user = seed_user(&app.repos, "someone@test.pl").await;

        let (status, _, _) = app
            .delete("/api/restaurant/888", Some(&app.token_for(&user)))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_is_limited_to_owner() {
        let app = TestApp::new().await;
        let owner = seed_user(&app.repos, "owner@test.pl").await;
        let other = seed_user(&app.repos, "other@test.pl").await;
        let restaurant = seed_restaurant(&app.repos, &owner.id, "Test").await;
        let uri = format!("/api/restaurant/{}", restaurant.id);
        let body = json!({ "name": "Renamed", "description": "New menu", "hasDelivery": false });

        let (status, _, _) = app.put(&uri, Some(&app.token_for(&other)), body.clone()).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _, response) = app.put(&uri, Some(&app.token_for(&owner)), body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["data"]["name"], "Renamed");

        let (status, _, _) = app
            .put(
                "/api/restaurant/999",
                Some(&app.token_for(&owner)),
                json!({ "name": "Ghost", "hasDelivery": false }),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
