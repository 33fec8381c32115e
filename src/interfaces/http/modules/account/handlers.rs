//! Account API handlers
//!
//! Delegates to `UserService` from the application/identity layer.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{LoginResponse, UserInfo};
use crate::application::UserService;
use crate::domain::{LoginDto, RegisterUserDto};
use crate::infrastructure::database::repositories::user_repository::UserRepository;
use crate::interfaces::http::common::{error_response, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Account handler state — concrete over `UserRepository` for Axum compatibility.
#[derive(Clone)]
pub struct AccountHandlerState {
    pub user_service: Arc<UserService<UserRepository>>,
}

#[utoipa::path(
    post,
    path = "/api/account/register",
    tag = "Account",
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "Account registered", body = ApiResponse<UserInfo>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn register(
    State(state): State<AccountHandlerState>,
    payload: Result<Json<RegisterUserDto>, JsonRejection>,
) -> Result<Json<ApiResponse<UserInfo>>, ApiError> {
    // The service validates the whole request, uniqueness included.
    let Json(dto) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(format!("Invalid JSON: {}", rejection))),
        )
    })?;

    let user = state.user_service.register(dto).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(UserInfo::from(user))))
}

#[utoipa::path(
    post,
    path = "/api/account/login",
    tag = "Account",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 400, description = "Malformed request"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AccountHandlerState>,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let auth = state.user_service.login(dto).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(LoginResponse::from(auth))))
}

#[utoipa::path(
    get,
    path = "/api/account/me",
    tag = "Account",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserInfo>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Account no longer exists")
    )
)]
pub async fn current_user(
    State(state): State<AccountHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<UserInfo>>, ApiError> {
    match state.user_service.get_user_by_id(&user.user_id).await {
        Ok(Some(user)) => Ok(Json(ApiResponse::success(UserInfo::from(user)))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("User '{}' not found", user.user_id))),
        )),
        Err(e) => Err(error_response(e)),
    }
}
