//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{DishService, RestaurantService, UserService};
use crate::domain::{LoginDto, RegisterUserDto, RepositoryProvider, SortDirection};
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::repositories::user_repository::UserRepository;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse};
use crate::interfaces::http::middleware::{auth_middleware, optional_auth_middleware, AuthState};
use crate::interfaces::http::modules::account::{self, AccountHandlerState, LoginResponse, UserInfo};
use crate::interfaces::http::modules::dishes::{self, CreateDishDto, DishDto, DishHandlerState};
use crate::interfaces::http::modules::health::{self, ComponentHealth, HealthResponse, HealthState};
use crate::interfaces::http::modules::restaurants::{
    self, CreateRestaurantDto, RestaurantDto, RestaurantHandlerState, UpdateRestaurantDto,
};

/// Unified state for the restaurant and nested dish routes.
/// Each handler keeps its own `State<T>` and receives it through `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub restaurants: RestaurantService,
    pub dishes: DishService,
    pub auth: AuthState,
}

impl FromRef<ApiState> for RestaurantHandlerState {
    fn from_ref(s: &ApiState) -> Self {
        RestaurantHandlerState {
            restaurants: s.restaurants.clone(),
        }
    }
}

impl FromRef<ApiState> for DishHandlerState {
    fn from_ref(s: &ApiState) -> Self {
        DishHandlerState {
            dishes: s.dishes.clone(),
        }
    }
}

impl FromRef<ApiState> for AuthState {
    fn from_ref(s: &ApiState) -> Self {
        s.auth.clone()
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        account::register,
        account::login,
        account::current_user,
        restaurants::list_restaurants,
        restaurants::get_restaurant,
        restaurants::create_restaurant,
        restaurants::update_restaurant,
        restaurants::delete_restaurant,
        dishes::list_dishes,
        dishes::get_dish,
        dishes::create_dish,
        dishes::delete_dish,
        dishes::delete_all_dishes,
    ),
    components(
        schemas(
            ApiResponse<String>,
            PaginatedResponse<RestaurantDto>,
            HealthResponse,
            ComponentHealth,
            RegisterUserDto,
            LoginDto,
            LoginResponse,
            UserInfo,
            SortDirection,
            RestaurantDto,
            CreateRestaurantDto,
            UpdateRestaurantDto,
            DishDto,
            CreateDishDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Account", description = "Registration, login and the current account"),
        (name = "Restaurants", description = "Paged, sortable restaurant directory"),
        (name = "Dishes", description = "Dishes nested under a restaurant"),
    ),
    info(
        title = "Restaurant Directory API",
        version = "1.0.0",
        description = "REST API for browsing and managing restaurants and their dishes",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    db: DatabaseConnection,
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
    bcrypt_cost: u32,
) -> Router {
    let middleware_state = AuthState {
        jwt_config: jwt_config.clone(),
    };

    let api_state = ApiState {
        restaurants: RestaurantService::new(repos.clone()),
        dishes: DishService::new(repos),
        auth: middleware_state.clone(),
    };

    // Served with and without a trailing slash.
    let dish_collection = get(dishes::list_dishes)
        .post(dishes::create_dish)
        .delete(dishes::delete_all_dishes);

    // Reads are public; mutating handlers demand the user the layer attached.
    let restaurant_routes = Router::new()
        .route(
            "/api/restaurant",
            get(restaurants::list_restaurants).post(restaurants::create_restaurant),
        )
        .route(
            "/api/restaurant/{restaurant_id}",
            get(restaurants::get_restaurant)
                .put(restaurants::update_restaurant)
                .delete(restaurants::delete_restaurant),
        )
        .route("/api/restaurant/{restaurant_id}/dish", dish_collection.clone())
        .route("/api/restaurant/{restaurant_id}/dish/", dish_collection)
        .route(
            "/api/restaurant/{restaurant_id}/dish/{dish_id}",
            get(dishes::get_dish).delete(dishes::delete_dish),
        )
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            optional_auth_middleware,
        ))
        .with_state(api_state);

    let user_service = UserService::new(
        Arc::new(UserRepository::new(db.clone())),
        jwt_config,
    )
    .with_bcrypt_cost(bcrypt_cost);
    let account_state = AccountHandlerState {
        user_service: Arc::new(user_service),
    };

    let account_routes = Router::new()
        .route("/api/account/register", post(account::register))
        .route("/api/account/login", post(account::login))
        .with_state(account_state.clone());

    let account_protected_routes = Router::new()
        .route("/api/account/me", get(account::current_user))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(account_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(account_routes)
        .merge(account_protected_routes)
        .merge(restaurant_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
