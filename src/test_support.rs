//! Shared fixtures for unit and HTTP tests

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;

use crate::domain::{
    CreateUserDto, Dish, NewDish, NewRestaurant, RepositoryProvider, Restaurant, User, UserRole,
};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::database::migrator::Migrator;
use crate::{create_api_router, init_database, DatabaseConfig, SeaOrmRepositoryProvider};

/// Fresh migrated in-memory database
pub async fn memory_db() -> DatabaseConnection {
    let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret".to_string(),
        expiration_hours: 1,
        issuer: "restaurant-api".to_string(),
    }
}

pub async fn test_repos() -> (DatabaseConnection, Arc<dyn RepositoryProvider>) {
    let db = memory_db().await;
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    (db, repos)
}

pub async fn seed_user(repos: &Arc<dyn RepositoryProvider>, email: &str) -> User {
    repos
        .users()
        .create_user(CreateUserDto {
            email: email.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            role: UserRole::User,
            first_name: None,
            last_name: None,
            nationality: None,
            date_of_birth: None,
        })
        .await
        .unwrap()
}

pub fn new_restaurant(name: &str) -> NewRestaurant {
    NewRestaurant {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        category: Some("Italian".to_string()),
        has_delivery: false,
        contact_email: None,
        contact_number: None,
        city: "Kraków".to_string(),
        street: "Długa 5".to_string(),
        postal_code: Some("30-001".to_string()),
    }
}

pub async fn seed_restaurant(
    repos: &Arc<dyn RepositoryProvider>,
    owner_id: &str,
    name: &str,
) -> Restaurant {
    repos
        .restaurants()
        .create(owner_id, new_restaurant(name))
        .await
        .unwrap()
}

pub async fn seed_dish(repos: &Arc<dyn RepositoryProvider>, restaurant_id: i32, name: &str) -> Dish {
    repos
        .dishes()
        .create(
            restaurant_id,
            NewDish {
                name: name.to_string(),
                description: None,
                price: Decimal::new(1999, 2),
            },
        )
        .await
        .unwrap()
}

/// Full router over an in-memory database
pub struct TestApp {
    pub router: Router,
    pub repos: Arc<dyn RepositoryProvider>,
    pub jwt: JwtConfig,
}

impl TestApp {
    pub async fn new() -> Self {
        let (db, repos) = test_repos().await;
        let jwt = test_jwt_config();
        let router = create_api_router(db, repos.clone(), jwt.clone(), 4);
        Self { router, repos, jwt }
    }

    pub fn token_for(&self, user: &User) -> String {
        create_token(&user.id, &user.email, user.role.as_str(), &self.jwt).unwrap()
    }

    pub fn token_with_role(&self, user_id: &str, role: UserRole) -> String {
        create_token(user_id, "someone@test.pl", role.as_str(), &self.jwt).unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, HeaderMap, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(
        &self,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, HeaderMap, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(
        &self,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, HeaderMap, Value) {
        self.send(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, HeaderMap, Value) {
        self.send(Method::DELETE, uri, token, None).await
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, HeaderMap, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, headers, json)
    }
}
