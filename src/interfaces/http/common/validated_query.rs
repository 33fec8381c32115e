//! Validated query-string extractor for Axum
//!
//! Same contract as [`super::ValidatedJson`] for `?key=value` parameters:
//! parse failures (including missing required keys) and validation
//! failures are both answered with 400. Nothing is defaulted.

use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::ApiResponse;

pub struct ValidatedQuery<T>(pub T);

pub enum ValidatedQueryRejection {
    QueryError(QueryRejection),
    ValidationError(validator::ValidationErrors),
}

impl IntoResponse for ValidatedQueryRejection {
    fn into_response(self) -> Response {
        let body = match self {
            Self::QueryError(rejection) => {
                ApiResponse::<()>::error(format!("Invalid query string: {}", rejection.body_text()))
            }
            Self::ValidationError(errors) => ApiResponse::<()>::validation(&errors),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ValidatedQueryRejection::QueryError)?;

        value
            .validate()
            .map_err(ValidatedQueryRejection::ValidationError)?;

        Ok(ValidatedQuery(value))
    }
}
