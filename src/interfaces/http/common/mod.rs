//! Common API DTOs, extractors and error mapping

pub mod validated_json;
pub mod validated_query;

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::domain::DomainError;
use crate::shared::PaginatedResult;

pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;

/// Standard API response envelope
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "error": "...", "details": {...}}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Field name → messages, present for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, Vec<String>>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            details: None,
        }
    }

    pub fn validation(errors: &ValidationErrors) -> Self {
        Self {
            details: Some(field_messages(errors)),
            ..Self::error("Validation failed")
        }
    }
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// Flatten field-level validation errors into readable messages.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Map a domain error onto its HTTP status and envelope.
pub fn error_response(err: DomainError) -> ApiError {
    let status = match &err {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = match err {
        DomainError::Validation(errors) => ApiResponse::validation(&errors),
        DomainError::Database(message) => {
            error!(error = %message, "Request failed on storage");
            ApiResponse::error("Internal server error")
        }
        other => ApiResponse::error(other.to_string()),
    };

    (status, Json(body))
}

/// Paginated response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items on the requested page
    pub items: Vec<T>,
    /// Number of items matching the query across all pages
    pub total_items_count: u64,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub items_from: u64,
    pub items_to: u64,
}

impl<T, U> From<PaginatedResult<U>> for PaginatedResponse<T>
where
    T: From<U>,
{
    fn from(result: PaginatedResult<U>) -> Self {
        let result = result.map(T::from);
        Self {
            items: result.items,
            total_items_count: result.total,
            page_number: result.page,
            page_size: result.limit,
            total_pages: result.total_pages,
            items_from: result.items_from,
            items_to: result.items_to,
        }
    }
}
