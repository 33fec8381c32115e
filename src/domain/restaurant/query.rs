//! Restaurant list query: validation, sort whitelist and page request
//!
//! A [`RestaurantQuery`] arrives straight from the query string. It is
//! either accepted as a whole or rejected with field-level errors; nothing
//! is defaulted or clamped. Only the validated [`RestaurantPageRequest`]
//! reaches the persistence layer.

use std::borrow::Cow;

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::shared::PaginationParams;

/// Page sizes a client may request.
pub const ALLOWED_PAGE_SIZES: [u32; 3] = [5, 10, 15];

/// Restaurant fields a list may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestaurantSortField {
    Name,
    Category,
    Description,
}

impl RestaurantSortField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Category, Self::Description];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Category => "Category",
            Self::Description => "Description",
        }
    }

    /// Case-sensitive lookup against the whitelist.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

/// Restaurant list query string
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RestaurantQuery {
    /// Page number, starting at 1
    pub page_number: u32,
    /// Page size: 5, 10 or 15
    pub page_size: u32,
    /// Sort field: Name, Category or Description
    pub sort_by: Option<String>,
    /// ASC (default) or DESC
    pub sort_direction: Option<SortDirection>,
    /// Case-insensitive filter on name and description
    pub search_phrase: Option<String>,
}

fn violation(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::from(message));
    error
}

impl Validate for RestaurantQuery {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.page_number < 1 {
            errors.add(
                "page_number",
                violation("range", "page_number must be at least 1".to_string()),
            );
        }

        if !ALLOWED_PAGE_SIZES.contains(&self.page_size) {
            errors.add(
                "page_size",
                violation(
                    "allowed_values",
                    format!("page_size must be one of {:?}", ALLOWED_PAGE_SIZES),
                ),
            );
        }

        if let Some(sort_by) = self.requested_sort_field() {
            if RestaurantSortField::parse(sort_by).is_none() {
                let allowed: Vec<&str> = RestaurantSortField::ALL
                    .iter()
                    .map(RestaurantSortField::as_str)
                    .collect();
                errors.add(
                    "sort_by",
                    violation(
                        "allowed_values",
                        format!("sort_by must be one of {}", allowed.join(", ")),
                    ),
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl RestaurantQuery {
    /// Non-empty `sortBy`, if any.
    fn requested_sort_field(&self) -> Option<&str> {
        self.sort_by.as_deref().filter(|s| !s.is_empty())
    }

    /// Validate the whole query and turn it into a page request.
    pub fn into_page_request(self) -> Result<RestaurantPageRequest, ValidationErrors> {
        self.validate()?;

        let direction = self.sort_direction.unwrap_or_default();
        let sort = self
            .requested_sort_field()
            .and_then(RestaurantSortField::parse)
            .map(|field| (field, direction));
        let search_phrase = self
            .search_phrase
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(RestaurantPageRequest {
            pagination: PaginationParams::new(self.page_number, self.page_size),
            sort,
            search_phrase,
        })
    }
}

/// A validated, bounded restaurant page request
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPageRequest {
    pub pagination: PaginationParams,
    /// `None` keeps natural storage order.
    pub sort: Option<(RestaurantSortField, SortDirection)>,
    pub search_phrase: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page_number: u32, page_size: u32, sort_by: Option<&str>) -> RestaurantQuery {
        RestaurantQuery {
            page_number,
            page_size,
            sort_by: sort_by.map(str::to_string),
            sort_direction: None,
            search_phrase: None,
        }
    }

    #[test]
    fn accepts_whitelisted_sizes_and_fields() {
        for q in [
            query(1, 10, Some("Name")),
            query(1, 5, Some("Category")),
            query(1, 15, None),
        ] {
            assert!(q.validate().is_ok(), "{q:?} should be valid");
        }
    }

    #[test]
    fn every_allowed_page_size_is_valid_without_sort() {
        for size in ALLOWED_PAGE_SIZES {
            assert!(query(1, size, None).validate().is_ok());
        }
    }

    #[test]
    fn rejects_sizes_outside_whitelist() {
        for size in [0, 1, 4, 6, 11, 20, 100, 115] {
            let errors = query(1, size, None).validate().unwrap_err();
            assert!(errors.field_errors().contains_key("page_size"));
        }
    }

    #[test]
    fn rejects_zero_page_number() {
        let errors = query(0, 10, Some("Name")).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("page_number"));
    }

    #[test]
    fn rejects_fields_outside_sort_whitelist() {
        let errors = query(1, 15, Some("ContactNumber")).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("sort_by"));
    }

    #[test]
    fn sort_field_match_is_case_sensitive() {
        assert!(query(1, 5, Some("name")).validate().is_err());
        assert!(query(1, 5, Some("Name")).validate().is_ok());
    }

    #[test]
    fn empty_sort_by_means_no_sort() {
        let request = query(2, 5, Some("")).into_page_request().unwrap();
        assert_eq!(request.sort, None);
        assert_eq!(request.pagination.offset(), 5);
    }

    #[test]
    fn reports_every_violation_at_once() {
        let errors = query(0, 115, Some("ContactNumber")).validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn page_request_carries_direction_and_trimmed_search() {
        let mut q = query(1, 10, Some("Description"));
        q.sort_direction = Some(SortDirection::Desc);
        q.search_phrase = Some("  pizza ".to_string());

        let request = q.into_page_request().unwrap();
        assert_eq!(
            request.sort,
            Some((RestaurantSortField::Description, SortDirection::Desc))
        );
        assert_eq!(request.search_phrase.as_deref(), Some("pizza"));
    }

    #[test]
    fn missing_paging_fields_fail_to_deserialize() {
        let parsed: Result<RestaurantQuery, _> = serde_json::from_str("{}");
        assert!(parsed.is_err());
    }
}
