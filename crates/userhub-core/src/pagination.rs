//! Page-based pagination for list endpoints.
//!
//! Clients send `page` (1-indexed) and `limit` query parameters and receive
//! a [`PaginationMeta`] alongside the items:
//!
//! ```json
//! { "page": 2, "limit": 10, "totalUsers": 42, "totalPages": 5 }
//! ```
//!
//! Requesting a page past the last one is not an error; it yields an empty
//! item list with the same metadata.
//!
//! # Example
//!
//! ```ignore
//! async fn list_users(
//!     ValidatedQuery(params): ValidatedQuery<PaginationParams>,
//! ) -> Result<ApiResponse<UsersPage>, AppError> {
//!     let users = store.list(params.limit(), params.offset()).await?;
//!     let total = store.count().await?;
//!     let pagination = PaginationMeta::new(params.page(), params.limit(), total);
//!     // ...
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Deserializes an optional string into an optional i64.
///
/// Query parameters arrive as strings; an empty string is treated as absent
/// and a non-numeric value is a deserialization error.
fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.trim().parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Metadata about a paginated response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number (1-indexed)
    pub page: i64,
    /// Items per page (the limit that was applied)
    pub limit: i64,
    /// Total number of users across all pages
    pub total_users: i64,
    /// Total number of pages, never less than 1
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(page: i64, limit: i64, total_users: i64) -> Self {
        let limit = limit.max(1);
        let total_pages = ((total_users.max(0) + limit - 1) / limit).max(1);

        Self {
            page,
            limit,
            total_users,
            total_pages,
        }
    }
}

/// Query parameters for pagination.
///
/// - `limit` is clamped to the range [1, 100], default 10
/// - `page` is clamped to a minimum of 1, default 1
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (1-indexed, default: 1)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    /// Items per page (1-100, default: 10)
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
}

impl PaginationParams {
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    #[must_use]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Number of rows to skip for the current page.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }
}
