use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category record as returned by the backend category service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend-assigned identifier (UUID string)
    pub category_id: String,
    pub name: String,
    pub description: String,
    /// Administrator who created this category
    pub user_admin: UserAdminSummary,
}

/// Creator reference embedded in every category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAdminSummary {
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: String,
}

/// Snapshot of the category list kept in session storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedCategories {
    pub categories: Vec<Category>,
    /// Epoch milliseconds when the snapshot was taken
    pub cached_at_ms: i64,
}

impl CachedCategories {
    pub fn new(categories: Vec<Category>, cached_at_ms: i64) -> Self {
        Self {
            categories,
            cached_at_ms,
        }
    }

    /// A snapshot is fresh while its age is within `[0, ttl_ms)`.
    /// Timestamps from the future are treated as stale.
    pub fn is_fresh(&self, now_ms: i64, ttl_ms: i64) -> bool {
        let age = now_ms - self.cached_at_ms;
        age >= 0 && age < ttl_ms
    }
}

/// Errors surfaced by category operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// No administrator identifier in the session; nothing was sent
    #[error("Unauthorized access")]
    Unauthorized,
    /// Backend answered with a non-success status
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request never completed
    #[error("Network error: {0}")]
    Network(String),
    /// Success status but the body could not be parsed
    #[error("Failed to read server response: {0}")]
    Decode(String),
}

impl CategoryError {
    pub const DELETE_FALLBACK: &'static str = "Failed to delete category";
    pub const CREATE_FALLBACK: &'static str = "Failed to create category";
    pub const LIST_FALLBACK: &'static str = "Failed to load categories";

    /// Build a server error from a non-success response, preferring the body
    /// text and using `fallback` when the body is blank.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let message = if body.trim().is_empty() {
            fallback.to_string()
        } else {
            body.to_string()
        };
        CategoryError::Server { status, message }
    }

    /// Text shown inline in the UI
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_category() -> Category {
        Category {
            category_id: "7f1c2a9e-0000-4000-8000-000000000001".to_string(),
            name: "Shoes".to_string(),
            description: "Running and casual footwear".to_string(),
            user_admin: UserAdminSummary {
                full_name: "Ana Torres".to_string(),
                email: "ana@example.com".to_string(),
            },
        }
    }

    #[test]
    fn test_category_decodes_backend_json() {
        let json = r#"{
            "categoryId": "7f1c2a9e-0000-4000-8000-000000000001",
            "name": "Shoes",
            "description": "Running and casual footwear",
            "userAdmin": { "fullName": "Ana Torres", "email": "ana@example.com" }
        }"#;

        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category, sample_category());
    }

    #[test]
    fn test_category_encodes_camel_case() {
        let value = serde_json::to_value(sample_category()).unwrap();
        assert!(value.get("categoryId").is_some());
        assert_eq!(value["userAdmin"]["fullName"], "Ana Torres");
        assert!(value.get("category_id").is_none());
    }

    #[test]
    fn test_cache_freshness_window() {
        let cached = CachedCategories::new(vec![sample_category()], 1_000);

        assert!(cached.is_fresh(1_000, 3_600_000));
        assert!(cached.is_fresh(3_600_999, 3_600_000));
        assert!(!cached.is_fresh(3_601_000, 3_600_000));

        // Clock went backwards
        assert!(!cached.is_fresh(999, 3_600_000));
    }

    #[test]
    fn test_server_error_prefers_body_text() {
        let error = CategoryError::from_response(500, "conflict", CategoryError::DELETE_FALLBACK);
        assert_eq!(
            error,
            CategoryError::Server {
                status: 500,
                message: "conflict".to_string()
            }
        );
        assert_eq!(error.user_message(), "conflict");
    }

    #[test]
    fn test_server_error_falls_back_on_blank_body() {
        let error = CategoryError::from_response(404, "  \n", CategoryError::DELETE_FALLBACK);
        assert_eq!(error.user_message(), "Failed to delete category");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CategoryError::Unauthorized.user_message(), "Unauthorized access");
        assert_eq!(
            CategoryError::Network("Failed to fetch".to_string()).user_message(),
            "Network error: Failed to fetch"
        );
        assert_eq!(
            CategoryError::Decode("eof".to_string()).user_message(),
            "Failed to read server response: eof"
        );
    }
}
