use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use shared::{Category, CategoryError, CreateCategoryRequest};

/// Backend operations the category views depend on
#[async_trait(?Send)]
pub trait CategoryApi {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError>;

    async fn create_category(
        &self,
        request: &CreateCategoryRequest,
        admin_id: &str,
    ) -> Result<Category, CategoryError>;

    async fn delete_category(&self, category_id: &str, admin_id: &str) -> Result<(), CategoryError>;
}

/// API client for the category service
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn list_url(&self) -> String {
        format!("{}/category/all", self.base_url)
    }

    pub fn create_url(&self) -> String {
        format!("{}/category/create", self.base_url)
    }

    pub fn delete_url(&self, category_id: &str) -> String {
        format!(
            "{}/category/delete_category/{}",
            self.base_url,
            String::from(js_sys::encode_uri_component(category_id))
        )
    }
}

async fn error_from(response: Response, fallback: &str) -> CategoryError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    CategoryError::from_response(status, &body, fallback)
}

#[async_trait(?Send)]
impl CategoryApi for ApiClient {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        let response = Request::get(&self.list_url())
            .send()
            .await
            .map_err(|e| CategoryError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from(response, CategoryError::LIST_FALLBACK).await);
        }

        response
            .json::<Vec<Category>>()
            .await
            .map_err(|e| CategoryError::Decode(e.to_string()))
    }

    async fn create_category(
        &self,
        request: &CreateCategoryRequest,
        admin_id: &str,
    ) -> Result<Category, CategoryError> {
        let response = Request::post(&self.create_url())
            .query([("UserAdminId", admin_id)])
            .json(request)
            .map_err(|e| CategoryError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| CategoryError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from(response, CategoryError::CREATE_FALLBACK).await);
        }

        response
            .json::<Category>()
            .await
            .map_err(|e| CategoryError::Decode(e.to_string()))
    }

    async fn delete_category(&self, category_id: &str, admin_id: &str) -> Result<(), CategoryError> {
        let response = Request::delete(&self.delete_url(category_id))
            .query([("UserAdminId", admin_id)])
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| CategoryError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(error_from(response, CategoryError::DELETE_FALLBACK).await)
        }
    }
}
