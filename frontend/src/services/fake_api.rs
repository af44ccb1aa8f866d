use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use shared::{Category, CategoryError, CreateCategoryRequest, UserAdminSummary};

use super::api::CategoryApi;

/// Scripted `CategoryApi` that records every request it receives
#[derive(Default)]
pub struct FakeCategoryApi {
    pub requests: RefCell<Vec<String>>,
    pub list_result: RefCell<Option<Result<Vec<Category>, CategoryError>>>,
    pub delete_result: RefCell<Option<Result<(), CategoryError>>>,
    pub create_result: RefCell<Option<Result<Category, CategoryError>>>,
    pub list_calls: Cell<u32>,
}

impl FakeCategoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listing(self, result: Result<Vec<Category>, CategoryError>) -> Self {
        *self.list_result.borrow_mut() = Some(result);
        self
    }

    pub fn deleting(self, result: Result<(), CategoryError>) -> Self {
        *self.delete_result.borrow_mut() = Some(result);
        self
    }

    pub fn creating(self, result: Result<Category, CategoryError>) -> Self {
        *self.create_result.borrow_mut() = Some(result);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

pub fn category(id: &str, name: &str) -> Category {
    Category {
        category_id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        user_admin: UserAdminSummary {
            full_name: "Ana Torres".to_string(),
            email: "ana@example.com".to_string(),
        },
    }
}

#[async_trait(?Send)]
impl CategoryApi for FakeCategoryApi {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.requests.borrow_mut().push("GET /category/all".to_string());
        self.list_result.borrow().clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create_category(
        &self,
        request: &CreateCategoryRequest,
        admin_id: &str,
    ) -> Result<Category, CategoryError> {
        self.requests
            .borrow_mut()
            .push(format!("POST /category/create?UserAdminId={} name={}", admin_id, request.name));
        self.create_result
            .borrow()
            .clone()
            .unwrap_or_else(|| Ok(category("new", &request.name)))
    }

    async fn delete_category(&self, category_id: &str, admin_id: &str) -> Result<(), CategoryError> {
        self.requests.borrow_mut().push(format!(
            "DELETE /category/delete_category/{}?UserAdminId={}",
            category_id, admin_id
        ));
        self.delete_result.borrow().clone().unwrap_or(Ok(()))
    }
}
