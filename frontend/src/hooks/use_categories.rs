use shared::{Category, CategoryError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::{ApiClient, CategoryApi};
use crate::services::category_cache;
use crate::services::logging::Logger;
use crate::services::session::SessionHandle;

#[derive(Clone, PartialEq)]
pub struct CategoriesState {
    pub categories: Vec<Category>,
    pub loading: bool,
    /// Empty when the last load succeeded
    pub error: String,
}

pub struct UseCategoriesResult {
    pub state: CategoriesState,
    pub reload: Callback<()>,
}

/// Serve the list from the session cache while it is fresh, otherwise
/// fetch it and refresh the cache.
pub async fn load_categories<A: CategoryApi + ?Sized>(
    api: &A,
    session: &SessionHandle,
    now_ms: i64,
    cache_ttl_ms: i64,
) -> Result<Vec<Category>, CategoryError> {
    if let Some(cached) = category_cache::read_fresh(session, now_ms, cache_ttl_ms) {
        Logger::debug_with_component("use-categories", &format!("Using {} cached categories", cached.len()));
        return Ok(cached);
    }

    let categories = api.list_categories().await?;
    category_cache::store(session, &categories, now_ms);
    Ok(categories)
}

#[hook]
pub fn use_categories(api_client: &ApiClient, session: &SessionHandle, cache_ttl_ms: i64) -> UseCategoriesResult {
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| false);
    let error = use_state(String::new);

    let reload = {
        let api_client = api_client.clone();
        let session = session.clone();
        let categories = categories.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback(cache_ttl_ms, move |_, cache_ttl_ms| {
            let api_client = api_client.clone();
            let session = session.clone();
            let categories = categories.clone();
            let loading = loading.clone();
            let error = error.clone();
            let cache_ttl_ms = *cache_ttl_ms;

            spawn_local(async move {
                loading.set(true);

                let now_ms = js_sys::Date::now() as i64;
                match load_categories(&api_client, &session, now_ms, cache_ttl_ms).await {
                    Ok(list) => {
                        error.set(String::new());
                        categories.set(list);
                    }
                    Err(e) => {
                        Logger::error_with_component("use-categories", &format!("Failed to load categories: {}", e));
                        error.set(e.user_message());
                    }
                }

                loading.set(false);
            });
        })
    };

    let state = CategoriesState {
        categories: (*categories).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    UseCategoriesResult { state, reload }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::services::config::CATEGORIES_CACHE_KEY;
    use crate::services::fake_api::{category, FakeCategoryApi};
    use crate::services::session::MemorySessionStore;

    const TTL: i64 = 3_600_000;

    #[test]
    fn test_cache_miss_fetches_and_stores() {
        let api = FakeCategoryApi::new().listing(Ok(vec![category("a", "Shoes")]));
        let store = MemorySessionStore::new();
        let session = SessionHandle::new(store.clone());

        let list = block_on(load_categories(&api, &session, 1_000, TTL)).unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(api.list_calls.get(), 1);
        assert!(store.contains(CATEGORIES_CACHE_KEY));
    }

    #[test]
    fn test_fresh_cache_skips_network() {
        let api = FakeCategoryApi::new().listing(Ok(vec![category("a", "Shoes")]));
        let session = SessionHandle::new(MemorySessionStore::new());

        block_on(load_categories(&api, &session, 1_000, TTL)).unwrap();
        let list = block_on(load_categories(&api, &session, 2_000, TTL)).unwrap();

        assert_eq!(list[0].name, "Shoes");
        assert_eq!(api.list_calls.get(), 1);
    }

    #[test]
    fn test_invalidated_cache_refetches() {
        let api = FakeCategoryApi::new().listing(Ok(vec![]));
        let session = SessionHandle::new(MemorySessionStore::new());

        block_on(load_categories(&api, &session, 1_000, TTL)).unwrap();
        category_cache::invalidate(&session);
        block_on(load_categories(&api, &session, 2_000, TTL)).unwrap();

        assert_eq!(api.list_calls.get(), 2);
    }

    #[test]
    fn test_failed_fetch_leaves_cache_empty() {
        let api = FakeCategoryApi::new().listing(Err(CategoryError::from_response(
            503,
            "",
            CategoryError::LIST_FALLBACK,
        )));
        let store = MemorySessionStore::new();
        let session = SessionHandle::new(store.clone());

        let result = block_on(load_categories(&api, &session, 1_000, TTL));

        assert_eq!(result.unwrap_err().user_message(), "Failed to load categories");
        assert!(!store.contains(CATEGORIES_CACHE_KEY));
    }
}
