use shared::{CachedCategories, Category};

use super::config::CATEGORIES_CACHE_KEY;
use super::logging::Logger;
use super::session::SessionHandle;

/// Cached category list if one exists and is younger than `ttl_ms`.
/// Unreadable snapshots are dropped.
pub fn read_fresh(session: &SessionHandle, now_ms: i64, ttl_ms: i64) -> Option<Vec<Category>> {
    let raw = session.store().get(CATEGORIES_CACHE_KEY)?;

    match serde_json::from_str::<CachedCategories>(&raw) {
        Ok(cached) if cached.is_fresh(now_ms, ttl_ms) => Some(cached.categories),
        Ok(_) => None,
        Err(e) => {
            Logger::warn_with_component("category-cache", &format!("Discarding unreadable snapshot: {}", e));
            invalidate(session);
            None
        }
    }
}

pub fn store(session: &SessionHandle, categories: &[Category], now_ms: i64) {
    let snapshot = CachedCategories::new(categories.to_vec(), now_ms);
    match serde_json::to_string(&snapshot) {
        Ok(json) => session.store().set(CATEGORIES_CACHE_KEY, &json),
        Err(e) => Logger::warn_with_component("category-cache", &format!("Failed to serialize snapshot: {}", e)),
    }
}

/// Forces the next load to go to the network
pub fn invalidate(session: &SessionHandle) {
    session.store().remove(CATEGORIES_CACHE_KEY);
}
