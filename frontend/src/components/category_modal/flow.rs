use shared::{Category, CategoryError, CreateCategoryRequest};
use yew::Callback;

use super::state::CategoryModalAction;
use crate::services::api::CategoryApi;
use crate::services::category_cache;
use crate::services::logging::Logger;
use crate::services::session::SessionHandle;

const COMPONENT: &str = "CategoryModal";

/// Deletes one category on behalf of the signed-in administrator.
///
/// Without an admin id nothing is sent. On success the cached list is
/// dropped and `reload` fires; on failure the cache is left untouched.
pub async fn delete_category<A: CategoryApi + ?Sized>(
    api: &A,
    session: &SessionHandle,
    category_id: &str,
    reload: &Callback<()>,
) -> Result<(), CategoryError> {
    let admin_id = session.admin_id().ok_or(CategoryError::Unauthorized)?;

    Logger::debug_with_component(COMPONENT, &format!("Deleting category {}", category_id));
    if let Err(e) = api.delete_category(category_id, &admin_id).await {
        Logger::warn_with_component(COMPONENT, &format!("Delete of {} failed: {}", category_id, e));
        return Err(e);
    }

    category_cache::invalidate(session);
    reload.emit(());
    Ok(())
}

/// Creates a category; the caller reports success through its own callback
pub async fn create_category<A: CategoryApi + ?Sized>(
    api: &A,
    session: &SessionHandle,
    request: &CreateCategoryRequest,
) -> Result<Category, CategoryError> {
    let admin_id = session.admin_id().ok_or(CategoryError::Unauthorized)?;
    let created = api.create_category(request, &admin_id).await?;
    Logger::info_with_component(COMPONENT, &format!("Created category {}", created.category_id));
    Ok(created)
}

/// Invalidates the cache and reloads after the creation form succeeds.
/// The returned action switches the modal back to the list.
pub fn on_create_success(session: &SessionHandle, reload: &Callback<()>) -> CategoryModalAction {
    category_cache::invalidate(session);
    reload.emit(());
    CategoryModalAction::CloseCreateForm
}
