pub mod flow;
pub mod state;

use shared::Category;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use self::state::{CategoryModalAction, CategoryModalState, RenderMode, VisibilityChange, VisibilityTracker};
use super::category_card::CategoryCard;
use super::create_category_form::CreateCategoryForm;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::session::SessionHandle;

#[derive(Properties, PartialEq)]
pub struct CategoryModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub categories: Vec<Category>,
    pub loading: bool,
    /// List-fetch error owned by the parent; empty means none
    #[prop_or_default]
    pub error: String,
    pub load_categories: Callback<()>,
    pub api_client: ApiClient,
    pub session: SessionHandle,
}

#[function_component(CategoryModal)]
pub fn category_modal(props: &CategoryModalProps) -> Html {
    let state = use_reducer(CategoryModalState::default);
    let visibility = use_mut_ref(VisibilityTracker::default);

    // Load on open; on close drop the form and error, keep in-flight deletes
    use_effect_with(props.show, {
        let load_categories = props.load_categories.clone();
        let state = state.clone();
        move |show| {
            match visibility.borrow_mut().observe(*show) {
                VisibilityChange::Opened => {
                    Logger::debug_with_component("CategoryModal", "Opened, loading categories");
                    load_categories.emit(());
                }
                VisibilityChange::Closed => state.dispatch(CategoryModalAction::Dismiss),
                VisibilityChange::Unchanged => {}
            }
            || ()
        }
    });

    let on_delete = {
        let state = state.clone();
        let api_client = props.api_client.clone();
        let session = props.session.clone();
        let load_categories = props.load_categories.clone();

        Callback::from(move |category_id: String| {
            state.dispatch(CategoryModalAction::BeginDelete(category_id.clone()));

            let state = state.clone();
            let api_client = api_client.clone();
            let session = session.clone();
            let load_categories = load_categories.clone();

            spawn_local(async move {
                let result = flow::delete_category(&api_client, &session, &category_id, &load_categories).await;
                state.dispatch(CategoryModalAction::FinishDelete { category_id, result });
            });
        })
    };

    let on_create_success = {
        let state = state.clone();
        let session = props.session.clone();
        let load_categories = props.load_categories.clone();
        Callback::from(move |_: ()| {
            state.dispatch(flow::on_create_success(&session, &load_categories));
        })
    };

    let on_open_create_form = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(CategoryModalAction::OpenCreateForm);
        })
    };

    let on_cancel_create = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            state.dispatch(CategoryModalAction::CloseCreateForm);
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let mode = state.render_mode(props.show, props.loading, &props.error, props.categories.len());
    if mode == RenderMode::Hidden {
        return html! {};
    }

    let title = if state.show_create_form() {
        "New category"
    } else {
        "All categories"
    };

    let delete_error_banner = match state.delete_error() {
        Some(error) => html! {
            <div class="category-modal-error">
                {format!("Error: {}", error.user_message())}
            </div>
        },
        None => html! {},
    };

    let body = match mode {
        RenderMode::CreateForm => html! {
            <CreateCategoryForm
                api_client={props.api_client.clone()}
                session={props.session.clone()}
                on_cancel={on_cancel_create}
                on_create_success={on_create_success}
            />
        },
        RenderMode::Loading => html! {
            <>
                {delete_error_banner}
                <div class="category-modal-loading">
                    <div class="spinner"></div>
                    <p>{"Loading categories..."}</p>
                </div>
            </>
        },
        RenderMode::Error(error) => html! {
            <>
                {delete_error_banner}
                <div class="category-modal-error">
                    {format!("Error: {}", error)}
                </div>
            </>
        },
        RenderMode::Empty => html! {
            <>
                {delete_error_banner}
                <div class="category-modal-empty">
                    {"No categories registered"}
                </div>
            </>
        },
        RenderMode::List => html! {
            <>
                {delete_error_banner}
                <div class="category-grid">
                    {for props.categories.iter().map(|category| html! {
                        <CategoryCard
                            key={category.category_id.clone()}
                            category={category.clone()}
                            deleting={state.is_deleting(&category.category_id)}
                            on_delete={on_delete.clone()}
                        />
                    })}
                </div>
            </>
        },
        RenderMode::Hidden => html! {},
    };

    html! {
        <div class="category-modal-backdrop">
            <div class="category-modal">
                <div class="category-modal-content">
                    <div class="category-modal-header">
                        <h3 class="category-modal-title">{title}</h3>
                        <div class="category-modal-header-buttons">
                            {if state.show_create_form() {
                                html! {}
                            } else {
                                html! {
                                    <button class="btn btn-primary" onclick={on_open_create_form}>
                                        {"New category"}
                                    </button>
                                }
                            }}
                            <button
                                class="category-modal-close"
                                onclick={on_close_click}
                                aria-label="Close modal"
                            >
                                {"×"}
                            </button>
                        </div>
                    </div>

                    {body}
                </div>
            </div>
        </div>
    }
}
