use shared::CreateCategoryRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use super::category_modal::flow;
use crate::services::api::ApiClient;
use crate::services::session::SessionHandle;

#[derive(Properties, PartialEq)]
pub struct CreateCategoryFormProps {
    pub api_client: ApiClient,
    pub session: SessionHandle,
    pub on_cancel: Callback<()>,
    pub on_create_success: Callback<()>,
}

/// Trim and check the form fields before anything is sent
pub fn validate_form(name: &str, description: &str) -> Result<CreateCategoryRequest, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Please enter a category name".to_string());
    }

    Ok(CreateCategoryRequest {
        name: name.to_string(),
        description: description.trim().to_string(),
    })
}

#[function_component(CreateCategoryForm)]
pub fn create_category_form(props: &CreateCategoryFormProps) -> Html {
    let name = use_state(String::new);
    let description = use_state(String::new);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let description = description.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let api_client = props.api_client.clone();
        let session = props.session.clone();
        let on_create_success = props.on_create_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match validate_form(&name, &description) {
                Ok(request) => request,
                Err(message) => {
                    error_message.set(Some(message));
                    return;
                }
            };

            is_submitting.set(true);
            error_message.set(None);

            let name = name.clone();
            let description = description.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let api_client = api_client.clone();
            let session = session.clone();
            let on_create_success = on_create_success.clone();

            spawn_local(async move {
                match flow::create_category(&api_client, &session, &request).await {
                    Ok(_) => {
                        name.set(String::new());
                        description.set(String::new());
                        is_submitting.set(false);
                        on_create_success.emit(());
                    }
                    Err(e) => {
                        is_submitting.set(false);
                        error_message.set(Some(e.user_message()));
                    }
                }
            });
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            on_cancel.emit(());
        })
    };

    html! {
        <form class="create-category-form" onsubmit={on_submit}>
            {if let Some(error) = (*error_message).clone() {
                html! {
                    <div class="create-category-error">
                        {format!("Error: {}", error)}
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="form-group">
                <label for="category-name">{"Name"}</label>
                <input
                    id="category-name"
                    type="text"
                    class="create-category-input"
                    placeholder="Category name"
                    value={(*name).clone()}
                    onchange={on_name_change}
                    disabled={*is_submitting}
                    autofocus=true
                />
            </div>

            <div class="form-group">
                <label for="category-description">{"Description"}</label>
                <textarea
                    id="category-description"
                    class="create-category-input"
                    placeholder="What belongs in this category?"
                    value={(*description).clone()}
                    onchange={on_description_change}
                    disabled={*is_submitting}
                />
            </div>

            <div class="create-category-buttons">
                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                    {if *is_submitting { "Creating..." } else { "Create category" }}
                </button>
                <button
                    type="button"
                    class="btn btn-secondary"
                    onclick={on_cancel}
                    disabled={*is_submitting}
                >
                    {"Cancel"}
                </button>
            </div>
        </form>
    }
}
