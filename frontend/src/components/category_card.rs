use shared::Category;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryCardProps {
    pub category: Category,
    pub deleting: bool,
    pub on_delete: Callback<String>,
}

#[function_component(CategoryCard)]
pub fn category_card(props: &CategoryCardProps) -> Html {
    let on_delete_click = {
        let on_delete = props.on_delete.clone();
        let category_id = props.category.category_id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete.emit(category_id.clone());
        })
    };

    let category = &props.category;

    html! {
        <div class="category-card">
            <div class="category-card-actions">
                <button
                    class="category-delete-button"
                    onclick={on_delete_click}
                    disabled={props.deleting}
                    aria-label="Delete category"
                >
                    {if props.deleting { "⏳" } else { "🗑" }}
                </button>
            </div>

            <h4 class="category-card-name">{category.name.clone()}</h4>
            <p class="category-card-description">{category.description.clone()}</p>
            <div class="category-card-creator">
                <p>{format!("Created by: {}", category.user_admin.full_name)}</p>
                <p>{format!("Email: {}", category.user_admin.email)}</p>
            </div>
        </div>
    }
}
