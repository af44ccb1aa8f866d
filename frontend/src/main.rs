mod components;
mod hooks;
mod services;

use web_sys::MouseEvent;
use yew::prelude::*;

use components::category_modal::CategoryModal;
use hooks::use_categories::use_categories;
use services::api::ApiClient;
use services::config::AppConfig;
use services::logging::Logger;
use services::session::SessionHandle;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api_client = use_memo(props.config.api_base_url.clone(), |base_url| {
        ApiClient::with_base_url(base_url.clone())
    });
    let session = use_memo((), |_| SessionHandle::detect());
    let show_categories = use_state(|| false);

    let categories = use_categories(&api_client, &session, props.config.cache_ttl_ms);

    let open_categories = {
        let show_categories = show_categories.clone();
        Callback::from(move |_: MouseEvent| {
            show_categories.set(true);
        })
    };

    let close_categories = {
        let show_categories = show_categories.clone();
        Callback::from(move |_: ()| {
            show_categories.set(false);
        })
    };

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>{"Administration"}</h1>
            </header>

            <main class="dashboard-main">
                <section class="dashboard-card">
                    <h2>{"Categories"}</h2>
                    <p>{format!("{} loaded", categories.state.categories.len())}</p>
                    <button class="btn btn-primary" onclick={open_categories}>
                        {"Manage categories"}
                    </button>
                </section>
            </main>

            <CategoryModal
                show={*show_categories}
                on_close={close_categories}
                categories={categories.state.categories.clone()}
                loading={categories.state.loading}
                error={categories.state.error.clone()}
                load_categories={categories.reload.clone()}
                api_client={(*api_client).clone()}
                session={(*session).clone()}
            />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    Logger::init(config.log_level);
    Logger::info_with_component("main", &format!("Category admin using API at {}", config.api_base_url));

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
