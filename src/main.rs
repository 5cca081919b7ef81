use dioxus::logger::tracing::{error, Level};
use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod diagnostics;
mod utils;

use api::models::PageProps;
use components::query_params::{default_query_params, SharedQueryParams};
use components::section::{Section, NAV_QUERY_KEY};
use components::views::AccountPage;
use config::{load_page_props, PageConfig};

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialise logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        PageConfig::load().unwrap_or_else(|err| {
            error!("[config] {err}; using relative endpoints");
            PageConfig::with_origin("")
        })
    });
    let query_params: SharedQueryParams = use_hook(default_query_params);
    let props = use_hook(|| {
        load_page_props().unwrap_or_else(|err| {
            error!("[props] {err}; rendering with an empty account");
            PageProps::default()
        })
    });
    let initial_section = use_hook({
        let query_params = query_params.clone();
        let default_nav = props.default_nav.clone();
        move || match default_nav {
            Some(nav) => Section::from_id(&nav),
            None => Section::from_query_value(query_params.get(NAV_QUERY_KEY).as_deref()),
        }
    });

    use_context_provider(|| config);
    use_context_provider(|| query_params);

    rsx! {
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Stylesheet { href: APP_CSS }

        AccountPage { account: props.user, initial_section }
    }
}
