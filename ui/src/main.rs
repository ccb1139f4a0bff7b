#![allow(non_snake_case)]

use dioxus::prelude::*;
use search_state::navigation::Route;

mod api;
mod state;
mod views;

use state::SESSION;
use views::landing::Landing;
use views::search_page::SearchPage;

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}

#[component]
fn App() -> Element {
    use_effect(|| {
        api::init();
    });

    let route = SESSION.read().route().clone();

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }

        {match route {
            Route::Landing => rsx! { Landing {} },
            Route::Search(_) => rsx! { SearchPage {} },
            Route::NotFound(path) => rsx! { NotFound { path } },
        }}
    }
}

#[component]
fn NotFound(path: String) -> Element {
    rsx! {
        div { class: "container",
            h1 { class: "logo", "Book Search" }
            p { class: "text-secondary", "Nothing lives at {path}." }
            button {
                class: "search-button",
                onclick: move |_| api::go_home(),
                "Go to search"
            }
        }
    }
}
