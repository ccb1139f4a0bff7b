#![allow(non_snake_case)]

use dioxus::prelude::*;

use super::filter_panel::FilterPanel;
use super::search_box::SearchBox;
use super::search_results::SearchResults;
use crate::api;
use crate::state::SESSION;

#[component]
pub fn SearchPage() -> Element {
    let term = SESSION.read().query().map(|q| q.term().to_string());

    rsx! {
        if let Some(t) = term.as_ref() {
            document::Title { "{t} - Book Search" }
        }

        div { class: "app",
            // Header
            div { class: "search-header",
                span {
                    class: "logo-small",
                    title: "Back to the start page",
                    onclick: move |_| api::go_home(),
                    "Book Search"
                }

                SearchBox { compact: true }
            }

            // Filters refine the active term only
            if term.is_some() {
                FilterPanel { apply_button: true }
            }

            SearchResults {}
        }
    }
}
