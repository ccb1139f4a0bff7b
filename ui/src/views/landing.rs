#![allow(non_snake_case)]

use dioxus::prelude::*;

use super::filter_panel::FilterPanel;
use super::search_box::SearchBox;

#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "container",
            h1 { class: "logo", "Book Search" }

            SearchBox { compact: false }

            FilterPanel { apply_button: false }

            div { class: "button-wrapper",
                button {
                    class: "search-button",
                    onclick: move |_| super::submit_search(),
                    "Search"
                }
            }
        }
    }
}
