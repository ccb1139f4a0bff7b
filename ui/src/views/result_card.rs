#![allow(non_snake_case)]

use dioxus::prelude::*;
use search_state::types::{gutenberg_url, BookResult};

#[component]
pub fn ResultCard(book: BookResult) -> Element {
    let href = gutenberg_url(book.id);
    let year = book
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "\u{2014}".to_string());

    rsx! {
        a {
            class: "result-item-link",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",

            div { class: "result-item",
                div { class: "result-url", "Project Gutenberg #{book.id}" }
                h3 { class: "result-title", "{book.title}" }
                div { class: "result-snippet",
                    strong { "Author:" }
                    " {book.author} \u{2022} "
                    strong { "Language:" }
                    " {book.language} \u{2022} "
                    strong { "Date:" }
                    " {year}"
                }
            }
        }
    }
}
