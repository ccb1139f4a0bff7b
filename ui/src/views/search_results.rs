#![allow(non_snake_case)]

use dioxus::prelude::*;
use search_state::languages;
use search_state::lifecycle::ResultState;

use super::result_card::ResultCard;
use crate::state::SESSION;

#[component]
pub fn SearchResults() -> Element {
    let session = SESSION.read();
    let state = session.result_state().clone();
    let applied = session.applied().clone();
    let show_tags = session.filters_explicitly_applied() && !applied.is_empty();
    drop(session);

    let body = match state {
        ResultState::Idle => rsx! {},
        ResultState::Loading => rsx! {
            div { class: "loading",
                div { class: "loading-spinner" }
                p { "Searching..." }
            }
        },
        ResultState::Failed(message) => rsx! {
            div { class: "search-error",
                h2 { "Search failed" }
                p { class: "error-text", "{message}" }
                p { class: "text-secondary", "Check your connection and search again." }
            }
        },
        ResultState::Empty(payload) => rsx! {
            NoResults { query: payload.query.clone(), filtered: !applied.is_empty() }
        },
        ResultState::Populated(payload) => {
            let language = if applied.language.is_empty() {
                None
            } else {
                Some(
                    languages::display_name(&applied.language)
                        .unwrap_or(applied.language.as_str())
                        .to_string(),
                )
            };
            rsx! {
                div { class: "results-info",
                    "About {payload.count} results for \"{payload.query}\""
                    if show_tags {
                        div { class: "active-filters-display",
                            "Filters applied:"
                            if !applied.author.is_empty() {
                                span { class: "filter-tag", "Author: {applied.author}" }
                            }
                            if let Some(name) = language {
                                span { class: "filter-tag", "Language: {name}" }
                            }
                            if let Some(y) = applied.year {
                                span { class: "filter-tag", "Year: {y}" }
                            }
                        }
                    }
                }

                div { class: "results-list",
                    for book in payload.items.iter() {
                        ResultCard { key: "{book.id}", book: book.clone() }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "results-container", {body} }
    }
}

#[component]
fn NoResults(query: String, filtered: bool) -> Element {
    rsx! {
        div { class: "no-results",
            div { class: "no-results-icon", "\u{2315}" }
            h2 { "No results found for \"{query}\"" }
            p { class: "no-results-text", "Try different keywords or check your spelling" }
            div { class: "no-results-suggestions",
                p { "Suggestions:" }
                ul {
                    li { "Make sure all words are spelled correctly" }
                    li { "Try different keywords" }
                    li { "Try more general keywords" }
                    li { "Adjust your filters" }
                    if filtered {
                        li { "Try removing some filters" }
                    }
                }
            }
        }
    }
}
