#![allow(non_snake_case)]

use dioxus::prelude::*;
use search_state::{filters, languages};

use crate::state::{current_year, SESSION};

/// Author, language and year controls bound to the draft filters.
///
/// On the results page the panel gets an "Apply Filters" button and Enter in
/// the author field applies; on the landing page Enter submits the search.
#[component]
pub fn FilterPanel(apply_button: bool) -> Element {
    let session = SESSION.read();
    let draft = session.draft();
    let author = draft.author().to_string();
    let language = draft.language().to_string();
    let year = draft.year();
    let menu_open = draft.language_menu_open();
    let has_selection = draft.has_selection();
    drop(session);

    let this_year = current_year();
    let year_value = year.map(|y| y.to_string()).unwrap_or_default();
    // A year from the URL outside the offered range still needs an option.
    let extra_year = year.filter(|y| !filters::year_in_range(*y, this_year));

    let catalog = languages::catalog();
    let language_label = match languages::find(catalog, &language) {
        Some(l) => l.name.clone(),
        None if language.is_empty() => "Select Language".to_string(),
        None => language.clone(),
    };

    let panel_class = if apply_button {
        "filter-bar"
    } else {
        "home-filters"
    };
    let clear_class = if apply_button {
        "filter-clear-btn"
    } else {
        "filter-clear-btn-home"
    };

    rsx! {
        div { class: "{panel_class}",
            div { class: "filter-group",
                label { class: "filter-label", "Author:" }
                input {
                    class: "filter-input",
                    r#type: "text",
                    placeholder: "Enter author name",
                    value: "{author}",
                    oninput: move |e| {
                        SESSION.write().draft_mut().set_author(e.value());
                    },
                    onkeydown: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            if apply_button {
                                super::apply_filters();
                            } else {
                                super::submit_search();
                            }
                        }
                    },
                }
            }

            div { class: "filter-group language-filter-group",
                label { class: "filter-label", "Language:" }
                div { class: "language-dropdown-wrapper",
                    button {
                        class: "filter-button language-select",
                        r#type: "button",
                        onclick: move |_| SESSION.write().draft_mut().toggle_language_menu(),
                        "{language_label}"
                        span { class: "dropdown-arrow", "\u{25bc}" }
                    }

                    if menu_open && !catalog.is_empty() {
                        div { class: "language-dropdown",
                            for lang in catalog.iter() {
                                {
                                    let option_class = if lang.code == language {
                                        "language-option active"
                                    } else {
                                        "language-option"
                                    };
                                    let native = lang.native.clone().unwrap_or_default();
                                    rsx! {
                                        button {
                                            key: "{lang.code}",
                                            class: "{option_class}",
                                            r#type: "button",
                                            title: "{native}",
                                            onclick: move |_| {
                                                SESSION.write().draft_mut().set_language(lang.code.clone());
                                            },
                                            span { class: "lang-name", "{lang.name}" }
                                            span { class: "lang-code", "({lang.code_label()})" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "filter-group",
                label { class: "filter-label", "Year:" }
                select {
                    class: "filter-select",
                    value: "{year_value}",
                    onchange: move |e| {
                        SESSION.write().draft_mut().set_year_input(&e.value());
                    },
                    option { value: "", "Any Year" }
                    if let Some(y) = extra_year {
                        option { value: "{y}", "{y}" }
                    }
                    for y in filters::year_options(this_year) {
                        option { key: "{y}", value: "{y}", "{y}" }
                    }
                }
            }

            div { class: "filter-buttons",
                if apply_button {
                    button {
                        class: "filter-apply-btn",
                        onclick: move |_| super::apply_filters(),
                        "Apply Filters"
                    }
                }
                if has_selection {
                    button {
                        class: "{clear_class}",
                        onclick: move |_| super::clear_filters(),
                        "Clear Filters"
                    }
                }
            }
        }
    }
}
