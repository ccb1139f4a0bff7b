#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;

use crate::state::SESSION;

#[component]
pub fn SearchBox(compact: bool) -> Element {
    let text = SESSION.read().input().to_string();
    let mut input_el = use_signal(|| None::<Rc<MountedData>>);

    let wrapper_class = if compact {
        "search-wrapper-small"
    } else {
        "search-wrapper"
    };
    let placeholder = if compact { "Search" } else { "Search books" };

    rsx! {
        div { class: "{wrapper_class}",
            span { class: "search-icon", "\u{2315}" }

            input {
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{text}",
                autofocus: !compact,
                onmounted: move |e| input_el.set(Some(e.data())),
                oninput: move |e| {
                    SESSION.write().set_input(e.value());
                },
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        super::submit_search();
                    }
                },
            }

            if !text.is_empty() {
                button {
                    class: "clear-button",
                    onclick: move |_| {
                        SESSION.write().set_input(String::new());
                        if let Some(el) = input_el() {
                            spawn(async move {
                                let _ = el.set_focus(true).await;
                            });
                        }
                    },
                    "\u{00d7}"
                }
            }
        }
    }
}
