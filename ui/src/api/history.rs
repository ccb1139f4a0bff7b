use std::cell::Cell;

use search_state::navigation::{HistoryMode, Navigation};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

thread_local! {
    static POPSTATE_INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Path and query string of the address bar.
pub fn current_location() -> Result<(String, String), JsValue> {
    let window = web_sys::window().ok_or(JsValue::from_str("no window"))?;
    let location = window.location();
    Ok((location.pathname()?, location.search()?))
}

/// Whether `url` (path plus query) is what the address bar already shows.
pub fn is_current(url: &str) -> bool {
    match current_location() {
        Ok((path, search)) => format!("{}{}", path, search) == url,
        Err(_) => false,
    }
}

/// Write a navigation into the session history.
///
/// Pushing the URL already displayed is skipped so repeated actions do not
/// stack identical entries.
pub fn apply(nav: &Navigation) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(JsValue::from_str("no window"))?;
    let history = window.history()?;
    match nav.mode {
        HistoryMode::Push if is_current(&nav.url) => Ok(()),
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(&nav.url)),
        HistoryMode::Replace => {
            history.replace_state_with_url(&JsValue::NULL, "", Some(&nav.url))
        }
    }
}

/// Call `on_change` whenever back/forward changes the location.
pub fn listen_popstate<F>(on_change: F)
where
    F: Fn() + 'static,
{
    if POPSTATE_INSTALLED.with(|installed| installed.replace(true)) {
        return;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let onpopstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| on_change());
    if let Err(e) =
        window.add_event_listener_with_callback("popstate", onpopstate.as_ref().unchecked_ref())
    {
        tracing::error!("Failed to listen for history changes: {:?}", e);
    }
    onpopstate.forget();
}

/// Readable message from a JS exception or rejection value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
