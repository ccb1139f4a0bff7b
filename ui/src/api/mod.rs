pub mod history;
pub mod search_api;
pub mod types;

use std::sync::atomic::{AtomicBool, Ordering};

use dioxus::prelude::*;
use search_state::navigation::{canonical_redirect, Navigation, Route, ROOT_PATH};

use crate::state::SESSION;

static INITIALIZED: AtomicBool = AtomicBool::new(false);

pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    // 1. Swap a bare root for "/" in place so it never becomes a history entry.
    if let Ok((path, _)) = history::current_location() {
        if let Some(redirect) = canonical_redirect(&path) {
            if let Err(e) = history::apply(&redirect) {
                tracing::warn!("Root redirect failed: {:?}", e);
            }
        }
    }

    // 2. Back/forward re-reads the URL.
    history::listen_popstate(sync_location);

    // 3. Pick up whatever the page was opened with.
    sync_location();
}

/// Apply a navigation produced by a user action, then synchronize.
pub fn navigate(nav: Option<Navigation>) {
    let nav = match nav {
        Some(n) => n,
        None => return,
    };
    tracing::info!("Navigating to {}", nav.url);
    if let Err(e) = history::apply(&nav) {
        tracing::error!("Failed to update history: {:?}", e);
        return;
    }
    sync_location();
}

/// Feed the address bar into the session and start the search it asks for.
pub fn sync_location() {
    let (path, search) = match history::current_location() {
        Ok(loc) => loc,
        Err(e) => {
            tracing::error!("Failed to read location: {:?}", e);
            return;
        }
    };
    let route = Route::from_location(&path, &search);
    let request = SESSION.write().observe(route);
    if let Some(request) = request {
        search_api::spawn_search(request);
    }
}

/// Leave the results page for the landing page.
pub fn go_home() {
    navigate(Some(Navigation::push(ROOT_PATH)));
}
