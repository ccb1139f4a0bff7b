pub mod filter_panel;
pub mod landing;
pub mod result_card;
pub mod search_box;
pub mod search_page;
pub mod search_results;

use dioxus::prelude::*;

use crate::api;
use crate::state::SESSION;

// The session guard must be released before `api::navigate`, which
// synchronizes the session again.

pub fn submit_search() {
    let nav = SESSION.write().submit();
    api::navigate(nav);
}

pub fn apply_filters() {
    let nav = SESSION.write().apply_filters();
    api::navigate(nav);
}

pub fn clear_filters() {
    let nav = SESSION.write().clear_filters();
    api::navigate(nav);
}
