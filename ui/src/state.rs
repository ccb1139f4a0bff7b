#![allow(non_snake_case)]

use dioxus::prelude::*;
use search_state::session::SearchSession;

use crate::api::types::ServiceConfig;

// --- Global signals ---

/// The single search session: draft and applied filters, active query and
/// result lifecycle. Views read it, user actions and the history bridge write it.
pub static SESSION: GlobalSignal<SearchSession> = Global::new(SearchSession::default);

/// Search service location
pub static SERVICE: GlobalSignal<ServiceConfig> = Global::new(ServiceConfig::default);

/// Current calendar year, used for the year filter options.
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}
