use dioxus::prelude::*;
use search_state::error::SearchError;
use search_state::session::SearchRequest;
use search_state::types::ResultPayload;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::history::js_error_message;
use crate::state::{SERVICE, SESSION};

/// Run one search in the background and hand the outcome to the session,
/// which drops it if a newer search has started meanwhile.
pub fn spawn_search(request: SearchRequest) {
    let url = request.endpoint_url(&SERVICE.read().api_base);
    wasm_bindgen_futures::spawn_local(async move {
        tracing::info!("Fetching {}", url);
        let outcome = execute(&url).await;
        let failure = outcome.as_ref().err().map(|e| e.to_string());
        let current = SESSION.write().resolve(request.ticket, outcome);
        if let (true, Some(message)) = (current, failure) {
            alert(&message);
        }
    });
}

/// Issue exactly one GET against the search endpoint.
pub async fn execute(url: &str) -> Result<ResultPayload, SearchError> {
    let body = fetch_text(url)
        .await
        .map_err(|e| SearchError::Transport(js_error_message(&e)))??;
    ResultPayload::from_json(&body)
}

/// Outer error is the transport, inner is a non-success status.
async fn fetch_text(url: &str) -> Result<Result<String, SearchError>, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or(JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Ok(Err(SearchError::Status(resp.status())));
    }

    let text = JsFuture::from(resp.text()?).await?;
    Ok(text
        .as_string()
        .ok_or_else(|| SearchError::MalformedResponse("response not text".to_string())))
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
