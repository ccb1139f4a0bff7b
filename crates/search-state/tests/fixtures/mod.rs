#![allow(dead_code)]

use search_state::filters::FilterSet;
use search_state::navigation::{NavigationState, Route};
use search_state::session::{SearchRequest, SearchSession};
use search_state::types::{BookResult, ResultPayload, SearchQuery};

pub fn book(id: u64, title: &str, author: &str) -> BookResult {
    BookResult {
        id,
        title: title.to_string(),
        author: author.to_string(),
        language: "en".to_string(),
        year: Some(1900),
    }
}

/// Payload whose `count` matches its items.
pub fn payload(query: &str, books: Vec<BookResult>) -> ResultPayload {
    ResultPayload {
        query: query.to_string(),
        count: books.len(),
        items: books,
    }
}

pub fn dogs_payload() -> ResultPayload {
    payload(
        "dogs",
        vec![
            book(1, "The Call of the Wild", "Jack London"),
            book(2, "White Fang", "Jack London"),
        ],
    )
}

pub fn query(term: &str) -> SearchQuery {
    SearchQuery::new(term).unwrap()
}

pub fn filters(author: &str, language: &str, year: Option<i32>) -> FilterSet {
    FilterSet {
        author: author.to_string(),
        language: language.to_string(),
        year,
    }
}

pub fn state(term: &str, filters: FilterSet) -> NavigationState {
    NavigationState::new(query(term), filters)
}

/// Route the browser would report for `url` (path plus optional query).
pub fn route(url: &str) -> Route {
    match url.split_once('?') {
        Some((path, qs)) => Route::from_location(path, qs),
        None => Route::from_location(url, ""),
    }
}

/// Type `term`, submit, and observe the resulting location, the way the web
/// layer does after pushing the URL.
pub fn search(session: &mut SearchSession, term: &str) -> SearchRequest {
    session.set_input(term);
    let nav = session.submit().unwrap();
    session.observe(route(&nav.url)).unwrap()
}
