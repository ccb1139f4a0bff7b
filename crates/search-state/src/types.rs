use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// A submitted search term. Never blank.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    /// Returns `None` when the term is empty or whitespace only.
    ///
    /// The term is kept verbatim so that a decoded URL re-encodes to itself;
    /// callers accepting typed input trim before constructing.
    pub fn new(term: impl Into<String>) -> Option<Self> {
        let term = term.into();
        if term.trim().is_empty() {
            None
        } else {
            Some(Self { term })
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

/// One book as returned by the search service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookResult {
    #[serde(rename = "book_id")]
    pub id: u64,
    pub title: String,
    pub author: String,
    pub language: String,
    #[serde(default)]
    pub year: Option<i32>,
}

/// Result of one successful query execution.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultPayload {
    pub query: String,
    pub count: usize,
    #[serde(rename = "results", default)]
    pub items: Vec<BookResult>,
}

impl ResultPayload {
    /// Decode a response body from the search service.
    pub fn from_json(body: &str) -> Result<Self, SearchError> {
        serde_json::from_str(body).map_err(|e| SearchError::MalformedResponse(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Link to the book's page on Project Gutenberg.
pub fn gutenberg_url(id: u64) -> String {
    format!("https://www.gutenberg.org/ebooks/{}", id)
}
