/// Where the book search service lives.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceConfig {
    pub api_base: String,
}

impl ServiceConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ServiceConfig {
    /// `BOOK_SEARCH_API_BASE` at build time, otherwise the local dev service.
    fn default() -> Self {
        Self::new(option_env!("BOOK_SEARCH_API_BASE").unwrap_or("http://localhost:7000"))
    }
}
