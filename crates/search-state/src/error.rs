use thiserror::Error;

/// Failure of a single query execution.
///
/// The `Display` text is what the user sees in the failure alert.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Error during search: {0}")]
    Transport(String),

    #[error("Error during search: the search service answered with HTTP {0}")]
    Status(u16),

    #[error("Error during search: unexpected response ({0})")]
    MalformedResponse(String),
}
