//! Mapping between search state and the application's URLs.
//!
//! Query strings are written in a fixed canonical order (`q`, `author`,
//! `language`, `year`) with filters present only when set, so decoding a
//! canonical string and encoding it again yields the same string.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::filters::{parse_year, FilterSet};
use crate::types::SearchQuery;

/// Characters left unescaped by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const ROOT_PATH: &str = "/";
pub const SEARCH_PATH: &str = "/search";

/// A query together with the filters applied to it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NavigationState {
    pub query: SearchQuery,
    pub filters: FilterSet,
}

impl NavigationState {
    pub fn new(query: SearchQuery, filters: FilterSet) -> Self {
        Self { query, filters }
    }

    pub fn unfiltered(query: SearchQuery) -> Self {
        Self::new(query, FilterSet::default())
    }

    /// Canonical query string without the leading `?`.
    pub fn encode(&self) -> String {
        let mut out = format!("q={}", escape(self.query.term()));
        if !self.filters.author.is_empty() {
            out.push_str("&author=");
            out.push_str(&escape(&self.filters.author));
        }
        if !self.filters.language.is_empty() {
            out.push_str("&language=");
            out.push_str(&escape(&self.filters.language));
        }
        if let Some(year) = self.filters.year {
            out.push_str("&year=");
            out.push_str(&year.to_string());
        }
        out
    }

    /// Application URL of the results page for this state.
    pub fn to_url(&self) -> String {
        format!("{}?{}", SEARCH_PATH, self.encode())
    }

    /// Address of the search service endpoint for this state.
    pub fn endpoint_url(&self, api_base: &str) -> String {
        format!(
            "{}{}?{}",
            api_base.trim_end_matches('/'),
            SEARCH_PATH,
            self.encode()
        )
    }

    /// Parse a query string (leading `?` optional). Missing or blank `q`
    /// yields `None`; unreadable filters fall back to "no filter".
    pub fn decode(query_string: &str) -> Option<Self> {
        let params = QueryParams::parse(query_string);
        let query = SearchQuery::new(params.get("q")?)?;
        let filters = FilterSet {
            author: params.get("author").unwrap_or_default(),
            language: params.get("language").unwrap_or_default(),
            year: params.get("year").as_deref().and_then(parse_year),
        };
        Some(Self { query, filters })
    }
}

fn escape(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn unescape(value: &str) -> String {
    percent_decode_str(&value.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    fn parse(query_string: &str) -> Self {
        let raw = query_string.strip_prefix('?').unwrap_or(query_string);
        let pairs = raw
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((k, v)) => (unescape(k), unescape(v)),
                None => (unescape(pair), String::new()),
            })
            .collect();
        Self(pairs)
    }

    /// First value for `key`, like `URLSearchParams.get`.
    fn get(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

/// Page selected by the current location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    /// Results page; `None` when the URL carries no usable `q`.
    Search(Option<NavigationState>),
    NotFound(String),
}

impl Route {
    pub fn from_location(path: &str, query_string: &str) -> Self {
        match path {
            "" | ROOT_PATH => Route::Landing,
            SEARCH_PATH => Route::Search(NavigationState::decode(query_string)),
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn active_state(&self) -> Option<&NavigationState> {
        match self {
            Route::Search(state) => state.as_ref(),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    /// Adds an entry reachable with back/forward.
    Push,
    /// Swaps the current entry in place.
    Replace,
}

/// A pending change of the address bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
    pub mode: HistoryMode,
}

impl Navigation {
    pub fn push(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: HistoryMode::Push,
        }
    }

    pub fn to_state(state: &NavigationState) -> Self {
        Self::push(state.to_url())
    }
}

/// Redirect for the bare root path. It replaces the entry so the alias never
/// shows up in history.
pub fn canonical_redirect(path: &str) -> Option<Navigation> {
    if path.is_empty() {
        Some(Navigation {
            url: ROOT_PATH.to_string(),
            mode: HistoryMode::Replace,
        })
    } else {
        None
    }
}
