//! Reference list of languages offered by the language filter.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// ISO 639-1 table embedded at build time.
const LANGUAGE_TABLE: &str = include_str!("../data/languages.json");

static CATALOG: OnceLock<Vec<Language>> = OnceLock::new();

/// One selectable language. `code` is the key stored in filters and URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub native: Option<String>,
}

impl Language {
    pub fn code_label(&self) -> String {
        self.code.to_uppercase()
    }
}

/// Table values are either a bare display name or an object with `name`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LanguageRecord {
    Name(String),
    Detailed {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        native: Option<String>,
    },
}

impl LanguageRecord {
    fn into_parts(self) -> (Option<String>, Option<String>) {
        match self {
            LanguageRecord::Name(name) => (Some(name), None),
            LanguageRecord::Detailed { name, native } => (name, native),
        }
    }
}

/// The memoized language list built from the embedded table.
pub fn catalog() -> &'static [Language] {
    CATALOG.get_or_init(|| {
        let list = from_json(LANGUAGE_TABLE);
        tracing::debug!("Loaded {} languages", list.len());
        list
    })
}

/// Build a sorted, de-duplicated language list from a `code -> record` JSON
/// object. Never fails: anything unreadable contributes nothing.
pub fn from_json(source: &str) -> Vec<Language> {
    let table: BTreeMap<String, serde_json::Value> = match serde_json::from_str(source) {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!("Language table is malformed, using an empty list: {}", e);
            return Vec::new();
        }
    };

    let mut languages: Vec<Language> = Vec::with_capacity(table.len());
    for (code, value) in table {
        let record = match serde_json::from_value::<LanguageRecord>(value) {
            Ok(r) => r,
            Err(_) => continue,
        };
        let (name, native) = record.into_parts();
        let name = match name.map(|n| n.trim().to_string()) {
            Some(n) if !n.is_empty() => n,
            _ => continue,
        };
        let code = code.trim().to_lowercase();
        if code.is_empty() || languages.iter().any(|l| l.code == code) {
            continue;
        }
        languages.push(Language {
            code,
            name,
            native: native.filter(|n| !n.trim().is_empty()),
        });
    }

    languages.sort_by_cached_key(|l| (collation_key(&l.name), l.code.clone()));
    languages
}

/// Case- and accent-insensitive sort key.
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Look a code up case-insensitively.
pub fn find<'a>(languages: &'a [Language], code: &str) -> Option<&'a Language> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    languages.iter().find(|l| l.code.eq_ignore_ascii_case(code))
}

/// Display name for a code from the built-in catalog.
pub fn display_name(code: &str) -> Option<&'static str> {
    find(catalog(), code).map(|l| l.name.as_str())
}
