/// Number of selectable years, counting back from the current one.
pub const YEAR_SPAN: i32 = 150;

/// Author, language and year restrictions on a search.
///
/// Empty strings and `None` mean "no filter". Values are not validated here;
/// the search service decides what an unknown language or year means.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FilterSet {
    pub author: String,
    pub language: String,
    pub year: Option<i32>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.author.is_empty() && self.language.is_empty() && self.year.is_none()
    }
}

/// Filter selections being edited but not yet applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterDraft {
    author: String,
    language: String,
    year: Option<i32>,
    language_menu_open: bool,
}

impl FilterDraft {
    pub fn seeded(filters: &FilterSet) -> Self {
        Self {
            author: filters.author.clone(),
            language: filters.language.clone(),
            year: filters.year,
            language_menu_open: false,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn language_menu_open(&self) -> bool {
        self.language_menu_open
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    /// Choosing a language always closes the menu.
    pub fn set_language(&mut self, code: impl Into<String>) {
        self.language = code.into();
        self.language_menu_open = false;
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.year = year;
    }

    /// Coerce the value of the year select; blank or non-numeric means "any".
    pub fn set_year_input(&mut self, value: &str) {
        self.year = parse_year(value);
    }

    pub fn toggle_language_menu(&mut self) {
        self.language_menu_open = !self.language_menu_open;
    }

    pub fn close_language_menu(&mut self) {
        self.language_menu_open = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_selection(&self) -> bool {
        !self.author.is_empty() || !self.language.is_empty() || self.year.is_some()
    }

    pub fn snapshot(&self) -> FilterSet {
        FilterSet {
            author: self.author.clone(),
            language: self.language.clone(),
            year: self.year,
        }
    }
}

pub(crate) fn parse_year(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

/// Years offered by the year select, newest first.
pub fn year_options(current_year: i32) -> impl Iterator<Item = i32> {
    (0..YEAR_SPAN).map(move |offset| current_year - offset)
}

/// Whether `year` is one of the offered years. Out-of-range values are still
/// sent to the search service.
pub fn year_in_range(year: i32, current_year: i32) -> bool {
    year <= current_year && year > current_year - YEAR_SPAN
}
