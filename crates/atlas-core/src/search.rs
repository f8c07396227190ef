//! Search semantics shared by every storage engine
//!
//! A query is a literal, case-insensitive substring matched against `name`,
//! `surname`, `alias` and `phone`. A row qualifies when any of them contains
//! it. Case folding covers ASCII letters only. Results are ordered by
//! descending id and capped at [`SEARCH_RESULT_LIMIT`].

use crate::ports::CaseInsensitiveContainsPredicate;
use crate::{AtlasError, Person, Result};

/// Maximum number of rows a search returns.
pub const SEARCH_RESULT_LIMIT: u32 = 50;

/// Columns covered by search. `group` is deliberately absent.
pub const SEARCHABLE_COLUMNS: [&str; 4] = ["name", "surname", "alias", "phone"];

/// Escape character used in generated LIKE patterns.
pub const LIKE_ESCAPE: char = '\\';

/// A validated search fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Validate a raw `q` value. Missing or blank input is a caller error.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw {
            Some(text) if !text.trim().is_empty() => Ok(Self {
                text: text.to_string(),
            }),
            Some(_) => Err(AtlasError::Validation(
                "query parameter `q` must not be empty".to_string(),
            )),
            None => Err(AtlasError::Validation(
                "query parameter `q` is required".to_string(),
            )),
        }
    }

    /// `%<text>%` with LIKE metacharacters in `text` escaped, so the
    /// fragment only ever matches itself.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.text.len() + 2);
        pattern.push('%');
        for c in self.text.chars() {
            if matches!(c, '%' | '_' | LIKE_ESCAPE) {
                pattern.push(LIKE_ESCAPE);
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }

    /// Reference matcher used by engines that search in process.
    ///
    /// Case folding is ASCII-only, the one folding every SQL engine agrees
    /// on. Accented letters match only in the same case.
    pub fn matches(&self, person: &Person) -> bool {
        let needle = self.text.to_ascii_lowercase();
        person
            .searchable_fields()
            .iter()
            .any(|field| field.unwrap_or("").to_ascii_lowercase().contains(&needle))
    }
}

/// Full search statement for a SQL engine. The engine only contributes its
/// predicate; projection, ordering and the cap are identical everywhere.
pub fn search_statement(predicate: &dyn CaseInsensitiveContainsPredicate, limit: u32) -> String {
    let placeholder = predicate.placeholder();
    let conditions = SEARCHABLE_COLUMNS
        .iter()
        .map(|column| predicate.contains_ci(column, placeholder))
        .collect::<Vec<_>>()
        .join(" OR ");

    format!(
        "SELECT id, name, surname, alias, phone, \"group\" \
         FROM persons \
         WHERE ({conditions}) \
         ORDER BY id DESC \
         LIMIT {limit}"
    )
}
