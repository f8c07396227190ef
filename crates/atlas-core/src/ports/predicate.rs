//! Engine-specific case-insensitive substring comparison

/// Renders the SQL condition "column contains the bound pattern, ignoring
/// case" using whatever operators the engine offers.
///
/// The bound value is always a LIKE pattern produced by
/// [`SearchQuery::like_pattern`](crate::SearchQuery::like_pattern), escaped
/// with `\`. Implementations must treat a NULL column as the empty string.
pub trait CaseInsensitiveContainsPredicate {
    /// Placeholder syntax for the single pattern parameter.
    fn placeholder(&self) -> &'static str;

    /// Boolean SQL expression comparing `column` against `placeholder`.
    fn contains_ci(&self, column: &str, placeholder: &str) -> String;
}
