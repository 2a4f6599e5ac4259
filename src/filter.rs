//! Record matching for table search boxes.
//!
//! Records expose the text a search box should look at through
//! [`Searchable`]. A [`Matcher`] decides whether a record matches a term:
//! case-insensitive substring matching over those fields by default, fuzzy
//! matching for looser lookups, or any caller-supplied predicate.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::fmt;
use std::sync::Arc;

/// Records that can be found through a search box.
///
/// # Examples
///
/// ```rust
/// use esaku_listview::filter::Searchable;
///
/// struct Club {
///     name: String,
///     trainer: String,
/// }
///
/// impl Searchable for Club {
///     fn search_fields(&self) -> Vec<&str> {
///         vec![self.name.as_str(), self.trainer.as_str()]
///     }
/// }
/// ```
pub trait Searchable {
    /// The text fields a search term is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for String {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl Searchable for &str {
    fn search_fields(&self) -> Vec<&str> {
        vec![*self]
    }
}

/// Predicate signature for [`Matcher::Custom`].
pub type MatchFn<R> = dyn Fn(&R, &str) -> bool + Send + Sync;

/// Extracts the text fields a built-in matcher looks at.
pub type FieldsFn<R> = for<'a> fn(&'a R) -> Vec<&'a str>;

/// How records are matched against the committed search term.
///
/// An empty (or all-whitespace) term matches every record regardless of the
/// variant. Only the built-in variants need [`Searchable`]; a
/// [`Matcher::Custom`] works with any record type.
pub enum Matcher<R> {
    /// Case-insensitive substring match over the extracted fields.
    Substring(FieldsFn<R>),
    /// Fuzzy match over each of the extracted fields.
    Fuzzy(FieldsFn<R>),
    /// Caller-supplied predicate; receives the trimmed term.
    Custom(Arc<MatchFn<R>>),
}

impl<R: Searchable> Matcher<R> {
    /// Substring matching over [`Searchable::search_fields`].
    pub fn substring() -> Self {
        Matcher::Substring(R::search_fields)
    }

    /// Fuzzy matching over [`Searchable::search_fields`].
    pub fn fuzzy() -> Self {
        Matcher::Fuzzy(R::search_fields)
    }
}

impl<R> Matcher<R> {
    /// Wraps a closure as a [`Matcher::Custom`].
    ///
    /// ```rust
    /// use esaku_listview::filter::Matcher;
    ///
    /// let by_prefix = Matcher::custom(|nis: &String, term: &str| nis.starts_with(term));
    /// assert!(by_prefix.matches(&"1203".to_string(), "12"));
    /// assert!(!by_prefix.matches(&"1203".to_string(), "03"));
    /// ```
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&R, &str) -> bool + Send + Sync + 'static,
    {
        Matcher::Custom(Arc::new(predicate))
    }

    /// Whether `record` matches `term`.
    pub fn matches(&self, record: &R, term: &str) -> bool {
        let term = term.trim();
        term.is_empty() || self.is_match(record, term, self.skim().as_ref())
    }

    /// Indices of the records matching `term`, in input order.
    pub fn filter_indices(&self, records: &[R], term: &str) -> Vec<usize> {
        let term = term.trim();
        if term.is_empty() {
            return (0..records.len()).collect();
        }
        let skim = self.skim();
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.is_match(record, term, skim.as_ref()))
            .map(|(index, _)| index)
            .collect()
    }

    fn skim(&self) -> Option<SkimMatcherV2> {
        match self {
            Matcher::Fuzzy(_) => Some(SkimMatcherV2::default().ignore_case()),
            _ => None,
        }
    }

    // `term` is trimmed and non-empty.
    fn is_match(&self, record: &R, term: &str, skim: Option<&SkimMatcherV2>) -> bool {
        match self {
            Matcher::Substring(fields) => fields(record)
                .iter()
                .any(|field| contains_ignore_case(field, term)),
            Matcher::Fuzzy(fields) => skim.is_some_and(|skim| {
                fields(record)
                    .iter()
                    .any(|field| skim.fuzzy_match(field, term).is_some())
            }),
            Matcher::Custom(predicate) => (**predicate)(record, term),
        }
    }
}

impl<R: Searchable> Default for Matcher<R> {
    fn default() -> Self {
        Matcher::substring()
    }
}

impl<R> Clone for Matcher<R> {
    fn clone(&self) -> Self {
        match self {
            Matcher::Substring(fields) => Matcher::Substring(*fields),
            Matcher::Fuzzy(fields) => Matcher::Fuzzy(*fields),
            Matcher::Custom(f) => Matcher::Custom(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for Matcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Substring(_) => f.write_str("Substring"),
            Matcher::Fuzzy(_) => f.write_str("Fuzzy"),
            Matcher::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Case-insensitive substring test.
///
/// ```rust
/// use esaku_listview::filter::contains_ignore_case;
///
/// assert!(contains_ignore_case("Citra Lestari", "LES"));
/// assert!(!contains_ignore_case("Budi", "a"));
/// ```
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        ["Ayu", "Budi", "Citra"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let m = Matcher::<String>::substring();
        assert_eq!(m.filter_indices(&names(), ""), vec![0, 1, 2]);
        assert_eq!(m.filter_indices(&names(), "   "), vec![0, 1, 2]);
    }

    #[test]
    fn test_substring_is_case_insensitive() {
        let m = Matcher::<String>::substring();
        assert_eq!(m.filter_indices(&names(), "a"), vec![0, 2]);
        assert_eq!(m.filter_indices(&names(), "BUD"), vec![1]);
        assert_eq!(m.filter_indices(&names(), " cit "), vec![2]);
        assert!(m.filter_indices(&names(), "zz").is_empty());
    }

    #[test]
    fn test_fuzzy_matches_scattered_letters() {
        let m = Matcher::<String>::fuzzy();
        assert_eq!(m.filter_indices(&names(), "cta"), vec![2]);
        assert!(!m.matches(&"Budi".to_string(), "xyz"));
    }

    #[test]
    fn test_custom_predicate_gets_trimmed_term() {
        let m = Matcher::custom(|s: &String, term: &str| s == term);
        assert_eq!(m.filter_indices(&names(), " Budi "), vec![1]);
    }

    #[test]
    fn test_multiple_fields_any_match() {
        struct Club(&'static str, &'static str);
        impl Searchable for Club {
            fn search_fields(&self) -> Vec<&str> {
                vec![self.0, self.1]
            }
        }
        let clubs = [Club("Pramuka", "Pak Darto"), Club("Futsal", "Bu Sari")];
        let m = Matcher::substring();
        assert_eq!(m.filter_indices(&clubs, "sari"), vec![1]);
        assert_eq!(m.filter_indices(&clubs, "pra"), vec![0]);
    }

    #[test]
    fn test_custom_matcher_needs_no_searchable_impl() {
        let rows = vec![
            serde_json::json!({ "nis": "2201", "name": "Ayu" }),
            serde_json::json!({ "nis": "2202", "name": "Budi" }),
        ];
        let m = Matcher::custom(|row: &serde_json::Value, term: &str| {
            row["name"].as_str().is_some_and(|name| contains_ignore_case(name, term))
        });
        assert_eq!(m.filter_indices(&rows, "bud"), vec![1]);
        assert_eq!(m.filter_indices(&rows, ""), vec![0, 1]);
    }

    #[test]
    fn test_fuzzy_filter_over_many_records() {
        let rows: Vec<String> = (0..200).map(|i| format!("Ekskul {i}")).collect();
        let m = Matcher::<String>::fuzzy();
        let hits = m.filter_indices(&rows, "ek19");
        assert!(hits.contains(&19));
        assert!(hits.contains(&190));
        assert!(!hits.contains(&5));
    }
}
