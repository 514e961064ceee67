//! Token replacement in entry names
//!
//! A search token made of a single space stands for any run of whitespace,
//! every other token is matched literally.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Failed to compile regex pattern for WHITESPACE_RUN")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Matcher {
    WhitespaceRun,
    Literal(String),
}

/// A search token resolved once and applied to many names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern {
    search: String,
    matcher: Matcher,
}

impl NamePattern {
    /// Resolves the search token into a matcher
    ///
    /// The empty token is not rejected here; callers validate it beforehand
    /// since it would match between every character.
    pub fn new(search: &str) -> NamePattern {
        let matcher = if search == " " {
            Matcher::WhitespaceRun
        } else {
            Matcher::Literal(search.to_string())
        };
        NamePattern {
            search: search.to_string(),
            matcher,
        }
    }

    /// The token this pattern was built from
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Whether `name` is a candidate for renaming
    ///
    /// Candidacy is a literal substring test even for the whitespace token,
    /// so a name containing only tabs is not a candidate.
    pub fn matches(&self, name: &str) -> bool {
        name.contains(self.search.as_str())
    }

    /// Splits `name` on every non-overlapping match and joins the pieces with `replace`
    pub fn apply(&self, name: &str, replace: &str) -> String {
        let parts: Vec<&str> = match &self.matcher {
            Matcher::WhitespaceRun => WHITESPACE_RUN.split(name).collect(),
            Matcher::Literal(token) => name.split(token.as_str()).collect(),
        };
        parts.join(replace)
    }
}

/// Returns `name` with `search` replaced by `replace`
///
/// # Examples
/// ```
/// use file_rename::naming::transform;
///
/// assert_eq!(transform("my  holiday photo.jpg", " ", "_"), "my_holiday_photo.jpg");
/// assert_eq!(transform("a.b.c", ".", "-"), "a-b-c");
/// ```
pub fn transform(name: &str, search: &str, replace: &str) -> String {
    NamePattern::new(search).apply(name, replace)
}
