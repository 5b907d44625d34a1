//! Closed-set recognizers built from vocabulary lists
//!
//! A vocabulary recognizer matches any listed value as a whole word. Values are
//! escaped, so the resulting pattern is a plain alternation of literals and
//! scans in time linear to the text.

use std::collections::HashSet;

/// Composed vocabulary expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyPattern {
    /// Regular expression source
    pub pattern: String,
    /// Distinct values in the alternation
    pub terms: usize,
}

/// Compose a regular expression matching any value of `values` as a whole word.
///
/// Values are de-duplicated (first occurrence wins, case-folded when
/// `case_insensitive` is set), blank values are dropped, and longer values are
/// tried first so that `"Blue Cross Blue Shield"` is preferred over a shorter
/// prefix. Word boundaries are only asserted on edges that start or end with a
/// word character, which keeps values like `"Elementary (K-5)"` matchable.
///
/// Returns `None` when no usable value remains.
pub fn vocabulary_pattern<I, S>(values: I, case_insensitive: bool) -> Option<VocabularyPattern>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let terms = unique_terms(values, case_insensitive);
    if terms.is_empty() {
        return None;
    }

    let alternatives: Vec<String> = terms.iter().map(|term| bounded_literal(term)).collect();
    Some(VocabularyPattern {
        pattern: format!("(?:{})", alternatives.join("|")),
        terms: terms.len(),
    })
}

/// De-duplicate and order vocabulary values
fn unique_terms<I, S>(values: I, case_insensitive: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut terms = Vec::new();

    for value in values {
        let value = value.as_ref();
        if value.trim().is_empty() {
            continue;
        }
        let key = if case_insensitive {
            value.to_lowercase()
        } else {
            value.to_string()
        };
        if seen.insert(key) {
            terms.push(value.to_string());
        }
    }

    // Stable sort keeps vocabulary order among equal lengths
    terms.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    terms
}

/// Escape a literal and anchor its word-character edges
fn bounded_literal(term: &str) -> String {
    let escaped = regex::escape(term);
    let leading = term.chars().next().is_some_and(is_word_char);
    let trailing = term.chars().last().is_some_and(is_word_char);

    format!(
        "{}{}{}",
        if leading { r"\b" } else { "" },
        escaped,
        if trailing { r"\b" } else { "" }
    )
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    fn compile(values: &[&str]) -> regex::Regex {
        let vocabulary = vocabulary_pattern(values.iter().copied(), true).unwrap();
        RegexBuilder::new(&vocabulary.pattern)
            .case_insensitive(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_vocabulary() {
        assert!(vocabulary_pattern(Vec::<String>::new(), true).is_none());
        assert!(vocabulary_pattern(["", "   "], true).is_none());
    }

    #[test]
    fn test_duplicates_removed() {
        let vocabulary = vocabulary_pattern(["Ibuprofen", "Insulin", "Ibuprofen"], true).unwrap();
        assert_eq!(vocabulary.terms, 2);
        assert_eq!(vocabulary.pattern.matches("Ibuprofen").count(), 1);

        let folded = vocabulary_pattern(["Insulin", "INSULIN"], true).unwrap();
        assert_eq!(folded.pattern, r"(?:\bInsulin\b)");

        let kept = vocabulary_pattern(["Insulin", "INSULIN"], false).unwrap();
        assert_eq!(kept.terms, 2);
        assert!(kept.pattern.contains("INSULIN"));
    }

    #[test]
    fn test_special_characters_escaped() {
        let regex = compile(&["Hispanic/Latino", "Carbidopa-Levodopa", "Big Law (200+)"]);
        assert!(regex.is_match("Big Law (200+) firm"));
        assert!(!regex.is_match("Big Law 200 firm"));
        assert!(regex.is_match("takes Carbidopa-Levodopa"));
    }

    #[test]
    fn test_longest_value_preferred() {
        let regex = compile(&["Business", "Small Business"]);
        let found = regex.find("a Small Business owner").unwrap();
        assert_eq!(found.as_str(), "Small Business");
    }

    #[test]
    fn test_whole_word_only() {
        let regex = compile(&["Metformin", "Insulin"]);
        assert!(regex.is_match("patient takes Metformin daily"));
        assert!(!regex.is_match("Metforminx"));
        assert!(!regex.is_match("metformina"));
        assert!(regex.is_match("INSULIN"));
    }

    #[test]
    fn test_trailing_punctuation_value() {
        let regex = compile(&["Elementary (K-5)"]);
        let found = regex.find("Grade: Elementary (K-5), room 4").unwrap();
        assert_eq!(found.as_str(), "Elementary (K-5)");
    }
}
