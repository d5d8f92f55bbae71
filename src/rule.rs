use crate::char_counts::CharCounts;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Relation a word must satisfy with its predecessor in a chain.
///
/// Every rule additionally requires the next word to be strictly longer
/// than the previous one, so a word never links to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rule {
    /// The previous word occurs contiguously inside the next word.
    #[default]
    Substring,

    /// Every character of the previous word occurs in the next word at
    /// least as many times.
    CharSubset,
}

impl Rule {
    /// All rules, in the order the demo reports them.
    pub const ALL: [Rule; 2] = [Rule::Substring, Rule::CharSubset];

    /// Name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Rule::Substring => "substring",
            Rule::CharSubset => "char_subset",
        }
    }

    /// Returns true if `next` may directly follow `prev` under this rule.
    pub fn links(self, prev: &str, next: &str) -> bool {
        if word_len(next) <= word_len(prev) {
            return false;
        }

        match self {
            Rule::Substring => next.contains(prev),
            Rule::CharSubset => CharCounts::of(prev).is_subset_of(&CharCounts::of(next)),
        }
    }
}

/// Returns true if `word_b` may directly follow `word_a` under `rule`.
///
/// Shorter or equal-length `word_b` is never a valid link.
pub fn is_valid_link(word_a: &str, word_b: &str, rule: Rule) -> bool {
    rule.links(word_a, word_b)
}

/// Word length in characters.
pub(crate) fn word_len(word: &str) -> usize {
    word.chars().count()
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown rule name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown chain rule {name:?}, expected \"substring\" or \"char_subset\"")]
pub struct ParseRuleError {
    name: String,
}

impl ParseRuleError {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Rule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| ParseRuleError { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_substring() {
        assert_eq!(Rule::default(), Rule::Substring);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("substring".parse::<Rule>(), Ok(Rule::Substring));
        assert_eq!("char_subset".parse::<Rule>(), Ok(Rule::CharSubset));
        for rule in Rule::ALL {
            assert_eq!(rule.to_string().parse::<Rule>(), Ok(rule));
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Substring".parse::<Rule>().unwrap_err();
        assert_eq!(err.name(), "Substring");
        assert_eq!(
            err.to_string(),
            "unknown chain rule \"Substring\", expected \"substring\" or \"char_subset\""
        );
        assert!(" substring".parse::<Rule>().is_err());
        assert!("".parse::<Rule>().is_err());
    }

    #[test]
    fn test_substring_links() {
        assert!(is_valid_link("ple", "apple", Rule::Substring));
        assert!(is_valid_link("apple", "Oapple", Rule::Substring));
        assert!(!is_valid_link("pel", "apple", Rule::Substring));
        // Case-sensitive
        assert!(!is_valid_link("Ple", "apple", Rule::Substring));
    }

    #[test]
    fn test_char_subset_links() {
        assert!(is_valid_link("elp", "apple", Rule::CharSubset));
        assert!(is_valid_link("a", "aa", Rule::CharSubset));
        assert!(is_valid_link("aa", "aab", Rule::CharSubset));
        assert!(!is_valid_link("aa", "abc", Rule::CharSubset));
        assert!(!is_valid_link("pel", "xyzw", Rule::CharSubset));
    }

    #[test]
    fn test_no_self_or_shrink_links() {
        for rule in Rule::ALL {
            assert!(!is_valid_link("apple", "apple", rule));
            assert!(!is_valid_link("apple", "ple", rule));
            assert!(!is_valid_link("abc", "bca", rule));
            assert!(!is_valid_link("", "", rule));
        }
    }

    #[test]
    fn test_empty_word_links_to_everything_longer() {
        for rule in Rule::ALL {
            assert!(is_valid_link("", "a", rule));
        }
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // "é" is two bytes but one char, so "éa" is strictly longer
        assert!(is_valid_link("é", "éa", Rule::Substring));
        assert!(!is_valid_link("ab", "é", Rule::CharSubset));
    }
}
