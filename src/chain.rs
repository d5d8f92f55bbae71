use std::fmt;

/// An ordered sequence of words where each word links to its predecessor.
///
/// Displays as the words joined with `" -> "`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Chain {
    words: Vec<String>,
}

impl Chain {
    pub(crate) fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Number of words in the chain.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the chain holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words, shortest first.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn first(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl From<Chain> for Vec<String> {
    fn from(chain: Chain) -> Self {
        chain.words
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(words: &[&str]) -> Chain {
        Chain::from_words(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_display() {
        assert_eq!(chain(&["a", "ab", "abc"]).to_string(), "a -> ab -> abc");
        assert_eq!(chain(&["solo"]).to_string(), "solo");
        assert_eq!(chain(&[]).to_string(), "");
    }

    #[test]
    fn test_accessors() {
        let c = chain(&["ple", "apple"]);
        assert_eq!(c.len(), 2);
        assert!(!c.is_empty());
        assert_eq!(c.first(), Some("ple"));
        assert_eq!(c.last(), Some("apple"));
        assert_eq!(c.iter().collect::<Vec<_>>(), vec!["ple", "apple"]);
        assert_eq!(Vec::<String>::from(c.clone()), c.into_words());
    }
}
