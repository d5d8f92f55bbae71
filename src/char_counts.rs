use ahash::AHashMap as HashMap;

/// Character-frequency multiset of a word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharCounts {
    counts: HashMap<char, u32>,
    total: usize,
}

impl CharCounts {
    /// Counts every character of `word`.
    pub fn of(word: &str) -> Self {
        let mut counts = HashMap::new();
        let mut total = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Number of occurrences of `ch`, zero if absent.
    pub fn count(&self, ch: char) -> u32 {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Number of distinct characters.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of characters, i.e. the word length.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns true if `other` holds every character of `self` at least as
    /// many times. Characters present only in `other` are ignored.
    pub fn is_subset_of(&self, other: &CharCounts) -> bool {
        if self.total > other.total || self.distinct() > other.distinct() {
            return false;
        }
        self.counts
            .iter()
            .all(|(&ch, &count)| other.count(ch) >= count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let counts = CharCounts::of("banana");
        assert_eq!(counts.count('a'), 3);
        assert_eq!(counts.count('n'), 2);
        assert_eq!(counts.count('b'), 1);
        assert_eq!(counts.count('z'), 0);
        assert_eq!(counts.distinct(), 3);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_empty() {
        let counts = CharCounts::of("");
        assert_eq!(counts.total(), 0);
        assert!(counts.is_subset_of(&CharCounts::of("anything")));
    }

    #[test]
    fn test_subset_respects_counts() {
        let aa = CharCounts::of("aa");
        assert!(aa.is_subset_of(&CharCounts::of("aab")));
        assert!(!aa.is_subset_of(&CharCounts::of("abc")));
    }

    #[test]
    fn test_subset_ignores_order_and_extras() {
        let small = CharCounts::of("elp");
        assert!(small.is_subset_of(&CharCounts::of("apple")));
        assert!(!CharCounts::of("xyz").is_subset_of(&CharCounts::of("apple")));
    }

    #[test]
    fn test_multibyte_chars() {
        let counts = CharCounts::of("ññé");
        assert_eq!(counts.count('ñ'), 2);
        assert_eq!(counts.total(), 3);
    }
}
