//! # Word Chains - Longest Linked Word Sequences
//!
//! Finds the longest chains of words from a vocabulary where every word is
//! strictly longer than its predecessor and related to it by a [`Rule`]:
//! 1. **Substring**: the previous word occurs contiguously in the next one
//! 2. **CharSubset**: the previous word's characters, with multiplicity,
//!    all occur in the next one
//!
//! ## Example
//!
//! ```
//! use word_chains::{find_longest_word_chains, Rule};
//!
//! let chains = find_longest_word_chains(["a", "ab", "abc"], Rule::Substring);
//!
//! assert_eq!(chains.len(), 1);
//! assert_eq!(chains[0].to_string(), "a -> ab -> abc");
//! ```
//!
//! Rules can also be selected by name:
//!
//! ```
//! use word_chains::Rule;
//!
//! let rule: Rule = "char_subset".parse().unwrap();
//! assert_eq!(rule, Rule::CharSubset);
//! assert!("anagram".parse::<Rule>().is_err());
//! ```
//!
//! ## Performance
//!
//! - O(n²) link tests for n distinct words
//! - Chains are stored as predecessor links in a SlotMap and only
//!   materialised when read

mod chain;
mod char_counts;
mod rule;
mod select;
mod table;


pub use chain::Chain;
pub use char_counts::CharCounts;
pub use rule::{is_valid_link, ParseRuleError, Rule};
pub use select::find_longest_chains;
pub use table::{build_chains, ChainTable};

/// Finds the longest word chains in `words` under `rule`.
///
/// Duplicate words are ignored. Chains of a single word are never returned,
/// so the result is empty when no word links to another. Use
/// `Rule::default()` for the substring rule.
pub fn find_longest_word_chains<I, S>(words: I, rule: Rule) -> Vec<Chain>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    find_longest_chains(&build_chains(words, rule))
}
