use crate::chain::Chain;
use crate::char_counts::CharCounts;
use crate::rule::{word_len, Rule};
use ahash::AHashMap as HashMap;
use slotmap::{DefaultKey, SecondaryMap, SlotMap};
use tracing::{debug, trace};

/// A word in the table together with the best chain ending at it.
///
/// The chain itself is not stored; `prev` points at the node this word
/// extends, and the full chain is recovered by walking those links.
#[derive(Debug)]
pub(crate) struct ChainNode {
    pub word: String,
    pub word_len: usize,
    pub chain_len: usize,
    pub prev: Option<DefaultKey>,
}

impl ChainNode {
    pub(crate) fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            word_len: word_len(word),
            chain_len: 1,
            prev: None,
        }
    }
}

/// Maps every distinct word of a vocabulary to the longest chain ending at it.
///
/// Every entry's chain ends with its own word and holds at least that word.
#[derive(Debug)]
pub struct ChainTable {
    rule: Rule,
    pub(crate) nodes: SlotMap<DefaultKey, ChainNode>,
    /// Keys in ascending word length, equal lengths in first-seen order.
    pub(crate) order: Vec<DefaultKey>,
    index: HashMap<String, DefaultKey>,
}

impl ChainTable {
    /// Deduplicates `words` and lays them out in ascending length order,
    /// each word starting as a chain of its own.
    fn with_vocabulary<I, S>(words: I, rule: Rule) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut nodes = SlotMap::new();
        let mut order = Vec::new();
        let mut index = HashMap::new();

        for word in words {
            let word = word.as_ref();
            if index.contains_key(word) {
                continue;
            }
            let key = nodes.insert(ChainNode::new(word));
            index.insert(word.to_string(), key);
            order.push(key);
        }

        // Stable, so equal-length words keep their input order
        order.sort_by_key(|&key| nodes[key].word_len);

        Self {
            rule,
            nodes,
            order,
            index,
        }
    }

    /// Rule the table was built with.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Length of the longest chain ending at `word`.
    pub fn chain_len(&self, word: &str) -> Option<usize> {
        self.index.get(word).map(|&key| self.nodes[key].chain_len)
    }

    /// The longest chain ending at `word`.
    pub fn chain(&self, word: &str) -> Option<Chain> {
        self.index.get(word).map(|&key| self.chain_at(key))
    }

    /// Longest chain length over all words, `None` for an empty table.
    pub fn max_chain_len(&self) -> Option<usize> {
        self.nodes.values().map(|node| node.chain_len).max()
    }

    /// Words paired with their chains, shortest words first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Chain)> + '_ {
        self.order
            .iter()
            .map(move |&key| (self.nodes[key].word.as_str(), self.chain_at(key)))
    }

    /// All chains, in the same order as [`ChainTable::iter`].
    pub fn chains(&self) -> impl Iterator<Item = Chain> + '_ {
        self.order.iter().map(move |&key| self.chain_at(key))
    }

    pub(crate) fn chain_at(&self, key: DefaultKey) -> Chain {
        let mut words = Vec::with_capacity(self.nodes[key].chain_len);
        let mut current = Some(key);
        while let Some(k) = current {
            let node = &self.nodes[k];
            words.push(node.word.clone());
            current = node.prev;
        }
        words.reverse();
        Chain::from_words(words)
    }
}

/// Link test specialised once per build so the inner loop does not redo
/// per-word work.
enum Linker {
    Substring,
    CharSubset(SecondaryMap<DefaultKey, CharCounts>),
}

impl Linker {
    fn new(rule: Rule, table: &ChainTable) -> Self {
        match rule {
            Rule::Substring => Linker::Substring,
            Rule::CharSubset => Linker::CharSubset(
                table
                    .nodes
                    .iter()
                    .map(|(key, node)| (key, CharCounts::of(&node.word)))
                    .collect(),
            ),
        }
    }

    fn links(&self, table: &ChainTable, prev: DefaultKey, next: DefaultKey) -> bool {
        let (a, b) = (&table.nodes[prev], &table.nodes[next]);
        if b.word_len <= a.word_len {
            return false;
        }
        match self {
            Linker::Substring => b.word.contains(a.word.as_str()),
            Linker::CharSubset(counts) => counts[prev].is_subset_of(&counts[next]),
        }
    }
}

/// Computes, for every distinct word, the longest chain ending at it.
///
/// Words are visited in ascending length. Since a link always goes to a
/// strictly longer word, each word's predecessors are final by the time the
/// word is visited, so one forward pass over ordered pairs suffices. Among
/// predecessors giving the same length, the first one scanned wins.
pub fn build_chains<I, S>(words: I, rule: Rule) -> ChainTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = ChainTable::with_vocabulary(words, rule);
    debug!(words = table.len(), %rule, "building chain table");

    let linker = Linker::new(rule, &table);
    let mut improvements = 0usize;

    for i in 0..table.order.len() {
        let next = table.order[i];
        for j in 0..i {
            let prev = table.order[j];
            if !linker.links(&table, prev, next) {
                continue;
            }

            let candidate = table.nodes[prev].chain_len + 1;
            if candidate > table.nodes[next].chain_len {
                trace!(
                    prev = %table.nodes[prev].word,
                    next = %table.nodes[next].word,
                    chain_len = candidate,
                    "extended chain"
                );
                let node = &mut table.nodes[next];
                node.chain_len = candidate;
                node.prev = Some(prev);
                improvements += 1;
            }
        }
    }

    debug!(
        improvements,
        max_chain_len = table.max_chain_len().unwrap_or(0),
        "built chain table"
    );
    table
}
