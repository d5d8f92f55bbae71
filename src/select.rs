use crate::chain::Chain;
use crate::table::ChainTable;
use tracing::debug;

/// Returns every chain of maximal length in `table`.
///
/// Single-word chains are never reported, so a table where no word links
/// to another yields an empty result. Chains come out in table order.
pub fn find_longest_chains(table: &ChainTable) -> Vec<Chain> {
    let Some(max_len) = table.max_chain_len() else {
        return Vec::new();
    };

    if max_len <= 1 {
        debug!(words = table.len(), "no word links to another");
        return Vec::new();
    }

    let longest: Vec<Chain> = table
        .order
        .iter()
        .filter(|&&key| table.nodes[key].chain_len == max_len)
        .map(|&key| table.chain_at(key))
        .collect();

    debug!(max_len, count = longest.len(), "selected longest chains");
    longest
}
