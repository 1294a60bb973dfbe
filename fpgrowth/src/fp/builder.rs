use super::frequent::ItemFrequencyTable;
use super::transaction::TransactionStore;
use super::tree::{FPTree, NodeId};
use std::collections::HashMap;
use tracing::debug;

/// Builds a fresh FP-tree from `transactions`, projecting each one onto
/// `canonical` and threading every new node into its item's header chain.
///
/// Heads left in `table` by an earlier build are cleared first, so building
/// twice from the same input gives the same tree and chains.
pub fn build_fp_tree(
    transactions: &TransactionStore,
    canonical: &[String],
    table: &mut ItemFrequencyTable,
) -> FPTree {
    let mut fp_tree = FPTree::new();
    // Last node created per item, so chains grow in O(1).
    let mut last_seen: HashMap<&str, NodeId> = HashMap::with_capacity(canonical.len());

    table.clear_heads();

    for transaction in transactions {
        let mut current_index = fp_tree.root();

        for item in canonical.iter().map(String::as_str) {
            if !transaction.contains(item) {
                continue;
            }

            let child_index = match fp_tree.child(current_index, item) {
                Some(child_index) => child_index,
                None => {
                    let new_index = fp_tree.add_child(current_index, item);
                    match last_seen.insert(item, new_index) {
                        Some(prev) => fp_tree.link_next(prev, new_index),
                        None => table.set_head(item, new_index),
                    }
                    new_index
                }
            };

            fp_tree.increment(child_index);
            current_index = child_index;
        }
    }

    debug!(
        transactions = transactions.len(),
        frequent_items = canonical.len(),
        nodes = fp_tree.len(),
        "built fp-tree"
    );

    fp_tree
}
