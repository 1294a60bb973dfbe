use super::frequent::ItemFrequencyTable;
use super::pattern_base::{pattern_base, PatternBase};
use super::tree::FPTree;
use rayon::prelude::*;
use tracing::trace;

/// One pattern base per frequent item, least frequent first.
///
/// With `parallel` set the items are mined on rayon's pool; the tree is only
/// read, and the result order matches the sequential run.
pub fn mine_pattern_bases(
    fp_tree: &FPTree,
    table: &ItemFrequencyTable,
    canonical: &[String],
    parallel: bool,
) -> Vec<PatternBase> {
    let mine = |item: &String| {
        let base = pattern_base(fp_tree, table, item);
        trace!(item = %item, size = base.sub_pattern_base.len(), "mined pattern base");
        base
    };

    if parallel {
        canonical.par_iter().rev().map(mine).collect()
    } else {
        canonical.iter().rev().map(mine).collect()
    }
}
