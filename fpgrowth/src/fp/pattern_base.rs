use super::frequent::{ItemCount, ItemFrequencyTable};
use super::tree::FPTree;
use serde::Serialize;
use std::fmt;

/// The combined pattern base of one frequent item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternBase {
    pub item: String,
    pub sub_pattern_base: Vec<ItemCount>,
}

impl fmt::Display for PatternBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item: {}, subpattern: [", self.item)?;
        for (i, ic) in self.sub_pattern_base.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", ic)?;
        }
        write!(f, "]")
    }
}

/// One list per occurrence of `item` that has ancestors, in header-chain
/// order. Each ancestor is paired with the occurrence's own count.
pub fn conditional_pattern_bases(
    fp_tree: &FPTree,
    table: &ItemFrequencyTable,
    item: &str,
) -> Vec<Vec<ItemCount>> {
    fp_tree
        .chain(table.head(item))
        .filter_map(|idx| {
            let count = fp_tree.node(idx).count;
            let mut path = fp_tree.prefix_path(idx);
            path.pop();

            (!path.is_empty()).then(|| {
                path.into_iter()
                    .map(|ancestor| ItemCount::new(ancestor, count))
                    .collect::<Vec<_>>()
            })
        })
        .collect()
}

/// Keeps the labels present in every base, summing their counts. Output
/// follows the first base's order.
pub fn intersect_pattern_bases(bases: &[Vec<ItemCount>]) -> Vec<ItemCount> {
    let Some((first, rest)) = bases.split_first() else {
        return Vec::new();
    };

    first
        .iter()
        .filter_map(|ic| {
            let mut total = ic.count;
            for base in rest {
                total += base.iter().find(|other| other.item == ic.item)?.count;
            }
            Some(ItemCount::new(ic.item.clone(), total))
        })
        .collect()
}

pub fn pattern_base(fp_tree: &FPTree, table: &ItemFrequencyTable, item: &str) -> PatternBase {
    let bases = conditional_pattern_bases(fp_tree, table, item);
    PatternBase {
        item: item.to_owned(),
        sub_pattern_base: intersect_pattern_bases(&bases),
    }
}
