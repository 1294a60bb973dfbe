use super::tree::NodeId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// An item label paired with a count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemCount {
    pub item: String,
    pub count: usize,
}

impl ItemCount {
    pub fn new(item: impl Into<String>, count: usize) -> Self {
        Self {
            item: item.into(),
            count,
        }
    }
}

impl fmt::Display for ItemCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.item, self.count)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FrequencyEntry {
    count: usize,
    /// First tree node ever created for this item; the header table entry.
    head: Option<NodeId>,
}

/// Occurrence counts for every item seen during ingestion, plus the
/// header-table heads the tree build fills in.
#[derive(Debug, Clone, Default)]
pub struct ItemFrequencyTable {
    n: usize,
    entries: HashMap<String, FrequencyEntry>,
}

impl ItemFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: &str) {
        self.n += 1;
        match self.entries.get_mut(item) {
            Some(entry) => entry.count += 1,
            None => {
                self.entries.insert(
                    item.to_owned(),
                    FrequencyEntry {
                        count: 1,
                        head: None,
                    },
                );
            }
        }
    }

    pub fn get(&self, item: &str) -> usize {
        self.entries.get(item).map_or(0, |entry| entry.count)
    }

    /// Total item occurrences added across all transactions.
    pub fn total(&self) -> usize {
        self.n
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Items whose count reaches `min_support * total()`, most frequent first.
    ///
    /// `min_support` is clamped into `[0, 1]` and the threshold is compared
    /// as a fraction, never truncated. Equal counts order by descending label.
    pub fn frequent_item_counts(&self, min_support: f64) -> Vec<ItemCount> {
        let min_support = if min_support.is_nan() {
            0.0
        } else {
            min_support.clamp(0.0, 1.0)
        };
        let min_count = min_support * self.n as f64;

        let mut frequent: Vec<ItemCount> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.count as f64 >= min_count)
            .map(|(item, entry)| ItemCount::new(item.clone(), entry.count))
            .collect();

        frequent.sort_unstable_by(canonical_cmp);
        frequent
    }

    /// The canonical item order for `min_support`.
    pub fn sorted_frequent_items(&self, min_support: f64) -> Vec<String> {
        self.frequent_item_counts(min_support)
            .into_iter()
            .map(|ic| ic.item)
            .collect()
    }

    pub fn head(&self, item: &str) -> Option<NodeId> {
        self.entries.get(item).and_then(|entry| entry.head)
    }

    /// Records the first node of `item`'s header chain. Unknown items are ignored.
    pub(crate) fn set_head(&mut self, item: &str, node: NodeId) {
        if let Some(entry) = self.entries.get_mut(item) {
            entry.head = Some(node);
        }
    }

    pub(crate) fn clear_heads(&mut self) {
        for entry in self.entries.values_mut() {
            entry.head = None;
        }
    }

    pub fn reset(&mut self) {
        self.n = 0;
        self.entries.clear();
    }
}

fn canonical_cmp(a: &ItemCount, b: &ItemCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| b.item.cmp(&a.item))
}
