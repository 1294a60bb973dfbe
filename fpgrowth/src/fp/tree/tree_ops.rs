use super::tree::{FPTree, NodeId};
use serde::Serialize;

/// Walks a header-table chain through the `next` links.
pub struct HeaderChain<'a> {
    tree: &'a FPTree,
    current: Option<NodeId>,
}

impl Iterator for HeaderChain<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.tree.node(id).next;
        Some(id)
    }
}

/// Owned, label-ordered copy of a subtree, for comparison and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeSnapshot {
    pub item: String,
    pub count: usize,
    pub children: Vec<TreeSnapshot>,
}

impl TreeSnapshot {
    pub fn child(&self, item: &str) -> Option<&TreeSnapshot> {
        self.children.iter().find(|c| c.item == item)
    }
}

impl FPTree {
    /// Children of `id` as `(label, child)` pairs, sorted by label.
    pub fn children(&self, id: NodeId) -> Vec<(&str, NodeId)> {
        let mut children: Vec<(&str, NodeId)> = self
            .node(id)
            .children
            .iter()
            .map(|(item, &child)| (item.as_str(), child))
            .collect();
        children.sort_unstable_by(|a, b| a.0.cmp(b.0));
        children
    }

    /// Root-to-node labels, ending with the node's own label. The root
    /// contributes nothing.
    pub fn prefix_path(&self, id: NodeId) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = Some(id);

        while let Some(idx) = current {
            let node = self.node(idx);
            if let Some(item) = node.item.as_deref() {
                path.push(item);
            }
            current = node.parent;
        }

        path.reverse();
        path
    }

    /// Every node reachable from `head` through `next` links.
    pub fn chain(&self, head: Option<NodeId>) -> HeaderChain<'_> {
        HeaderChain {
            tree: self,
            current: head,
        }
    }

    pub fn snapshot(&self) -> TreeSnapshot {
        self.snapshot_from(self.root_index)
    }

    pub fn snapshot_from(&self, id: NodeId) -> TreeSnapshot {
        let node = self.node(id);
        TreeSnapshot {
            item: node.label().to_owned(),
            count: node.count,
            children: self
                .children(id)
                .into_iter()
                .map(|(_, child)| self.snapshot_from(child))
                .collect(),
        }
    }

    /// Checks that no node counts fewer transactions than its children together.
    pub fn counts_consistent(&self) -> bool {
        self.nodes
            .iter()
            .filter(|node| !node.is_root())
            .all(|node| {
                let children_total: usize = node
                    .children
                    .values()
                    .map(|&child| self.node(child).count)
                    .sum();
                node.count >= children_total
            })
    }
}
