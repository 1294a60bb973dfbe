use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label reported for the root sentinel; it never enters the header table.
pub const ROOT_LABEL: &str = "__root__";

/// Index of a node inside an [`FPTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FPNode {
    pub item: Option<String>,
    pub count: usize,
    pub parent: Option<NodeId>,
    pub children: HashMap<String, NodeId>,
    /// Next node carrying the same item, in creation order.
    pub next: Option<NodeId>,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
            next: None,
        }
    }

    pub fn new_item(item: &str, parent: NodeId) -> Self {
        Self {
            item: Some(item.to_owned()),
            count: 0,
            parent: Some(parent),
            children: HashMap::new(),
            next: None,
        }
    }

    /// The node's label, or [`ROOT_LABEL`] for the root.
    pub fn label(&self) -> &str {
        self.item.as_deref().unwrap_or(ROOT_LABEL)
    }

    pub fn is_root(&self) -> bool {
        self.item.is_none()
    }
}

/// Prefix tree stored as an arena; node 0 is always the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FPTree {
    pub(crate) nodes: Vec<FPNode>,
    pub(crate) root_index: NodeId,
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FPTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            root_index: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root_index
    }

    pub fn node(&self, id: NodeId) -> &FPNode {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&FPNode> {
        self.nodes.get(id.index())
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn child(&self, parent: NodeId, item: &str) -> Option<NodeId> {
        self.nodes[parent.index()].children.get(item).copied()
    }

    /// Creates a zero-count child of `parent` and returns its id.
    pub(crate) fn add_child(&mut self, parent: NodeId, item: &str) -> NodeId {
        let new_index = NodeId(self.nodes.len());
        self.nodes.push(FPNode::new_item(item, parent));
        self.nodes[parent.index()]
            .children
            .insert(item.to_owned(), new_index);
        new_index
    }

    pub(crate) fn link_next(&mut self, prev: NodeId, node: NodeId) {
        self.nodes[prev.index()].next = Some(node);
    }

    pub(crate) fn increment(&mut self, node: NodeId) {
        self.nodes[node.index()].count += 1;
    }
}
