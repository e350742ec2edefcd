use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use crate::wordlist::trie::trie::Trie;

/// Index of a node in a trie's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

#[derive(Default, Clone, PartialEq, Eq)]
pub(crate) struct TrieNode {
    pub(crate) edges: BTreeMap<String, NodeId>,
    pub(crate) depth: usize,
    pub(crate) path: String,
}

impl TrieNode {
    pub(crate) fn child(path: &str, depth: usize) -> TrieNode {
        TrieNode {
            edges: BTreeMap::new(),
            depth,
            path: path.to_string(),
        }
    }

    pub(crate) fn get_child(&self, label: &str) -> Option<NodeId> {
        self.edges.get(label).copied()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("path", &self.path)
            .field("depth", &self.depth)
            .field("children", &self.edges.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// A node borrowed from its trie.
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    pub(crate) trie: &'t Trie,
    pub(crate) id: NodeId,
}

impl<'t> NodeRef<'t> {
    fn node(&self) -> &'t TrieNode {
        self.trie.node(self.id)
    }

    /// The edge label leading here; empty for the root.
    pub fn path(&self) -> &'t str {
        &self.node().path
    }

    pub fn depth(&self) -> usize {
        self.node().depth
    }

    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    pub fn get(&self, label: &str) -> Option<NodeRef<'t>> {
        self.node().get_child(label).map(|id| self.trie.node_ref(id))
    }

    pub fn children(&self) -> Children<'t> {
        Children { trie: self.trie, edges: self.node().edges.values() }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.trie, other.trie) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id.0)
            .field("path", &self.path())
            .field("children", &self.node().edges.len())
            .finish()
    }
}

pub struct Children<'t> {
    trie: &'t Trie,
    edges: btree_map::Values<'t, String, NodeId>,
}

impl<'t> Iterator for Children<'t> {
    type Item = NodeRef<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        self.edges.next().map(|&id| self.trie.node_ref(id))
    }
}
