use std::fmt::{Debug, Formatter};

use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;

use crate::wordlist::trie::grouper::{Group, PrefixGrouper};
use crate::wordlist::trie::iterators::Words;
use crate::wordlist::trie::node::{NodeId, NodeRef, TrieNode};
use crate::wordlist::trie::sorted_words::SortedWords;
use crate::wordlist::trie::trie_builder::TrieBuilder;

/// Prefix trie whose edges are whole observed stems rather than single letters.
///
/// Nodes live in an arena; the root is always node 0. A trie never changes
/// after it is built.
pub struct Trie {
    pub(crate) nodes: Vec<TrieNode>,
}

impl Trie {
    pub fn new() -> Trie {
        TrieBuilder::new().build()
    }

    pub fn from_words(words: &SortedWords) -> Trie {
        Trie::from(&PrefixGrouper::group(words))
    }

    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    pub(crate) fn node_ref(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { trie: self, id }
    }

    pub fn root(&self) -> NodeRef<'_> {
        self.node_ref(NodeId::ROOT)
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.node(NodeId::ROOT).is_leaf()
    }

    pub fn words(&self) -> Words<'_> {
        Words::new(self)
    }

    pub fn to_group(&self) -> Group {
        fn collect(trie: &Trie, id: NodeId) -> Group {
            trie.node(id).edges.iter()
                .map(|(label, &child)| (label.as_str(), collect(trie, child)))
                .collect()
        }
        collect(self, NodeId::ROOT)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl From<&Group> for Trie {
    fn from(group: &Group) -> Self {
        TrieBuilder::new().add_group(group).build()
    }
}

impl Serialize for NodeRef<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut map = serializer.serialize_map(Some(self.children().count()))?;
        for child in self.children() {
            map.serialize_entry(child.path(), &child)?;
        }
        map.end()
    }
}

impl Serialize for Trie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        self.root().serialize(serializer)
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            l.entry(node);
            stack.extend(node.edges.values().rev());
        }
        l.finish()
    }
}
