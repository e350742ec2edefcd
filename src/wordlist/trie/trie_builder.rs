use log::debug;

use crate::wordlist::trie::grouper::Group;
use crate::wordlist::trie::node::{NodeId, TrieNode};
use crate::wordlist::trie::trie::Trie;

/// Flattens nested prefix groups into a trie arena.
pub struct TrieBuilder {
    nodes: Vec<TrieNode>,
}

impl TrieBuilder {
    pub fn new() -> TrieBuilder {
        TrieBuilder {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Adds `group` below the root, merging with edges already present.
    pub fn add_group(&mut self, group: &Group) -> &mut TrieBuilder {
        let mut stack: Vec<(NodeId, &Group)> = vec![(NodeId::ROOT, group)];
        while let Some((parent, group)) = stack.pop() {
            for (label, child) in group.iter() {
                let id = self.get_or_create_child(parent, label);
                stack.push((id, child));
            }
        }
        self
    }

    fn get_or_create_child(&mut self, parent: NodeId, label: &str) -> NodeId {
        if let Some(id) = self.nodes[parent.0].get_child(label) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes.push(TrieNode::child(label, depth));
        self.nodes[parent.0].edges.insert(label.to_string(), id);
        id
    }

    pub fn build(&mut self) -> Trie {
        let nodes = std::mem::replace(&mut self.nodes, vec![TrieNode::default()]);
        debug!("Built trie with {} nodes", nodes.len());
        Trie { nodes }
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        TrieBuilder::new()
    }
}
