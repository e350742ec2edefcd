use crate::wordlist::trie::node::NodeId;
use crate::wordlist::trie::trie::Trie;

/// Depth-first, ordered walk over every edge label of a trie.
pub struct Words<'t> {
    trie: &'t Trie,
    stack: Vec<NodeId>,
}

impl<'t> Words<'t> {
    pub(crate) fn new(trie: &'t Trie) -> Words<'t> {
        let mut words = Words { trie, stack: vec![] };
        words.push_children(NodeId::ROOT);
        words
    }

    fn push_children(&mut self, id: NodeId) {
        self.stack.extend(self.trie.node(id).edges.values().rev());
    }
}

impl<'t> Iterator for Words<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.push_children(id);
        Some(&self.trie.node(id).path)
    }
}
