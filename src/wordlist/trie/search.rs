use std::ops::ControlFlow;

use crate::alphabet::prefix_lengths;
use crate::wordlist::trie::node::{NodeId, NodeRef};
use crate::wordlist::trie::trie::Trie;

/// Outcome of [`Trie::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search<'t> {
    /// Known strictly-shorter prefixes on the path to the word, shallowest first.
    pub prefixes: Vec<String>,
    /// The deepest node labelled with the whole word.
    pub subtree: Option<NodeRef<'t>>,
}

impl<'t> Search<'t> {
    pub fn miss() -> Search<'t> {
        Search { prefixes: vec![], subtree: None }
    }

    pub fn is_found(&self) -> bool {
        self.subtree.is_some()
    }
}

impl Trie {
    /// Visits every edge whose label is a prefix of `word`, parents before
    /// children and shorter labels before longer ones.
    ///
    /// Inside a child the length scan starts at the parent label's length; child
    /// labels always extend their parent's, so nothing shorter can match there.
    fn walk<F>(&self, word: &str, mut visit: F) -> ControlFlow<()>
        where F: FnMut(&str, NodeId) -> ControlFlow<()> {
        let mut stack: Vec<(NodeId, usize)> = vec![];
        self.push_matches(&mut stack, NodeId::ROOT, word, 0);
        while let Some((id, len)) = stack.pop() {
            visit(&word[..len], id)?;
            self.push_matches(&mut stack, id, word, len);
        }
        ControlFlow::Continue(())
    }

    fn push_matches(&self, stack: &mut Vec<(NodeId, usize)>, id: NodeId, word: &str, from: usize) {
        let node = self.node(id);
        if node.is_leaf() {
            return;
        }
        let mark = stack.len();
        stack.extend(prefix_lengths(word, from)
            .filter_map(|len| node.get_child(&word[..len]).map(|child| (child, len))));
        // shortest label on top
        stack[mark..].reverse();
    }

    /// Known prefixes of `word` along the trie path, plus the node reached when
    /// the path consumes the whole word. Anything else is a miss: `([], None)`.
    pub fn search(&self, word: &str) -> Search<'_> {
        let mut prefixes = vec![];
        let mut deepest: Option<NodeId> = None;

        let _ = self.walk(word, |label, id| {
            if label == word {
                if deepest.map_or(true, |d| self.node(d).depth < self.node(id).depth) {
                    deepest = Some(id);
                }
            } else {
                prefixes.push(label.to_string());
            }
            ControlFlow::Continue(())
        });

        match deepest {
            Some(id) => Search { prefixes, subtree: Some(self.node_ref(id)) },
            None => Search::miss(),
        }
    }

    /// The prefix trail of `word` whether or not the trie accounts for all of it.
    pub fn known_prefixes(&self, word: &str) -> Vec<String> {
        let mut prefixes = vec![];
        let _ = self.walk(word, |label, _| {
            if label != word {
                prefixes.push(label.to_string());
            }
            ControlFlow::Continue(())
        });
        prefixes
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(word, |label, _| {
            if label == word {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }).is_break()
    }
}
