pub mod trie;
pub mod grouper;
pub mod trie_builder;
pub mod sorted_words;

mod node;
mod search;
mod iterators;

pub use grouper::{Group, PrefixGrouper};
pub use iterators::Words;
pub use node::{Children, NodeId, NodeRef};
pub use search::Search;
pub use sorted_words::SortedWords;
pub use trie::Trie;
pub use trie_builder::TrieBuilder;
