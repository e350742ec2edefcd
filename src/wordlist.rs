pub mod trie;
pub mod index;
pub mod filter;
pub mod wordlist;
