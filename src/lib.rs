pub mod alphabet;
pub mod errors;
pub mod vocab;
pub mod wordlist;

pub use errors::{Error, Result};
pub use vocab::{PartOfSpeech, PosLookup, TagTable, Word};
pub use wordlist::filter::WordFilter;
pub use wordlist::index::Index;
pub use wordlist::trie::{PrefixGrouper, Search, SortedWords, Trie};
pub use wordlist::wordlist::{FileFormat, Wordlist};
