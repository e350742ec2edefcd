use crate::wordlist::trie::{Search, Trie};

/// Read-only word lookups shared by the trie and the things wrapping it.
pub trait Index {
    fn contains(&self, word: &str) -> bool;
    fn search(&self, word: &str) -> Search<'_>;
    /// Known prefixes of `word`, whether or not `word` itself is known.
    fn known_prefixes(&self, word: &str) -> Vec<String>;

    fn contains_all<'a, I>(&self, items: I) -> bool
        where I: IntoIterator<Item=&'a str>, Self: Sized {
        items.into_iter().all(|x| self.contains(x))
    }
}

impl Index for Trie {
    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }

    fn search(&self, word: &str) -> Search<'_> {
        Trie::search(self, word)
    }

    fn known_prefixes(&self, word: &str) -> Vec<String> {
        Trie::known_prefixes(self, word)
    }
}
