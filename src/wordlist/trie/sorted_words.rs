use std::ops::Deref;

use crate::errors::{Error, Result};

/// A word sequence in lexicographic order, so every prefix block is contiguous.
///
/// The grouper depends on this order; the only ways in are sorting or a checked
/// hand-over of words that are already sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedWords(Vec<String>);

impl SortedWords {
    pub fn sort<I, S>(words: I) -> SortedWords
        where I: IntoIterator<Item=S>, S: Into<String> {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        words.sort();
        SortedWords(words)
    }

    pub fn from_sorted(words: Vec<String>) -> Result<SortedWords> {
        match words.windows(2).position(|pair| pair[0] > pair[1]) {
            Some(idx) => Err(Error::Unsorted { index: idx + 1 }),
            None => Ok(SortedWords(words)),
        }
    }
}

impl Deref for SortedWords {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for SortedWords {
    fn from_iter<I: IntoIterator<Item=S>>(iter: I) -> Self {
        SortedWords::sort(iter)
    }
}
