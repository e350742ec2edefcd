use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use log::{debug, info};
use rayon::prelude::*;
use typed_builder::TypedBuilder;

use crate::errors::{Error, Result};
use crate::vocab::Word;
use crate::wordlist::filter::WordFilter;
use crate::wordlist::index::Index;
use crate::wordlist::trie::{Group, PrefixGrouper, Search, SortedWords, Trie};

pub struct Wordlist {
    trie: Trie,
    group: Group,
    count: usize,
}

#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default)]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: Option<usize>,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<&'a str> {
        match self.delimiter {
            None => Ok(line),
            Some(delimiter) => {
                let idx = self.word_column.unwrap_or(0);
                line.split(delimiter).nth(idx).ok_or_else(|| Error::invalid_format(
                    line_no, format!("no column {} in {:?}", idx, line)))
            }
        }
    }
}

impl Wordlist {
    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat, filter: &WordFilter) -> Result<Wordlist> {
        let path = path.as_ref();
        info!("Reading words from {}", path.display());

        let start = Instant::now();
        let reader = BufReader::new(File::open(path)?);
        let mut words = vec![];
        let mut skipped: usize = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match filter.apply(format.parse_line(&line, idx + 1)?) {
                Some(word) => words.push(word),
                None => skipped += 1,
            }
        }
        info!("Read {} words in {:.3}s ({} filtered out)",
              words.len(), start.elapsed().as_secs_f64(), skipped);

        Ok(Wordlist::from_sorted(SortedWords::sort(words)))
    }

    pub fn from_words<I, S>(words: I, filter: &WordFilter) -> Wordlist
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        let words = words.into_iter().filter_map(|w| filter.apply(w.as_ref()));
        Wordlist::from_sorted(SortedWords::sort(words))
    }

    pub fn from_sorted(words: SortedWords) -> Wordlist {
        let start = Instant::now();
        let group = PrefixGrouper::group(&words);
        let trie = Trie::from(&group);
        info!("Built trie of {} words ({} edges) in {:.3}s",
              words.len(), trie.len(), start.elapsed().as_secs_f64());
        Wordlist { trie, group, count: words.len() }
    }

    /// Number of words the list was built from.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    delegate! {
        to self.trie {
            pub fn contains(&self, word: &str) -> bool;
            pub fn search(&self, word: &str) -> Search<'_>;
            pub fn known_prefixes(&self, word: &str) -> Vec<String>;
        }
    }

    /// Normalizes every word against this list's trie, in parallel.
    pub fn normalize_all(&self, words: &[Word]) -> Vec<String> {
        words.par_iter()
            .map(|word| {
                let stem = word.normalize_with(&self.trie);
                debug!("{} -> {}", word.word, stem);
                stem
            })
            .collect()
    }
}

impl Index for Wordlist {
    fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    fn search(&self, word: &str) -> Search<'_> {
        self.trie.search(word)
    }

    fn known_prefixes(&self, word: &str) -> Vec<String> {
        self.trie.known_prefixes(word)
    }
}
