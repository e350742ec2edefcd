use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{Error, Result};

/// Grammatical category of a word, as reported by a lexical lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Other(String),
}

impl From<&str> for PartOfSpeech {
    fn from(tag: &str) -> Self {
        use PartOfSpeech::*;
        match tag.trim().to_lowercase().as_str() {
            "noun" => Noun,
            "verb" => Verb,
            "adjective" => Adjective,
            "adverb" => Adverb,
            "preposition" => Preposition,
            other => Other(other.to_string()),
        }
    }
}

impl Display for PartOfSpeech {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use PartOfSpeech::*;
        let tag = match self {
            Noun => "noun",
            Verb => "verb",
            Adjective => "adjective",
            Adverb => "adverb",
            Preposition => "preposition",
            Other(tag) => tag.as_str(),
        };
        f.write_str(tag)
    }
}

/// Where part-of-speech tags come from.
pub trait PosLookup {
    fn part_of_speech(&self, word: &str) -> Vec<PartOfSpeech>;
}

impl<F> PosLookup for F where F: Fn(&str) -> Vec<PartOfSpeech> {
    fn part_of_speech(&self, word: &str) -> Vec<PartOfSpeech> {
        self(word)
    }
}

/// In-memory tags, usually loaded from `word<TAB>tag;tag` lines.
#[derive(Debug, Clone, Default)]
pub struct TagTable {
    tags: HashMap<String, Vec<PartOfSpeech>>,
}

impl TagTable {
    pub fn new() -> TagTable {
        Default::default()
    }

    pub fn insert<S: Into<String>>(&mut self, word: S, tags: Vec<PartOfSpeech>) -> &mut TagTable {
        self.tags.entry(word.into()).or_default().extend(tags);
        self
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<TagTable> {
        let mut table = TagTable::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let (word, tags) = line.split_once('\t')
                .ok_or_else(|| Error::invalid_format(idx + 1, "expected word<TAB>tags"))?;
            let tags: Vec<PartOfSpeech> = tags.split(';')
                .filter(|t| !t.trim().is_empty())
                .map(PartOfSpeech::from)
                .collect();
            if tags.is_empty() {
                return Err(Error::invalid_format(idx + 1, format!("no tags for {:?}", word)));
            }
            table.insert(word.trim(), tags);
        }
        Ok(table)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<TagTable> {
        TagTable::from_reader(BufReader::new(File::open(path)?))
    }
}

impl PosLookup for TagTable {
    fn part_of_speech(&self, word: &str) -> Vec<PartOfSpeech> {
        self.tags.get(word).cloned().unwrap_or_default()
    }
}
