use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

use derive_new::new;
use log::debug;

use crate::errors::{Error, Result};
use crate::vocab::normalize::normalizers_for;
use crate::vocab::pos::{PartOfSpeech, PosLookup};
use crate::wordlist::index::Index;
use crate::wordlist::trie::Trie;

/// A vocabulary entry: the literal word, what it means and what it is.
#[derive(new, Clone)]
pub struct Word<'t> {
    pub word: String,
    #[new(default)]
    pub definition: Option<String>,
    #[new(default)]
    pub pos: Vec<PartOfSpeech>,
    #[new(default)]
    trie: Option<&'t Trie>,
}

impl<'t> Word<'t> {
    pub fn with_definition<S: Into<String>>(mut self, definition: S) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn with_pos(mut self, pos: Vec<PartOfSpeech>) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_trie(mut self, trie: &'t Trie) -> Self {
        self.attach_trie(trie);
        self
    }

    pub fn attach_trie(&mut self, trie: &'t Trie) {
        self.trie = Some(trie);
    }

    pub fn update_pos(&mut self, lookup: &dyn PosLookup) {
        self.pos = lookup.part_of_speech(&self.word);
    }

    pub fn is_noun(&self) -> bool {
        self.pos.contains(&PartOfSpeech::Noun)
    }

    pub fn is_verb(&self) -> bool {
        self.pos.contains(&PartOfSpeech::Verb)
    }

    pub fn is_adjective(&self) -> bool {
        self.pos.contains(&PartOfSpeech::Adjective)
    }

    pub fn is_adverb(&self) -> bool {
        self.pos.contains(&PartOfSpeech::Adverb)
    }

    pub fn is_preposition(&self) -> bool {
        self.pos.contains(&PartOfSpeech::Preposition)
    }

    /// Reduces the word to a shorter form the trie knows on its path, using the
    /// given trie or else the attached one.
    pub fn normalize(&self, trie: Option<&Trie>) -> Result<String> {
        let trie = trie.or(self.trie).ok_or_else(|| Error::InvalidArgument(
            format!("no trie to normalize {:?} against", self.word)))?;
        Ok(self.normalize_with(trie))
    }

    /// Best effort: the first stem candidate found among the word's known
    /// prefixes, or the word itself. The word needs no entry of its own.
    pub fn normalize_with<I: Index + ?Sized>(&self, index: &I) -> String {
        let prefixes = index.known_prefixes(&self.word);
        for normalizer in normalizers_for(&self.pos) {
            if let Some(stem) = normalizer(&self.word).into_iter().find(|c| prefixes.contains(c)) {
                debug!("Normalized {} to {}", self.word, stem);
                return stem;
            }
        }
        self.word.clone()
    }
}

impl Debug for Word<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Word")
            .field("word", &self.word)
            .field("definition", &self.definition)
            .field("pos", &self.pos)
            .field("has_trie", &self.trie.is_some())
            .finish()
    }
}

impl PartialEq for Word<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for Word<'_> {}

impl PartialOrd for Word<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.word.cmp(&other.word)
    }
}

#[cfg(test)]
mod tests {
    use maplit::hashmap;

    use crate::errors::Error;
    use crate::vocab::pos::{PartOfSpeech, TagTable};
    use crate::vocab::word::Word;
    use crate::wordlist::trie::{SortedWords, Trie};

    use PartOfSpeech::*;

    fn trie_of(words: &[&str]) -> Trie {
        Trie::from_words(&SortedWords::sort(words.iter().copied()))
    }

    fn word(w: &str, pos: Vec<PartOfSpeech>) -> Word<'static> {
        Word::new(w.to_string()).with_pos(pos)
    }

    #[test]
    fn normalize_needs_a_trie() {
        match word("gute", vec![Adjective]).normalize(None) {
            Err(Error::InvalidArgument(_)) => {}
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn strips_adjective_ending_to_known_prefix() {
        let trie = trie_of(&["gut", "gute", "guter"]);
        assert_eq!(word("gute", vec![Adjective]).normalize(Some(&trie)).unwrap(), "gut");
    }

    #[test]
    fn inflected_form_need_not_be_in_the_trie() {
        let trie = trie_of(&["be", "bekommen", "bekommst", "besuchen", "gut"]);
        assert!(!trie.contains("gute"));
        assert_eq!(word("gute", vec![Adjective]).normalize(Some(&trie)).unwrap(), "gut");
        assert_eq!(word("bekommenen", vec![Adjective]).normalize(Some(&trie)).unwrap(), "bekommen");

        let lone = trie_of(&["gut"]);
        assert_eq!(word("gute", vec![Adjective]).normalize(Some(&lone)).unwrap(), "gut");
        assert_eq!(word("guten", vec![]).normalize(Some(&lone)).unwrap(), "gut");
    }

    #[test]
    fn uses_the_attached_trie() {
        let trie = trie_of(&["Haus", "Hauses"]);
        let hauses = Word::new("Hauses".to_string()).with_pos(vec![Noun]).with_trie(&trie);
        assert_eq!(hauses.normalize(None).unwrap(), "Haus");

        let other = trie_of(&["Hause", "Hauses"]);
        assert_eq!(hauses.normalize(Some(&other)).unwrap(), "Hause");
    }

    #[test]
    fn tags_pick_the_normalizer() {
        let trie = trie_of(&["gut", "gute", "gutes"]);
        assert_eq!(word("gutes", vec![Adjective]).normalize_with(&trie), "gut");
        assert_eq!(word("gutes", vec![Noun]).normalize_with(&trie), "gute");
        assert_eq!(word("gutes", vec![Verb]).normalize_with(&trie), "gut");
        assert_eq!(word("gutes", vec![]).normalize_with(&trie), "gut");
    }

    #[test]
    fn unknown_words_come_back_unchanged() {
        let trie = trie_of(&["gut", "gute"]);
        assert_eq!(word("gutes", vec![Adjective]).normalize_with(&trie), "gut");
        assert_eq!(word("rote", vec![Adjective]).normalize_with(&trie), "rote");
        assert_eq!(word("gutartig", vec![Adjective]).normalize_with(&trie), "gutartig");
        assert_eq!(word("gute", vec![Noun]).normalize_with(&trie), "gut");
    }

    #[test]
    fn looks_up_parts_of_speech() {
        let mut table = TagTable::new();
        table.insert("schnell", vec![Adjective, Adverb]);
        let mut schnell = Word::new("schnell".to_string()).with_definition("fast");
        schnell.update_pos(&table);
        assert!(schnell.is_adjective() && schnell.is_adverb());
        assert!(!schnell.is_noun() && !schnell.is_verb() && !schnell.is_preposition());

        let tags = hashmap! { "mit" => vec![Preposition] };
        let mut mit = Word::new("mit".to_string());
        mit.update_pos(&|w: &str| tags.get(w).cloned().unwrap_or_default());
        assert!(mit.is_preposition());
    }

    #[test]
    fn orders_by_word() {
        let mut words = vec![word("Zug", vec![]), word("Apfel", vec![Noun]), word("gut", vec![])];
        words.sort();
        assert_eq!(words.iter().map(|w| w.word.as_str()).collect::<Vec<_>>(), vec!["Apfel", "Zug", "gut"]);
        assert_eq!(word("gut", vec![Adjective]), word("gut", vec![]));
    }
}
