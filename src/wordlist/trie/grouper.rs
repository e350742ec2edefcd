use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

use crate::alphabet::is_prefix;
use crate::wordlist::trie::sorted_words::SortedWords;

/// Nested prefix groups. A key maps to the words grouped under it; an empty
/// group marks a terminal word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Group(BTreeMap<String, Group>);

impl Group {
    pub fn new() -> Group {
        Default::default()
    }

    fn leaves(members: &[&str]) -> Group {
        Group(members.iter().map(|m| (m.to_string(), Group::new())).collect())
    }

    pub fn is_leaf(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, prefix: &str) -> Option<&Group> {
        self.0.get(prefix)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Group> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = (&'a String, &'a Group);
    type IntoIter = btree_map::Iter<'a, String, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Group)> for Group {
    fn from_iter<I: IntoIterator<Item=(K, Group)>>(iter: I) -> Self {
        Group(iter.into_iter().map(|(k, g)| (k.into(), g)).collect())
    }
}

type Run<'w> = (&'w str, Vec<&'w str>);

pub struct PrefixGrouper;

impl PrefixGrouper {
    pub fn group(words: &SortedWords) -> Group {
        let words: Vec<&str> = words.iter().map(String::as_str).collect();
        Self::from_runs(Self::runs(&words))
    }

    /// One contiguous-run scan. The first word of a run is its prefix; a prefix
    /// nothing extends is dropped unless it is the last one.
    fn runs<'w>(words: &[&'w str]) -> Vec<Run<'w>> {
        let mut runs = vec![];
        let mut prefix: Option<&'w str> = None;
        let mut members: Vec<&'w str> = vec![];

        for &word in words {
            match prefix {
                None => prefix = Some(word),
                Some(p) if is_prefix(p, word) => members.push(word),
                Some(p) => {
                    if !members.is_empty() {
                        runs.push((p, std::mem::take(&mut members)));
                    }
                    prefix = Some(word);
                }
            }
        }
        if let Some(p) = prefix {
            runs.push((p, members));
        }
        runs
    }

    fn from_runs(runs: Vec<Run>) -> Group {
        runs.into_iter()
            .map(|(prefix, members)| {
                let sub_runs = Self::runs(&members);
                let child = if sub_runs.iter().any(|(_, m)| !m.is_empty()) {
                    Self::from_runs(sub_runs)
                } else {
                    Group::leaves(&members)
                };
                (prefix, child)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use maplit::btreemap;

    use crate::wordlist::trie::grouper::{Group, PrefixGrouper};
    use crate::wordlist::trie::sorted_words::SortedWords;

    fn group_of(words: &[&str]) -> Group {
        PrefixGrouper::group(&SortedWords::sort(words.iter().copied()))
    }

    fn leaves(words: &[&str]) -> Group {
        words.iter().map(|w| (*w, Group::new())).collect()
    }

    fn assert_members_extend_keys(group: &Group) {
        for (prefix, child) in group {
            for (member, _) in child {
                assert!(member.starts_with(prefix.as_str()), "{} under {}", member, prefix);
            }
            assert_members_extend_keys(child);
        }
    }

    #[test]
    fn groups_words_by_stem() {
        let group = group_of(&["be", "bekommen", "bekommst", "besuchen", "gut"]);
        let expected: Group = btreemap! {
            "be" => leaves(&["bekommen", "bekommst", "besuchen"]),
            "gut" => Group::new(),
        }.into_iter().collect();
        assert_eq!(group, expected);
    }

    #[test]
    fn subdivides_nested_stems() {
        let group = group_of(&["gut", "gute", "guten", "guter"]);
        let expected: Group = btreemap! {
            "gut" => btreemap! {
                "gute" => leaves(&["guten", "guter"]),
            }.into_iter().collect(),
        }.into_iter().collect();
        assert_eq!(group, expected);
        assert_members_extend_keys(&group);
    }

    #[test]
    fn drops_unextended_prefix_before_the_end() {
        let group = group_of(&["ab", "abc", "b", "x"]);
        assert!(group.get("b").is_none());
        assert_eq!(group.get("ab"), Some(&leaves(&["abc"])));
        assert_eq!(group.get("x"), Some(&Group::new()));
    }

    #[test]
    fn drops_unextended_prefix_at_nested_levels() {
        let group = group_of(&["p", "pa", "pax", "pb", "pc"]);
        let p = group.get("p").unwrap();
        assert_eq!(p.get("pa"), Some(&leaves(&["pax"])));
        assert_eq!(p.get("pc"), Some(&Group::new()));
        assert!(p.get("pb").is_none());
    }

    #[test]
    fn empty_and_single_inputs() {
        assert!(group_of(&[]).is_empty());
        let single = group_of(&["haus"]);
        assert_eq!(single.len(), 1);
        assert!(single.get("haus").unwrap().is_leaf());
    }

    #[test]
    fn duplicates_are_their_own_members() {
        let group = group_of(&["be", "be"]);
        assert_eq!(group.get("be"), Some(&leaves(&["be"])));
    }

    #[test]
    fn members_always_extend_their_key() {
        let group = group_of(&["ab", "abc", "abcd", "abd", "abx", "b", "ba", "bab", "bb", "c"]);
        assert_members_extend_keys(&group);
    }

    #[test]
    fn serializes_as_nested_mapping() {
        let group = group_of(&["be", "bekommen", "bekommst"]);
        assert_eq!(serde_json::to_string(&group).unwrap(),
                   r#"{"be":{"bekommen":{},"bekommst":{}}}"#);
    }
}
