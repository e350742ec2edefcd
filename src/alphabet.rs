use std::iter::once;

pub fn is_prefix(prefix: &str, word: &str) -> bool {
    word.starts_with(prefix)
}

/// Abbreviations and acronyms read the same when upper-cased.
pub fn is_abbreviation(word: &str) -> bool {
    word == word.to_uppercase()
}

/// Byte lengths of every prefix of `word` ending on a char boundary, starting at `from`.
pub fn prefix_lengths(word: &str, from: usize) -> impl Iterator<Item=usize> + '_ {
    word.char_indices()
        .map(|(i, _)| i)
        .chain(once(word.len()))
        .filter(move |&i| i >= from)
}

/// Every non-empty stem left after removing one of `endings`, in ending order.
pub fn strip_endings(word: &str, endings: &[&str]) -> Vec<String> {
    let mut stems: Vec<String> = vec![];
    for ending in endings {
        if let Some(stem) = word.strip_suffix(ending) {
            if !stem.is_empty() && !stems.iter().any(|s| s == stem) {
                stems.push(stem.to_string());
            }
        }
    }
    stems
}

#[cfg(test)]
mod tests {
    use crate::alphabet::{is_abbreviation, prefix_lengths, strip_endings};

    #[test]
    fn prefix_lengths_respect_char_boundaries() {
        assert_eq!(prefix_lengths("grün", 0).collect::<Vec<_>>(), vec![0, 1, 2, 4, 5]);
        assert_eq!(prefix_lengths("grün", 3).collect::<Vec<_>>(), vec![4, 5]);
        assert_eq!(prefix_lengths("", 0).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn abbreviations() {
        assert!(is_abbreviation("USA"));
        assert!(is_abbreviation("EU"));
        assert!(!is_abbreviation("Haus"));
    }

    #[test]
    fn strips_in_ending_order() {
        assert_eq!(strip_endings("gutes", &["e", "en", "er", "es"]), vec!["gut"]);
        assert_eq!(strip_endings("guten", &["n", "en"]), vec!["gute", "gut"]);
        assert!(strip_endings("e", &["e"]).is_empty());
    }
}
