use crate::alphabet::strip_endings;
use crate::vocab::pos::PartOfSpeech;

/// Produces stem candidates for a word, most likely first.
pub type Normalizer = fn(&str) -> Vec<String>;

pub const ADJECTIVE_ENDINGS: &[&str] = &["e", "en", "er", "es", "em"];
pub const NOUN_ENDINGS: &[&str] = &["en", "n", "e", "s", "es"];

fn adjective_stems(word: &str) -> Vec<String> {
    strip_endings(word, ADJECTIVE_ENDINGS)
}

fn noun_stems(word: &str) -> Vec<String> {
    strip_endings(word, NOUN_ENDINGS)
}

/// Registered normalizers, in the order they are tried when a word's tags
/// select none of them.
static NORMALIZERS: [(PartOfSpeech, Normalizer); 2] = [
    (PartOfSpeech::Adjective, adjective_stems),
    (PartOfSpeech::Noun, noun_stems),
];

/// Normalizers for `tags` in tag order, or every registered one if no tag has any.
pub(crate) fn normalizers_for(tags: &[PartOfSpeech]) -> Vec<Normalizer> {
    let mut selected: Vec<usize> = vec![];
    for tag in tags {
        if let Some(idx) = NORMALIZERS.iter().position(|(pos, _)| pos == tag) {
            if !selected.contains(&idx) {
                selected.push(idx);
            }
        }
    }
    if selected.is_empty() {
        selected = (0..NORMALIZERS.len()).collect();
    }
    selected.into_iter().map(|idx| NORMALIZERS[idx].1).collect()
}

/// Strips the first adjective ending that matches, or returns `s` unchanged.
pub fn strip_adjective(s: &str) -> String {
    adjective_stems(s).into_iter().next().unwrap_or_else(|| s.to_string())
}

/// The first adjective stem of `s` that is one of `known`, or `s` unchanged.
pub fn normalize_adjective<S: AsRef<str>>(s: &str, known: &[S]) -> String {
    adjective_stems(s).into_iter()
        .find(|stem| known.iter().any(|k| k.as_ref() == stem))
        .unwrap_or_else(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use crate::vocab::normalize::{normalize_adjective, normalizers_for, strip_adjective};
    use crate::vocab::pos::PartOfSpeech;

    #[test]
    fn strips_adjective_endings_in_priority_order() {
        assert_eq!(strip_adjective("gute"), "gut");
        assert_eq!(strip_adjective("guten"), "gut");
        assert_eq!(strip_adjective("kleinem"), "klein");
        assert_eq!(strip_adjective("gut"), "gut");
    }

    #[test]
    fn normalizes_adjectives_against_known_stems() {
        assert_eq!(normalize_adjective("gutes", &["gut"]), "gut");
        assert_eq!(normalize_adjective("gutes", &["klein"]), "gutes");
    }

    #[test]
    fn selects_normalizers_by_tag() {
        let adjective = normalizers_for(&[PartOfSpeech::Adjective]);
        assert_eq!(adjective.len(), 1);
        assert_eq!(adjective[0]("roten"), vec!["rot"]);

        let noun_first = normalizers_for(&[PartOfSpeech::Noun, PartOfSpeech::Adjective]);
        assert_eq!(noun_first.len(), 2);
        assert_eq!(noun_first[0]("Hauses"), vec!["Hause", "Haus"]);
    }

    #[test]
    fn falls_back_to_every_normalizer() {
        assert_eq!(normalizers_for(&[PartOfSpeech::Verb]).len(), 2);
        assert_eq!(normalizers_for(&[]).len(), 2);
    }
}
