use typed_builder::TypedBuilder;

use crate::alphabet::is_abbreviation;

fn default_articles() -> Vec<String> {
    ["der", "das", "die", "the"].iter().map(|a| a.to_string()).collect()
}

/// Decides which raw lines become words, and in what form.
#[derive(TypedBuilder, Debug, Clone)]
pub struct WordFilter {
    /// Shorter words (in chars) are noise.
    #[builder(default = 2)]
    min_len: usize,
    /// Drop words that are entirely upper case, i.e. abbreviations.
    #[builder(default = true)]
    skip_uppercase: bool,
    #[builder(default = default_articles())]
    articles: Vec<String>,
    #[builder(default)]
    lowercase: bool,
}

impl Default for WordFilter {
    fn default() -> Self {
        WordFilter::builder().build()
    }
}

impl WordFilter {
    pub fn apply(&self, raw: &str) -> Option<String> {
        let mut word = strip_article(raw.trim(), &self.articles);
        if self.lowercase {
            word = word.to_lowercase();
        }
        if word.chars().count() < self.min_len {
            return None;
        }
        if self.skip_uppercase && is_abbreviation(&word) {
            return None;
        }
        Some(word)
    }
}

/// Removes a leading article (the first one in `articles` that matches).
pub fn strip_article<S: AsRef<str>>(s: &str, articles: &[S]) -> String {
    for article in articles {
        let stripped = s.strip_prefix(article.as_ref())
            .and_then(|rest| rest.strip_prefix(' '));
        if let Some(rest) = stripped {
            return rest.trim().to_string();
        }
    }
    s.trim().to_string()
}
