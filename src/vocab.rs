mod normalize;
mod pos;
mod word;

pub use normalize::{normalize_adjective, strip_adjective, Normalizer, ADJECTIVE_ENDINGS, NOUN_ENDINGS};
pub use pos::{PartOfSpeech, PosLookup, TagTable};
pub use word::Word;
