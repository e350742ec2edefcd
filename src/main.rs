use std::path::PathBuf;

use log::info;
use structopt::StructOpt;

use stem_trie::{FileFormat, PartOfSpeech, PosLookup, Result, TagTable, Word, WordFilter, Wordlist};

/// Group a word list by shared prefixes and reduce words to the stems it knows.
#[derive(StructOpt)]
struct Cli {
    /// The word list to build the trie from, one word per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Words to normalize
    words: Vec<String>,
    /// Tag file with `word<TAB>tag;tag` lines
    #[structopt(long, parse(from_os_str))]
    tags: Option<PathBuf>,
    /// Part of speech for every word; overrides the tag file
    #[structopt(long)]
    pos: Vec<String>,
    /// Column delimiter of the word list
    #[structopt(long)]
    delimiter: Option<char>,
    /// Zero-based column holding the word
    #[structopt(long)]
    column: Option<usize>,
    /// Lower-case every word before grouping
    #[structopt(long)]
    lowercase: bool,
    /// Print the prefix groups as JSON
    #[structopt(long)]
    dump: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::from_args();

    let format = FileFormat::builder()
        .delimiter(args.delimiter)
        .word_column(args.column)
        .build();
    let filter = WordFilter::builder().lowercase(args.lowercase).build();
    let wl = Wordlist::from_file(&args.path, &format, &filter)?;

    if args.dump {
        println!("{}", serde_json::to_string_pretty(wl.group())?);
    }

    let table = match &args.tags {
        Some(path) => Some(TagTable::from_file(path)?),
        None => None,
    };
    let pos: Vec<PartOfSpeech> = args.pos.iter().map(|p| PartOfSpeech::from(p.as_str())).collect();

    let words: Vec<Word> = args.words.iter()
        .map(|w| {
            let mut word = Word::new(w.to_string()).with_trie(wl.trie());
            if !pos.is_empty() {
                word.pos = pos.clone();
            } else if let Some(table) = &table {
                word.update_pos(table as &dyn PosLookup);
            }
            word
        })
        .collect();
    info!("Normalizing {} words against {} known words", words.len(), wl.len());

    for (word, stem) in words.iter().zip(wl.normalize_all(&words)) {
        let known = if wl.contains(&word.word) { "known" } else { "unknown" };
        println!("{} -> {} ({})", word.word, stem, known);
    }
    Ok(())
}
