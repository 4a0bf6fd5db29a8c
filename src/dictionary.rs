use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Word list compiled into the binary, used when no dictionary file is available.
pub const FALLBACK_DICTIONARY: &str = include_str!("resources/words.txt");

const APP_DIR: &str = "hangman-solver";
const DICTIONARY_FILE: &str = "words.txt";

fn normalize_word(line: &str) -> Option<String> {
    let word = line.trim().to_uppercase();
    (!word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())).then_some(word)
}

fn collect_words<I: IntoIterator<Item = String>>(lines: I) -> Vec<String> {
    let mut seen = HashSet::new();
    lines
        .into_iter()
        .filter_map(|line| normalize_word(&line))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// One word per line; words are trimmed and uppercased, blank lines, lines
/// with non-letters, and repeats are dropped.
pub fn load_dictionary_from_str(data: &str) -> Vec<String> {
    collect_words(data.lines().map(str::to_string))
}

pub fn load_dictionary_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    Ok(collect_words(lines))
}

/// `<data dir>/hangman-solver/words.txt`, if the platform has a data dir.
pub fn default_dictionary_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(DICTIONARY_FILE))
}

pub fn fallback_dictionary() -> Vec<String> {
    load_dictionary_from_str(FALLBACK_DICTIONARY)
}

/// Loads `path`, or the default path when `None`. Falls back to the embedded
/// list if the file is missing, unreadable, or has no usable words, so the
/// result is never empty.
pub fn load_dictionary(path: Option<&Path>) -> Vec<String> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_dictionary_path() {
            Some(path) if path.exists() => path,
            _ => {
                log::info!("no dictionary file found, using the built-in word list");
                return fallback_dictionary();
            }
        },
    };

    match load_dictionary_from_file(&path) {
        Ok(words) if !words.is_empty() => {
            log::info!("loaded {} words from {}", words.len(), path.display());
            words
        }
        Ok(_) => {
            log::warn!(
                "{} has no usable words, using the built-in word list",
                path.display()
            );
            fallback_dictionary()
        }
        Err(e) => {
            log::warn!(
                "failed to read {}: {e}; using the built-in word list",
                path.display()
            );
            fallback_dictionary()
        }
    }
}
