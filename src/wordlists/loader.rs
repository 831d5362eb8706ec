//! Dictionary parsing utilities
//!
//! Dictionaries are plain text: words separated by arbitrary whitespace, no
//! header and no count prefix.

use crate::core::Word;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Read a dictionary file into memory
///
/// Bytes that are not valid UTF-8 become U+FFFD, so the token holding them
/// fails the ASCII check in [`parse_words`] and only that token is lost.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn read_source<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Split dictionary text into words
///
/// Tokens that are not valid words (non-ASCII) are skipped with a warning.
/// Returns the words and the number of skipped tokens.
///
/// # Examples
/// ```
/// use unscramble::wordlists::loader::parse_words;
///
/// let (words, skipped) = parse_words("cat  house\n\tdog\n");
/// assert_eq!(words.len(), 3);
/// assert_eq!(skipped, 0);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> (Vec<Word>, usize) {
    let mut skipped = 0;
    let words = content
        .split_whitespace()
        .filter_map(|token| match Word::new(token) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("Skipping dictionary token {token:?}: {e}");
                skipped += 1;
                None
            }
        })
        .collect();

    (words, skipped)
}

/// Convert a string slice to a Word vector, dropping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_splits_on_any_whitespace() {
        let (words, skipped) = parse_words("  cat\thouse\r\n\n dog   ");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "house", "dog"]);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn parse_words_skips_non_ascii() {
        let (words, skipped) = parse_words("cat café dog");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "dog"]);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn parse_words_empty() {
        let (words, skipped) = parse_words("   \n\t ");
        assert!(words.is_empty());
        assert_eq!(skipped, 0);
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["cat", "", "garden"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "garden");
    }

    #[test]
    fn read_source_tolerates_invalid_utf8() {
        let path = std::env::temp_dir().join(format!(
            "unscramble-loader-latin1-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, b"cat caf\xe9 dog").unwrap();

        let content = read_source(&path).unwrap();
        let (words, skipped) = parse_words(&content);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "dog"]);
        assert_eq!(skipped, 1);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn read_source_missing_file_is_error() {
        let path = std::env::temp_dir().join("unscramble-loader-missing-file.txt");
        assert!(read_source(path).is_err());
    }
}
