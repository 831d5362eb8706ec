//! Dictionary word representation
//!
//! A Word is a non-empty ASCII token read from a dictionary file.

use std::fmt;

/// A dictionary word
///
/// Keeps the text exactly as it appeared in the dictionary. Guesses are
/// compared against it without regard to ASCII case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    Whitespace,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII characters"),
            Self::Whitespace => write!(f, "Word must not contain whitespace"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, contains non-ASCII
    /// characters, or contains whitespace.
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Word;
    ///
    /// let word = Word::new("house").unwrap();
    /// assert_eq!(word.text(), "house");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("café").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.bytes().any(|b| b.is_ascii_whitespace()) {
            return Err(WordError::Whitespace);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the character at a 0-based position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        char::from(self.text.as_bytes()[position])
    }

    /// Check whether a guess spells exactly this word
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        self.text == guess
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.as_bytes(), b"cat");
        assert_eq!(word.len(), 3);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_keeps_original_case() {
        let word = Word::new("Paris").unwrap();
        assert_eq!(word.text(), "Paris");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("naïve"), Err(WordError::NonAscii));
        assert_eq!(Word::new("two words"), Err(WordError::Whitespace));
        assert_eq!(Word::new("tab\there"), Err(WordError::Whitespace));
    }

    #[test]
    fn single_letter_is_a_word() {
        // Too short for any band, but still a word
        let word = Word::new("a").unwrap();
        assert_eq!(word.len(), 1);
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("house").unwrap();
        assert_eq!(word.char_at(0), 'h');
        assert_eq!(word.char_at(4), 'e');
    }

    #[test]
    fn word_matches_exact_text_only() {
        let word = Word::new("house").unwrap();
        assert!(word.matches("house"));
        assert!(!word.matches("HOUSE"));
        assert!(!word.matches("House"));
        assert!(!word.matches(" house"));
        assert!(!word.matches("houses"));
        assert!(!word.matches("hous"));
        assert!(!word.matches(""));
    }

    #[test]
    fn word_display() {
        let word = Word::new("dog").unwrap();
        assert_eq!(format!("{word}"), "dog");
    }
}
