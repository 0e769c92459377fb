//! The set of correctly spelled words.
//!
//! Words are kept in a `BTreeSet` so iteration is lexicographic. The
//! similarity matcher walks the dictionary in this order and keeps the first
//! best candidate, which makes suggestions reproducible.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use log::{info, warn};

use crate::error::{Result, SpellError};

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Dictionary { words }
    }

    /// Reads a newline-delimited word list.
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = fs::read_to_string(file_path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SpellError::MissingSource {
                kind: "Dictionary",
                path: file_path.to_path_buf(),
            },
            _ => SpellError::Io(e),
        })?;
        Ok(Self::new(content.lines()))
    }

    /// Like [`Dictionary::from_file`], but a missing or unreadable source
    /// only logs a warning and yields an empty dictionary.
    pub fn load(file_path: impl AsRef<Path>) -> Self {
        let file_path = file_path.as_ref();
        match Self::from_file(file_path) {
            Ok(dictionary) => {
                info!(
                    "loaded {} words from {}",
                    dictionary.len(),
                    file_path.display()
                );
                dictionary
            }
            Err(e) => {
                warn!("{e} Continuing with an empty dictionary.");
                Self::default()
            }
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_new_trims_and_lowercases() {
        let dict = Dictionary::new(["  Cat ", "DOG", "bird\t", "", "   "]);
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("bird"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_duplicates_collapse() {
        let dict = Dictionary::new(["cat", "Cat", "CAT"]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_iter_is_sorted() {
        let dict = Dictionary::new(["pear", "apple", "fig"]);
        let words: Vec<&str> = dict.iter().collect();
        assert_eq!(words, vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Cat\r\ndog\n\n  bird  ").unwrap();

        let dict = Dictionary::from_file(file.path()).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("cat"));
        assert!(dict.contains("bird"));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("EnglishWords.txt");

        match Dictionary::from_file(&missing) {
            Err(SpellError::MissingSource { kind, path }) => {
                assert_eq!(kind, "Dictionary");
                assert_eq!(path, missing);
            }
            other => panic!("expected missing source, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let dict = Dictionary::load(dir.path().join("nope.txt"));
        assert!(dict.is_empty());
    }
}
