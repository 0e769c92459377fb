//! Word meanings loaded from a JSON object of the form
//! `{"word": ["first meaning", "second meaning"]}`.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::error::{Result, SpellError};

/// A meaning entry as it appears in the source file. Older data files store
/// a bare string instead of a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMeanings {
    One(String),
    Many(Vec<String>),
}

impl From<RawMeanings> for Vec<String> {
    fn from(raw: RawMeanings) -> Self {
        match raw {
            RawMeanings::One(meaning) => vec![meaning],
            RawMeanings::Many(meanings) => meanings,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Translations {
    entries: HashMap<String, Vec<String>>,
}

impl Translations {
    /// Builds the store, lower-casing keys. When several keys fold to the
    /// same lowercase word, a key already in lowercase wins; otherwise the
    /// first one in iteration order is kept.
    pub fn new<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: AsRef<str>,
    {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        // keys already spelled in lowercase in the source
        let mut exact = HashSet::new();
        for (word, meanings) in entries {
            if meanings.is_empty() {
                continue;
            }
            let word = word.as_ref();
            let key = word.to_lowercase();
            if key == word {
                exact.insert(key.clone());
                map.insert(key, meanings);
            } else if !exact.contains(&key) {
                map.entry(key).or_insert(meanings);
            }
        }
        Translations { entries: map }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, RawMeanings> = serde_json::from_str(json)?;
        Ok(Self::new(
            raw.into_iter()
                .map(|(word, meanings)| (word, Vec::from(meanings))),
        ))
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = fs::read_to_string(file_path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SpellError::MissingSource {
                kind: "Translation",
                path: file_path.to_path_buf(),
            },
            _ => SpellError::Io(e),
        })?;
        Self::from_json(&content)
    }

    /// Like [`Translations::from_file`], but failures only log a warning and
    /// yield an empty store.
    pub fn load(file_path: impl AsRef<Path>) -> Self {
        let file_path = file_path.as_ref();
        match Self::from_file(file_path) {
            Ok(translations) => {
                info!(
                    "loaded {} translations from {}",
                    translations.len(),
                    file_path.display()
                );
                translations
            }
            Err(e) => {
                warn!("{e} Continuing without translations.");
                Self::default()
            }
        }
    }

    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
