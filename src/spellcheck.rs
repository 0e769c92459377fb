use std::fs;
use std::path::Path;

use crate::dictionary::Dictionary;
use crate::error::{Result, SpellError};
use crate::normalize::normalize;
use crate::similarity::suggest;
use crate::translation::Translations;

/// Outcome of checking a single word.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub word: String,
    pub correct: bool,
    /// Closest dictionary word; `None` for correct words and when no
    /// dictionary is loaded.
    pub suggestion: Option<String>,
    pub meanings: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentenceReport {
    pub results: Vec<QueryResult>,
    /// Whitespace-separated tokens, including the ones without letters.
    pub token_count: usize,
    pub correct: usize,
    pub incorrect: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Meaning {
    /// The input contained no letters.
    Empty,
    Known { word: String, meanings: Vec<String> },
    ValidNoMeaning { word: String },
    Unknown {
        word: String,
        suggestion: Option<String>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct SpellChecker {
    dictionary: Dictionary,
    translations: Translations,
}

impl SpellChecker {
    pub fn new(dictionary: Dictionary, translations: Translations) -> Self {
        SpellChecker {
            dictionary,
            translations,
        }
    }

    /// Loads both stores, falling back to empty ones when a source is missing.
    pub fn load(dictionary_path: impl AsRef<Path>, translations_path: impl AsRef<Path>) -> Self {
        Self::new(
            Dictionary::load(dictionary_path),
            Translations::load(translations_path),
        )
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    pub fn check_word(&self, raw: &str) -> Option<QueryResult> {
        let word = normalize(raw);
        if word.is_empty() {
            return None;
        }

        let meanings = self.translations.lookup(&word).map(<[String]>::to_vec);
        if self.dictionary.contains(&word) {
            return Some(QueryResult {
                word,
                correct: true,
                suggestion: None,
                meanings,
            });
        }

        let suggestion = suggest(&word, &self.dictionary).map(str::to_owned);
        Some(QueryResult {
            word,
            correct: false,
            suggestion,
            meanings,
        })
    }

    pub fn check_sentence(&self, sentence: &str) -> SentenceReport {
        let mut report = SentenceReport::default();
        for token in sentence.split_whitespace() {
            report.token_count += 1;
            let Some(result) = self.check_word(token) else {
                continue;
            };
            if result.correct {
                report.correct += 1;
            } else {
                report.incorrect += 1;
            }
            report.results.push(result);
        }
        report
    }

    pub fn check_file(&self, file_path: impl AsRef<Path>) -> Result<SentenceReport> {
        let file_path = file_path.as_ref();
        if !file_path.is_file() {
            return Err(SpellError::FileNotFound(file_path.to_path_buf()));
        }
        let text = fs::read_to_string(file_path)?.to_lowercase();
        Ok(self.check_sentence(&text))
    }

    pub fn meaning(&self, raw: &str) -> Meaning {
        let word = normalize(raw);
        if word.is_empty() {
            return Meaning::Empty;
        }

        if let Some(meanings) = self.translations.lookup(&word) {
            Meaning::Known {
                meanings: meanings.to_vec(),
                word,
            }
        } else if self.dictionary.contains(&word) {
            Meaning::ValidNoMeaning { word }
        } else {
            let suggestion = suggest(&word, &self.dictionary).map(str::to_owned);
            Meaning::Unknown { word, suggestion }
        }
    }
}
