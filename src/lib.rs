//! Spell checking with closest-match suggestions and word meaning lookup.
//!
//! A [`SpellChecker`] is built once from a word list and a JSON meaning file
//! and then answers word, sentence and file queries. Missing sources are not
//! fatal: the checker runs with empty stores and reports words as unknown
//! without suggestions.

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod normalize;
pub mod report;
pub mod similarity;
pub mod spellcheck;
pub mod translation;

pub use dictionary::Dictionary;
pub use error::{Result, SpellError};
pub use normalize::normalize;
pub use similarity::{ratio, suggest};
pub use spellcheck::{Meaning, QueryResult, SentenceReport, SpellChecker};
pub use translation::Translations;
