//! Box-drawn text reports for the query results.

use std::io::{self, Write};

use crate::spellcheck::{Meaning, QueryResult, SentenceReport};

const RULE_WIDTH: usize = 55;
const SUMMARY_WIDTH: usize = 74;
const MEANING_WIDTH: usize = 29;
const MEANING_RULE_WIDTH: usize = 31;
const UNKNOWN_WIDTH: usize = 51;

fn top(out: &mut impl Write, width: usize) -> io::Result<()> {
    writeln!(out, "┌{}┐", "─".repeat(width))
}

fn bottom(out: &mut impl Write, width: usize) -> io::Result<()> {
    writeln!(out, "└{}┘", "─".repeat(width))
}

pub fn write_result(out: &mut impl Write, result: &QueryResult) -> io::Result<()> {
    match (result.correct, &result.suggestion) {
        (true, _) => writeln!(out, "│ {} (spelt correctly)", result.word),
        (false, Some(suggestion)) => writeln!(
            out,
            "│ {} not found in dictionary. Did you mean '{}'?",
            result.word, suggestion
        ),
        (false, None) => writeln!(
            out,
            "│ {} not found in dictionary (no dictionary loaded)",
            result.word
        ),
    }
}

pub fn write_sentence_report(out: &mut impl Write, report: &SentenceReport) -> io::Result<()> {
    top(out, RULE_WIDTH)?;
    for result in &report.results {
        write_result(out, result)?;
    }
    bottom(out, RULE_WIDTH)?;

    top(out, SUMMARY_WIDTH)?;
    writeln!(out, "│ Number of words: {}", report.token_count)?;
    writeln!(out, "│ Number of correctly spelt words: {}", report.correct)?;
    writeln!(out, "│ Number of incorrectly spelt words: {}", report.incorrect)?;
    bottom(out, SUMMARY_WIDTH)
}

pub fn write_meaning(out: &mut impl Write, meaning: &Meaning) -> io::Result<()> {
    match meaning {
        Meaning::Empty => {
            writeln!(out, "The input contains no letters.")
        }
        Meaning::Known { word, meanings } => {
            top(out, MEANING_WIDTH)?;
            writeln!(out, "│ Meaning of '{word}':")?;
            bottom(out, MEANING_WIDTH)?;
            for (idx, meaning) in meanings.iter().enumerate() {
                writeln!(out, "  {}. {}", idx + 1, meaning)?;
            }
            writeln!(out, "{}", "─".repeat(MEANING_RULE_WIDTH))
        }
        Meaning::ValidNoMeaning { word } => {
            top(out, MEANING_WIDTH)?;
            writeln!(out, "│ '{word}' is a valid word, but no meaning found.")?;
            bottom(out, MEANING_WIDTH)
        }
        Meaning::Unknown { word, suggestion } => {
            top(out, UNKNOWN_WIDTH)?;
            writeln!(out, "│ Word '{word}' not found in dictionary.")?;
            match suggestion {
                Some(suggestion) => writeln!(out, "│ Did you mean '{suggestion}'?")?,
                None => writeln!(out, "│ No dictionary loaded, no suggestion available.")?,
            }
            bottom(out, UNKNOWN_WIDTH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn result(word: &str, correct: bool, suggestion: Option<&str>) -> QueryResult {
        QueryResult {
            word: word.to_string(),
            correct,
            suggestion: suggestion.map(str::to_string),
            meanings: None,
        }
    }

    #[test]
    fn test_write_result_variants() {
        let text = render(|out| write_result(out, &result("fox", true, None)));
        assert_eq!(text, "│ fox (spelt correctly)\n");

        let text = render(|out| write_result(out, &result("qick", false, Some("quick"))));
        assert_eq!(text, "│ qick not found in dictionary. Did you mean 'quick'?\n");

        let text = render(|out| write_result(out, &result("qick", false, None)));
        assert!(text.contains("no dictionary loaded"));
    }

    #[test]
    fn test_write_sentence_report_summary() {
        let report = SentenceReport {
            results: vec![
                result("the", true, None),
                result("qick", false, Some("quick")),
            ],
            token_count: 3,
            correct: 1,
            incorrect: 1,
        };
        let text = render(|out| write_sentence_report(out, &report));

        assert!(text.contains("│ the (spelt correctly)"));
        assert!(text.contains("Did you mean 'quick'?"));
        assert!(text.contains("│ Number of words: 3"));
        assert!(text.contains("│ Number of correctly spelt words: 1"));
        assert!(text.contains("│ Number of incorrectly spelt words: 1"));
    }

    #[test]
    fn test_write_meaning_variants() {
        let known = Meaning::Known {
            word: "run".to_string(),
            meanings: vec!["to move fast".to_string(), "to operate".to_string()],
        };
        let text = render(|out| write_meaning(out, &known));
        assert!(text.contains("Meaning of 'run'"));
        assert!(text.contains("  1. to move fast\n"));
        assert!(text.contains("  2. to operate\n"));

        let valid = Meaning::ValidNoMeaning {
            word: "dog".to_string(),
        };
        let text = render(|out| write_meaning(out, &valid));
        assert!(text.contains("'dog' is a valid word, but no meaning found."));

        let unknown = Meaning::Unknown {
            word: "dg".to_string(),
            suggestion: Some("dog".to_string()),
        };
        let text = render(|out| write_meaning(out, &unknown));
        assert!(text.contains("Word 'dg' not found in dictionary."));
        assert!(text.contains("Did you mean 'dog'?"));

        let text = render(|out| write_meaning(out, &Meaning::Empty));
        assert!(text.contains("no letters"));
    }
}
