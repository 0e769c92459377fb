//! Command line arguments and the interactive menu.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;

use crate::report::{write_meaning, write_sentence_report};
use crate::spellcheck::SpellChecker;

/// Spell checker and word meaning lookup
#[derive(Parser, Debug, Clone)]
#[command(name = "spellcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Word list, one word per line
    #[arg(
        short,
        long,
        env = "SPELLCHECK_DICTIONARY",
        default_value = "EnglishWords.txt"
    )]
    pub dictionary: PathBuf,

    /// JSON object mapping words to their meanings
    #[arg(
        short,
        long,
        env = "SPELLCHECK_TRANSLATIONS",
        default_value = "data.json"
    )]
    pub translations: PathBuf,

    /// Verbosity level (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the interactive menu (default)
    Menu,

    /// Spellcheck a text file
    File { path: PathBuf },

    /// Spellcheck a sentence
    Sentence {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Look up the meaning of a word
    Meaning { word: String },
}

const MENU: &str = "\
┌──────────────────────────────┐
│ Spell Checker & Translator   │
│ 1. Check a file              │
│ 2. Check a sentence          │
│ 3. Check word meaning        │
│ 0. Quit                      │
└──────────────────────────────┘";

/// The interactive menu loop, reading choices from `input` and writing
/// reports to `output`.
pub struct Menu<'a, R, W> {
    checker: &'a SpellChecker,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(checker: &'a SpellChecker, input: R, output: W) -> Self {
        Menu {
            checker,
            input,
            output,
        }
    }

    /// Prints `prompt` and reads one line. `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            match choice.trim() {
                "1" => {
                    let Some(path) = self.prompt("Enter file path to spellcheck: ")? else {
                        break;
                    };
                    match self.checker.check_file(path.trim()) {
                        Ok(report) => write_sentence_report(&mut self.output, &report)?,
                        Err(e) => {
                            debug!("file check failed: {e}");
                            writeln!(self.output, "{e}")?;
                        }
                    }
                }
                "2" => {
                    let Some(sentence) = self.prompt("Enter sentence to spellcheck: ")? else {
                        break;
                    };
                    let report = self.checker.check_sentence(&sentence);
                    write_sentence_report(&mut self.output, &report)?;
                }
                "3" => {
                    let Some(word) = self.prompt("Enter a word to check the meaning: ")? else {
                        break;
                    };
                    let meaning = self.checker.meaning(&word);
                    write_meaning(&mut self.output, &meaning)?;
                }
                "0" => break,
                _ => writeln!(
                    self.output,
                    "Invalid input. Please select either 1, 2, 3, or 0."
                )?,
            }
        }
        writeln!(self.output, "Goodbye!")
    }
}
