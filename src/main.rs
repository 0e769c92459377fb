use std::io::{self, Write};
use std::process;

use clap::Parser;
use env_logger::Env;
use spellcheck::cli::{Args, Command, Menu};
use spellcheck::report::{write_meaning, write_sentence_report};
use spellcheck::SpellChecker;

fn main() -> io::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_filter()))
        .format_timestamp(None)
        .init();

    let checker = SpellChecker::load(&args.dictionary, &args.translations);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Command::Menu) {
        Command::Menu => Menu::new(&checker, io::stdin().lock(), &mut out).run()?,
        Command::File { path } => match checker.check_file(&path) {
            Ok(report) => write_sentence_report(&mut out, &report)?,
            Err(e) => {
                eprintln!("{e}");
                out.flush()?;
                process::exit(1);
            }
        },
        Command::Sentence { words } => {
            let report = checker.check_sentence(&words.join(" "));
            write_sentence_report(&mut out, &report)?;
        }
        Command::Meaning { word } => write_meaning(&mut out, &checker.meaning(&word))?,
    }
    out.flush()
}
