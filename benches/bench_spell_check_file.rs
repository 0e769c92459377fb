use criterion::{Criterion, criterion_group, criterion_main};
use spellcheck::SpellChecker;
use std::io::Write;
use tempfile::NamedTempFile;

const WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "spelling", "checker",
    "sentence", "words", "with", "some", "short", "is", "a", "it", "for", "testing",
];

fn bench_spell_check_file(c: &mut Criterion) {
    let mut dict_file = NamedTempFile::new().expect("Unable to create dictionary file");
    writeln!(dict_file, "{}", WORDS.join("\n")).expect("Unable to write dictionary file");

    let mut text_file = NamedTempFile::new().expect("Unable to create text file");
    for _ in 0..50 {
        writeln!(text_file, "The qick brown fox jumsp over the lazzy dog.")
            .expect("Unable to write text file");
    }

    let spell_checker = SpellChecker::load(dict_file.path(), "data.json");

    c.bench_function("spell_check_file", |b| {
        b.iter(|| {
            let _ = spell_checker.check_file(text_file.path());
        })
    });
}

criterion_group!(benches, bench_spell_check_file);
criterion_main!(benches);
