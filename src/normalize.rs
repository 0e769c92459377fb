/// Lower-cases `raw` and drops every character that is not a letter.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect()
}
