//! Closest-match search over the dictionary.
//!
//! The similarity of two strings is `2 * M / (len(a) + len(b))`, where `M` is
//! the number of characters covered by matching blocks: the longest common
//! substring, then recursively the longest common substrings of the parts to
//! its left and to its right.

use log::debug;

use crate::dictionary::Dictionary;

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, len)`.
/// Ties resolve to the earliest start in `a`, then the earliest in `b`.
fn longest_match(
    a: &[char],
    (alo, ahi): (usize, usize),
    b: &[char],
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let width = bhi - blo;
    // prev[j + 1] holds the length of the common suffix ending at a[i - 1], b[blo + j]
    let mut prev = vec![0; width + 1];
    let mut curr = vec![0; width + 1];
    let mut best = (alo, blo, 0);

    for i in alo..ahi {
        for j in 0..width {
            curr[j + 1] = if a[i] == b[blo + j] { prev[j] + 1 } else { 0 };
            let k = curr[j + 1];
            if k > best.2 {
                best = (i + 1 - k, blo + j + 1 - k, k);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}

/// Total length of all matching blocks between `a` and `b`.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![((0, a.len()), (0, b.len()))];

    while let Some(((alo, ahi), (blo, bhi))) = pending.pop() {
        let (i, j, k) = longest_match(a, (alo, ahi), b, (blo, bhi));
        if k == 0 {
            continue;
        }
        total += k;
        if alo < i && blo < j {
            pending.push(((alo, i), (blo, j)));
        }
        if i + k < ahi && j + k < bhi {
            pending.push(((i + k, ahi), (j + k, bhi)));
        }
    }
    total
}

/// Similarity ratio in `[0, 1]`; `1.0` for identical strings.
///
/// The pair is matched in lexicographic order so the score does not depend
/// on argument order.
pub fn ratio(a: &str, b: &str) -> f64 {
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total_len = a.len() + b.len();
    if total_len == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total_len as f64
}

/// Returns the dictionary word most similar to `word`, or `None` when the
/// dictionary is empty. The first word (in dictionary order) reaching the
/// best score wins.
pub fn suggest<'a>(word: &str, dictionary: &'a Dictionary) -> Option<&'a str> {
    let mut best: Option<(&str, f64)> = None;
    for candidate in dictionary.iter() {
        let score = ratio(word, candidate);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    if let Some((candidate, score)) = best {
        debug!("closest match for '{word}' is '{candidate}' ({score:.3})");
    }
    best.map(|(candidate, _)| candidate)
}
