//! Descriptive statistics over transcription text.
//!
//! Everything here works on plain strings or symbol sequences, so the same
//! functions apply to a whole corpus, one section, or a generated baseline.
//!
//! N-gram counting looks only at spans that cross a word boundary, and the
//! boundary must be marked explicitly with [`BOUNDARY`]. Parsed corpus text
//! separates words with plain spaces; call [`mark_word_boundaries`] first.
//!
//! ```rust
//! use voynich_stats::{entropy, mark_word_boundaries, ngrams};
//!
//! assert_eq!(entropy("aaaa".chars()), 0.0);
//! let marked = mark_word_boundaries("qo dy");
//! assert_eq!(ngrams(&marked, 3, 3).get("o_d"), Some(&1));
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use voynich_types::Dialect;

/// Word/segment boundary marker expected by [`ngrams`].
pub const BOUNDARY: char = '_';

/// Whether `word` contains at least one gallows glyph of `dialect`.
pub fn is_gallows_word(dialect: Dialect, word: &str) -> bool {
    let gallows = dialect.gallows();
    word.chars().any(|c| gallows.contains(c))
}

/// Replace every space with [`BOUNDARY`], one for one.
pub fn mark_word_boundaries(text: &str) -> String {
    text.replace(' ', &BOUNDARY.to_string())
}

/// Frequencies of boundary-spanning n-grams of length `min..=max`.
pub fn ngrams(text: &str, min: usize, max: usize) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    accumulate_ngrams(text, min, max, &mut counts);
    counts
}

/// Add the boundary-spanning n-grams of `text` to `counts`.
///
/// A span is counted when it contains [`BOUNDARY`] but neither starts nor
/// ends with it; spans inside a single word are skipped. `min` below 1 is
/// treated as 1, and `min > max` counts nothing.
pub fn accumulate_ngrams(
    text: &str,
    min: usize,
    max: usize,
    counts: &mut HashMap<String, usize>,
) {
    let chars: Vec<char> = text.chars().collect();
    let min = min.max(1);
    for start in 0..chars.len() {
        let longest = max.min(chars.len() - start);
        for len in min..=longest {
            let window = &chars[start..start + len];
            if !window.contains(&BOUNDARY)
                || window.first() == Some(&BOUNDARY)
                || window.last() == Some(&BOUNDARY)
            {
                continue;
            }
            *counts.entry(window.iter().collect()).or_insert(0) += 1;
        }
    }
}

/// Occurrences of each distinct symbol.
pub fn symbol_counts<T, I>(symbols: I) -> HashMap<T, usize>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = HashMap::new();
    for symbol in symbols {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    counts
}

/// Occurrences of each character of `text`.
pub fn character_counts(text: &str) -> HashMap<char, usize> {
    symbol_counts(text.chars())
}

/// Shannon entropy in bits per symbol. An empty sequence has entropy 0.
pub fn entropy<T, I>(symbols: I) -> f64
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    entropy_of_counts(symbol_counts(symbols).values().copied())
}

/// Shannon entropy in bits from per-symbol counts.
pub fn entropy_of_counts<I>(counts: I) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let counts: Vec<usize> = counts.into_iter().filter(|&c| c > 0).collect();
    if counts.len() < 2 {
        return 0.0;
    }
    let total = counts.iter().sum::<usize>() as f64;
    counts
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy of the characters of `text`.
pub fn text_entropy(text: &str) -> f64 {
    entropy(text.chars())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn gallows_depend_on_dialect() {
        assert!(is_gallows_word(Dialect::Eva, "qokedy"));
        assert!(!is_gallows_word(Dialect::Eva, "daiin"));
        assert!(is_gallows_word(Dialect::V101, "4ohg9"));
        assert!(!is_gallows_word(Dialect::V101, "8am"));
        assert!(is_gallows_word(Dialect::Natural, "kept"));
        assert!(!is_gallows_word(Dialect::Natural, "one"));
    }

    #[test]
    fn ngrams_span_boundaries_only() {
        let counts = ngrams("a_bb_c", 2, 3);
        assert_eq!(counts.get("a_b"), Some(&1));
        assert_eq!(counts.get("b_c"), Some(&1));
        assert!(!counts.contains_key("a_"));
        assert!(!counts.contains_key("_b"));
        assert!(!counts.contains_key("bb"));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn ngrams_accumulate_across_calls() {
        let mut counts = HashMap::new();
        accumulate_ngrams("ol_dy", 3, 4, &mut counts);
        accumulate_ngrams("ol_daiin", 3, 4, &mut counts);
        assert_eq!(counts.get("l_d"), Some(&2));
        assert_eq!(counts.get("ol_d"), Some(&2));
        assert_eq!(counts.get("l_dy"), Some(&1));
        assert!(ngrams("ab_c", 4, 2).is_empty());
        assert!(ngrams("", 1, 3).is_empty());
    }

    #[test]
    fn huge_window_bounds_count_nothing() {
        assert!(ngrams("a_b", usize::MAX, usize::MAX).is_empty());
        assert!(ngrams("a_b", usize::MAX - 1, usize::MAX).is_empty());
        let counts = ngrams("a_b", 3, usize::MAX);
        assert_eq!(counts.get("a_b"), Some(&1));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn marks_spaces_as_boundaries() {
        assert_eq!(mark_word_boundaries("qokedy  dal "), "qokedy__dal_");
    }

    #[test]
    fn entropy_edge_cases() {
        assert_eq!(entropy("".chars()), 0.0);
        assert_eq!(text_entropy("zzzzzzz"), 0.0);
        assert!(close(text_entropy("ab"), 1.0));
        assert!(close(text_entropy("abcdabcd"), 2.0));
        assert!(close(entropy([1, 2, 3, 1, 2, 3]), 3f64.log2()));
        assert!(close(entropy_of_counts([2, 2, 0]), 1.0));
    }

    #[test]
    fn counts_characters_order_independently() {
        let forward = character_counts("daiin");
        let backward = character_counts("niiad");
        assert_eq!(forward, backward);
        assert_eq!(forward.get(&'i'), Some(&2));
        assert_eq!(forward.len(), 4);
    }
}
