//! Fuzzy matching utilities
//!
//! Thin wrappers over the `difflib` crate so catalog matching follows
//! Python's difflib (Ratcliff/Obershelp) behaviour. Similarity and block
//! search run over chars; spelling lookups go through
//! [`difflib::get_close_matches`].

use difflib::sequencematcher::SequenceMatcher;

/// Result of a fuzzy match with the matched value and score
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub value: String,
    pub score: f64,
}

/// Similarity ratio `2 * M / T` in [0, 1] (case-sensitive)
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    SequenceMatcher::new(&a, &b).ratio() as f64
}

/// Longest contiguous run of characters shared by `a` and `b`, taken from `a`
///
/// Among equally long runs the one starting earliest in `a` wins.
pub fn longest_common_block(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let m = SequenceMatcher::new(&a, &b).find_longest_match(0, a.len(), 0, b.len());
    a[m.first_start..m.first_start + m.size].iter().collect()
}

/// Find the candidate most similar to `word`
///
/// Returns None if no candidate reaches `cutoff`. Equal scores resolve to
/// the lexicographically greatest candidate so the answer does not depend
/// on iteration order.
pub fn find_best_match<'a, I>(word: &str, candidates: I, cutoff: f64) -> Option<FuzzyMatch>
where
    I: IntoIterator<Item = &'a str>,
{
    // get_close_matches keeps input order among equal ratios
    let mut candidates: Vec<&str> = candidates.into_iter().collect();
    candidates.sort_unstable_by(|a, b| b.cmp(a));
    candidates.dedup();

    let best = difflib::get_close_matches(word, candidates, 1, cutoff as f32)
        .into_iter()
        .next()?;

    Some(FuzzyMatch {
        value: best.to_string(),
        score: similarity(word, best),
    })
}
