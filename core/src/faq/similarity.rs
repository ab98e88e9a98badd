//! Text normalization and the two similarity measures the matcher blends.

use std::collections::BTreeSet;

/// Punctuation that survives normalization alongside letters and digits.
const KEPT_SYMBOLS: &[char] = &['-', '+', '.', '%', '/'];

/// Lower-case, drop everything outside the allow-list, collapse whitespace.
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || KEPT_SYMBOLS.contains(c))
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A normalized string with its word set and characters precomputed.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub text: String,
    chars: Vec<char>,
    tokens: BTreeSet<String>,
}

impl Prepared {
    pub fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let chars = text.chars().collect();
        let tokens = text.split(' ').filter(|t| !t.is_empty()).map(str::to_string).collect();
        Self { text, chars, tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Fraction of the pattern's distinct words that also occur in the input.
pub fn token_overlap(input: &Prepared, pattern: &Prepared) -> f64 {
    if pattern.tokens.is_empty() {
        return 0.0;
    }
    let shared = pattern.tokens.intersection(&input.tokens).count();
    shared as f64 / pattern.tokens.len() as f64
}

/// Matching-blocks ratio `2*M / (len_a + len_b)`, where M is the total size
/// of the blocks found by repeatedly taking the longest common substring and
/// recursing on both sides of it. Two empty strings are identical.
pub fn sequence_ratio(a: &Prepared, b: &Prepared) -> f64 {
    let total = a.chars.len() + b.chars.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matched_chars(&a.chars, &b.chars);
    2.0 * matched as f64 / total as f64
}

fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest common run inside `a[alo..ahi]` and `b[blo..bhi]`. Ties go to
/// the run starting earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    // run_len[j + 1] = length of the common run ending at a[i - 1], b[j]
    let mut run_len = vec![0usize; b.len() + 1];
    for i in alo..ahi {
        let mut next = vec![0usize; b.len() + 1];
        for j in blo..bhi {
            if a[i] == b[j] {
                let k = run_len[j] + 1;
                next[j + 1] = k;
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            }
        }
        run_len = next;
    }
    best
}

/// Weighted blend of token overlap and sequence ratio.
pub fn blended_score(
    input: &Prepared,
    pattern: &Prepared,
    token_weight: f64,
    sequence_weight: f64,
) -> f64 {
    token_weight * token_overlap(input, pattern) + sequence_weight * sequence_ratio(input, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_and_collapses() {
        assert_eq!(normalize("  What is my ROI?  "), "what is my roi");
        assert_eq!(normalize("MPF\t\tcap -- 0.3464%!"), "mpf cap -- 0.3464%");
        assert_eq!(normalize("duty/HMF + broker, please"), "duty/hmf + broker please");
        assert_eq!(normalize("???"), "");
    }

    #[test]
    fn overlap_counts_distinct_pattern_words() {
        let input = Prepared::new("what are the net savings");
        let pattern = Prepared::new("net savings net");
        assert_eq!(token_overlap(&input, &pattern), 1.0);

        let pattern = Prepared::new("net savings to brand");
        assert_eq!(token_overlap(&input, &pattern), 0.5);
    }

    #[test]
    fn ratio_identical_and_disjoint() {
        let a = Prepared::new("broker fees");
        assert_eq!(sequence_ratio(&a, &a), 1.0);
        assert_eq!(sequence_ratio(&Prepared::new("abc"), &Prepared::new("xyz")), 0.0);
        assert_eq!(sequence_ratio(&Prepared::new(""), &Prepared::new("")), 1.0);
    }

    #[test]
    fn ratio_counts_all_matching_blocks() {
        // "abcd" vs "bcd": one block of 3 → 6 / 7
        let r = sequence_ratio(&Prepared::new("abcd"), &Prepared::new("bcd"));
        assert!((r - 6.0 / 7.0).abs() < 1e-12);

        // "what is mpf" vs "what is hmf": "what is " then "m" then "f", 10 chars
        let r = sequence_ratio(&Prepared::new("what is mpf"), &Prepared::new("what is hmf"));
        assert!((r - 20.0 / 22.0).abs() < 1e-12);
    }

    #[test]
    fn longest_match_prefers_earliest() {
        let a: Vec<char> = "abxab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        assert_eq!(longest_match(&a, &b, 0, a.len(), 0, b.len()), (0, 0, 2));
    }

    #[test]
    fn blend_uses_weights() {
        let a = Prepared::new("net savings");
        assert!((blended_score(&a, &a, 0.65, 0.35) - 1.0).abs() < 1e-12);
        assert_eq!(blended_score(&a, &a, 0.0, 0.0), 0.0);
    }
}
