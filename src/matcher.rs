//! Fuzzy playlist name matching.
//!
//! Names and queries are normalized (non-alphanumeric characters dropped,
//! whitespace collapsed, lowercased) and compared with a token-set ratio built
//! on the normalized Indel similarity. The ratio ignores word order and
//! repeated words, so a query such as `trip road 23` still finds
//! `2023 Road Trip Mix`.

use std::collections::BTreeSet;

use crate::{Error, Res};

/// Similarity a name must reach to count as a match, on a 0-100 scale.
pub const DEFAULT_FUZZY_RATIO_THRESHOLD: f64 = 75.0;

/// Anything that can be matched by its display name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

impl Named for &str {
    fn name(&self) -> &str {
        self
    }
}

/// Normalizes a string for comparison.
///
/// Every character that is not an ASCII letter or digit becomes a separator,
/// so `Road-Trip 2023!` turns into `road trip 2023`. Accented and non-Latin
/// letters are separators as well.
pub fn normalize(text: &str) -> String {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Edit distance counting only insertions and deletions.
pub fn indel_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    a.len() + b.len() - 2 * longest_common_subsequence(&a, &b)
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // single row of the classic DP table, indexed by position in `b`
    let mut row = vec![0usize; b.len() + 1];
    for ca in a {
        let mut diagonal = 0;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

/// Normalized Indel similarity in `[0, 100]`. Two empty strings are identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 100.0;
    }
    100.0 * (1.0 - indel_distance(a, b) as f64 / total as f64)
}

fn join_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> String {
    tokens.into_iter().collect::<Vec<_>>().join(" ")
}

fn join_parts(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{head} {tail}"),
    }
}

/// Token-set ratio of two already normalized strings.
///
/// Both strings are split into sets of words. The sorted intersection (`S0`)
/// is combined with each side's sorted leftover words (`S1`, `S2`) and the
/// result is the best Indel ratio among those combinations and the plain
/// strings. The function is symmetric in its arguments.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    match (tokens_a.is_empty(), tokens_b.is_empty()) {
        (true, true) => return 100.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }

    let sect = join_tokens(tokens_a.intersection(&tokens_b).copied());
    let diff_ab = join_tokens(tokens_a.difference(&tokens_b).copied());
    let diff_ba = join_tokens(tokens_b.difference(&tokens_a).copied());

    let sect_ab = join_parts(&sect, &diff_ab);
    let sect_ba = join_parts(&sect, &diff_ba);

    let mut best = ratio(a, b).max(ratio(&sect_ab, &sect_ba));
    if !sect.is_empty() {
        best = best.max(ratio(&sect, &sect_ab)).max(ratio(&sect, &sect_ba));
    }

    best.clamp(0.0, 100.0)
}

/// Validates a similarity threshold.
pub fn check_threshold(threshold: f64) -> Res<f64> {
    if threshold.is_finite() && (0.0..=100.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(Error::InvalidArgument(format!(
            "fuzzy ratio threshold must be within [0.0, 100.0], got {threshold}"
        )))
    }
}

/// Returns the candidates whose normalized name matches the normalized query
/// with a token-set ratio of at least `threshold`, in input order.
///
/// # Errors
///
/// Fails with [`Error::InvalidArgument`] when `threshold` is not within
/// `[0.0, 100.0]`.
///
/// # Example
///
/// ```
/// let names = vec!["2023 Road Trip Mix".to_string(), "Workout Jams".to_string()];
/// let found = filter_by_name(&names, "road trip", 75.0)?;
/// assert_eq!(found, vec!["2023 Road Trip Mix".to_string()]);
/// ```
pub fn filter_by_name<T>(candidates: &[T], query: &str, threshold: f64) -> Res<Vec<T>>
where
    T: Named + Clone,
{
    let threshold = check_threshold(threshold)?;
    let query = normalize(query);

    Ok(candidates
        .iter()
        .filter(|candidate| token_set_ratio(&normalize(candidate.name()), &query) >= threshold)
        .cloned()
        .collect())
}
