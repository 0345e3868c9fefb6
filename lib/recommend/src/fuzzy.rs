//! Ratio-based fuzzy title matching.
//!
//! Matching is case-insensitive and uses the Sørensen-Dice bigram ratio,
//! which tolerates the punctuation noise typical of anime titles
//! ("steins gate" vs "Steins;Gate"). Results come back best-first with
//! ties broken by input order, so matching is deterministic.

use strsim::sorensen_dice;

/// Default number of suggestions surfaced on the "not found" path.
pub const DEFAULT_SUGGESTIONS: usize = 5;

/// Default similarity cutoff for suggestions.
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Find up to `n` titles whose similarity ratio to `query` is at least
/// `cutoff`, best match first. Returns the titles in their original casing.
pub fn find_closest_titles<I, S>(query: &str, titles: I, n: usize, cutoff: f64) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let needle = query.to_lowercase();

    let mut scored: Vec<(usize, String, f64)> = titles
        .into_iter()
        .enumerate()
        .filter_map(|(idx, title)| {
            let title = title.as_ref();
            let score = sorensen_dice(&needle, &title.to_lowercase());
            (score >= cutoff).then(|| (idx, title.to_string(), score))
        })
        .collect();

    scored.sort_by(|a, b| {
        b.2.partial_cmp(&a.2)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    scored.truncate(n);
    scored.into_iter().map(|(_, title, _)| title).collect()
}
