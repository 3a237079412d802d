use std::collections::HashMap;

use super::tokenizer::tokenize;
use super::types::RankedWord;

/// Maximum number of ranked entries returned.
pub const TOP_WORDS_LIMIT: usize = 10;

/// Builds the frequency table for `text`.
///
/// One entry per distinct token; the sum of all counts equals the number of
/// tokens `tokenize` yields for the same input.
pub fn count_words(text: &str) -> HashMap<String, usize> {
    let mut table: HashMap<String, usize> = HashMap::new();
    for token in tokenize(text) {
        table.entry(token).and_modify(|count| *count += 1).or_insert(1);
    }
    table
}

/// Ranks the words of `text` by occurrence count, descending.
///
/// Words with equal counts keep no particular relative order: the frequency
/// table iterates in arbitrary order and the sort compares counts only.
///
/// The result keeps at most `min(10, n - 1)` entries for `n` ranked words:
/// the last-ranked word is always dropped, even below the ten-entry cap, so
/// a single distinct word yields an empty result.
pub fn rank(text: &str) -> Vec<RankedWord> {
    let mut ranked: Vec<RankedWord> = count_words(text)
        .into_iter()
        .map(|(word, total)| RankedWord { word, total })
        .collect();

    ranked.sort_by(|a, b| b.total.cmp(&a.total));

    let keep = ranked.len().saturating_sub(1).min(TOP_WORDS_LIMIT);
    ranked.truncate(keep);
    ranked
}
