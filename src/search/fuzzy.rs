//! Fuzzy matching of demo items against the search bar query.

use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};

/// A ranked fuzzy search result.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyResult {
    pub index: usize,
    pub score: i64,
}

/// Ranks items using `fuzzy-matcher` (Skim algorithm). An empty query keeps input order.
pub fn rank_items(query: &str, items: &[String]) -> Vec<FuzzyResult> {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return (0..items.len())
            .map(|index| FuzzyResult { index, score: 0 })
            .collect();
    }

    let matcher = SkimMatcherV2::default().smart_case();

    let mut results: Vec<FuzzyResult> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            matcher
                .fuzzy_match(item, trimmed)
                .map(|score| FuzzyResult { index, score })
        })
        .collect();

    results.sort_by_key(|result| std::cmp::Reverse(result.score));
    results
}
