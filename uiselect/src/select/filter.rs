//! Filters that narrow the candidate list from the search text.

use std::fmt;
use std::sync::Arc;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};

use super::SelectItem;

/// Built-in filter selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Case-insensitive substring match, candidates keep their order.
    #[default]
    Substring,
    /// Fuzzy match, best score first.
    Fuzzy,
}

type RankFn<T> = dyn Fn(&str, &[T]) -> Vec<usize> + Send + Sync;

/// Maps the search text and the candidates to the indices of visible
/// candidates, in display order.
pub struct Filter<T> {
    rank: Arc<RankFn<T>>,
}

impl<T> Clone for Filter<T> {
    fn clone(&self) -> Self {
        Self {
            rank: Arc::clone(&self.rank),
        }
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter(..)")
    }
}

impl<T: 'static> Filter<T> {
    /// Keep every candidate for which `predicate(item, search)` holds.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&T, &str) -> bool + Send + Sync + 'static,
    {
        Self {
            rank: Arc::new(move |search: &str, items: &[T]| {
                items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| predicate(item, search))
                    .map(|(index, _)| index)
                    .collect()
            }),
        }
    }

    /// Indices of the visible candidates for `search`.
    pub fn apply(&self, search: &str, items: &[T]) -> Vec<usize> {
        (self.rank)(search, items)
    }
}

impl<T: SelectItem + 'static> Filter<T> {
    /// Case-insensitive substring match on [`SelectItem::search_text`].
    pub fn substring() -> Self {
        Self::predicate(|item: &T, search: &str| {
            search.is_empty()
                || item
                    .search_text()
                    .to_lowercase()
                    .contains(&search.to_lowercase())
        })
    }

    /// Fuzzy match on [`SelectItem::search_text`], best match first.
    pub fn fuzzy() -> Self {
        Self {
            rank: Arc::new(|search: &str, items: &[T]| {
                let texts: Vec<String> = items.iter().map(SelectItem::search_text).collect();
                fuzzy_filter(search, &texts)
                    .into_iter()
                    .map(|m| m.index)
                    .collect()
            }),
        }
    }

    /// Built-in filter for `mode`.
    pub fn from_mode(mode: FilterMode) -> Self {
        match mode {
            FilterMode::Substring => Self::substring(),
            FilterMode::Fuzzy => Self::fuzzy(),
        }
    }
}

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Fuzzy filter using nucleo-matcher.
///
/// Returns matches sorted by score (highest first), ties in list order.
/// Empty query returns all items with score 0.
pub fn fuzzy_filter(query: &str, items: &[String]) -> Vec<FilterMatch> {
    if query.is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, text)| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(text, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    // sort_by is stable, equal scores keep list order
    matches.sort_by(|a, b| b.score.cmp(&a.score));

    matches
}
