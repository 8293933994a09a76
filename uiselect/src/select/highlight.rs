//! Wraps the parts of a label that match the search text.
//!
//! Purely presentational; the widget state never sees the result.

use std::ops::Range;

use regex::RegexBuilder;

use crate::markup::Element;

/// Class carried by every highlighted fragment.
pub const HIGHLIGHT_CLASS: &str = "ui-select-highlight";

/// Byte ranges of every case-insensitive occurrence of `search` in `text`.
///
/// The search is matched literally; regex metacharacters have no meaning.
pub fn highlight_ranges(text: &str, search: &str) -> Vec<Range<usize>> {
    if search.is_empty() {
        return Vec::new();
    }

    match RegexBuilder::new(&regex::escape(search))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.find_iter(text).map(|m| m.range()).collect(),
        Err(e) => {
            log::warn!("highlight: cannot match {:?}: {}", search, e);
            Vec::new()
        }
    }
}

/// Render `text` with each match of `search` wrapped in a highlight span.
///
/// With an empty search this is a plain text span.
pub fn highlight(text: &str, search: &str) -> Element {
    let ranges = highlight_ranges(text, search);
    if ranges.is_empty() {
        return Element::text(text);
    }

    let mut parts = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut last = 0;
    for range in ranges {
        if range.start > last {
            parts.push(Element::text(&text[last..range.start]));
        }
        parts.push(Element::text(&text[range.clone()]).class(HIGHLIGHT_CLASS));
        last = range.end;
    }
    if last < text.len() {
        parts.push(Element::text(&text[last..]));
    }

    Element::span().children(parts)
}
