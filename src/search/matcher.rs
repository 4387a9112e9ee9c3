//! Case-insensitive substring matcher
//!
//! The one matching rule for the whole widget: keyboard navigation and
//! highlight rendering both go through these functions, so the two can never
//! disagree about what "contains the query" means.

use crate::api::Character;

/// A matched substring within a name, in character offsets of the original
/// (unlowered) text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    /// Character (not byte) offset of the match start
    pub start: usize,
    /// Match length in characters
    pub len: usize,
}

/// Find all non-overlapping matches of `query` in `text` (case-insensitive)
///
/// An empty query yields no spans: splitting on the empty string matches
/// everywhere trivially, so highlighting skips it outright.
///
/// Matching happens on the lowercased text, but the returned offsets index
/// the original string. Lowercasing can change the char count ('İ' lowers to
/// two chars), so each lowered char records which original char it came from
/// and matches are mapped back through that table. Spans therefore always
/// slice the original name in bounds, ascending and non-overlapping.
pub fn match_spans(text: &str, query: &str) -> Vec<MatchSpan> {
    if query.is_empty() {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();

    // Lowered text alongside a lowered-char -> original-char offset map
    let mut text_lower = String::new();
    let mut origin = Vec::new();
    for (original_pos, ch) in text.chars().enumerate() {
        for lowered in ch.to_lowercase() {
            text_lower.push(lowered);
            origin.push(original_pos);
        }
    }

    let query_chars = query_lower.chars().count();

    let mut spans = Vec::new();
    let mut search_start = 0;
    let mut min_start = 0;

    while let Some(byte_pos) = text_lower[search_start..].find(&query_lower) {
        let absolute_byte_pos = search_start + byte_pos;
        let lowered_start = text_lower[..absolute_byte_pos].chars().count();

        // Map back to original char offsets
        let mut start = origin[lowered_start];
        let last = origin[lowered_start + query_chars - 1];

        // A single original char can lower into two adjacent matches; keep
        // spans disjoint by trimming the overlap
        if start < min_start {
            start = min_start;
        }
        if last >= start {
            spans.push(MatchSpan {
                start,
                len: last + 1 - start,
            });
            min_start = last + 1;
        }

        // Resume past this match; matches never overlap
        search_start = absolute_byte_pos + query_lower.len();
    }

    spans
}

/// Whether `text` contains `query` (case-insensitive)
///
/// Unlike highlighting, navigation treats the empty query as contained in
/// every name, so arrow keys work before anything has been typed.
pub fn name_matches(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Index of the first character whose name contains the query
pub fn first_match_index(characters: &[Character], query: &str) -> Option<usize> {
    characters.iter().position(|c| name_matches(&c.name, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn character(id: u64, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            image: String::new(),
            episode: Vec::new(),
        }
    }

    #[test]
    fn test_empty_query_no_spans() {
        assert!(match_spans("Rick Sanchez", "").is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(match_spans("", "rick").is_empty());
    }

    #[test]
    fn test_single_match() {
        let spans = match_spans("Rick Sanchez", "sanchez");
        assert_eq!(spans, vec![MatchSpan { start: 5, len: 7 }]);
    }

    #[test]
    fn test_case_insensitive() {
        let spans = match_spans("MORTY smith", "Morty");
        assert_eq!(spans, vec![MatchSpan { start: 0, len: 5 }]);
    }

    #[test]
    fn test_multiple_matches() {
        let spans = match_spans("Rick Prime Rick", "rick");
        assert_eq!(
            spans,
            vec![
                MatchSpan { start: 0, len: 4 },
                MatchSpan { start: 11, len: 4 }
            ]
        );
    }

    #[test]
    fn test_adjacent_matches_do_not_overlap() {
        let spans = match_spans("aaa", "aa");
        // The scan resumes after each match: one span, not two
        assert_eq!(spans, vec![MatchSpan { start: 0, len: 2 }]);
    }

    #[test]
    fn test_unicode_char_offsets() {
        let spans = match_spans("Mr. Poopybutthole é Rick", "rick");
        // Offsets count characters, not bytes
        assert_eq!(spans, vec![MatchSpan { start: 20, len: 4 }]);
    }

    #[test]
    fn test_expanding_lowercase_keeps_offsets_in_original() {
        // 'İ' lowers to two chars, shifting lowered offsets right by one;
        // the span must still index the original name
        let spans = match_spans("İRick", "rick");
        assert_eq!(spans, vec![MatchSpan { start: 1, len: 4 }]);

        let chars: Vec<char> = "İRick".chars().collect();
        let segment: String = chars[1..5].iter().collect();
        assert_eq!(segment, "Rick");
    }

    #[test]
    fn test_expanding_lowercase_match_inside_expansion() {
        // The lowered form of 'İ' itself contains "i"; the span maps back to
        // the single original char
        let spans = match_spans("İ", "i");
        assert_eq!(spans, vec![MatchSpan { start: 0, len: 1 }]);
    }

    #[test]
    fn test_name_matches_empty_query_matches_all() {
        assert!(name_matches("Rick Sanchez", ""));
        assert!(name_matches("", ""));
    }

    #[test]
    fn test_name_matches_substring() {
        assert!(name_matches("Rick Sanchez", "sanch"));
        assert!(!name_matches("Rick Sanchez", "morty"));
    }

    #[test]
    fn test_first_match_index() {
        let characters = vec![
            character(1, "Rick Sanchez"),
            character(2, "Morty Smith"),
            character(3, "Summer Smith"),
        ];

        assert_eq!(first_match_index(&characters, "smith"), Some(1));
        assert_eq!(first_match_index(&characters, "summer"), Some(2));
        assert_eq!(first_match_index(&characters, "birdperson"), None);
        // Empty query matches the first entry
        assert_eq!(first_match_index(&characters, ""), Some(0));
    }

    #[test]
    fn test_first_match_index_empty_list() {
        assert_eq!(first_match_index(&[], ""), None);
        assert_eq!(first_match_index(&[], "rick"), None);
    }

    // Property: every span found by the matcher actually is a
    // case-insensitive occurrence of the query at that character offset.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_spans_point_at_real_matches(
            text in "[a-zA-Z ]{0,40}",
            query in "[a-zA-Z]{1,8}",
        ) {
            let chars: Vec<char> = text.chars().collect();
            for span in match_spans(&text, &query) {
                let segment: String = chars[span.start..span.start + span.len].iter().collect();
                prop_assert_eq!(
                    segment.to_lowercase(),
                    query.to_lowercase(),
                    "span must cover a case-insensitive occurrence of the query"
                );
            }
        }

        #[test]
        fn prop_spans_iff_name_matches(
            text in "[a-zA-Z ]{0,40}",
            query in "[a-zA-Z]{1,8}",
        ) {
            // Navigation and highlighting agree on non-empty queries
            let has_spans = !match_spans(&text, &query).is_empty();
            prop_assert_eq!(has_spans, name_matches(&text, &query));
        }

        // The API can return any unicode name; spans must always slice the
        // original string in bounds, ascending and disjoint, even when
        // lowercasing changes the char count.
        #[test]
        fn prop_spans_stay_in_bounds_of_original(
            text in "\\PC{0,40}",
            query in "\\PC{1,8}",
        ) {
            let char_count = text.chars().count();
            let mut previous_end = 0;
            for span in match_spans(&text, &query) {
                prop_assert!(span.len > 0, "empty span");
                prop_assert!(
                    span.start >= previous_end,
                    "span at {} overlaps previous span ending at {}",
                    span.start,
                    previous_end
                );
                prop_assert!(
                    span.start + span.len <= char_count,
                    "span {}..{} exceeds original char length {}",
                    span.start,
                    span.start + span.len,
                    char_count
                );
                previous_end = span.start + span.len;
            }
        }

        #[test]
        fn prop_query_case_is_irrelevant(
            text in "[a-zA-Z ]{0,40}",
            query in "[a-zA-Z]{1,8}",
        ) {
            prop_assert_eq!(
                match_spans(&text, &query.to_lowercase()),
                match_spans(&text, &query.to_uppercase())
            );
        }
    }
}
