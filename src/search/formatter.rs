//! Result formatting: ordering and aggregation of raw concordance records.
//!
//! Every mode is a pure transform over the record list. Sorts are stable with
//! original match order as the final tie-break, so identical input always
//! produces byte-identical output.

use ahash::AHashMap;

use crate::search::{OutputMode, SearchResult};

/// Apply the output mode to the raw records.
///
/// - `kwic` / `position`: identity, preserving document order.
/// - `left_sort` / `right_sort`: stable case-insensitive sort by the context
///   read nearest-token-first; records with empty context sort first.
/// - `frequency`: one aggregate per distinct collocate (case-insensitive),
///   carrying a `count`, sorted by descending count then ascending collocate.
pub fn format(records: Vec<SearchResult>, mode: OutputMode) -> Vec<SearchResult> {
    match mode {
        OutputMode::Kwic | OutputMode::Position => records,
        OutputMode::LeftSort => sorted_by_context(records, true),
        OutputMode::RightSort => sorted_by_context(records, false),
        OutputMode::Frequency => aggregated_by_collocate(records),
    }
}

/// Stable sort by context tokens. For the left context the comparison reads
/// outward from the keyword, so the nearest token is compared first.
fn sorted_by_context(mut records: Vec<SearchResult>, left: bool) -> Vec<SearchResult> {
    records.sort_by_cached_key(|record| {
        let context = if left { &record.left } else { &record.right };
        let key: Vec<String> = if left {
            context.iter().rev().map(|t| t.to_lowercase()).collect()
        } else {
            context.iter().map(|t| t.to_lowercase()).collect()
        };
        key
    });
    records
}

struct CollocateGroup {
    /// Index of the group's first record, in document order.
    first_index: usize,
    count: u64,
    /// Distinct casings with their counts, in first-seen order.
    casings: Vec<(String, u64)>,
}

fn aggregated_by_collocate(records: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut groups: AHashMap<String, CollocateGroup> = AHashMap::new();

    for (index, record) in records.iter().enumerate() {
        let Some(word) = &record.next_word else {
            // A match at the document edge has no collocate to count.
            continue;
        };
        let group = groups
            .entry(word.to_lowercase())
            .or_insert_with(|| CollocateGroup {
                first_index: index,
                count: 0,
                casings: Vec::new(),
            });
        group.count += 1;
        match group.casings.iter_mut().find(|(casing, _)| casing == word) {
            Some((_, n)) => *n += 1,
            None => group.casings.push((word.clone(), 1)),
        }
    }

    let mut aggregates: Vec<(u64, String, usize, SearchResult)> = groups
        .into_iter()
        .map(|(key, group)| {
            // Most frequent casing wins; first-seen order breaks ties.
            let mut representative = &group.casings[0];
            for casing in &group.casings[1..] {
                if casing.1 > representative.1 {
                    representative = casing;
                }
            }

            let mut record = records[group.first_index].clone();
            record.next_word = Some(representative.0.clone());
            record.count = Some(group.count);
            (group.count, key, group.first_index, record)
        })
        .collect();

    aggregates.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.cmp(&b.2))
    });

    aggregates.into_iter().map(|(_, _, _, record)| record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(left: &[&str], keyword: &str, right: &[&str], start: usize) -> SearchResult {
        SearchResult {
            left: left.iter().map(|s| s.to_string()).collect(),
            keyword: keyword.to_string(),
            right: right.iter().map(|s| s.to_string()).collect(),
            start,
            end: start + keyword.chars().count(),
            pos_tags: vec!["NN".to_string()],
            next_word: right.first().map(|s| s.to_string()),
            next_pos: right.first().map(|_| "NN".to_string()),
            entity_label: None,
            count: None,
        }
    }

    #[test]
    fn test_kwic_and_position_are_identity() {
        let records = vec![
            record(&["b"], "cat", &["z"], 10),
            record(&["a"], "cat", &["y"], 20),
        ];

        assert_eq!(format(records.clone(), OutputMode::Kwic), records);
        assert_eq!(format(records.clone(), OutputMode::Position), records);
    }

    #[test]
    fn test_left_sort_reads_nearest_token_first() {
        let records = vec![
            record(&["big", "zebra"], "cat", &[], 0),
            record(&["tiny", "ant"], "cat", &[], 10),
        ];

        let sorted = format(records, OutputMode::LeftSort);
        // "zebra" vs "ant": the token immediately left of the keyword decides.
        assert_eq!(sorted[0].left, vec!["tiny", "ant"]);
        assert_eq!(sorted[1].left, vec!["big", "zebra"]);
    }

    #[test]
    fn test_empty_left_sorts_first() {
        let records = vec![
            record(&["a"], "cat", &[], 0),
            record(&[], "cat", &[], 10),
        ];

        let sorted = format(records, OutputMode::LeftSort);
        assert!(sorted[0].left.is_empty());
    }

    #[test]
    fn test_right_sort_is_case_insensitive_and_stable() {
        let records = vec![
            record(&[], "cat", &["Ran"], 0),
            record(&[], "cat", &["ran"], 10),
            record(&[], "cat", &["ate"], 20),
        ];

        let sorted = format(records, OutputMode::RightSort);
        assert_eq!(sorted[0].right, vec!["ate"]);
        // Equal keys keep original order.
        assert_eq!(sorted[1].start, 0);
        assert_eq!(sorted[2].start, 10);
    }

    #[test]
    fn test_frequency_aggregation() {
        let records = vec![
            record(&[], "cat", &["sat"], 0),
            record(&[], "cat", &["ran"], 10),
            record(&[], "cat", &["sat"], 20),
        ];

        let aggregated = format(records, OutputMode::Frequency);
        assert_eq!(aggregated.len(), 2);
        assert_eq!(aggregated[0].next_word.as_deref(), Some("sat"));
        assert_eq!(aggregated[0].count, Some(2));
        // The aggregate reuses the group's first record in document order.
        assert_eq!(aggregated[0].start, 0);
        assert_eq!(aggregated[1].next_word.as_deref(), Some("ran"));
        assert_eq!(aggregated[1].count, Some(1));
    }

    #[test]
    fn test_frequency_ties_break_by_collocate_text() {
        let records = vec![
            record(&[], "cat", &["zig"], 0),
            record(&[], "cat", &["ant"], 10),
        ];

        let aggregated = format(records, OutputMode::Frequency);
        assert_eq!(aggregated[0].next_word.as_deref(), Some("ant"));
        assert_eq!(aggregated[1].next_word.as_deref(), Some("zig"));
    }

    #[test]
    fn test_frequency_representative_casing() {
        let records = vec![
            record(&[], "cat", &["Sat"], 0),
            record(&[], "cat", &["sat"], 10),
            record(&[], "cat", &["sat"], 20),
        ];

        let aggregated = format(records, OutputMode::Frequency);
        assert_eq!(aggregated.len(), 1);
        assert_eq!(aggregated[0].next_word.as_deref(), Some("sat"));
        assert_eq!(aggregated[0].count, Some(3));
    }

    #[test]
    fn test_frequency_drops_matches_without_collocate() {
        let mut edge = record(&["the"], "cat", &[], 0);
        edge.next_word = None;
        edge.next_pos = None;
        let records = vec![edge, record(&[], "cat", &["sat"], 10)];

        let aggregated = format(records, OutputMode::Frequency);
        assert_eq!(aggregated.len(), 1);
        assert_eq!(aggregated[0].count, Some(1));
    }
}
