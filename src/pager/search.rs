use crate::document::Document;

use super::state::SearchHit;

/// Case-insensitive substring scan over every section of `doc`, in section order.
/// Units without searchable text (failed PDF pages) are skipped.
pub fn find_matches(doc: &Document, term: &str) -> Vec<SearchHit> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();
    for (mode, units) in doc.sections() {
        for (index, unit) in units.iter().enumerate() {
            let Some(text) = unit.searchable_text() else {
                continue;
            };
            if text.to_lowercase().contains(&needle) {
                hits.push(SearchHit { mode, index });
            }
        }
    }
    hits
}

/// Steps `current` through `len` results, wrapping in both directions.
pub(crate) fn cycle(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use crate::document::{Document, DocxMode};
    use crate::pager::state::SearchHit;

    use super::{cycle, find_matches};

    #[test]
    fn find_matches_is_case_insensitive() {
        let doc = Document::text(vec!["nothing".to_string(), "Some foo text".to_string()]);
        let hits = find_matches(&doc, "FOO");
        assert_eq!(
            hits,
            vec![SearchHit {
                mode: DocxMode::Paragraphs,
                index: 1
            }]
        );
    }

    #[test]
    fn find_matches_orders_paragraphs_before_tables() {
        let doc = Document::docx(
            vec!["intro".to_string(), "exam week".to_string()],
            vec![vec!["final".to_string(), "exam".to_string()]],
        );
        let hits = find_matches(&doc, "exam");
        assert_eq!(
            hits,
            vec![
                SearchHit {
                    mode: DocxMode::Paragraphs,
                    index: 1
                },
                SearchHit {
                    mode: DocxMode::Tables,
                    index: 0
                },
            ]
        );
    }

    #[test]
    fn find_matches_skips_pages_without_extracted_text() {
        let doc = Document::pdf(vec![None, Some("exam notes".to_string()), Some(String::new())]);
        let hits = find_matches(&doc, "exam");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 1);
    }

    #[test]
    fn find_matches_treats_regex_characters_literally() {
        let doc = Document::text(vec!["a.b".to_string(), "axb".to_string()]);
        assert_eq!(find_matches(&doc, "a.b").len(), 1);
        assert!(find_matches(&doc, "").is_empty());
    }

    #[test]
    fn cycle_wraps_both_ways() {
        assert_eq!(cycle(2, 3, true), 0);
        assert_eq!(cycle(0, 3, false), 2);
        assert_eq!(cycle(0, 0, true), 0);
    }
}
