//! Grounding citation reconciliation.

use std::collections::HashSet;

use crate::record::{Citation, RawCitation};

/// Placeholder substituted when the upstream omits a citation uri.
const PLACEHOLDER_URI: &str = "#";

/// Fallback title for citations delivered without one.
const UNTITLED: &str = "Untitled Source";

/// Normalizes and deduplicates grounding citations.
///
/// Entries without a usable uri are dropped. When a uri repeats, the first
/// occurrence wins and later duplicates are discarded wholesale, so the
/// output preserves first-seen input order.
pub fn reconcile(raw: &[RawCitation]) -> Vec<Citation> {
    let mut seen = HashSet::new();
    let mut citations = Vec::new();

    for entry in raw {
        let uri = entry.uri.as_deref().unwrap_or(PLACEHOLDER_URI);
        if uri == PLACEHOLDER_URI {
            continue;
        }
        if !seen.insert(uri.to_owned()) {
            continue;
        }
        citations.push(Citation {
            uri: uri.to_owned(),
            title: entry
                .title
                .clone()
                .unwrap_or_else(|| UNTITLED.to_owned()),
        });
    }

    citations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(uri: Option<&str>, title: Option<&str>) -> RawCitation {
        RawCitation {
            uri: uri.map(str::to_owned),
            title: title.map(str::to_owned),
        }
    }

    #[test]
    fn first_occurrence_wins_and_placeholder_entries_drop() {
        let citations = reconcile(&[
            raw(Some("a"), Some("T1")),
            raw(Some("a"), Some("T2")),
            raw(None, Some("T3")),
        ]);

        assert_eq!(
            citations,
            vec![Citation {
                uri: String::from("a"),
                title: String::from("T1"),
            }]
        );
    }

    #[test]
    fn output_preserves_first_seen_order() {
        let citations = reconcile(&[
            raw(Some("b"), Some("B")),
            raw(Some("a"), Some("A")),
            raw(Some("b"), Some("B-again")),
            raw(Some("c"), Some("C")),
        ]);

        let uris = citations.iter().map(|c| c.uri.as_str()).collect::<Vec<_>>();
        assert_eq!(uris, vec!["b", "a", "c"]);
    }

    #[test]
    fn missing_title_falls_back_to_untitled() {
        let citations = reconcile(&[raw(Some("https://example.test/filing"), None)]);
        assert_eq!(citations[0].title, "Untitled Source");
    }

    #[test]
    fn literal_placeholder_uri_never_survives() {
        let citations = reconcile(&[raw(Some("#"), Some("looks real"))]);
        assert!(citations.is_empty());
    }
}
