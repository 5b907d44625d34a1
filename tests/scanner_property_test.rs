//! Property tests for scanner findings

use pii_tagger::detection::patterns::Domain;
use pii_tagger::detection::PiiScanner;
use proptest::prelude::*;
use std::sync::OnceLock;

fn medical_scanner() -> &'static PiiScanner {
    static SCANNER: OnceLock<PiiScanner> = OnceLock::new();
    SCANNER.get_or_init(|| PiiScanner::new(Domain::Medical.registry().unwrap()).unwrap())
}

/// Free text interleaved with values the medical library recognizes
fn record_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("123-45-6789".to_string()),
            Just("555-123-4567".to_string()),
            Just("MRN-004211".to_string()),
            Just("Metformin".to_string()),
            Just("O+".to_string()),
            Just("Zoë Müller".to_string()),
            "[a-zA-Z0-9@.éü-]{1,12}",
        ],
        0..12,
    )
    .prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn scanning_is_deterministic(text in record_text()) {
        let scanner = medical_scanner();
        let first = scanner.scan(&text);
        let second = scanner.scan(&text);
        prop_assert_eq!(first.findings(), second.findings());
    }

    #[test]
    fn findings_slice_back_to_their_values(text in record_text()) {
        let char_count = text.chars().count();

        for finding in medical_scanner().scan(&text).findings() {
            prop_assert_eq!(finding.slice(&text), Some(finding.value.as_str()));
            prop_assert_eq!(finding.length, finding.end_index - finding.start_index);
            prop_assert_eq!(finding.length, finding.value.chars().count());
            prop_assert!(finding.end_index <= char_count);
        }
    }

    #[test]
    fn findings_within_a_category_do_not_overlap(text in record_text()) {
        let result = medical_scanner().scan(&text);

        for category in result.distinct_categories() {
            let findings: Vec<_> = result.of_category(category).collect();
            for pair in findings.windows(2) {
                prop_assert!(
                    pair[0].end_index <= pair[1].start_index,
                    "{} overlaps in {:?}",
                    category,
                    text
                );
            }
        }
    }

    #[test]
    fn summary_counts_match_findings(text in record_text()) {
        let result = medical_scanner().scan(&text);

        prop_assert_eq!(result.total_count(), result.findings().len());
        prop_assert_eq!(result.category_counts().values().sum::<usize>(), result.total_count());
        prop_assert_eq!(result.has_pii(), result.total_count() > 0);
        prop_assert_eq!(medical_scanner().contains_pii(&text), result.has_pii());
    }
}
