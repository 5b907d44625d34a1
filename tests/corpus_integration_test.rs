//! Integration tests over a synthetic medical corpus

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use pii_tagger::config::ScannerConfig;
use pii_tagger::detection::models::TaggedRecord;
use pii_tagger::detection::report::CorpusReport;
use pii_tagger::detection::{FindingAggregator, TaggingEngine};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const RECORDS: usize = 500;

const TEMPLATE: &str = "Patient {first_name} {last_name} (MRN-{mrn}) SSN {ssn}, \
phone {phone}, email {email}. Prescribed {medication}.";

const MEDICATIONS: [&str; 5] = [
    "Lisinopril",
    "Metoprolol",
    "Atorvastatin",
    "Amlodipine",
    "Warfarin",
];

fn synthetic_fields(rng: &mut StdRng) -> BTreeMap<String, String> {
    let first: String = FirstName().fake_with_rng(rng);
    let last: String = LastName().fake_with_rng(rng);
    let email: String = SafeEmail().fake_with_rng(rng);
    let medication = MEDICATIONS.choose(rng).copied().unwrap_or("Warfarin");

    [
        ("first_name", first),
        ("last_name", last),
        ("mrn", format!("{:06}", rng.gen_range(0..1_000_000))),
        (
            "ssn",
            format!(
                "{:03}-{:02}-{:04}",
                rng.gen_range(100..900),
                rng.gen_range(10..100),
                rng.gen_range(1000..10_000)
            ),
        ),
        (
            "phone",
            format!(
                "{:03}-{:03}-{:04}",
                rng.gen_range(200..1000),
                rng.gen_range(200..1000),
                rng.gen_range(0..10_000)
            ),
        ),
        ("email", email),
        ("medication", medication.to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

fn tag_corpus(seed: u64) -> Vec<TaggedRecord> {
    let engine = TaggingEngine::new(&ScannerConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);

    (0..RECORDS)
        .map(|i| {
            let fields = synthetic_fields(&mut rng);
            engine
                .tag_fields(format!("MED-{:06}", i + 1), TEMPLATE, fields)
                .unwrap()
        })
        .collect()
}

#[test]
fn test_corpus_summary_totals() {
    let records = tag_corpus(42);
    let results: Vec<_> = records.iter().map(TaggedRecord::scan_result).collect();
    let summary = FindingAggregator::corpus_summary(&results);

    assert_eq!(summary.total_records, RECORDS);
    assert_eq!(
        summary.records_with_pii + summary.records_without_pii,
        RECORDS
    );
    assert_eq!(summary.records_with_pii, RECORDS);

    let mut merged: BTreeMap<String, usize> = BTreeMap::new();
    for result in &results {
        for (category, count) in result.category_counts() {
            *merged.entry(category).or_insert(0) += count;
        }
    }
    assert_eq!(merged, summary.category_counts);
    assert_eq!(
        summary.total_findings,
        records.iter().map(|r| r.pii_count).sum::<usize>()
    );
    assert_eq!(
        summary.category_sets.iter().map(|s| s.records).sum::<usize>(),
        RECORDS
    );
}

#[test]
fn test_every_record_carries_rendered_identifiers() {
    let records = tag_corpus(7);
    let results: Vec<_> = records.iter().map(TaggedRecord::scan_result).collect();
    let summary = FindingAggregator::corpus_summary(&results);

    for category in ["SSN", "PHONE", "EMAIL", "MEDICAL_RECORD_NUMBER", "MEDICATION_NAME"] {
        assert_eq!(
            summary.category_record_counts.get(category).copied(),
            Some(RECORDS),
            "{category}"
        );
    }
    for record in &records {
        assert_eq!(record.fields.len(), 7);
        assert_eq!(record.text_length, record.text.chars().count());
    }
}

#[test]
fn test_corpus_is_reproducible_from_seed() {
    let first = tag_corpus(1234);
    let second = tag_corpus(1234);

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.text, b.text);
        assert_eq!(a.pii_findings, b.pii_findings);
    }
}

#[test]
fn test_corpus_report_percentages() {
    let records = tag_corpus(99);
    let report = CorpusReport::from_records("medical", &records, 15);

    assert_eq!(report.total_records, RECORDS);
    let total: f64 = report.distribution.iter().map(|d| d.percentage).sum();
    assert!((total - 100.0).abs() < 1e-6);
    assert!(report.samples.len() <= 15);

    let console = report.format_console();
    assert!(console.contains("Total Records:               500"));
    assert!(console.contains("SSN"));
}
