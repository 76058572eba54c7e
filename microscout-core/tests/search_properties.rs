//! Property-style checks for the search pipeline over a realistic corpus.

use microscout_core::{parse_records, search, search_with_summary, summarize, FaqRecord, MAX_RESULTS};

const CORPUS: &str = r#"[
  {"id": "1", "title": "Improving database performance", "body": "Add indexes to hot columns. Measure before and after."},
  {"id": "2", "title": "Backups", "body": "Snapshots run nightly. Database performance is not affected."},
  {"id": "3", "title": "Connection pooling", "body": "Pools reduce latency. They also help database performance."},
  {"id": "4", "title": "Database performance FAQ", "body": "See the tuning guide."},
  {"id": "5", "title": "Billing", "body": "Invoices are sent monthly."},
  {"id": "6", "title": "Password reset", "body": "Use the reset link. It expires in 1.5 hours."}
]"#;

fn corpus() -> Vec<FaqRecord> {
    parse_records(CORPUS).expect("corpus is well formed")
}

fn contains(record: &FaqRecord, query: &str) -> bool {
    let q = query.to_lowercase();
    record.title.to_lowercase().contains(&q) || record.body.to_lowercase().contains(&q)
}

const QUERIES: &[&str] = &[
    "database performance",
    "DATABASE",
    "reset",
    "monthly",
    "e",
    "not in the corpus",
    ".",
];

#[test]
fn results_are_sound() {
    let records = corpus();
    for q in QUERIES {
        for r in search(q, &records) {
            assert!(contains(&r.record, q), "{} returned for {q:?}", r.record.id);
        }
    }
}

#[test]
fn results_are_complete_up_to_the_cap() {
    let records = corpus();
    for q in QUERIES {
        let matching = records.iter().filter(|r| contains(r, q)).count();
        let results = search(q, &records);
        assert_eq!(results.len(), matching.min(MAX_RESULTS), "query {q:?}");
    }
}

#[test]
fn results_never_exceed_cap() {
    let records = corpus();
    for q in QUERIES {
        assert!(search(q, &records).len() <= MAX_RESULTS);
    }
}

#[test]
fn results_sorted_descending_with_stable_ties() {
    let records = corpus();
    let position = |id: &str| records.iter().position(|r| r.id == id).unwrap_or(usize::MAX);
    for q in QUERIES {
        let results = search(q, &records);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(position(&pair[0].record.id) < position(&pair[1].record.id));
            }
        }
    }
}

#[test]
fn database_performance_example() {
    let records = corpus();
    let results = search("database performance", &records);
    let ids: Vec<&str> = results.iter().map(|r| r.record.id.as_str()).collect();
    // 1 and 4 are title hits (2); 2 and 3 are body hits (1), only 2 fits.
    assert_eq!(ids, vec!["1", "4", "2"]);
    assert_eq!(results[0].score, 2);
    assert_eq!(results[2].score, 1);
}

#[test]
fn summary_sources_match_results() {
    let records = corpus();
    for q in QUERIES {
        let outcome = search_with_summary(q, &records);
        let ids: Vec<&str> = outcome.results.iter().map(|r| r.record.id.as_str()).collect();
        assert_eq!(outcome.sources, ids);
        assert_eq!(outcome.summary.is_empty(), outcome.results.is_empty());
    }
}

#[test]
fn summary_splits_on_literal_period() {
    let records = corpus();
    let summary = summarize(&search("password", &records));
    assert_eq!(summary.summary, "Use the reset link.");
    assert_eq!(summary.sources, vec!["6"]);
}

#[test]
fn repeated_calls_are_identical() {
    let records = corpus();
    for q in QUERIES {
        assert_eq!(search_with_summary(q, &records), search_with_summary(q, &records));
    }
}
