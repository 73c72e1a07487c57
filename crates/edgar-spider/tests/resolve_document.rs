mod common;

use common::*;
use edgar_spider::edgar::document::parse_document_link;
use edgar_spider::edgar::{resolve_all, resolve_document};
use edgar_spider::progress::Silent;
use edgar_spider::{DocumentReference, EdgarConfig, FilingReference};

fn filing(date: &str, url: &str) -> FilingReference {
    FilingReference::new(date, url)
}

#[tokio::test]
async fn excel_link_is_paired_with_the_filing_date() {
    let fetcher = Recorded::new().page("https://www.sec.gov/a1", INTERACTIVE);
    let doc = resolve_document(
        &fetcher,
        &filing("2021-03-31", "https://www.sec.gov/a1"),
        &EdgarConfig::default(),
    )
    .await
    .unwrap();

    assert_eq!(
        doc,
        DocumentReference::new("2021-03-31", "https://www.sec.gov/Archives/x.xlsx")
    );
}

#[test]
fn label_must_match_the_whole_anchor_text() {
    let err = parse_document_link(
        INTERACTIVE_MISSING,
        &filing("2021-03-31", "https://www.sec.gov/a1"),
        &EdgarConfig::default(),
    )
    .unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err}");
}

#[test]
fn whitespace_around_the_label_is_ignored() {
    let doc = parse_document_link(
        INTERACTIVE_A3,
        &filing("2021-09-30", "https://www.sec.gov/a3"),
        &EdgarConfig::default(),
    )
    .unwrap();
    assert_eq!(
        doc.document_url,
        "https://www.sec.gov/Archives/edgar/data/1018724/000101872421000030/Financial_Report.xlsx"
    );
}

#[tokio::test]
async fn failed_request_is_a_transport_error() {
    let err = resolve_document(
        &Recorded::new(),
        &filing("2021-03-31", "https://www.sec.gov/a1"),
        &EdgarConfig::default(),
    )
    .await
    .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn malformed_interactive_url_is_a_parse_error() {
    let fetcher = Recorded::new();
    let err = resolve_document(&fetcher, &filing("2021-03-31", ""), &EdgarConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, edgar_spider::SpiderError::Parse(_)));
    assert!(fetcher.requests().is_empty());
}

#[tokio::test]
async fn batch_keeps_input_order_and_fetches_every_item() {
    let fetcher = Recorded::new()
        .page("https://www.sec.gov/a1", INTERACTIVE)
        .page("https://www.sec.gov/a3", INTERACTIVE_A3);
    let filings = vec![
        filing("2021-09-30", "https://www.sec.gov/a3"),
        filing("2021-03-31", "https://www.sec.gov/a1"),
        filing("2021-03-31", "https://www.sec.gov/a1"),
    ];
    let recorder = Recorder::default();

    let docs = resolve_all(&fetcher, &recorder, &filings, &EdgarConfig::default())
        .await
        .unwrap();

    let dates: Vec<_> = docs.iter().map(|d| d.filing_date.as_str()).collect();
    assert_eq!(dates, ["2021-09-30", "2021-03-31", "2021-03-31"]);
    assert_eq!(
        fetcher.requests(),
        [
            "https://www.sec.gov/a3",
            "https://www.sec.gov/a1",
            "https://www.sec.gov/a1"
        ]
    );
    assert_eq!(
        recorder.events(),
        vec![Event::Document(1, 3), Event::Document(2, 3), Event::Document(3, 3)]
    );
}

#[tokio::test]
async fn batch_stops_at_the_first_failure() {
    let fetcher = Recorded::new()
        .page("https://www.sec.gov/a1", INTERACTIVE)
        .page("https://www.sec.gov/a2", INTERACTIVE_MISSING)
        .page("https://www.sec.gov/a3", INTERACTIVE_A3);
    let filings = vec![
        filing("2021-03-31", "https://www.sec.gov/a1"),
        filing("2021-06-30", "https://www.sec.gov/a2"),
        filing("2021-09-30", "https://www.sec.gov/a3"),
    ];

    let err = resolve_all(&fetcher, &Silent, &filings, &EdgarConfig::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(fetcher.requests().len(), 2);
}

#[tokio::test]
async fn empty_batch_makes_no_requests() {
    let fetcher = Recorded::new();
    let docs = resolve_all(&fetcher, &Silent, &[], &EdgarConfig::default())
        .await
        .unwrap();
    assert!(docs.is_empty());
    assert!(fetcher.requests().is_empty());
}

#[test]
fn nested_markup_inside_the_anchor_is_part_of_its_text() {
    let html = r#"<a href="/Archives/nested.xlsx"><b>View</b> Excel <span>Document</span></a>"#;
    let doc = parse_document_link(
        html,
        &filing("2021-03-31", "https://www.sec.gov/a1"),
        &EdgarConfig::default(),
    )
    .unwrap();
    assert_eq!(doc.document_url, "https://www.sec.gov/Archives/nested.xlsx");
}

#[test]
fn document_url_is_the_base_followed_by_the_href() {
    let html = r#"<a href="/Archives/x/../Financial Report.xlsx">View Excel Document</a>"#;
    let doc = parse_document_link(
        html,
        &filing("2021-03-31", "https://www.sec.gov/a1"),
        &EdgarConfig::default(),
    )
    .unwrap();
    assert_eq!(
        doc.document_url,
        "https://www.sec.gov/Archives/x/../Financial Report.xlsx"
    );
}
