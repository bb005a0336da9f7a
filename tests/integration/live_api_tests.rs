//! Tests against the real NCBI services
//!
//! Skipped unless built with `--features integration-tests` and run with
//! `PUBMED_REAL_API_TESTS=1`. Set `NCBI_API_KEY` to raise the rate limit.

mod common;

use common::{create_live_client, should_run_real_api_tests};
use pubmed_eutils::{Database, RetMode, SearchParams};
use tracing::info;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_live_search_date_window() {
    if !should_run_real_api_tests() {
        info!("Skipping real API test (enable with PUBMED_REAL_API_TESTS=1)");
        return;
    }

    let client = create_live_client();
    let params = SearchParams::new("cancer")
        .retmax(1)
        .date_range("2017/09/28", "2017/09/29");

    let result = client.search_with(params).await.expect("live search failed");
    assert_eq!(result.id_list, vec!["28958124"]);
}

#[tokio::test]
#[traced_test]
async fn test_live_fetch_text_and_xml() {
    if !should_run_real_api_tests() {
        info!("Skipping real API test (enable with PUBMED_REAL_API_TESTS=1)");
        return;
    }

    let client = create_live_client();

    let text = client
        .fetch("9997", Database::PubMed, "abstract", RetMode::Text)
        .await
        .expect("live text fetch failed");
    assert!(text
        .as_text()
        .is_some_and(|t| t.contains("Magnetic studies of Chromatium flavocytochrome C552")));

    let set = client
        .fetch_pubmed_articles("9997")
        .await
        .expect("live XML fetch failed");
    assert_eq!(set.articles[0].authors[0].last_name.as_deref(), Some("Strekas"));
}

#[tokio::test]
#[traced_test]
async fn test_live_pmc_fetch() {
    if !should_run_real_api_tests() {
        info!("Skipping real API test (enable with PUBMED_REAL_API_TESTS=1)");
        return;
    }

    let client = create_live_client();
    let set = client
        .fetch_pmc_articles("3531190")
        .await
        .expect("live PMC fetch failed");

    assert!(!set.is_empty());
    assert!(set.articles[0].abstract_xml.is_some());
}

#[tokio::test]
#[traced_test]
async fn test_live_convert_id() {
    if !should_run_real_api_tests() {
        info!("Skipping real API test (enable with PUBMED_REAL_API_TESTS=1)");
        return;
    }

    let client = create_live_client();
    let mapping = client
        .convert_id("23193287")
        .await
        .expect("live conversion failed");

    assert_eq!(mapping.pmid, "23193287");
    assert_eq!(mapping.pmcid, "PMC3531190");
}
