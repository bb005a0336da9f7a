//! EFetch tests against a mocked E-utilities server

mod common;

use common::{create_mock_client, read_fixture};
use pubmed_eutils::{Database, FetchResponse, PubMedError, RetMode};
use rstest::rstest;
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STREKAS_TITLE: &str =
    "Magnetic studies of Chromatium flavocytochrome C552. A mechanism for heme-flavin interaction.";

#[tokio::test]
#[traced_test]
async fn test_fetch_pubmed_text_is_returned_verbatim() {
    let mock_server = MockServer::start().await;
    let body = read_fixture("efetch_pubmed_9997.txt");

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("id", "9997"))
        .and(query_param("rettype", "abstract"))
        .and(query_param("retmode", "text"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let response = client
        .fetch_by_name("9997", "pubmed", "abstract", "text")
        .await
        .expect("fetch should succeed");

    let text = response.as_text().expect("text response");
    assert_eq!(text, body);
    assert!(text.starts_with("\n1. Biochim Biophys Acta. 1976 Sep 28;446(1):179-91.\n\n"));
    assert!(text.ends_with("PMID: 9997  [Indexed for MEDLINE]\n\n"));
}

#[tokio::test]
#[traced_test]
async fn test_fetch_text_keeps_byte_order_mark() {
    let mock_server = MockServer::start().await;
    let raw = b"\xEF\xBB\xBFPMID: 9997\n".to_vec();

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("retmode", "text"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(raw.clone(), "text/plain"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let response = client
        .fetch("9997", Database::PubMed, "abstract", RetMode::Text)
        .await
        .expect("fetch should succeed");

    let text = response.as_text().expect("text response");
    assert_eq!(text.as_bytes(), raw.as_slice());
    assert!(text.starts_with('\u{feff}'));
}

#[tokio::test]
#[traced_test]
async fn test_fetch_text_rejects_invalid_utf8() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"PMID: 9997 \xFF\xFE caf\xE9\n".to_vec(), "text/plain; charset=latin1"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client
        .fetch("9997", Database::PubMed, "abstract", RetMode::Text)
        .await
        .expect_err("invalid UTF-8 must not be replaced");

    assert!(matches!(err, PubMedError::InvalidUtf8Body(_)), "got {:?}", err);
}

#[tokio::test]
#[traced_test]
async fn test_fetch_xml_with_byte_order_mark_still_decodes() {
    let mock_server = MockServer::start().await;
    let mut raw = b"\xEF\xBB\xBF".to_vec();
    raw.extend_from_slice(read_fixture("efetch_pubmed_9997.xml").as_bytes());

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("retmode", "xml"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(raw, "text/xml"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let set = client
        .fetch_pubmed_articles("9997")
        .await
        .expect("fetch should succeed");

    assert_eq!(set.find("9997").map(|a| a.title.as_str()), Some(STREKAS_TITLE));
}

#[tokio::test]
#[traced_test]
async fn test_fetch_pubmed_xml() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("retmode", "xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(read_fixture("efetch_pubmed_9997.xml")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let response = client
        .fetch("9997", Database::PubMed, "abstract", RetMode::Xml)
        .await
        .expect("fetch should succeed");

    let FetchResponse::PubMed(set) = response else {
        panic!("expected a PubMed article set, got {:?}", response);
    };
    assert_eq!(set.len(), 1);

    let article = &set.articles[0];
    assert_eq!(article.pmid, "9997");
    assert_eq!(article.title, STREKAS_TITLE);
    assert!(article
        .abstract_text
        .as_deref()
        .is_some_and(|a| a.starts_with("Electron paramagnetic resonance")));
    assert_eq!(article.authors.len(), 1);
    assert_eq!(article.authors[0].last_name.as_deref(), Some("Strekas"));
    assert_eq!(article.authors[0].fore_name.as_deref(), Some("T C"));
    assert_eq!(article.authors[0].initials.as_deref(), Some("TC"));
    assert_eq!(
        (article.year.as_deref(), article.month.as_deref(), article.day.as_deref()),
        (Some("1976"), Some("Sep"), Some("28"))
    );
}

#[tokio::test]
#[traced_test]
async fn test_fetch_pubmed_articles_helper() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("id", "9997"))
        .and(query_param("retmode", "xml"))
        .and(query_param("rettype", "abstract"))
        .respond_with(ResponseTemplate::new(200).set_body_string(read_fixture("efetch_pubmed_9997.xml")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let set = client
        .fetch_pubmed_articles("9997")
        .await
        .expect("fetch should succeed");

    assert_eq!(set.find("9997").map(|a| a.title.as_str()), Some(STREKAS_TITLE));
}

#[tokio::test]
#[traced_test]
async fn test_fetch_pmc_xml() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("db", "pmc"))
        .and(query_param("id", "PMC3531190"))
        .and(query_param("retmode", "xml"))
        .and(query_param_is_missing("rettype"))
        .respond_with(ResponseTemplate::new(200).set_body_string(read_fixture("efetch_pmc_3531190.xml")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let set = client
        .fetch_pmc_articles("PMC3531190")
        .await
        .expect("fetch should succeed");

    let article = &set.articles[0];
    assert_eq!(
        article.title,
        "Database resources of the National Center for Biotechnology Information"
    );
    assert_eq!(article.pmcid.as_deref(), Some("3531190"));
    assert_eq!(article.pmid.as_deref(), Some("23193287"));

    let abstract_xml = article.abstract_xml.as_deref().expect("abstract present");
    assert!(abstract_xml.contains("GenBank<sup>&#x000ae;</sup>"));
    assert!(abstract_xml.contains(r#"<ext-link ext-link-type="uri""#));
}

#[rstest]
#[case("")]
#[case("xml")]
#[tokio::test]
async fn test_fetch_pmc_by_name_defaults_to_xml(#[case] retmode: &str) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("db", "pmc"))
        .and(query_param("retmode", "xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(read_fixture("efetch_pmc_3531190.xml")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let response = client
        .fetch_by_name("3531190", "pmc", "", retmode)
        .await
        .expect("fetch should succeed");

    let set = response.into_pmc().expect("PMC article set");
    let contrib_types: Vec<_> = set.articles[0]
        .authors
        .iter()
        .map(|a| a.contrib_type.as_deref())
        .collect();
    assert_eq!(contrib_types, vec![Some("author"); 3]);
    assert_eq!(set.articles[0].authors[1].surname.as_deref(), Some("Sayers"));
    assert_eq!(set.articles[0].authors_only().count(), 3);
    assert_eq!(
        set.articles[0].pub_date().and_then(|d| d.year.as_deref()),
        Some("2013")
    );
}

#[rstest]
#[case("protein", "xml")]
#[case("pubmed", "")]
#[case("pubmed", "json")]
#[tokio::test]
async fn test_invalid_selectors_make_no_request(#[case] db: &str, #[case] retmode: &str) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client
        .fetch_by_name("9997", db, "abstract", retmode)
        .await
        .unwrap_err();

    assert!(err.is_validation_error());
}

#[tokio::test]
#[traced_test]
async fn test_fetch_error_document() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<?xml version=\"1.0\"?>\n<eFetchResult><ERROR>ID list is empty! Possibly it has no correct IDs.</ERROR></eFetchResult>",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client
        .fetch("0", Database::PubMed, "", RetMode::Xml)
        .await
        .unwrap_err();

    assert!(matches!(err, PubMedError::XmlError(ref msg) if msg.contains("ID list is empty")));
}

#[tokio::test]
#[traced_test]
async fn test_fetch_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client
        .fetch("9997", Database::PubMed, "abstract", RetMode::Text)
        .await
        .unwrap_err();

    assert!(matches!(err, PubMedError::ApiError { status: 503, .. }));
}
