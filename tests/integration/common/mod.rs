//! Common test utilities for the mocked and live integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use pubmed_eutils::{ClientConfig, PubMedClient};
use wiremock::MockServer;

/// Directory holding recorded API responses
pub fn test_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/integration/test_data")
}

/// Read a recorded response or panic with a descriptive message
pub fn read_fixture(filename: &str) -> String {
    let path = test_data_dir().join(filename);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {:?}", path))
}

/// Client whose E-utilities and ID Converter requests both go to `mock_server`
pub fn create_mock_client(mock_server: &MockServer) -> PubMedClient {
    create_mock_client_with(mock_server, ClientConfig::new())
}

/// Like [`create_mock_client`], keeping the identification settings of `config`
pub fn create_mock_client_with(mock_server: &MockServer, config: ClientConfig) -> PubMedClient {
    let config = config.with_base_url(mock_server.uri());
    PubMedClient::with_config(config).expect("mock client should build")
}

/// Helper function to check if real API tests should be run
/// Requires both the integration-tests feature and the PUBMED_REAL_API_TESTS env var
pub fn should_run_real_api_tests() -> bool {
    #[cfg(not(feature = "integration-tests"))]
    {
        false
    }

    #[cfg(feature = "integration-tests")]
    {
        std::env::var("PUBMED_REAL_API_TESTS").is_ok()
    }
}

/// Client for the real NCBI endpoints, identified as the integration test suite
pub fn create_live_client() -> PubMedClient {
    let mut config = ClientConfig::new()
        .with_email("test@example.com")
        .with_tool("pubmed-eutils-integration-tests");

    if let Ok(api_key) = std::env::var("NCBI_API_KEY") {
        config = config.with_api_key(api_key);
    }

    PubMedClient::with_config(config).expect("live client should build")
}
