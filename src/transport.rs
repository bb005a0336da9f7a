//! HTTP transport seam
//!
//! The client talks to the network only through [`Transport`], so tests can
//! substitute a double that records or refuses requests.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};

/// Performs a single GET and returns the complete response body
///
/// Implementations must read the body to the end before returning so that no
/// connection or stream handle outlives the call, and must return it byte for
/// byte as received.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<String>;
}

/// [`Transport`] backed by a pooled `reqwest` client
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build the HTTP client with the configured User-Agent
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self), fields(url = %url))]
    async fn get(&self, url: &Url) -> Result<String> {
        debug!("Sending GET request");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("API request failed with status: {}", status);
            return Err(PubMedError::ApiError {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        // Body bytes are kept as sent; invalid UTF-8 is an error, not a replacement
        let bytes = response.bytes().await?;
        let body = String::from_utf8(bytes.to_vec()).inspect_err(|e| {
            warn!(error = %e, "Response body is not valid UTF-8");
        })?;
        debug!(body_size = body.len(), "Received response body");

        Ok(body)
    }
}

/// Body without a leading UTF-8 byte order mark, for the JSON and XML decoders
pub(crate) fn strip_bom(body: &str) -> &str {
    body.strip_prefix('\u{feff}').unwrap_or(body)
}
