//! Client configuration
//!
//! All settings are passed explicitly when a client is built; nothing is read from
//! the environment or from files.

/// Default base URL of the E-utilities tool family (esearch, efetch)
pub const DEFAULT_EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/";

/// Default base URL of the PMC utilities (ID Converter)
pub const DEFAULT_IDCONV_BASE_URL: &str = "https://www.ncbi.nlm.nih.gov/pmc/utils/";

const DEFAULT_TOOL: &str = "pubmed-eutils";

/// Configuration for [`PubMedClient`](crate::PubMedClient)
///
/// # Example
///
/// ```
/// use pubmed_eutils::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_api_key("your_api_key_here")
///     .with_email("researcher@university.edu")
///     .with_tool("MyResearchApp");
///
/// assert_eq!(config.effective_tool(), "MyResearchApp");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// NCBI API key, sent as `api_key`
    pub api_key: Option<String>,
    /// Contact email, sent as `email`
    pub email: Option<String>,
    /// Tool name, sent as `tool`
    pub tool: Option<String>,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
    /// Override for the E-utilities base URL
    pub eutils_base_url: Option<String>,
    /// Override for the PMC utilities base URL
    pub idconv_base_url: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with NCBI defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Point search and fetch requests at a different host (e.g. a mock server)
    pub fn with_eutils_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.eutils_base_url = Some(base_url.into());
        self
    }

    /// Point ID conversion requests at a different host
    pub fn with_idconv_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.idconv_base_url = Some(base_url.into());
        self
    }

    /// Point both tool families at the same host
    pub fn with_base_url<S: Into<String>>(self, base_url: S) -> Self {
        let base_url = base_url.into();
        self.with_eutils_base_url(base_url.clone())
            .with_idconv_base_url(base_url)
    }

    pub fn effective_eutils_base_url(&self) -> &str {
        self.eutils_base_url
            .as_deref()
            .unwrap_or(DEFAULT_EUTILS_BASE_URL)
    }

    pub fn effective_idconv_base_url(&self) -> &str {
        self.idconv_base_url
            .as_deref()
            .unwrap_or(DEFAULT_IDCONV_BASE_URL)
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("pubmed-eutils/{}", env!("CARGO_PKG_VERSION")))
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    /// Identification parameters appended to every request
    ///
    /// `tool` is always present; `api_key` and `email` only when configured.
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(api_key) = &self.api_key {
            params.push(("api_key".to_string(), api_key.clone()));
        }

        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }

        params.push(("tool".to_string(), self.effective_tool().to_string()));

        params
    }
}
