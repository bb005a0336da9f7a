use std::sync::Arc;

use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{PubMedError, Result};
use crate::fetch::{Database, FetchResponse, RetMode};
use crate::pmc::idconv::{IdConvResponse, IdMapping};
use crate::pmc::{self, PmcArticleSet};
use crate::pubmed::responses::ESearchResponse;
use crate::pubmed::{self, PubMedArticleSet, SearchParams, SearchResult};
use crate::transport::{HttpTransport, Transport, strip_bom};

/// Client for the E-utilities search/fetch tools and the PMC ID Converter
///
/// Cloning is cheap; clones share the same transport and connection pool.
#[derive(Clone)]
pub struct PubMedClient {
    transport: Arc<dyn Transport>,
    eutils: Endpoint,
    idconv: Endpoint,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_eutils::PubMedClient;
    ///
    /// let client = PubMedClient::new()?;
    /// # Ok::<(), pubmed_eutils::PubMedError>(())
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a client with custom configuration
    ///
    /// # Errors
    ///
    /// * `PubMedError::InvalidBaseUrl` - If a configured base URL does not parse
    /// * `PubMedError::RequestError` - If the HTTP client cannot be built
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_eutils::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@university.edu");
    ///
    /// let client = PubMedClient::with_config(config)?;
    /// # Ok::<(), pubmed_eutils::PubMedError>(())
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::from_config(&config)?;
        Self::with_transport(Arc::new(transport), config)
    }

    /// Create a client around an existing `reqwest` client
    ///
    /// The configured User-Agent is not applied; the given client's own settings win.
    pub fn with_http_client(client: Client, config: ClientConfig) -> Result<Self> {
        Self::with_transport(Arc::new(HttpTransport::with_client(client)), config)
    }

    /// Create a client that sends every request through `transport`
    pub fn with_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Result<Self> {
        let eutils = Endpoint::parse(config.effective_eutils_base_url())?;
        let idconv = Endpoint::parse(config.effective_idconv_base_url())?;
        debug!(eutils = %eutils.as_url(), idconv = %idconv.as_url(), "Client endpoints resolved");

        Ok(Self {
            transport,
            eutils,
            idconv,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search PubMed for a term
    ///
    /// An empty or whitespace-only term returns [`SearchResult::empty`] without
    /// touching the network.
    ///
    /// # Errors
    ///
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::ApiError` - If the server answers with a non-success status
    /// * `PubMedError::JsonError` - If the response is not ESearch JSON
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_eutils::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     let result = client.search("crispr cas9").await?;
    ///     println!("{} hits, first page: {:?}", result.count, result.id_list);
    ///     Ok(())
    /// }
    /// ```
    pub async fn search(&self, term: &str) -> Result<SearchResult> {
        self.search_with(SearchParams::new(term)).await
    }

    /// Search PubMed with paging, date range and sort options
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_eutils::{PubMedClient, SearchParams, SortOrder};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     let params = SearchParams::new("cancer")
    ///         .retmax(1)
    ///         .date_range("2017/09/28", "2017/09/29")
    ///         .sort(SortOrder::PublicationDate);
    ///
    ///     let result = client.search_with(params).await?;
    ///     println!("{:?}", result.id_list);
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, params), fields(term = %params.term()))]
    pub async fn search_with(&self, params: SearchParams) -> Result<SearchResult> {
        if params.term().trim().is_empty() {
            debug!("Empty search term, returning empty result");
            return Ok(SearchResult::empty());
        }

        let url = self
            .eutils
            .url("esearch.fcgi")?
            .param("db", Database::PubMed)
            .param("retmode", "json")
            .param("term", params.term())
            .params(params.optional_params())
            .params(self.config.build_api_params())
            .build();

        debug!(url = %url, "Making ESearch API request");
        let body = self.transport.get(&url).await?;

        let response: ESearchResponse = serde_json::from_str(strip_bom(&body)).map_err(|e| {
            warn!(error = %e, "ESearch response did not decode");
            e
        })?;
        let result = response.into_search_result();

        if let Some(error) = &result.error {
            warn!(error = %error, "ESearch reported an error");
        }

        info!(
            total_count = %result.count,
            returned = result.id_list.len(),
            "Search completed"
        );

        Ok(result)
    }

    /// Fetch records for an id (or comma-separated ids)
    ///
    /// `rettype` is passed through as-is and left out of the request when empty.
    /// `Text` bodies come back unchanged; `Xml` bodies are decoded with the
    /// schema of the chosen database.
    ///
    /// # Errors
    ///
    /// * `PubMedError::InvalidId` - If `id` is empty
    /// * `PubMedError::RequestError` / `PubMedError::ApiError` - On transport failure
    /// * `PubMedError::XmlError` - If an XML body does not decode
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_eutils::{Database, PubMedClient, RetMode};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     let response = client.fetch("9997", Database::PubMed, "abstract", RetMode::Text).await?;
    ///     println!("{}", response.as_text().unwrap_or_default());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(id = %id, db = %db, retmode = %retmode))]
    pub async fn fetch(
        &self,
        id: &str,
        db: Database,
        rettype: &str,
        retmode: RetMode,
    ) -> Result<FetchResponse> {
        let body = self.efetch(id, db, rettype, retmode).await?;

        let response = match (retmode, db) {
            (RetMode::Text, _) => FetchResponse::PlainText(body),
            (RetMode::Xml, Database::PubMed) => {
                FetchResponse::PubMed(pubmed::parse_article_set(&body)?)
            }
            (RetMode::Xml, Database::Pmc) => FetchResponse::Pmc(pmc::parse_article_set(&body)?),
        };

        info!("Fetch completed");

        Ok(response)
    }

    /// [`fetch`](Self::fetch) with the database and return mode given by name
    ///
    /// Both names are checked before any request is made. For `pmc` an empty
    /// `retmode` means XML.
    ///
    /// # Errors
    ///
    /// * `PubMedError::InvalidDatabase` - If `db` is not `pubmed` or `pmc`
    /// * `PubMedError::InvalidRetMode` - If `retmode` is not `text` or `xml`
    /// * everything [`fetch`](Self::fetch) returns
    pub async fn fetch_by_name(
        &self,
        id: &str,
        db: &str,
        rettype: &str,
        retmode: &str,
    ) -> Result<FetchResponse> {
        let db = db.parse::<Database>().inspect_err(|e| warn!(error = %e, "Rejected fetch"))?;
        let retmode =
            RetMode::resolve(retmode, db).inspect_err(|e| warn!(error = %e, "Rejected fetch"))?;

        self.fetch(id, db, rettype, retmode).await
    }

    /// Fetch and decode PubMed citations (`db=pubmed&retmode=xml&rettype=abstract`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_eutils::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     let set = client.fetch_pubmed_articles("9997").await?;
    ///     for article in &set.articles {
    ///         println!("{}: {}", article.pmid, article.title);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(id = %id))]
    pub async fn fetch_pubmed_articles(&self, id: &str) -> Result<PubMedArticleSet> {
        let body = self
            .efetch(id, Database::PubMed, "abstract", RetMode::Xml)
            .await?;
        let set = pubmed::parse_article_set(&body)?;

        info!(articles = set.len(), "Fetched PubMed articles");
        Ok(set)
    }

    /// Fetch and decode PMC article front matter (`db=pmc&retmode=xml`)
    #[instrument(skip(self), fields(id = %id))]
    pub async fn fetch_pmc_articles(&self, id: &str) -> Result<PmcArticleSet> {
        let body = self.efetch(id, Database::Pmc, "", RetMode::Xml).await?;
        let set = pmc::parse_article_set(&body)?;

        info!(articles = set.len(), "Fetched PMC articles");
        Ok(set)
    }

    /// Map a PMID, PMCID or DOI to its sibling identifiers
    ///
    /// Only the first record of the response is used.
    ///
    /// # Errors
    ///
    /// * `PubMedError::InvalidId` - If `id` is empty
    /// * `PubMedError::IdConversionBadResponse` - If the body is not ID Converter JSON
    /// * `PubMedError::IdConversionNoRecords` - If the response has no records
    /// * `PubMedError::IdConversionFailed` - If the first record has `status: "error"`
    /// * `PubMedError::RequestError` / `PubMedError::ApiError` - On transport failure
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_eutils::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     let mapping = client.convert_id("23193287").await?;
    ///     println!("{} -> {}", mapping.pmid, mapping.pmcid);
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(id = %id))]
    pub async fn convert_id(&self, id: &str) -> Result<IdMapping> {
        let body = self.idconv_body(id).await?;
        let mapping = IdConvResponse::from_body(id, &body)?.into_first_mapping(id)?;

        info!(pmid = %mapping.pmid, pmcid = %mapping.pmcid, "ID conversion completed");
        Ok(mapping)
    }

    /// Convert several identifiers in one request
    ///
    /// Records are returned as the service sends them, including ones whose
    /// `status` is `"error"`.
    #[instrument(skip(self), fields(count = ids.len()))]
    pub async fn convert_ids(&self, ids: &[&str]) -> Result<Vec<IdMapping>> {
        if ids.is_empty() || ids.iter().any(|id| id.trim().is_empty()) {
            warn!("Empty identifier in ID conversion request");
            return Err(PubMedError::InvalidId { id: ids.join(",") });
        }

        let joined = ids.join(",");
        let body = self.idconv_body(&joined).await?;
        let records = IdConvResponse::from_body(&joined, &body)?.into_records(&joined)?;

        let failed = records.iter().filter(|record| record.is_error()).count();
        info!(records = records.len(), failed, "ID conversion completed");
        Ok(records)
    }

    async fn efetch(
        &self,
        id: &str,
        db: Database,
        rettype: &str,
        retmode: RetMode,
    ) -> Result<String> {
        validate_id(id)?;

        let rettype = (!rettype.is_empty()).then_some(rettype);
        let url = self
            .eutils
            .url("efetch.fcgi")?
            .param("db", db)
            .param("id", id)
            .param("retmode", retmode)
            .param_opt("rettype", rettype)
            .params(self.config.build_api_params())
            .build();

        debug!(url = %url, "Making EFetch API request");
        self.transport.get(&url).await
    }

    async fn idconv_body(&self, ids: &str) -> Result<String> {
        validate_id(ids)?;

        // The ID Converter takes tool/email but no api_key
        let identification = self
            .config
            .build_api_params()
            .into_iter()
            .filter(|(key, _)| key != "api_key");

        let url = self
            .idconv
            .url("idconv/v1.0/")?
            .param("format", "json")
            .param("ids", ids)
            .params(identification)
            .build();

        debug!(url = %url, "Making ID Converter request");
        self.transport.get(&url).await
    }
}

fn validate_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        warn!("Empty identifier provided");
        return Err(PubMedError::InvalidId { id: id.to_string() });
    }
    Ok(())
}
