//! # PubMed E-utilities client
//!
//! An async client for the NCBI E-utilities (ESearch, EFetch) and the PMC ID
//! Converter. Requests are composed from validated base URLs with every parameter
//! percent-encoded, and responses are decoded into owned, typed records.
//!
//! ## Features
//!
//! - **Search**: PubMed ESearch with paging, date ranges and sort order
//! - **Fetch**: EFetch as plain text, PubMed citation XML or PMC article XML
//! - **ID conversion**: PMID / PMCID / DOI mapping through the PMC ID Converter
//! - **Pluggable transport**: every request goes through the [`Transport`] trait
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubmed_eutils::{Database, PubMedClient, RetMode, SearchParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::new()?;
//!
//!     let result = client
//!         .search_with(SearchParams::new("cancer").retmax(5))
//!         .await?;
//!     println!("{} matches", result.count);
//!
//!     for pmid in &result.id_list {
//!         let set = client.fetch_pubmed_articles(pmid).await?;
//!         for article in &set.articles {
//!             println!("{}: {}", article.pmid, article.title);
//!         }
//!     }
//!
//!     let text = client.fetch("9997", Database::PubMed, "abstract", RetMode::Text).await?;
//!     println!("{}", text.as_text().unwrap_or_default());
//!
//!     let mapping = client.convert_id("23193287").await?;
//!     println!("PMID {} is {}", mapping.pmid, mapping.pmcid);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod pmc;
pub mod pubmed;
pub mod transport;

// Re-export main types for convenience
pub use client::PubMedClient;
pub use config::{ClientConfig, DEFAULT_EUTILS_BASE_URL, DEFAULT_IDCONV_BASE_URL};
pub use error::{PubMedError, Result};
pub use fetch::{Database, FetchResponse, RetMode};
pub use pmc::{IdMapping, PmcArticle, PmcArticleSet, PmcAuthor, PmcPubDate};
pub use pubmed::{
    PubMedArticle, PubMedArticleSet, PubMedAuthor, SearchParams, SearchResult, SortOrder,
};
pub use transport::{HttpTransport, Transport};
