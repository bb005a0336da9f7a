//! Request URL construction
//!
//! Base URLs are parsed once at client construction. Every query parameter value
//! is percent-encoded, so caller input can never add or override parameters.

use crate::error::{PubMedError, Result};
use url::Url;

/// A validated base URL for one remote tool family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    /// Parse and validate a base URL
    ///
    /// A trailing slash is added when missing so that tool paths resolve below the
    /// base instead of replacing its last segment.
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_eutils::endpoint::Endpoint;
    ///
    /// let eutils = Endpoint::parse("https://eutils.ncbi.nlm.nih.gov/entrez/eutils").unwrap();
    /// let url = eutils
    ///     .url("esearch.fcgi")
    ///     .unwrap()
    ///     .param("db", "pubmed")
    ///     .param("term", "covid-19 & asthma")
    ///     .build();
    ///
    /// assert_eq!(
    ///     url.as_str(),
    ///     "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi?db=pubmed&term=covid-19%20%26%20asthma"
    /// );
    /// ```
    pub fn parse(base: &str) -> Result<Self> {
        let mut normalized = base.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        let base = Url::parse(&normalized).map_err(|source| PubMedError::InvalidBaseUrl {
            url: base.to_string(),
            source,
        })?;

        if base.cannot_be_a_base() {
            return Err(PubMedError::InvalidBaseUrl {
                url: base.to_string(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            });
        }

        Ok(Self { base })
    }

    pub(crate) fn as_url(&self) -> &Url {
        &self.base
    }

    /// Start building a request URL for a tool path relative to the base
    pub fn url(&self, path: &str) -> Result<UrlBuilder> {
        let url = self
            .base
            .join(path)
            .map_err(|source| PubMedError::InvalidBaseUrl {
                url: format!("{}{}", self.base, path),
                source,
            })?;

        Ok(UrlBuilder {
            url,
            params: Vec::new(),
        })
    }
}

/// Accumulates query parameters for one request
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    url: Url,
    params: Vec<(String, String)>,
}

impl UrlBuilder {
    pub fn param<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Add the parameter only when a value is present
    pub fn param_opt<K: Into<String>, V: ToString>(self, key: K, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    pub fn params<I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.params.extend(params);
        self
    }

    pub fn build(self) -> Url {
        let mut url = self.url;

        if self.params.is_empty() {
            url.set_query(None);
        } else {
            let query = self
                .params
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(value)
                    )
                })
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query));
        }

        url
    }
}
