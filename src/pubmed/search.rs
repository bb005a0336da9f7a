//! ESearch parameters and results

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Sort order for ESearch results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Best match (API default)
    Relevance,
    /// Most recent publication first
    PublicationDate,
    /// Alphabetical by first author
    FirstAuthor,
    /// Alphabetical by journal name
    JournalName,
}

impl SortOrder {
    /// Value of the `sort` query parameter
    pub fn as_api_param(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::PublicationDate => "pub_date",
            SortOrder::FirstAuthor => "Author",
            SortOrder::JournalName => "JournalName",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_param())
    }
}

/// Parameters for an ESearch request against the `pubmed` database
///
/// Every value is sent as its own encoded query parameter.
///
/// # Example
///
/// ```
/// use pubmed_eutils::SearchParams;
///
/// let params = SearchParams::new("cancer")
///     .retmax(1)
///     .date_range("2017/09/28", "2017/09/29");
///
/// assert_eq!(params.term(), "cancer");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    term: String,
    retmax: Option<usize>,
    retstart: Option<usize>,
    date_type: Option<String>,
    min_date: Option<String>,
    max_date: Option<String>,
    sort: Option<SortOrder>,
}

impl SearchParams {
    pub fn new<S: Into<String>>(term: S) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Maximum number of identifiers to return
    pub fn retmax(mut self, retmax: usize) -> Self {
        self.retmax = Some(retmax);
        self
    }

    /// Index of the first identifier to return
    pub fn retstart(mut self, retstart: usize) -> Self {
        self.retstart = Some(retstart);
        self
    }

    /// Restrict results to a date window (`YYYY`, `YYYY/MM` or `YYYY/MM/DD`)
    ///
    /// The API only honours the window when both ends are given.
    pub fn date_range<S: Into<String>>(mut self, min_date: S, max_date: S) -> Self {
        self.min_date = Some(min_date.into());
        self.max_date = Some(max_date.into());
        self
    }

    /// Date field used by [`date_range`](Self::date_range), e.g. `pdat` or `edat`
    pub fn date_type<S: Into<String>>(mut self, date_type: S) -> Self {
        self.date_type = Some(date_type.into());
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Optional parameters in the order they are sent
    pub(crate) fn optional_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(retmax) = self.retmax {
            params.push(("retmax".to_string(), retmax.to_string()));
        }
        if let Some(retstart) = self.retstart {
            params.push(("retstart".to_string(), retstart.to_string()));
        }
        if let (Some(min_date), Some(max_date)) = (&self.min_date, &self.max_date) {
            if let Some(date_type) = &self.date_type {
                params.push(("datetype".to_string(), date_type.clone()));
            }
            params.push(("mindate".to_string(), min_date.clone()));
            params.push(("maxdate".to_string(), max_date.clone()));
        }
        if let Some(sort) = self.sort {
            params.push(("sort".to_string(), sort.as_api_param().to_string()));
        }

        params
    }
}

impl From<&str> for SearchParams {
    fn from(term: &str) -> Self {
        Self::new(term)
    }
}

impl From<String> for SearchParams {
    fn from(term: String) -> Self {
        Self::new(term)
    }
}

/// Decoded ESearch result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matching records, as reported by the API
    pub count: String,
    /// Page size
    pub retmax: String,
    /// Page offset
    pub retstart: String,
    /// Matching PMIDs in API order
    pub id_list: Vec<String>,
    /// How the API interpreted the term
    pub query_translation: Option<String>,
    pub translation_set: Vec<Value>,
    pub translation_stack: Vec<Value>,
    /// `ERROR` message reported inside an otherwise successful response
    pub error: Option<String>,
    /// `warninglist` block, passed through untouched
    pub warnings: Option<Value>,
    /// Response `header` block
    pub header: HashMap<String, Value>,
}

impl SearchResult {
    /// Result of a search that matched nothing
    pub fn empty() -> Self {
        Self {
            count: "0".to_string(),
            retmax: "0".to_string(),
            retstart: "0".to_string(),
            id_list: Vec::new(),
            query_translation: None,
            translation_set: Vec::new(),
            translation_stack: Vec::new(),
            error: None,
            warnings: None,
            header: HashMap::new(),
        }
    }

    /// `count` as a number, if the API sent a numeric value
    pub fn total_count(&self) -> Option<usize> {
        self.count.parse().ok()
    }

    pub fn is_empty(&self) -> bool {
        self.id_list.is_empty()
    }
}
