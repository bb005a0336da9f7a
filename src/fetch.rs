//! EFetch selectors and response variants

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PubMedError, Result};
use crate::pmc::PmcArticleSet;
use crate::pubmed::PubMedArticleSet;

/// Entrez database queried by EFetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    PubMed,
    Pmc,
}

impl Database {
    /// Wire name used for the `db` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Database::PubMed => "pubmed",
            Database::Pmc => "pmc",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Database {
    type Err = PubMedError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pubmed" => Ok(Database::PubMed),
            "pmc" => Ok(Database::Pmc),
            _ => Err(PubMedError::InvalidDatabase {
                value: s.to_string(),
            }),
        }
    }
}

/// EFetch return mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetMode {
    Text,
    Xml,
}

impl RetMode {
    /// Wire name used for the `retmode` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            RetMode::Text => "text",
            RetMode::Xml => "xml",
        }
    }

    /// Parse a return mode for `db`
    ///
    /// PMC answers in XML when no mode is given, so an empty value resolves to
    /// [`RetMode::Xml`] there. PubMed has no such default and rejects it.
    ///
    /// ```
    /// use pubmed_eutils::{Database, RetMode};
    ///
    /// assert_eq!(RetMode::resolve("", Database::Pmc)?, RetMode::Xml);
    /// assert!(RetMode::resolve("", Database::PubMed).is_err());
    /// # Ok::<(), pubmed_eutils::PubMedError>(())
    /// ```
    pub fn resolve(value: &str, db: Database) -> Result<Self> {
        match (value, db) {
            ("", Database::Pmc) => Ok(RetMode::Xml),
            _ => value.parse(),
        }
    }
}

impl fmt::Display for RetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RetMode {
    type Err = PubMedError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(RetMode::Text),
            "xml" => Ok(RetMode::Xml),
            _ => Err(PubMedError::InvalidRetMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Body of an EFetch call, shaped by the requested database and return mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchResponse {
    /// `retmode=text`: the body exactly as received
    PlainText(String),
    /// `db=pubmed&retmode=xml`
    PubMed(PubMedArticleSet),
    /// `db=pmc&retmode=xml`
    Pmc(PmcArticleSet),
}

impl FetchResponse {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FetchResponse::PlainText(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_pubmed(&self) -> Option<&PubMedArticleSet> {
        match self {
            FetchResponse::PubMed(set) => Some(set),
            _ => None,
        }
    }

    pub fn as_pmc(&self) -> Option<&PmcArticleSet> {
        match self {
            FetchResponse::Pmc(set) => Some(set),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            FetchResponse::PlainText(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_pubmed(self) -> Option<PubMedArticleSet> {
        match self {
            FetchResponse::PubMed(set) => Some(set),
            _ => None,
        }
    }

    pub fn into_pmc(self) -> Option<PmcArticleSet> {
        match self {
            FetchResponse::Pmc(set) => Some(set),
            _ => None,
        }
    }
}
