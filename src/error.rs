use std::result;

use thiserror::Error;

/// Error types for E-utilities client operations
#[derive(Error, Debug)]
pub enum PubMedError {
    /// A configured base URL could not be parsed
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Database selector outside the accepted set (`pubmed`, `pmc`)
    #[error("Invalid database: '{value}' (expected 'pubmed' or 'pmc')")]
    InvalidDatabase { value: String },

    /// Return mode outside the accepted set (`text`, `xml`)
    #[error("Invalid retmode: '{value}' (expected 'text' or 'xml')")]
    InvalidRetMode { value: String },

    /// Empty or otherwise unusable identifier
    #[error("Invalid identifier: '{id}'")]
    InvalidId { id: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Response body is not valid UTF-8
    #[error("Response body is not valid UTF-8: {0}")]
    InvalidUtf8Body(#[from] std::string::FromUtf8Error),

    /// The ID Converter answered with something that is not a record list
    #[error("ID conversion of '{id}' failed: bad response: {source}")]
    IdConversionBadResponse {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// The ID Converter answered successfully but returned no records
    #[error("ID conversion of '{id}' failed: no records in response")]
    IdConversionNoRecords { id: String },

    /// The first ID Converter record carries an error status
    #[error("ID conversion of '{id}' failed: {message}")]
    IdConversionFailed { id: String, message: String },
}

pub type Result<T> = result::Result<T, PubMedError>;

impl From<quick_xml::Error> for PubMedError {
    fn from(err: quick_xml::Error) -> Self {
        PubMedError::XmlError(err.to_string())
    }
}

impl From<quick_xml::DeError> for PubMedError {
    fn from(err: quick_xml::DeError) -> Self {
        PubMedError::XmlError(format!("Failed to deserialize XML: {}", err))
    }
}

impl PubMedError {
    /// Whether the error was raised before any request left the process
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            PubMedError::InvalidDatabase { .. }
                | PubMedError::InvalidRetMode { .. }
                | PubMedError::InvalidId { .. }
        )
    }

    /// Whether the error is one of the ID Converter domain failures
    pub fn is_id_conversion_error(&self) -> bool {
        matches!(
            self,
            PubMedError::IdConversionBadResponse { .. }
                | PubMedError::IdConversionNoRecords { .. }
                | PubMedError::IdConversionFailed { .. }
        )
    }
}
