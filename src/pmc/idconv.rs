//! PMC ID Converter JSON types
//!
//! Decodes `idconv/v1.0/?format=json` responses and applies the lookup policy
//! used by [`crate::PubMedClient::convert_id`].

use std::fmt;
use std::result;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::error::{PubMedError, Result};
use crate::transport::strip_bom;

/// One record of an ID Converter response
///
/// `pmid` and `pmcid` are empty when the service could not map the requested id;
/// `status`/`errmsg` then say why.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdMapping {
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub pmid: String,
    #[serde(default)]
    pub pmcid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// The id as sent, echoed back by the service
    #[serde(
        rename = "requested-id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub requested_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errmsg: Option<String>,
}

impl IdMapping {
    /// Whether the service reported this record as failed
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }
}

/// Top-level ID Converter response
#[derive(Debug, Deserialize)]
pub(crate) struct IdConvResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub records: Vec<IdMapping>,
}

impl IdConvResponse {
    /// Decode a response body; `id` is the request's `ids` value, used in errors
    pub(crate) fn from_body(id: &str, body: &str) -> Result<Self> {
        serde_json::from_str(strip_bom(body)).map_err(|source| {
            warn!(id = %id, error = %source, "ID Converter response did not decode");
            PubMedError::IdConversionBadResponse {
                id: id.to_string(),
                source,
            }
        })
    }

    /// All records; an empty list is a "not found" error
    pub(crate) fn into_records(self, id: &str) -> Result<Vec<IdMapping>> {
        if self.records.is_empty() {
            warn!(id = %id, status = ?self.status, "ID Converter returned no records");
            return Err(PubMedError::IdConversionNoRecords { id: id.to_string() });
        }
        Ok(self.records)
    }

    /// The first record, failing when it carries an error status
    pub(crate) fn into_first_mapping(self, id: &str) -> Result<IdMapping> {
        let mapping = self
            .into_records(id)?
            .into_iter()
            .next()
            .ok_or_else(|| PubMedError::IdConversionNoRecords { id: id.to_string() })?;

        if mapping.is_error() {
            let message = mapping
                .errmsg
                .clone()
                .unwrap_or_else(|| "unknown error".to_string());
            warn!(id = %id, error = %message, "ID Converter reported a failed record");
            return Err(PubMedError::IdConversionFailed {
                id: id.to_string(),
                message,
            });
        }

        Ok(mapping)
    }
}

/// Accept `"123"` and `123` alike
fn deserialize_string_or_number<'de, D>(deserializer: D) -> result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct StringOrNumberVisitor;

    impl<'de> Visitor<'de> for StringOrNumberVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or an integer")
        }

        fn visit_str<E>(self, value: &str) -> result::Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> result::Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> result::Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> result::Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_unit<E>(self) -> result::Result<String, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(StringOrNumberVisitor)
}
