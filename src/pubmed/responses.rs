use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::pubmed::search::SearchResult;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ESearchResponse {
    #[serde(default)]
    pub header: HashMap<String, Value>,
    pub esearchresult: ESearchData,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ESearchData {
    #[serde(default, rename = "ERROR")]
    pub error: Option<String>,
    #[serde(default)]
    pub count: Option<String>,
    #[serde(default)]
    pub retmax: Option<String>,
    #[serde(default)]
    pub retstart: Option<String>,
    #[serde(default)]
    pub idlist: Vec<String>,
    #[serde(default)]
    pub translationset: Vec<Value>,
    #[serde(default)]
    pub translationstack: Vec<Value>,
    /// How PubMed interpreted and translated the search query
    #[serde(default)]
    pub querytranslation: Option<String>,
    #[serde(default)]
    pub warninglist: Option<Value>,
}

impl ESearchResponse {
    pub(crate) fn into_search_result(self) -> SearchResult {
        let data = self.esearchresult;

        SearchResult {
            count: data.count.unwrap_or_else(|| "0".to_string()),
            retmax: data.retmax.unwrap_or_else(|| "0".to_string()),
            retstart: data.retstart.unwrap_or_else(|| "0".to_string()),
            id_list: data.idlist,
            query_translation: data.querytranslation,
            translation_set: data.translationset,
            translation_stack: data.translationstack,
            error: data.error,
            warnings: data.warninglist,
            header: self.header,
        }
    }
}
