use serde::{Deserialize, Serialize};

/// All articles contained in one PubMed EFetch XML response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubMedArticleSet {
    pub articles: Vec<PubMedArticle>,
}

impl PubMedArticleSet {
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Look up an article by PMID
    pub fn find(&self, pmid: &str) -> Option<&PubMedArticle> {
        self.articles.iter().find(|article| article.pmid == pmid)
    }
}

/// A PubMed citation decoded from EFetch XML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubMedArticle {
    /// PubMed ID (empty if the record has none)
    pub pmid: String,
    /// Article title
    pub title: String,
    /// Abstract text; labelled sections are joined line by line
    pub abstract_text: Option<String>,
    /// Authors in citation order
    pub authors: Vec<PubMedAuthor>,
    /// Publication year as written in the record
    pub year: Option<String>,
    /// Publication month as written in the record (e.g. "Sep" or "09")
    pub month: Option<String>,
    /// Publication day as written in the record
    pub day: Option<String>,
    /// Free-form date used by records without a structured date (e.g. "1998 Dec-1999 Jan")
    pub medline_date: Option<String>,
}

/// A PubMed author entry
///
/// Name parts are kept separate; nothing is reformatted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubMedAuthor {
    /// Family name
    pub last_name: Option<String>,
    /// Given name(s)
    pub fore_name: Option<String>,
    pub initials: Option<String>,
    /// Group name for collective authors such as consortia
    pub collective_name: Option<String>,
}

impl PubMedAuthor {
    /// Display name: "ForeName LastName", or the collective name
    pub fn display_name(&self) -> String {
        if let Some(collective) = &self.collective_name {
            return collective.clone();
        }

        [self.fore_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
