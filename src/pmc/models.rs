use quick_xml::escape::unescape;
use serde::{Deserialize, Serialize};

use super::reader_utils::strip_xml_tags;

/// All articles contained in one PMC EFetch XML response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmcArticleSet {
    pub articles: Vec<PmcArticle>,
}

impl PmcArticleSet {
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Front matter of a PMC (JATS) article
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmcArticle {
    /// PMC ID as written in `article-id pub-id-type="pmc"` (prefix not normalised)
    pub pmcid: Option<String>,
    /// PubMed ID, when the article carries one
    pub pmid: Option<String>,
    pub doi: Option<String>,
    /// Article title with inline markup removed
    pub title: String,
    /// Inner markup of the first `<abstract>`, exactly as received
    pub abstract_xml: Option<String>,
    /// Contributors in document order
    pub authors: Vec<PmcAuthor>,
    /// Every `pub-date` in document order
    pub pub_dates: Vec<PmcPubDate>,
}

impl PmcArticle {
    /// Abstract with all markup removed and entities resolved
    pub fn abstract_text(&self) -> Option<String> {
        let stripped = strip_xml_tags(self.abstract_xml.as_deref()?);
        match unescape(&stripped) {
            Ok(text) => Some(text.into_owned()),
            Err(_) => Some(stripped),
        }
    }

    /// Preferred publication date: print, then electronic, then whatever comes first
    pub fn pub_date(&self) -> Option<&PmcPubDate> {
        let by_type = |wanted: &[&str]| {
            self.pub_dates.iter().find(|date| {
                date.pub_type
                    .as_deref()
                    .is_some_and(|pub_type| wanted.contains(&pub_type))
            })
        };

        by_type(&["ppub", "print"])
            .or_else(|| by_type(&["epub", "electronic"]))
            .or_else(|| self.pub_dates.first())
    }

    /// Contributors whose `contrib-type` is `author`
    pub fn authors_only(&self) -> impl Iterator<Item = &PmcAuthor> {
        self.authors
            .iter()
            .filter(|author| author.contrib_type.as_deref() == Some("author"))
    }
}

/// A `contrib` entry of the article's contributor group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmcAuthor {
    /// Role tag from the `contrib-type` attribute (usually "author" or "editor")
    pub contrib_type: Option<String>,
    /// Family name
    pub surname: Option<String>,
    pub given_names: Option<String>,
}

/// One `pub-date` element
///
/// Date parts stay as the strings found in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmcPubDate {
    /// `pub-type` (e.g. "ppub", "epub"), or `publication-format` on newer JATS
    pub pub_type: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}
