//! PubMed EFetch XML parser
//!
//! Decodes `PubmedArticleSet` documents (`db=pubmed&retmode=xml`) into
//! [`PubMedArticleSet`]. Inline formatting tags are stripped before the
//! `quick-xml` serde pass; everything else maps through the internal
//! `xml_types` mirror of the schema.

mod deserializers;
mod preprocessing;
mod xml_types;

use crate::error::{PubMedError, Result};
use crate::pubmed::models::PubMedArticleSet;
use crate::transport::strip_bom;
use quick_xml::de::from_str;
use tracing::{debug, instrument, warn};
use xml_types::PubmedArticleSet;

/// Parse every article in an EFetch XML response
///
/// # Errors
///
/// Returns [`PubMedError::XmlError`] if the document is malformed, does not match
/// the `PubmedArticleSet` schema, or carries an EFetch `ERROR` element.
///
/// # Example
///
/// ```
/// use pubmed_eutils::pubmed::parse_article_set;
///
/// let xml = r#"<?xml version="1.0"?>
/// <PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID Version="1">12345678</PMID>
///       <Article>
///         <ArticleTitle>Example Article</ArticleTitle>
///       </Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let set = parse_article_set(xml)?;
/// assert_eq!(set.articles[0].title, "Example Article");
/// # Ok::<(), pubmed_eutils::PubMedError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_article_set(xml: &str) -> Result<PubMedArticleSet> {
    let cleaned_xml = preprocessing::strip_inline_html_tags(strip_bom(xml));

    let article_set: PubmedArticleSet = from_str(&cleaned_xml)?;

    if let Some(message) = article_set.error {
        warn!(error = %message, "EFetch returned an error document");
        return Err(PubMedError::XmlError(format!(
            "EFetch returned an error: {}",
            message
        )));
    }

    let articles: Vec<_> = article_set
        .articles
        .into_iter()
        .map(|article| article.into_article())
        .collect();

    debug!(articles_parsed = articles.len(), "Completed PubMed XML parsing");

    Ok(PubMedArticleSet { articles })
}
