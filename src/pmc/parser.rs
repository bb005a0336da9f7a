//! PMC EFetch XML parser
//!
//! Walks `pmc-articleset/article` documents with the `quick-xml` event reader.
//! Only the front matter (`front/article-meta`) is decoded; `body`, `back` and
//! sub-articles are skipped without being parsed into models.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, instrument, warn};

use super::models::{PmcArticle, PmcArticleSet, PmcAuthor, PmcPubDate};
use super::reader_utils::{get_attr, make_reader, read_inner_xml, read_text_content, skip_element};
use crate::error::{PubMedError, Result};
use crate::transport::strip_bom;

const ARTICLE_META: &[&str] = &["front", "article-meta"];
const TITLE_GROUP: &[&str] = &["front", "article-meta", "title-group"];
const CONTRIB_GROUP: &[&str] = &["front", "article-meta", "contrib-group"];

/// Parse every `<article>` in a PMC EFetch XML response
///
/// # Errors
///
/// Returns [`PubMedError::XmlError`] for malformed XML, a document that ends
/// inside an article, or an EFetch `ERROR` document.
///
/// # Example
///
/// ```
/// use pubmed_eutils::pmc::parse_article_set;
///
/// let xml = r#"<pmc-articleset><article><front><article-meta>
///   <title-group><article-title>Example</article-title></title-group>
///   <abstract><p>Text with <italic>markup</italic>.</p></abstract>
/// </article-meta></front></article></pmc-articleset>"#;
///
/// let set = parse_article_set(xml)?;
/// assert_eq!(set.articles[0].title, "Example");
/// assert_eq!(
///     set.articles[0].abstract_xml.as_deref(),
///     Some("<p>Text with <italic>markup</italic>.</p>")
/// );
/// # Ok::<(), pubmed_eutils::PubMedError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_article_set(xml: &str) -> Result<PmcArticleSet> {
    let mut reader = make_reader(strip_bom(xml));
    let mut articles = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"article" => articles.push(parse_article(&mut reader)?),
                b"ERROR" | b"error" => {
                    let message = read_text_content(&mut reader, e.name().as_ref())?;
                    warn!(error = %message, "EFetch returned an error document");
                    return Err(PubMedError::XmlError(format!(
                        "EFetch returned an error: {}",
                        message
                    )));
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    debug!(articles_parsed = articles.len(), "Completed PMC XML parsing");

    Ok(PmcArticleSet { articles })
}

/// Parse one article; the reader has just consumed its `Start` event
fn parse_article(reader: &mut Reader<&[u8]>) -> Result<PmcArticle> {
    let mut article = PmcArticle::default();
    // Element names open below <article>
    let mut path: Vec<String> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

                if path.is_empty() && name != "front" {
                    skip_element(reader, e.name())?;
                    continue;
                }

                match name.as_str() {
                    "article-title" if at(&path, TITLE_GROUP) => {
                        article.title = read_text_content(reader, b"article-title")?;
                    }
                    "abstract" if at(&path, ARTICLE_META) => {
                        let inner = read_inner_xml(reader, e.name())?;
                        if article.abstract_xml.is_none() {
                            article.abstract_xml = Some(inner);
                        }
                    }
                    "article-id" if at(&path, ARTICLE_META) => {
                        let id_type = get_attr(&e, b"pub-id-type");
                        let value = read_text_content(reader, b"article-id")?;
                        match id_type.as_deref() {
                            Some("pmc") | Some("pmcid") => article.pmcid = Some(value),
                            Some("pmid") => article.pmid = Some(value),
                            Some("doi") => article.doi = Some(value),
                            _ => {}
                        }
                    }
                    "contrib" if at(&path, CONTRIB_GROUP) => {
                        article.authors.push(parse_contrib(reader, &e)?);
                    }
                    "pub-date" if at(&path, ARTICLE_META) => {
                        article.pub_dates.push(parse_pub_date(reader, &e)?);
                    }
                    _ => path.push(name),
                }
            }
            Event::End(_) => {
                if path.pop().is_none() {
                    break;
                }
            }
            Event::Eof => {
                return Err(PubMedError::XmlError(
                    "Unexpected end of document inside <article>".to_string(),
                ));
            }
            _ => {}
        }
    }

    debug!(
        title = %article.title,
        authors = article.authors.len(),
        has_abstract = article.abstract_xml.is_some(),
        "Parsed PMC article"
    );

    Ok(article)
}

fn parse_contrib(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<PmcAuthor> {
    let mut author = PmcAuthor {
        contrib_type: get_attr(start, b"contrib-type"),
        ..PmcAuthor::default()
    };
    let mut depth: u32 = 0;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                // First <name> wins; <name-alternatives> may repeat it
                b"surname" if author.surname.is_none() => {
                    author.surname = Some(read_text_content(reader, b"surname")?);
                }
                b"given-names" if author.given_names.is_none() => {
                    author.given_names = Some(read_text_content(reader, b"given-names")?);
                }
                _ => depth += 1,
            },
            Event::End(_) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Event::Eof => {
                return Err(PubMedError::XmlError(
                    "Unexpected end of document inside <contrib>".to_string(),
                ));
            }
            _ => {}
        }
    }

    Ok(author)
}

fn parse_pub_date(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<PmcPubDate> {
    let mut date = PmcPubDate {
        pub_type: get_attr(start, b"pub-type").or_else(|| get_attr(start, b"publication-format")),
        ..PmcPubDate::default()
    };
    let mut depth: u32 = 0;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"year" => date.year = Some(read_text_content(reader, b"year")?),
                b"month" => date.month = Some(read_text_content(reader, b"month")?),
                b"day" => date.day = Some(read_text_content(reader, b"day")?),
                _ => depth += 1,
            },
            Event::End(_) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Event::Eof => {
                return Err(PubMedError::XmlError(
                    "Unexpected end of document inside <pub-date>".to_string(),
                ));
            }
            _ => {}
        }
    }

    Ok(date)
}

fn at(path: &[String], expected: &[&str]) -> bool {
    path.len() == expected.len() && path.iter().zip(expected).all(|(a, b)| a.as_str() == *b)
}
