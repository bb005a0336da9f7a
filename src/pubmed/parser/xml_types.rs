//! Internal serde mirror of the PubMed EFetch XML schema

use serde::Deserialize;

use super::deserializers::AbstractTextWithLabel;
use crate::pubmed::models::{PubMedArticle, PubMedAuthor};

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    pub articles: Vec<PubmedArticleXml>,
    /// Present when EFetch answers with `<eFetchResult><ERROR>..</ERROR></eFetchResult>`
    #[serde(rename = "ERROR")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation")]
    medline_citation: MedlineCitation,
}

impl PubmedArticleXml {
    pub(super) fn into_article(self) -> PubMedArticle {
        let medline = self.medline_citation;
        let pmid = medline.pmid.map(|p| p.value).unwrap_or_default();

        let Some(article) = medline.article else {
            return PubMedArticle {
                pmid,
                ..PubMedArticle::default()
            };
        };

        let authors = article
            .author_list
            .map_or_else(Vec::new, |list| list.into_authors());

        let pub_date = article
            .journal
            .and_then(|journal| journal.journal_issue)
            .and_then(|issue| issue.pub_date)
            .unwrap_or_default();

        PubMedArticle {
            pmid,
            title: article.article_title.unwrap_or_default(),
            abstract_text: article.abstract_section.and_then(|a| a.into_text()),
            authors,
            year: pub_date.year,
            month: pub_date.month,
            day: pub_date.day,
            medline_date: pub_date.medline_date,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MedlineCitation {
    #[serde(rename = "PMID")]
    pmid: Option<PmidXml>,
    #[serde(rename = "Article")]
    article: Option<ArticleXml>,
}

#[derive(Debug, Deserialize)]
struct PmidXml {
    #[serde(rename = "$text")]
    value: String,
}

#[derive(Debug, Deserialize)]
struct ArticleXml {
    #[serde(rename = "Journal")]
    journal: Option<Journal>,
    #[serde(rename = "ArticleTitle")]
    article_title: Option<String>,
    #[serde(rename = "Abstract")]
    abstract_section: Option<AbstractSection>,
    #[serde(rename = "AuthorList")]
    author_list: Option<AuthorList>,
}

#[derive(Debug, Deserialize)]
struct Journal {
    #[serde(rename = "JournalIssue")]
    journal_issue: Option<JournalIssue>,
}

#[derive(Debug, Deserialize)]
struct JournalIssue {
    #[serde(rename = "PubDate")]
    pub_date: Option<PubDate>,
}

#[derive(Debug, Default, Deserialize)]
struct PubDate {
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Month")]
    month: Option<String>,
    #[serde(rename = "Day")]
    day: Option<String>,
    #[serde(rename = "MedlineDate")]
    medline_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AbstractSection {
    #[serde(rename = "AbstractText", default)]
    abstract_texts: Vec<AbstractTextWithLabel>,
}

impl AbstractSection {
    /// Single unlabelled sections come back verbatim; labelled ones as "LABEL: text" lines
    fn into_text(self) -> Option<String> {
        if self.abstract_texts.is_empty() {
            return None;
        }

        let text = self
            .abstract_texts
            .into_iter()
            .map(|section| match section.label {
                Some(label) if !label.is_empty() => format!("{}: {}", label, section.text),
                _ => section.text,
            })
            .collect::<Vec<_>>()
            .join("\n");

        Some(text)
    }
}

#[derive(Debug, Deserialize)]
struct AuthorList {
    #[serde(rename = "Author", default)]
    authors: Vec<AuthorXml>,
}

impl AuthorList {
    fn into_authors(self) -> Vec<PubMedAuthor> {
        self.authors
            .into_iter()
            .map(|author| PubMedAuthor {
                last_name: author.last_name,
                fore_name: author.fore_name,
                initials: author.initials,
                collective_name: author.collective_name,
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct AuthorXml {
    #[serde(rename = "LastName")]
    last_name: Option<String>,
    #[serde(rename = "ForeName")]
    fore_name: Option<String>,
    #[serde(rename = "Initials")]
    initials: Option<String>,
    #[serde(rename = "CollectiveName")]
    collective_name: Option<String>,
}
