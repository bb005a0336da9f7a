//! PubMed Central decoding
//!
//! PMC EFetch XML (`db=pmc&retmode=xml`) front matter and the PMC ID Converter.

pub mod idconv;
pub mod models;
pub mod parser;
mod reader_utils;

pub use idconv::IdMapping;
pub use models::{PmcArticle, PmcArticleSet, PmcAuthor, PmcPubDate};
pub use parser::parse_article_set;
