//! PubMed search and citation decoding
//!
//! ESearch JSON and PubMed EFetch XML (`db=pubmed`) types.

pub mod models;
pub mod parser;
pub(crate) mod responses;
pub mod search;

pub use models::{PubMedArticle, PubMedArticleSet, PubMedAuthor};
pub use parser::parse_article_set;
pub use search::{SearchParams, SearchResult, SortOrder};
