//! Search, fetch and convert against the live NCBI services
//!
//! Run with `cargo run --example quickstart`. Log verbosity follows `RUST_LOG`
//! (e.g. `RUST_LOG=pubmed_eutils=debug`).

use anyhow::Result;
use pubmed_eutils::{ClientConfig, Database, PubMedClient, RetMode, SearchParams};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ClientConfig::new().with_tool("pubmed-eutils-quickstart");
    let client = PubMedClient::with_config(config)?;

    println!("🔍 Searching PubMed");
    let params = SearchParams::new("cancer")
        .retmax(1)
        .date_range("2017/09/28", "2017/09/29");
    let result = client.search_with(params).await?;
    println!("   {} matches, first page: {:?}", result.count, result.id_list);

    println!("\n📄 Plain-text abstract of PMID 9997");
    let text = client
        .fetch("9997", Database::PubMed, "abstract", RetMode::Text)
        .await?;
    println!("{}", text.as_text().unwrap_or_default());

    println!("📚 Parsed citation of PMID 9997");
    for article in client.fetch_pubmed_articles("9997").await?.articles {
        let authors: Vec<String> = article.authors.iter().map(|a| a.display_name()).collect();
        println!("   {} ({})", article.title, authors.join(", "));
    }

    println!("\n🔗 Converting PMID 23193287");
    let mapping = client.convert_id("23193287").await?;
    println!("   PMID {} ↔ {}", mapping.pmid, mapping.pmcid);

    println!("\n📖 PMC front matter of {}", mapping.pmcid);
    let set = client.fetch_pmc_articles(&mapping.pmcid).await?;
    for article in &set.articles {
        println!("   {}", article.title);
        if let Some(date) = article.pub_date() {
            println!(
                "   published {}",
                date.year.as_deref().unwrap_or("unknown year")
            );
        }
        if let Some(abstract_text) = article.abstract_text() {
            let preview: String = abstract_text.chars().take(160).collect();
            println!("   {}…", preview);
        }
    }

    Ok(())
}
