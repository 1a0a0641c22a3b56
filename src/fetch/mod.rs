//! Document fetching. The pipeline only sees [`HttpClient`], so tests can
//! swap in a stub or point sources at local files.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result};

pub async fn fetch_text<C: HttpClient>(client: &C, url: &str) -> Result<String> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?.error_for_status()?;
    Ok(resp.text().await?)
}

/// Loads a source document from a local file path or fetches it over HTTP.
///
/// Any failure here is fatal to the run: downstream pricing needs every
/// position, so a partial board would be worse than none.
pub async fn load_source<C: HttpClient>(client: &C, source: &str) -> Result<String> {
    if source.starts_with("http") {
        fetch_text(client, source)
            .await
            .with_context(|| format!("fetching {source}"))
    } else {
        std::fs::read_to_string(source).with_context(|| format!("reading {source}"))
    }
}
