//! HTTP fetch for source pages.
//!
//! The reconciliation core never touches the network; commands fetch
//! page HTML here and hand the tables to the normalizer.

use crate::error::Result;

/// Desktop browser user agent; the source serves an empty shell to
/// default client UAs.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Build the shared HTTP client.
pub fn client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().user_agent(USER_AGENT).build()?)
}

/// Fetch a page and return its HTML, failing on non-2xx statuses.
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String> {
    let html = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(html)
}
