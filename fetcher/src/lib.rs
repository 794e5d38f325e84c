//! Job listing fetcher.
//!
//! One generic fetch loop; every supported board plugs in as a
//! [`sites::SiteSpec`] describing its result page URLs and the CSS
//! selectors that map a listing card onto a [`common::Listing`].

pub mod extract;
pub mod sites;

use anyhow::Result;
use common::Listing;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use sites::{Site, SiteSpec};

/// Browser User-Agent sent with every request; some boards serve an
/// empty shell to unknown clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

/// The boards searched here are UK-centric.
pub const ACCEPT_LANGUAGE_VALUE: &str = "en-GB,en;q=0.9";

/// Upper bound on result pages fetched per board and search.
pub const MAX_PAGES: u32 = 5;

/// One user-triggered search: keywords, location, page count.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub query: String,
    pub location: String,
    pub pages: u32,
}

impl SearchQuery {
    /// `pages` is clamped to `1..=MAX_PAGES`.
    pub fn new(query: impl Into<String>, location: impl Into<String>, pages: u32) -> Self {
        Self {
            query: query.into(),
            location: location.into(),
            pages: pages.clamp(1, MAX_PAGES),
        }
    }
}

/// Builds the blocking HTTP client used for every page fetch.
pub fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Fetches every result page of one board and extracts its listings.
///
/// Pages are fetched sequentially. A transport failure or a non-2xx
/// status skips that page and carries on with the next one.
pub fn fetch_site(client: &Client, spec: &SiteSpec, query: &SearchQuery) -> Vec<Listing> {
    let mut listings = Vec::new();

    for page in 1..=query.pages {
        let url = (spec.page_url)(query, page);
        println!("📡 Fetching {} page {}: {}", spec.name, page, url);

        let response = match client.get(&url).send() {
            Ok(resp) => resp,
            Err(e) => {
                eprintln!("❌ Failed to fetch {}: {}", url, e);
                continue;
            }
        };

        if !response.status().is_success() {
            eprintln!("⚠️  {} returned {} for page {}", spec.name, response.status(), page);
            continue;
        }

        let html = match response.text() {
            Ok(text) => text,
            Err(e) => {
                eprintln!("❌ Failed to read response body: {}", e);
                continue;
            }
        };

        let rows = extract::listings(&html, spec);
        println!("✅ {} listings on page {}", rows.len(), page);
        listings.extend(rows);
    }

    listings
}

/// Runs the search across `site_list` sequentially and concatenates the
/// results in scrape order. Duplicate listings across pages or boards
/// are kept as-is.
pub fn fetch_all(client: &Client, site_list: &[Site], query: &SearchQuery) -> Vec<Listing> {
    let mut listings = Vec::new();
    for &site in site_list {
        listings.extend(fetch_site(client, sites::spec(site), query));
    }
    listings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_clamped_to_bounds() {
        assert_eq!(SearchQuery::new("sales", "London", 0).pages, 1);
        assert_eq!(SearchQuery::new("sales", "London", 3).pages, 3);
        assert_eq!(SearchQuery::new("sales", "London", 99).pages, MAX_PAGES);
    }
}
