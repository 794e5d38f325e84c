//! Google Jobs result widget.
//!
//! Google renders listings inside its search page job widget; cards
//! often carry no direct link or snippet, and those fields simply stay
//! empty.

use super::{SiteSpec, plus_encode};
use crate::SearchQuery;

pub static GOOGLE_JOBS: SiteSpec = SiteSpec {
    name: "Google Jobs",
    base: "https://www.google.com",
    card: "div.PwjeAc",
    title: "div.BjJfJf",
    company: "div.vNEEBe",
    location: "div.Qk80Jf",
    summary: "span.HBvzbc",
    link: "a.pMhGee",
    page_url,
};

fn page_url(query: &SearchQuery, page: u32) -> String {
    format!(
        "https://www.google.com/search?q={}+jobs+in+{}&ibp=htl;jobs&start={}",
        plus_encode(&query.query),
        plus_encode(&query.location),
        (page - 1) * 10
    )
}
