//! Indeed result pages (UK site).

use super::{SiteSpec, plus_encode};
use crate::SearchQuery;

pub static INDEED: SiteSpec = SiteSpec {
    name: "Indeed",
    base: "https://uk.indeed.com",
    card: "div.job_seen_beacon",
    title: "h2.jobTitle span",
    company: "span[data-testid='company-name']",
    location: "div[data-testid='text-location']",
    summary: "div.job-snippet",
    link: "h2.jobTitle a",
    page_url,
};

// Indeed paginates by result offset, ten listings per page.
fn page_url(query: &SearchQuery, page: u32) -> String {
    format!(
        "https://uk.indeed.com/jobs?q={}&l={}&start={}",
        plus_encode(&query.query),
        plus_encode(&query.location),
        (page - 1) * 10
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginates_by_offset() {
        let query = SearchQuery::new("business development", "London", 3);
        assert_eq!(
            page_url(&query, 1),
            "https://uk.indeed.com/jobs?q=business+development&l=London&start=0"
        );
        assert_eq!(
            page_url(&query, 3),
            "https://uk.indeed.com/jobs?q=business+development&l=London&start=20"
        );
    }
}
