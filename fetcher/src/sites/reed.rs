//! Reed.co.uk result pages.

use super::{SiteSpec, slug};
use crate::SearchQuery;

pub static REED: SiteSpec = SiteSpec {
    name: "Reed",
    base: "https://www.reed.co.uk",
    card: "article.job-result",
    title: "h3.title a",
    company: "a.gtmu-js-job-result-company",
    location: "li.location",
    summary: "div.description",
    link: "h3.title a",
    page_url,
};

fn page_url(query: &SearchQuery, page: u32) -> String {
    format!(
        "https://www.reed.co.uk/jobs/{}-jobs-in-{}?pageno={}",
        slug(&query.query),
        slug(&query.location),
        page
    )
}
