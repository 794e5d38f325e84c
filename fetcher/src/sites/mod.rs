//! Board adapters: one scraping spec per supported job site.
//!
//! A [`SiteSpec`] is the whole per-board surface: how to build a result
//! page URL and which CSS selectors map a listing card onto a
//! [`common::Listing`]. The fetch loop and the extraction routine are
//! shared; adding a board means adding one spec.

mod google;
mod indeed;
mod reed;

use crate::SearchQuery;
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub use google::GOOGLE_JOBS;
pub use indeed::INDEED;
pub use reed::REED;

/// Scraping spec for one job board.
pub struct SiteSpec {
    pub name: &'static str,
    /// Prefix for resolving relative listing links.
    pub base: &'static str,
    /// Selects one listing card.
    pub card: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
    /// Anchor carrying the listing URL, looked up within the card.
    pub link: &'static str,
    /// Builds the result page URL for a query and a 1-based page number.
    pub page_url: fn(&SearchQuery, u32) -> String,
}

/// Supported boards, selectable from the CLI and the scrape endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    Reed,
    Indeed,
    Google,
}

pub const ALL: [Site; 3] = [Site::Reed, Site::Indeed, Site::Google];

pub fn spec(site: Site) -> &'static SiteSpec {
    match site {
        Site::Reed => &REED,
        Site::Indeed => &INDEED,
        Site::Google => &GOOGLE_JOBS,
    }
}

/// Lowercases `raw` and collapses every non-alphanumeric run into a
/// single hyphen, the way Reed spells multi-word queries in its paths.
pub(crate) fn slug(raw: &str) -> String {
    let re = Regex::new(r"[^a-z0-9]+").unwrap();
    re.replace_all(&raw.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// Joins words with `+` for use in query strings.
pub(crate) fn plus_encode(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_hyphenates_and_lowercases() {
        assert_eq!(slug("Business Development"), "business-development");
        assert_eq!(slug("  C++ / embedded  "), "c-embedded");
        assert_eq!(slug("London"), "london");
    }

    #[test]
    fn plus_encode_joins_words() {
        assert_eq!(plus_encode("business development"), "business+development");
        assert_eq!(plus_encode(" London "), "London");
    }

    #[test]
    fn every_board_has_a_spec() {
        for site in ALL {
            assert!(!spec(site).name.is_empty());
        }
    }
}
