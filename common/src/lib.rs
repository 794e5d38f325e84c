//! Shared data model for the job radar workspace.
//!
//! The fetcher produces [`Listing`] records, the server filters, ranks
//! and exports them.

use serde::{Deserialize, Serialize};

pub mod export;
pub mod keywords;

/// One scraped job listing.
///
/// Only the title is guaranteed: every other field degrades to `None`
/// when the source page does not carry the matching element. Listings
/// are immutable once created and the whole collection is replaced on
/// each new search.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Listing {
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>,
}

impl Listing {
    /// Case-insensitive substring match against the title or summary.
    /// An empty filter matches every listing.
    pub fn matches(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        if self.title.to_lowercase().contains(&needle) {
            return true;
        }
        self.summary
            .as_ref()
            .is_some_and(|s| s.to_lowercase().contains(&needle))
    }
}
