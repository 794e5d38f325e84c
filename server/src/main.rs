//! Job Radar dashboard server
//!
//! Serves the scraped listing table with filtering, keyword statistics,
//! full-text search and CSV export, and re-runs the scrape on demand.

mod index;

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use common::{Listing, export, keywords};
use fetcher::SearchQuery;
use fetcher::sites::{self, Site};
use index::{SearchHit, SearchIndex};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

#[derive(Parser)]
#[command(name = "server")]
#[command(about = "Dashboard API over scraped job listings", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Listings file produced by the fetcher
    #[arg(long, default_value = "data/listings.json")]
    data: PathBuf,

    /// Search index directory
    #[arg(long, default_value = "search_index")]
    index_dir: PathBuf,
}

/// Shared application state
struct AppState {
    listings: RwLock<Vec<Listing>>,
    index: SearchIndex,
    data_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct FilterParams {
    filter: Option<String>,
}

/// Listing table returned by the API
#[derive(Debug, Serialize)]
struct ListingsResponse {
    total: usize,
    listings: Vec<Listing>,
}

/// Handler for GET /api/listings?filter=<text>
async fn listings_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Json<ListingsResponse> {
    let filter = params.filter.unwrap_or_default();
    let listings: Vec<Listing> = state
        .listings
        .read()
        .unwrap()
        .iter()
        .filter(|l| l.matches(&filter))
        .cloned()
        .collect();

    Json(ListingsResponse {
        total: listings.len(),
        listings,
    })
}

#[derive(Debug, Deserialize)]
struct KeywordParams {
    top: Option<usize>,
}

#[derive(Debug, Serialize)]
struct KeywordEntry {
    token: String,
    count: usize,
}

#[derive(Debug, Serialize)]
struct KeywordResponse {
    total_listings: usize,
    keywords: Vec<KeywordEntry>,
}

/// Handler for GET /api/keywords?top=<n>
async fn keywords_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<KeywordParams>,
) -> Json<KeywordResponse> {
    let limit = params.top.unwrap_or(10);
    let listings = state.listings.read().unwrap();
    let summaries: Vec<&str> = listings
        .iter()
        .filter_map(|l| l.summary.as_deref())
        .collect();

    let keywords = keywords::top_keywords(&summaries, limit)
        .into_iter()
        .map(|(token, count)| KeywordEntry { token, count })
        .collect();

    Json(KeywordResponse {
        total_listings: listings.len(),
        keywords,
    })
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// API response wrapper for full-text search
#[derive(Debug, Serialize)]
struct SearchResponse {
    query: String,
    total_results: usize,
    results: Vec<SearchHit>,
}

/// Handler for GET /api/search?q=<keywords>
async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let query = params.q.unwrap_or_default();
    let results = state.index.search(&query, 10).unwrap_or_default();

    Json(SearchResponse {
        query,
        total_results: results.len(),
        results,
    })
}

/// Handler for GET /api/export.csv?filter=<text>
async fn export_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Response {
    let filter = params.filter.unwrap_or_default();
    let filtered: Vec<Listing> = state
        .listings
        .read()
        .unwrap()
        .iter()
        .filter(|l| l.matches(&filter))
        .cloned()
        .collect();

    match export::csv_bytes(&filtered) {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"jobs.csv\"",
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("CSV export failed: {e}"),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct ScrapeParams {
    query: Option<String>,
    location: Option<String>,
    pages: Option<u32>,
    site: Option<Site>,
}

#[derive(Debug, Serialize)]
struct ScrapeResponse {
    query: String,
    location: String,
    pages: u32,
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Handler for POST /api/scrape?query=&location=&pages=&site=
///
/// Runs the blocking fetch off the async runtime, then replaces the
/// whole in-memory collection, rewrites the listings file and rebuilds
/// the search index.
async fn scrape_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScrapeParams>,
) -> Result<Json<ScrapeResponse>, (StatusCode, String)> {
    let search = SearchQuery::new(
        params.query.unwrap_or_else(|| "business development".to_string()),
        params.location.unwrap_or_else(|| "London".to_string()),
        params.pages.unwrap_or(1),
    );
    let site_list: Vec<Site> = match params.site {
        Some(site) => vec![site],
        None => sites::ALL.to_vec(),
    };

    println!(
        "🔍 Scraping {:?} in {:?} ({} page(s) per board)",
        search.query, search.location, search.pages
    );

    let task_query = search.clone();
    let fetched = tokio::task::spawn_blocking(move || {
        let client = fetcher::build_client()?;
        anyhow::Ok(fetcher::fetch_all(&client, &site_list, &task_query))
    })
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Scrape task failed: {e}"),
        )
    })?
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Scrape failed: {e}"),
        )
    })?;

    state.index.rebuild(&fetched).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Index rebuild failed: {e}"),
        )
    })?;

    if let Err(e) = persist(&state.data_path, &fetched) {
        eprintln!("⚠️  Could not write {}: {}", state.data_path.display(), e);
    }

    let total = fetched.len();
    let message = if total == 0 {
        Some("No listings found. Try broader keywords.".to_string())
    } else {
        None
    };
    *state.listings.write().unwrap() = fetched;
    println!("📊 Collection replaced: {} listings", total);

    Ok(Json(ScrapeResponse {
        query: search.query,
        location: search.location,
        pages: search.pages,
        total,
        message,
    }))
}

fn persist(path: &Path, listings: &[Listing]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(listings)?)?;
    Ok(())
}

/// Handler for GET / (root)
async fn root_handler() -> &'static str {
    "📊 Job Radar API\n\nEndpoints:\n  GET  /api/listings?filter=<text>    - Listing table (substring filter on title/summary)\n  GET  /api/keywords?top=<n>          - Keyword frequencies across summaries\n  GET  /api/search?q=<keywords>       - Full-text search over titles/summaries\n  GET  /api/export.csv?filter=<text>  - Download the table as CSV\n  POST /api/scrape?query=&location=&pages=&site= - Re-run the scrape\n\nExample:\n  curl 'http://127.0.0.1:3000/api/search?q=business development'"
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    println!("🚀 Starting Job Radar server...\n");

    // Load listings from the JSON file the fetcher writes
    let listings: Vec<Listing> = if args.data.exists() {
        println!("📂 Loading listings from {}", args.data.display());
        let content = fs::read_to_string(&args.data)?;
        serde_json::from_str(&content)?
    } else {
        println!("⚠️  No listings file found. Run the fetcher first!");
        println!("   cargo run -p fetcher");
        Vec::new()
    };
    println!("📊 Loaded {} listings\n", listings.len());

    let index = SearchIndex::open(&args.index_dir)?;
    index.rebuild(&listings)?;
    println!("✅ Indexing complete!\n");

    let state = Arc::new(AppState {
        listings: RwLock::new(listings),
        index,
        data_path: args.data,
    });

    let app = Router::new()
        .route("/", get(root_handler))
        .route("/api/listings", get(listings_handler))
        .route("/api/keywords", get(keywords_handler))
        .route("/api/search", get(search_handler))
        .route("/api/export.csv", get(export_handler))
        .route("/api/scrape", post(scrape_handler))
        .with_state(state);

    println!("🌐 Server running at http://{}", args.addr);
    println!("   Try: curl 'http://{}/api/listings'\n", args.addr);

    let listener = tokio::net::TcpListener::bind(&args.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
