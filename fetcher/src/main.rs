//! Job Radar fetcher
//!
//! Scrapes the configured job boards for a keyword/location query,
//! prints a keyword summary and saves the listings to data/listings.json.

use anyhow::Result;
use clap::Parser;
use common::{export, keywords};
use fetcher::SearchQuery;
use fetcher::sites::{self, Site};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fetcher")]
#[command(about = "Scrape job boards into a listings file", long_about = None)]
struct Args {
    /// Job title / keywords to search for
    #[arg(short, long, default_value = "business development")]
    query: String,

    /// Location to search in
    #[arg(short, long, default_value = "London")]
    location: String,

    /// Result pages to fetch per board (1-5)
    #[arg(short, long, default_value_t = 1)]
    pages: u32,

    /// Boards to scrape; repeat for several (defaults to all)
    #[arg(short, long, value_enum)]
    site: Vec<Site>,

    /// Where to write the JSON listings file
    #[arg(long, default_value = "data/listings.json")]
    out: PathBuf,

    /// Also export the listings as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// How many top keywords to print after the scrape
    #[arg(long, default_value_t = 10)]
    keywords: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let query = SearchQuery::new(args.query, args.location, args.pages);
    let site_list = if args.site.is_empty() {
        sites::ALL.to_vec()
    } else {
        args.site
    };

    println!(
        "🔍 Searching {:?} in {:?} ({} page(s) per board)\n",
        query.query, query.location, query.pages
    );

    let client = fetcher::build_client()?;
    let listings = fetcher::fetch_all(&client, &site_list, &query);

    if listings.is_empty() {
        println!("\n⚠️  No listings found. Try broader keywords.");
    } else {
        println!("\n📊 Total listings: {}", listings.len());
    }

    let summaries: Vec<&str> = listings
        .iter()
        .filter_map(|l| l.summary.as_deref())
        .collect();
    let ranked = keywords::top_keywords(&summaries, args.keywords);
    if !ranked.is_empty() {
        println!("\n🏷️  Top keywords across summaries:");
        for (token, count) in &ranked {
            println!("   {count:>4}  {token}");
        }
    }

    create_parent_dir(&args.out)?;
    fs::write(&args.out, serde_json::to_string_pretty(&listings)?)?;
    println!("\n💾 Saved {} listings to {}", listings.len(), args.out.display());

    if let Some(csv_path) = &args.csv {
        create_parent_dir(csv_path)?;
        export::write_csv(&listings, File::create(csv_path)?)?;
        println!("💾 Exported CSV to {}", csv_path.display());
    }

    println!("\n✨ Scraping complete!");
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
