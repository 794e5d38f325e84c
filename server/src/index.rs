//! Tantivy index over the current listing collection.
//!
//! Rebuilt wholesale whenever the collection is replaced: clear, re-add
//! every listing, commit, reload the reader.

use common::Listing;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::{Field, STORED, Schema, TEXT};
use tantivy::{Index, IndexReader, IndexWriter, ReloadPolicy};

/// One full-text hit, scored by BM25.
#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub company: String,
    pub score: f32,
}

pub struct SearchIndex {
    reader: IndexReader,
    writer: Mutex<IndexWriter>,
    parser: QueryParser,
    title: Field,
    company: Field,
    summary: Field,
}

/// Title and company are stored for display; the summary is searchable
/// only, which keeps the index small.
fn build_schema() -> Schema {
    let mut builder = Schema::builder();
    builder.add_text_field("title", TEXT | STORED);
    builder.add_text_field("company", TEXT | STORED);
    builder.add_text_field("summary", TEXT);
    builder.build()
}

impl SearchIndex {
    /// Opens the index directory, creating it and the index on first run.
    pub fn open(path: &Path) -> tantivy::Result<Self> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let index = if path.join("meta.json").exists() {
            println!("📂 Opening existing index...");
            Index::open_in_dir(path)?
        } else {
            println!("📝 Creating new index...");
            Index::create_in_dir(path, build_schema())?
        };

        let schema = index.schema();
        let title = schema.get_field("title").unwrap();
        let company = schema.get_field("company").unwrap();
        let summary = schema.get_field("summary").unwrap();

        // 50MB writer heap
        let writer = index.writer(50_000_000)?;
        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::OnCommit)
            .try_into()?;
        let parser = QueryParser::for_index(&index, vec![title, summary]);

        Ok(Self {
            reader,
            writer: Mutex::new(writer),
            parser,
            title,
            company,
            summary,
        })
    }

    /// Replaces the indexed documents with `listings`. Searches issued
    /// after this returns see the new collection.
    pub fn rebuild(&self, listings: &[Listing]) -> tantivy::Result<()> {
        let mut writer = self.writer.lock().unwrap();
        writer.delete_all_documents()?;
        for listing in listings {
            let mut doc = tantivy::Document::new();
            doc.add_text(self.title, &listing.title);
            if let Some(company) = &listing.company {
                doc.add_text(self.company, company);
            }
            if let Some(summary) = &listing.summary {
                doc.add_text(self.summary, summary);
            }
            writer.add_document(doc)?;
        }
        writer.commit()?;
        drop(writer);

        self.reader.reload()
    }

    /// Top `limit` matches for `query_str` over titles and summaries.
    /// An empty or unparseable query yields no hits.
    pub fn search(&self, query_str: &str, limit: usize) -> tantivy::Result<Vec<SearchHit>> {
        if query_str.is_empty() {
            return Ok(Vec::new());
        }
        let Ok(query) = self.parser.parse_query(query_str) else {
            return Ok(Vec::new());
        };

        let searcher = self.reader.searcher();
        let top_docs = searcher.search(&query, &TopDocs::with_limit(limit))?;

        let mut hits = Vec::new();
        for (score, address) in top_docs {
            let doc = searcher.doc(address)?;
            let title = doc
                .get_first(self.title)
                .and_then(|v| v.as_text())
                .unwrap_or("Unknown")
                .to_string();
            let company = doc
                .get_first(self.company)
                .and_then(|v| v.as_text())
                .unwrap_or("Unknown")
                .to_string();
            hits.push(SearchHit {
                title,
                company,
                score,
            });
        }
        Ok(hits)
    }
}
