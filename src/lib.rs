//! # docsift
//!
//! Document ingestion and in-buffer text search for viewer frontends.
//!
//! docsift turns an uploaded file of a recognized type (PDF, plain text,
//! Markdown) into a single normalized text buffer, then searches that
//! buffer for a query string with configurable matching rules, returning
//! match locations plus surrounding context.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   ┌────────────┐   ┌────────────┐   ┌───────────┐
//! │ InputFile │──▶│   Format   │──▶│    Text    │──▶│  Search   │
//! │ mime+name │   │  Resolver  │   │ Extractor  │   │  Engine   │
//! │  +bytes   │   │  FileKind  │   │ text buffer│   │  matches  │
//! └───────────┘   └────────────┘   └─────┬──────┘   └───────────┘
//!                                        │
//!                                  ┌─────▼──────┐
//!                                  │  Document  │
//!                                  │   Reader   │ (PDF capability)
//!                                  └────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use docsift::ingest::{ingest_file, DiskFile};
//! use docsift::models::SearchOptions;
//! use docsift::reader::PdfExtractReader;
//! use docsift::search::search_text;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let file = DiskFile::open("report.pdf", None).await?;
//! let doc = ingest_file(&file, Some(&PdfExtractReader)).await?;
//!
//! let matches = search_text(
//!     &doc.content,
//!     &SearchOptions {
//!         query: "revenue".to_string(),
//!         ..SearchOptions::default()
//!     },
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Core data types |
//! | [`format`] | MIME + extension classification |
//! | [`extract`] | Text extraction and its error taxonomy |
//! | [`reader`] | Document Reader capability (PDF) |
//! | [`ingest`] | Pipeline orchestration and the input boundary |
//! | [`search`] | Context-windowed in-buffer search |

pub mod extract;
pub mod format;
pub mod ingest;
pub mod models;
pub mod reader;
pub mod search;
