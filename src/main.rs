//! # docsift CLI
//!
//! The `docsift` binary exposes the ingestion and search pipeline for local
//! files.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `docsift extract <file>` | Classify and extract a file, print the text buffer |
//! | `docsift search <file> "<query>"` | Extract a file and search its buffer |
//!
//! ## Examples
//!
//! ```bash
//! # Extract a PDF to stdout
//! docsift extract report.pdf
//!
//! # Search a Markdown file, whole words only, 30 characters of context
//! docsift search README.md "install" --whole-word --context 30
//!
//! # Machine-readable output
//! docsift search report.pdf "revenue" --json
//! ```
//!
//! The file's kind is resolved from the extension; pass `--mime` to supply
//! a declared MIME type instead (extensions still break ties for `.md`
//! reported as `text/plain`).

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use docsift::ingest::{ingest_file, DiskFile};
use docsift::models::{IngestedFile, SearchOptions, DEFAULT_CONTEXT_LENGTH};
use docsift::reader::PdfExtractReader;
use docsift::search::search_text;

/// docsift — document ingestion and in-buffer text search.
#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Document ingestion and in-buffer text search",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Classify a file and print its extracted text buffer.
    Extract {
        /// Path to a .pdf, .txt, or .md file.
        file: PathBuf,

        /// Declared MIME type. Defaults to empty, which resolves the kind
        /// from the file extension alone.
        #[arg(long)]
        mime: Option<String>,

        /// Emit the ingested file as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },

    /// Extract a file and search its text buffer.
    Search {
        /// Path to a .pdf, .txt, or .md file.
        file: PathBuf,

        /// The string to find.
        query: String,

        /// Declared MIME type. Defaults to empty, which resolves the kind
        /// from the file extension alone.
        #[arg(long)]
        mime: Option<String>,

        /// Match case exactly.
        #[arg(long)]
        case_sensitive: bool,

        /// Only match whole words.
        #[arg(long)]
        whole_word: bool,

        /// Characters of context captured on each side of a match.
        #[arg(long, default_value_t = DEFAULT_CONTEXT_LENGTH)]
        context: usize,

        /// Emit matches as JSON instead of a listing.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let reader = PdfExtractReader;

    match cli.command {
        Commands::Extract { file, mime, json } => {
            let input = DiskFile::open(&file, mime).await?;
            let doc = ingest_file(&input, Some(&reader)).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                print_header(&doc);
                println!();
                println!("{}", doc.content);
            }
        }
        Commands::Search {
            file,
            query,
            mime,
            case_sensitive,
            whole_word,
            context,
            json,
        } => {
            let input = DiskFile::open(&file, mime).await?;
            let doc = ingest_file(&input, Some(&reader)).await?;
            let matches = search_text(
                &doc.content,
                &SearchOptions {
                    query,
                    case_sensitive,
                    whole_word,
                    context_length: context,
                },
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
                return Ok(());
            }

            if matches.is_empty() {
                println!("No matches.");
                return Ok(());
            }

            print_header(&doc);
            for m in &matches {
                println!(
                    "{}. at {}: \"{}[{}]{}\"",
                    m.match_index + 1,
                    m.position,
                    m.context_before.replace('\n', " "),
                    m.match_text.replace('\n', " "),
                    m.context_after.replace('\n', " "),
                );
            }
        }
    }

    Ok(())
}

fn print_header(doc: &IngestedFile) {
    println!(
        "{} ({}, {} bytes, {} chars extracted) id: {}",
        doc.name,
        doc.kind,
        doc.size,
        doc.content.chars().count(),
        doc.id
    );
}
