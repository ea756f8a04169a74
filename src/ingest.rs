//! Ingestion pipeline orchestration.
//!
//! Coordinates the full flow for one uploaded file: classification via
//! [`crate::format`], extraction via [`crate::extract`], and assembly of the
//! final [`IngestedFile`] value. Each call is independent — no state is
//! shared between concurrent ingestions, and the Document Reader capability
//! is scoped to the call.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::extract::{extract_text, ExtractError};
use crate::format::resolve_kind;
use crate::models::IngestedFile;
use crate::reader::DocumentReader;

/// Boundary for an uploaded file: a declared MIME type, a display name, a
/// byte length, and access to the full contents as text or raw bytes.
#[async_trait]
pub trait InputFile: Send + Sync {
    /// MIME type as declared by the upload source. May be empty or wrong;
    /// classification treats it as a hint, not the truth.
    fn mime_type(&self) -> &str;

    /// Display name, used for extension tie-breaking and carried onto the
    /// ingested file.
    fn name(&self) -> &str;

    /// Size of the original file in bytes.
    fn size(&self) -> u64;

    /// Full contents as a raw byte buffer.
    async fn bytes(&self) -> Result<Vec<u8>>;

    /// Full contents as decoded text.
    async fn text(&self) -> Result<String> {
        Ok(String::from_utf8_lossy(&self.bytes().await?).into_owned())
    }
}

/// Run one file through classification and extraction.
///
/// Fails with [`ExtractError::UnrecognizedType`] when neither the declared
/// MIME type nor the extension maps to a known kind; no partial result is
/// produced on any failure.
pub async fn ingest_file(
    file: &dyn InputFile,
    reader: Option<&dyn DocumentReader>,
) -> Result<IngestedFile> {
    let kind = resolve_kind(file.mime_type(), file.name()).ok_or_else(|| {
        ExtractError::UnrecognizedType {
            mime: file.mime_type().to_string(),
            name: file.name().to_string(),
        }
    })?;

    let bytes = file.bytes().await?;
    let content = extract_text(&bytes, kind, reader).await?;

    Ok(IngestedFile {
        id: Uuid::new_v4().to_string(),
        name: file.name().to_string(),
        kind,
        content,
        size: file.size(),
        created_at: Utc::now(),
    })
}

/// [`InputFile`] over a file on disk.
///
/// The declared MIME type is whatever the caller supplies; an empty
/// declaration falls through to extension matching in the resolver.
pub struct DiskFile {
    path: PathBuf,
    mime: String,
    name: String,
    size: u64,
}

impl DiskFile {
    pub async fn open(path: impl AsRef<Path>, mime: Option<String>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let meta = tokio::fs::metadata(&path)
            .await
            .with_context(|| format!("cannot stat {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        Ok(Self {
            path,
            mime: mime.unwrap_or_default(),
            name,
            size: meta.len(),
        })
    }
}

#[async_trait]
impl InputFile for DiskFile {
    fn mime_type(&self) -> &str {
        &self.mime
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    async fn bytes(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("cannot read {}", self.path.display()))
    }

    async fn text(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("cannot read {}", self.path.display()))
    }
}
