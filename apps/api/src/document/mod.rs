//! Document context — the policy PDF, extracted once at startup and shared
//! read-only by every prompt run.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub mod handlers;

/// Joins page texts before they are appended to a prompt.
pub const PAGE_DELIMITER: &str = ".";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read document {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to extract text from {}: {message}", .path.display())]
    Extraction { path: PathBuf, message: String },
}

/// Ordered per-page text of the loaded document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentContext {
    pages: Vec<String>,
}

impl DocumentContext {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All pages joined with `PAGE_DELIMITER`. Empty for a document with no pages.
    pub fn joined(&self) -> String {
        self.pages.join(PAGE_DELIMITER)
    }

    pub fn char_count(&self) -> usize {
        self.pages.iter().map(|p| p.chars().count()).sum()
    }
}

/// Source of per-page document text.
pub trait DocumentProvider: Send + Sync {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, DocumentError>;
}

/// Extracts page text from PDF files with `pdf-extract`.
pub struct PdfDocumentProvider;

impl DocumentProvider for PdfDocumentProvider {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, DocumentError> {
        let bytes = std::fs::read(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| {
            DocumentError::Extraction {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })
    }
}

/// Loads the whole document. Any failure is fatal; there is no partial load.
pub fn load_document(
    provider: &dyn DocumentProvider,
    path: &Path,
) -> Result<DocumentContext, DocumentError> {
    info!("Loading document from {}", path.display());
    let pages = provider.extract_pages(path)?;
    let document = DocumentContext::new(pages);
    info!(
        "Document loaded: {} pages, {} characters",
        document.page_count(),
        document.char_count()
    );
    Ok(document)
}
