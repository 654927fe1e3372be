use crate::errors::ExtractError;
use std::io::Write;
use std::panic;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Text pulled from a PDF. `text` is empty whenever `error` is set, and also
/// for documents that simply have no text layer.
#[derive(Debug)]
pub struct Extraction {
    pub text: String,
    pub error: Option<ExtractError>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct DocumentProcessor {
    temp_dir: Option<PathBuf>,
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentProcessor {
    pub fn new() -> Self {
        Self { temp_dir: None }
    }

    /// Stages uploads under `dir` instead of the system temp directory.
    pub fn with_temp_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            temp_dir: Some(dir.into()),
        }
    }

    /// Never fails: errors are reported alongside an empty text.
    pub fn extract(&self, pdf_bytes: &[u8]) -> Extraction {
        match self.try_extract(pdf_bytes) {
            Ok(text) => Extraction { text, error: None },
            Err(e) => {
                log::error!("Error extracting text from PDF: {}", e);
                Extraction {
                    text: String::new(),
                    error: Some(e),
                }
            }
        }
    }

    pub fn try_extract(&self, pdf_bytes: &[u8]) -> Result<String, ExtractError> {
        if pdf_bytes.is_empty() {
            return Err(ExtractError::Empty);
        }

        // Removed when dropped, on every return path.
        let mut builder = tempfile::Builder::new();
        builder.prefix("legal-upload-").suffix(".pdf");
        let mut staged = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        staged.write_all(pdf_bytes)?;
        staged.flush()?;

        let pages = self.extract_pages(&staged)?;
        log::info!("Read {} pages from {}", pages.len(), staged.path().display());

        Ok(join_pages(&pages))
    }

    fn extract_pages(&self, staged: &NamedTempFile) -> Result<Vec<String>, ExtractError> {
        let path = staged.path();
        // pdf-extract panics on some malformed inputs instead of returning an error.
        match panic::catch_unwind(|| pdf_extract::extract_text_by_pages(path)) {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(ExtractError::Parse(e.to_string())),
            Err(_) => Err(ExtractError::Panicked),
        }
    }
}

/// Trims each page, drops pages with no text, joins the rest with `\n`.
fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
