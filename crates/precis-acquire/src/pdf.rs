//! PDF text acquisition

use crate::ExtractError;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, warn};

/// Signature every PDF carries near the start of the file
const PDF_SIGNATURE: &[u8] = b"%PDF-";

/// How far into the file the signature may appear
const SIGNATURE_WINDOW: usize = 1024;

/// Extract the text layer of the PDF at `path`.
///
/// The file must exist, carry a `.pdf` extension (any case) and start with the
/// PDF signature.
pub fn extract_text_from_pdf(path: impl AsRef<Path>) -> Result<String, ExtractError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExtractError::NotFound(path.to_path_buf()));
    }
    if !has_pdf_extension(path) {
        return Err(ExtractError::NotPdf(format!(
            "{} must have a .pdf extension",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read PDF");
    extract_text_from_pdf_bytes(&bytes)
}

/// Extract the text layer of an in-memory PDF
pub fn extract_text_from_pdf_bytes(bytes: &[u8]) -> Result<String, ExtractError> {
    if !has_pdf_signature(bytes) {
        return Err(ExtractError::NotPdf("missing %PDF- signature".to_string()));
    }

    // pdf-extract panics on some malformed documents
    let result = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)));
    let text = match result {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!(error = %e, "PDF extraction failed");
            return Err(ExtractError::Unreadable(e.to_string()));
        }
        Err(_) => {
            warn!("PDF extraction panicked");
            return Err(ExtractError::Unreadable("malformed document".to_string()));
        }
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(ExtractError::NoText);
    }
    Ok(text.to_string())
}

/// Case-insensitive `.pdf` extension check
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn has_pdf_signature(bytes: &[u8]) -> bool {
    let window = &bytes[..bytes.len().min(SIGNATURE_WINDOW)];
    window.windows(PDF_SIGNATURE.len()).any(|w| w == PDF_SIGNATURE)
}

/// Read and extract a PDF on the blocking thread pool
pub async fn acquire_text_from_pdf(path: impl AsRef<Path>) -> Result<String, ExtractError> {
    let path = path.as_ref().to_path_buf();
    tokio::task::spawn_blocking(move || extract_text_from_pdf(path))
        .await
        .map_err(|e| ExtractError::Unreadable(e.to_string()))?
}
