//! Precis Text Acquisition
//!
//! Turns web pages and PDF files into plain text for the summarization engine.
//!
//! # Sources
//!
//! - [`WebFetcher`]: HTTP(S) pages, markup stripped
//! - [`extract_text_from_pdf`]: text layer of a PDF file
//!
//! Failures are reported as [`FetchError`] and [`ExtractError`], kept apart
//! from engine errors so callers can tell "could not read the source" from
//! "nothing to summarize".
//!
//! # Examples
//!
//! ```no_run
//! use precis_acquire::{acquire_text_from_url, extract_text_from_pdf};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let page = acquire_text_from_url("https://example.com").await?;
//! let paper = extract_text_from_pdf("paper.pdf")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
pub mod pdf;
pub mod web;

pub use error::{ExtractError, FetchError};
pub use pdf::{acquire_text_from_pdf, extract_text_from_pdf, extract_text_from_pdf_bytes};
pub use web::{acquire_text_from_url, html_to_text, validate_url, WebFetcher};
