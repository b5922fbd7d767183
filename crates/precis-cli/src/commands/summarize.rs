//! Summarization commands for text, web pages and PDF files.

use crate::cli::{PdfArgs, TextArgs, UrlArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use precis_acquire::{acquire_text_from_pdf, WebFetcher};
use precis_engine::{Summarizer, Summary};
use std::fs;
use std::io::{self, Read};
use std::time::Duration;
use tracing::{debug, info};

/// Execute the text command.
pub fn execute_text(args: TextArgs, summarizer: &Summarizer, formatter: &Formatter) -> Result<()> {
    let (text, source) = read_text_input(args)?;
    print_summary(summarizer, &text, &source, formatter)
}

/// Execute the url command.
pub async fn execute_url(
    args: UrlArgs,
    summarizer: &Summarizer,
    formatter: &Formatter,
) -> Result<()> {
    let fetcher = WebFetcher::with_timeout(Duration::from_secs(args.timeout))?;
    info!(url = %args.url, "Fetching page");
    let text = fetcher.fetch_text(&args.url).await?;
    print_summary(summarizer, &text, &args.url, formatter)
}

/// Execute the pdf command.
pub async fn execute_pdf(
    args: PdfArgs,
    summarizer: &Summarizer,
    formatter: &Formatter,
) -> Result<()> {
    info!(path = %args.path.display(), "Extracting PDF");
    let text = acquire_text_from_pdf(&args.path).await?;
    print_summary(summarizer, &text, &args.path.display().to_string(), formatter)
}

/// Resolve the text command's input and a label for its source.
pub fn read_text_input(args: TextArgs) -> Result<(String, String)> {
    if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok((buffer, "stdin".to_string()))
    } else if let Some(path) = args.file {
        let text = fs::read_to_string(&path)?;
        Ok((text, path.display().to_string()))
    } else if let Some(text) = args.text {
        Ok((text, "text".to_string()))
    } else {
        Err(CliError::InvalidInput(
            "Provide TEXT, --file or --stdin".to_string(),
        ))
    }
}

/// Summarize with the summarizer's default options.
pub fn summarize(summarizer: &Summarizer, text: &str) -> Result<Summary> {
    debug!(chars = text.chars().count(), "Summarizing");
    let summary = summarizer.summarize_default(text)?;
    info!(
        sentences = summary.total_sentences,
        selected = summary.selected.len(),
        "Summary ready"
    );
    Ok(summary)
}

fn print_summary(
    summarizer: &Summarizer,
    text: &str,
    source: &str,
    formatter: &Formatter,
) -> Result<()> {
    let summary = summarize(summarizer, text)?;
    println!("{}", formatter.format_summary(&summary, source)?);
    Ok(())
}
