//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use precis_engine::Summary;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Shown instead of a summary when the ratio selects nothing
const NOTHING_SELECTED: &str =
    "No sentences were selected: the text is too short for the current ratio.";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a summary of the text read from `source`.
    pub fn format_summary(&self, summary: &Summary, source: &str) -> Result<String> {
        match self.format {
            OutputFormat::Plain => Ok(self.format_summary_plain(summary)),
            OutputFormat::Json => self.format_summary_json(summary, source),
            OutputFormat::Table => Ok(self.format_summary_table(summary)),
        }
    }

    fn format_summary_plain(&self, summary: &Summary) -> String {
        let body = if summary.is_empty() {
            self.warning(NOTHING_SELECTED)
        } else {
            summary.text.clone()
        };
        format!("{}\n\n{}", body, self.colorize(&stats_line(summary), "cyan"))
    }

    fn format_summary_json(&self, summary: &Summary, source: &str) -> Result<String> {
        let value = serde_json::json!({
            "source": source,
            "summary": summary.text,
            "input_length": summary.input_chars,
            "summary_length": summary.summary_chars,
            "compression_ratio": summary.compression_ratio(),
            "total_sentences": summary.total_sentences,
            "selected_sentences": summary.selected,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_summary_table(&self, summary: &Summary) -> String {
        let sentences = if summary.is_empty() {
            self.warning(NOTHING_SELECTED)
        } else {
            let mut builder = Builder::default();
            builder.push_record(["#", "Position", "Score", "Sentence"]);
            for (rank, sentence) in summary.selected.iter().enumerate() {
                builder.push_record([
                    (rank + 1).to_string(),
                    (sentence.index + 1).to_string(),
                    format!("{:.3}", sentence.score),
                    sentence.text.clone(),
                ]);
            }
            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            table.to_string()
        };

        let mut builder = Builder::default();
        builder.push_record(["Metric", "Value"]);
        builder.push_record(["Input length".to_string(), format!("{} characters", summary.input_chars)]);
        builder.push_record([
            "Summary length".to_string(),
            format!("{} characters", summary.summary_chars),
        ]);
        builder.push_record([
            "Compression ratio".to_string(),
            format!("{}%", summary.compression_ratio()),
        ]);
        builder.push_record([
            "Sentences".to_string(),
            format!("{} of {}", summary.selected.len(), summary.total_sentences),
        ]);
        let mut stats = builder.build();
        stats
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", sentences, stats)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// One-line statistics summary.
pub fn stats_line(summary: &Summary) -> String {
    format!(
        "{} of {} sentences | {} -> {} characters | {}% shorter",
        summary.selected.len(),
        summary.total_sentences,
        summary.input_chars,
        summary.summary_chars,
        summary.compression_ratio()
    )
}
