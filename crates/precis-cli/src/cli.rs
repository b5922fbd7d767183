//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use precis_engine::{EngineConfig, SummaryOrder};
use std::path::PathBuf;

/// Precis - Extractive summaries of text, web pages and PDF files.
#[derive(Debug, Parser)]
#[command(name = "precis")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fraction of sentences to keep, in (0, 1]
    #[arg(short, long, global = true)]
    pub ratio: Option<f64>,

    /// Order of the selected sentences
    #[arg(long, value_enum, global = true)]
    pub order: Option<OrderArg>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Stopword language (ISO 639-1 code)
    #[arg(short, long, global = true, env = "PRECIS_LANGUAGE")]
    pub language: Option<String>,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PRECIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Summary text and a statistics line (default)
    Plain,
    /// JSON object
    Json,
    /// Tables of sentences and statistics
    Table,
}

/// Sentence order options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OrderArg {
    /// Highest score first
    Score,
    /// Original document order
    Reading,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize text given inline, from a file or from stdin
    Text(TextArgs),

    /// Scrape a web page and summarize its visible text
    Url(UrlArgs),

    /// Extract a PDF's text and summarize it
    Pdf(PdfArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the text command.
#[derive(Debug, Parser)]
pub struct TextArgs {
    /// Text to summarize
    #[arg(conflicts_with_all = ["file", "stdin"])]
    pub text: Option<String>,

    /// Read text from a file
    #[arg(short = 'i', long, conflicts_with = "stdin")]
    pub file: Option<PathBuf>,

    /// Read text from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the url command.
#[derive(Debug, Parser)]
pub struct UrlArgs {
    /// Page to scrape (http or https)
    pub url: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "20")]
    pub timeout: u64,
}

/// Arguments for the pdf command.
#[derive(Debug, Parser)]
pub struct PdfArgs {
    /// PDF file to summarize
    pub path: PathBuf,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Engine settings with command-line overrides applied.
    pub fn engine_config(&self, base: &EngineConfig) -> EngineConfig {
        let mut engine = base.clone();
        if let Some(ratio) = self.ratio {
            engine.default_ratio = ratio;
        }
        if let Some(order) = self.order {
            engine.order = order.into();
        }
        if let Some(language) = &self.language {
            engine.language = language.clone();
        }
        engine
    }

    /// Log filter directive for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Plain => crate::config::OutputFormat::Plain,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Table => crate::config::OutputFormat::Table,
        }
    }
}

impl From<OrderArg> for SummaryOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Score => SummaryOrder::ScoreDescending,
            OrderArg::Reading => SummaryOrder::Reading,
        }
    }
}
