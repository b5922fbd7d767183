//! Command implementations.

pub mod config;
pub mod summarize;

pub use self::config::execute_config;
pub use self::summarize::{execute_pdf, execute_text, execute_url};
