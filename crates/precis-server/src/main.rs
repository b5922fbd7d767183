//! Precis server binary
//!
//! Serves the summarization web interface and JSON API.

use precis_server::{config::ServerConfig, start_server, ServerError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args: Vec<String> = env::args().collect();

    let config = match args.get(1).map(String::as_str) {
        Some("--config") => match args.get(2) {
            Some(path) => ServerConfig::from_file(path)?,
            None => {
                eprintln!("Error: --config requires a path");
                process::exit(2);
            }
        },
        Some("--help") | Some("-h") => {
            print_help();
            return Ok(());
        }
        _ => {
            eprintln!("Warning: No config file specified, using defaults (127.0.0.1:5000)");
            eprintln!("Usage: precis-server --config <path-to-config.toml>");
            eprintln!();
            ServerConfig::default_test_config()
        }
    };

    start_server(config).await
}

fn print_help() {
    println!("Precis Server - Extractive text summarization over HTTP");
    println!();
    println!("USAGE:");
    println!("    precis-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    bind_address            IP address to bind (e.g., '127.0.0.1')");
    println!("    bind_port               Port number (e.g., 5000)");
    println!("    max_input_chars         Largest accepted input (default: 1000000)");
    println!("    max_upload_bytes        Largest request body (default: 16 MiB)");
    println!("    summarize_timeout_secs  Budget per summarization (default: 30)");
    println!("    fetch_timeout_secs      Timeout for URL fetches (default: 20)");
    println!("    [engine]                language, default_ratio, order, extra_stopwords");
    println!();
    println!("Log level is read from RUST_LOG (default: info).");
}
