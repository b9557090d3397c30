// askbox CLI - the terminal rendition of the portfolio ask box
//
// Reads one query per line (Enter submits) and prints its classification,
// or resolves positional queries and exits.

use clap::{Parser, ValueEnum};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use askbox::events;
use askbox::keywords::{KeywordDictionary, KeywordResolver, Resolution};

#[derive(Parser)]
#[command(name = "askbox")]
#[command(about = "Keyword lookup with typo-tolerant suggestions")]
struct Cli {
    /// Dictionary file (JSON array of entries); defaults to the built-in
    /// portfolio keywords
    #[arg(long, short)]
    dictionary: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', default_value = "text", value_enum)]
    format: OutputFormat,

    /// Queries to resolve; reads stdin line by line if none are given
    queries: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = match &cli.dictionary {
        Some(path) => match KeywordDictionary::load(path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => KeywordDictionary::builtin(),
    };
    let resolver = KeywordResolver::new(dictionary);

    if !cli.queries.is_empty() {
        for query in &cli.queries {
            report(&resolver.resolve(query), cli.format);
        }
        return ExitCode::SUCCESS;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                return ExitCode::FAILURE;
            }
        };
        report(&resolver.resolve(&line), cli.format);
    }

    ExitCode::SUCCESS
}

fn report(resolution: &Resolution, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let line = serde_json::json!({
                "event": events::event_name(resolution),
                "payload": events::event_payload(resolution),
            });
            println!("{}", line);
        }
        OutputFormat::Text => match resolution {
            Resolution::Exact { keyword } => println!("{}", keyword),
            Resolution::Suggestion { keyword, .. } => println!("Did you mean {}?", keyword),
            Resolution::NotFound => {
                println!("Error: Keyword not found. Please use one of the allowed keywords.")
            }
            Resolution::InvalidInput => println!("Error: Invalid input detected."),
            // An empty query clears the previous result; nothing to print
            Resolution::Empty => {}
        },
    }
}
