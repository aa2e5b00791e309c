use anyhow::{Context, Result};
use clap::Parser;
use email_contacts::{ExportFormat, Extractor, ParseOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "email-contacts",
    about = "Extract contacts from the signatures in an email archive"
)]
struct Cli {
    /// Text file of concatenated email bodies
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output rendering: vcard or dict
    #[arg(long, short, default_value = "vcard")]
    format: ExportFormat,

    /// Keep quoted '>' lines instead of dropping them
    #[arg(long)]
    keep_threads: bool,

    /// Drop lines repeated across the archive (disclaimers and the like)
    #[arg(long)]
    remove_duplicates: bool,

    /// Occurrence count at which a line is dropped by --remove-duplicates
    #[arg(long, value_name = "N")]
    threshold: Option<usize>,

    /// JSON file with parse options
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut options = match &cli.config {
        Some(path) => ParseOptions::from_json_file(path)?,
        None => ParseOptions::default(),
    };
    if cli.keep_threads {
        options.ignore_threads = false;
    }
    if cli.remove_duplicates {
        options.remove_duplicates = true;
    }
    if let Some(threshold) = cli.threshold {
        options.high_frequency_threshold = threshold;
    }

    let mut extractor = Extractor::new();
    extractor
        .load(&cli.input)
        .with_context(|| format!("Could not read {}", cli.input.display()))?;
    extractor.parse(&options)?;

    for record in extractor.dump(cli.format)? {
        println!("{record}");
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
