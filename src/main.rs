//! carmatch - vehicle description matcher
//!
//! Interactive and batch drivers around the matching session.

use anyhow::{Context, Result};
use carmatch::catalog::{Catalog, InMemoryCatalog, SqliteCatalog};
use carmatch::config::{config_path, CatalogFormat, Config};
use carmatch::core::MatchResult;
use carmatch::evaluation::read_pairs;
use carmatch::Session;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Catalog file (overrides the config)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Catalog file format (overrides the config)
    #[arg(short, long, value_enum)]
    format: Option<CatalogFormat>,

    #[command(subcommand)]
    command: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Match one description, or read descriptions from stdin until "exit"
    Match {
        description: Option<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Measure accuracy against line-aligned ground truth
    Evaluate {
        /// One description per line
        #[arg(long)]
        inputs: PathBuf,

        /// One expected vehicle id per line
        #[arg(long)]
        truth: PathBuf,
    },
    /// Write the default config file if none exists
    InitConfig,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load().context("loading config")?;

    // Setup logging
    let level = if args.verbose {
        Level::DEBUG
    } else {
        config.tracing_level()
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🚗 carmatch v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Mode::InitConfig = args.command {
        return init_config();
    }

    let path = args
        .catalog
        .unwrap_or_else(|| PathBuf::from(&config.catalog_path));
    let format = args.format.unwrap_or(config.catalog_format);
    let catalog = open_catalog(&path, format)?;
    let session = Session::build(catalog.as_ref(), &config.matcher).context("building session")?;

    match args.command {
        Mode::Match {
            description: Some(description),
            json,
        } => print_result(&session.match_one(&description), json)?,
        Mode::Match {
            description: None,
            json,
        } => user_mode(&session, json)?,
        Mode::Evaluate { inputs, truth } => test_mode(&session, &inputs, &truth)?,
        Mode::InitConfig => {}
    }

    Ok(())
}

fn open_catalog(path: &Path, format: CatalogFormat) -> Result<Box<dyn Catalog>> {
    let catalog: Box<dyn Catalog> = match format {
        CatalogFormat::Sqlite => Box::new(
            SqliteCatalog::open(path.to_path_buf())
                .with_context(|| format!("opening {}", path.display()))?,
        ),
        CatalogFormat::Json => Box::new(InMemoryCatalog::from_json_file(path)?),
    };
    Ok(catalog)
}

fn init_config() -> Result<()> {
    let path = config_path();
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }

    Config::default().save()?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn print_result(result: &MatchResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    match result.vehicle_id() {
        Some(id) => println!("Vehicle ID: {}", id),
        None => println!("Vehicle ID: Not Found"),
    }
    println!("Confidence: {}", result.confidence);
    Ok(())
}

fn user_mode(session: &Session, json: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("Enter car description (or type 'exit' to quit): ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().eq_ignore_ascii_case("exit") {
            break;
        }
        print_result(&session.match_one(&line), json)?;
    }

    Ok(())
}

fn test_mode(session: &Session, inputs: &Path, truth: &Path) -> Result<()> {
    let pairs = read_pairs(inputs, truth)?;
    let report = session.evaluate(pairs);

    for miss in &report.misses {
        println!("Missed Match: Description: {}", miss.description);
        println!("Expected Vehicle ID: {}", miss.expected_id);
        println!(
            "Matched Vehicle ID: {}",
            miss.matched_id.as_deref().unwrap_or("None")
        );
        println!("Confidence: {}", miss.confidence);
    }
    println!("Accuracy: {:.2}%", report.accuracy());
    Ok(())
}
