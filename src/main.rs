// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};

use crate::app_config::Config;
use crate::feed::NewsFeed;
use crate::importer::{DelimitedTextSource, ImportResult, Importer, JsonSource, XmlSource};

mod app_config;
mod database;
mod errors;
mod feed;
mod feed_log;
mod importer;
mod normalizer;
mod records;
mod stats;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Source format override for the import command
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliSourceFormat {
    Text,
    Json,
    Xml,
}

/// Which tables the view command shows
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliViewKind {
    News,
    Ads,
    Quotes,
    All,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a single record to the feed
    Add {
        #[command(subcommand)]
        record: AddCommands,
    },

    /// Import records from a text, JSON or XML file
    Import {
        /// Source file to import; it is deleted after a successful import
        #[arg(value_name = "SOURCE_PATH")]
        source_path: PathBuf,

        /// Source format; derived from the file extension when omitted
        #[arg(short = 'F', long, value_enum)]
        format: Option<CliSourceFormat>,
    },

    /// View records stored in the database
    View {
        /// Which records to show
        #[arg(value_enum, default_value = "all")]
        kind: CliViewKind,
    },

    /// Show record store statistics
    Stats,

    /// Generate shell completions for newsdesk
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
enum AddCommands {
    /// Add a news record
    News {
        /// News text
        text: String,
        /// City the news relates to
        city: String,
    },

    /// Add a private ad record
    Ad {
        /// Ad text
        text: String,
        /// Expiration date (YYYY-MM-DD)
        expires: String,
    },

    /// Add a motivational quote record
    Quote {
        /// Quote text
        text: String,
        /// Author's name
        author: String,
    },
}

/// Newsdesk - news feed recorder
///
/// Records News, Private Ad and Motivational Quote entries into a SQLite
/// store with duplicate detection, mirrors accepted records into an
/// append-only text log, and keeps word/letter frequency CSVs derived from
/// the log.
#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(version = "1.0.0")]
#[command(about = "News feed recorder with file import and statistics")]
#[command(long_about = "Newsdesk records news feed entries into a SQLite store and a text log.

EXAMPLES:
    newsdesk add news \"it happened today\" Paris   # Add one news record
    newsdesk add ad \"buy now\" 2099-01-01          # Add a private ad
    newsdesk add quote \"stay hungry\" \"S. Jobs\"    # Add a quote
    newsdesk import records.txt                   # Import '---' delimited text
    newsdesk import records.json                  # Import JSON records
    newsdesk import feed.dat -F xml               # Import with explicit format
    newsdesk view news                            # Show stored news records
    newsdesk stats                                # Show store statistics
    newsdesk completions bash > newsdesk.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    // Completions don't need a config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "newsdesk", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    // Load or create configuration
    let config = load_or_create_config(&cli.config_path, cli.log_level.as_ref())?;

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let feed = NewsFeed::with_config(&config)?;

    match cli.command {
        Commands::Add { record } => run_add(&feed, record),
        Commands::Import {
            source_path,
            format,
        } => run_import(&feed, &source_path, format),
        Commands::View { kind } => run_view(&feed, kind),
        Commands::Stats => run_stats(&feed),
        Commands::Completions { .. } => unreachable!("handled above"),
    }
}

/// Map a config log level onto the log crate's filter
fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

/// Load the configuration file, creating a default one if it does not exist
fn load_or_create_config(
    config_path: &str,
    cmd_log_level: Option<&CliLogLevel>,
) -> Result<Config> {
    if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Override config with CLI options if provided
        if let Some(log_level) = cmd_log_level {
            config.log_level = log_level.clone().into();
        }

        Ok(config)
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let mut config = Config::default();
        if let Some(log_level) = cmd_log_level {
            config.log_level = log_level.clone().into();
        }

        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        Ok(config)
    }
}

fn run_add(feed: &NewsFeed, record: AddCommands) -> Result<()> {
    let outcome = match record {
        AddCommands::News { text, city } => feed.publish_news(&text, &city)?,
        AddCommands::Ad { text, expires } => feed.publish_ad(&text, &expires)?,
        AddCommands::Quote { text, author } => feed.publish_quote(&text, &author)?,
    };

    if outcome.is_inserted() {
        info!("Record added successfully.");
    } else {
        warn!("Duplicate record found. Record not added.");
    }

    Ok(())
}

fn run_import(
    feed: &NewsFeed,
    source_path: &Path,
    format: Option<CliSourceFormat>,
) -> Result<()> {
    let importer = Importer::new(feed);

    let result = match format {
        Some(CliSourceFormat::Text) => importer.import_with(&DelimitedTextSource, source_path)?,
        Some(CliSourceFormat::Json) => importer.import_with(&JsonSource, source_path)?,
        Some(CliSourceFormat::Xml) => importer.import_with(&XmlSource, source_path)?,
        None => importer.import_file(source_path)?,
    };

    report_import(&result);
    Ok(())
}

/// Print the per-file import summary to stdout
fn report_import(result: &ImportResult) {
    println!(
        "Processed {} record(s): {} inserted, {} duplicate(s), {} skipped",
        result.records_processed(),
        result.inserted,
        result.duplicates,
        result.skipped.len()
    );

    for skipped in &result.skipped {
        println!("  skipped ({}): {}", skipped.reason, skipped.raw.lines().next().unwrap_or(""));
    }
}

fn run_view(feed: &NewsFeed, kind: CliViewKind) -> Result<()> {
    let repository = feed.repository();

    if matches!(kind, CliViewKind::News | CliViewKind::All) {
        let rows = repository.list_news()?;
        println!("=== NEWS RECORDS ===");
        if rows.is_empty() {
            println!("No news records found.");
        }
        for (i, row) in rows.iter().enumerate() {
            println!("{}. {}", i + 1, row.text);
            println!("   City: {}, Date: {}", row.city, row.created_at);
        }
        println!();
    }

    if matches!(kind, CliViewKind::Ads | CliViewKind::All) {
        let rows = repository.list_ads()?;
        println!("=== PRIVATE AD RECORDS ===");
        if rows.is_empty() {
            println!("No private ad records found.");
        }
        for (i, row) in rows.iter().enumerate() {
            println!("{}. {}", i + 1, row.text);
            println!(
                "   Expires on: {}, Days left: {}",
                row.expiration_date, row.days_left
            );
        }
        println!();
    }

    if matches!(kind, CliViewKind::Quotes | CliViewKind::All) {
        let rows = repository.list_quotes()?;
        println!("=== MOTIVATIONAL QUOTES ===");
        if rows.is_empty() {
            println!("No quote records found.");
        }
        for (i, row) in rows.iter().enumerate() {
            println!("{}. \"{}\"", i + 1, row.quote);
            println!("   - {}", row.author);
        }
        println!();
    }

    Ok(())
}

fn run_stats(feed: &NewsFeed) -> Result<()> {
    let stats = feed.repository().connection().stats()?;
    println!("{}", stats);
    Ok(())
}
