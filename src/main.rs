// Copyright (c) 2025 Lehua Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lehua - command-line prefix completion.
//!
//! Loads a word list into the trie, then completes prefixes given on the
//! command line or read from standard input. Completions go to standard
//! output; logs go to standard error.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use lehua_complete_lib::completer::Completer;
use lehua_complete_lib::config::{
    self, global_config, init_global_config, ConfigLoader, LehuaConfig, LogConfig, Validate,
};
use lehua_complete_lib::error::{
    report_error, set_error_reporter, ErrorContext, LehuaError, LehuaResult, TracingErrorReporter,
};
use serde::Serialize;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Configuration file picked up when `--config` is not given.
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Command line arguments for Lehua.
#[derive(Parser, Debug)]
#[clap(name = "lehua", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list, one word per line
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Maximum completions per query (overrides engine.default_limit)
    #[clap(short = 'n', long)]
    limit: Option<usize>,

    /// List every completion instead of the first N
    #[clap(short, long)]
    all: bool,

    /// Output format for completions
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Complete whitespace-separated prefixes read from standard input
    Repl,

    /// Complete the given prefixes and exit
    Query {
        /// Prefixes to complete
        #[clap(required = true)]
        prefixes: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// How completions are printed.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// One line per query, completions separated by spaces
    Plain,
    /// One JSON object per query
    Json,
}

/// JSON shape of one answered query.
#[derive(Serialize)]
struct QueryOutput<'a> {
    query: &'a str,
    completions: &'a [String],
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> LehuaResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.level.as_str()));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let result = if log.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location),
            )
            .try_init()
    };

    result.map_err(|e| LehuaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the configuration and applies command-line overrides.
fn load_config(args: &Args) -> anyhow::Result<LehuaConfig> {
    let path = args
        .config
        .clone()
        .or_else(|| Some(PathBuf::from(DEFAULT_CONFIG_PATH)).filter(|p| p.exists()));
    let mut config = ConfigLoader::new(path.as_deref(), config::ENV_PREFIX)
        .load()
        .context("Failed to load configuration")?;

    if let Some(limit) = args.limit {
        config.engine.default_limit = limit;
        config.validate().context("Invalid --limit")?;
    }
    Ok(config)
}

/// Builds a completer over the word list named on the command line.
fn build_completer(words: Option<&Path>, config: &LehuaConfig) -> anyhow::Result<Completer> {
    let Some(words) = words else {
        bail!("a word list is required, pass it with --words <PATH>");
    };

    let completer = Completer::from_word_list(words, config.engine.clone(), config.input.clone())
        .with_context(|| format!("Failed to load word list {}", words.display()))?;
    info!(words = completer.len(), "Vocabulary ready");
    Ok(completer)
}

/// Completes one raw query and prints the answer.
fn answer<W: Write>(
    out: &mut W,
    completer: &Completer,
    query: &str,
    all: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let result = if all {
        completer.complete_all(query)
    } else {
        completer.complete(query)
    };

    let completions = match result {
        Ok(completions) => completions,
        Err(e) => {
            report_error(
                ErrorContext::new(e, "completer")
                    .with_details(format!("query: {query}"))
                    .with_span_trace(),
            );
            Vec::new()
        }
    };

    match format {
        OutputFormat::Plain => writeln!(out, "{}", completions.join(" "))?,
        OutputFormat::Json => {
            let line = serde_json::to_string(&QueryOutput {
                query,
                completions: &completions,
            })?;
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = load_config(&args)?;
    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));
    init_global_config(config);
    let global = global_config();
    let config = global.get();

    match &args.command {
        None | Some(Command::Repl) => {
            let completer = build_completer(args.words.as_deref(), config)?;
            let stdin = io::stdin();
            let mut out = io::stdout().lock();

            for line in stdin.lock().lines() {
                let line = line.context("Failed to read standard input")?;
                for token in line.split_whitespace() {
                    answer(&mut out, &completer, token, args.all, args.format)?;
                }
                out.flush()?;
            }
            Ok(())
        }
        Some(Command::Query { prefixes }) => {
            let completer = build_completer(args.words.as_deref(), config)?;
            let mut out = io::stdout().lock();

            for prefix in prefixes {
                answer(&mut out, &completer, prefix, args.all, args.format)?;
            }
            Ok(())
        }
        Some(Command::Validate) => {
            info!("Configuration validated successfully");
            println!("configuration ok");
            Ok(())
        }
        Some(Command::GenConfig { output }) => {
            info!("Generating default configuration");
            let default_config = LehuaConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(LehuaError::Io)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LehuaError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(output, toml).map_err(LehuaError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
