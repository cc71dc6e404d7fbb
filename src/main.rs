//! Recipe-Harvest main entry point
//!
//! This is the command-line interface for the Recipe-Harvest crawler.

use anyhow::Context;
use clap::Parser;
use recipe_harvest::config::{load_config_with_hash, validate, Config};
use recipe_harvest::crawler::crawl;
use recipe_harvest::output::print_summary;
use recipe_harvest::prompt::read_max_recipes;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Recipe-Harvest: a breadth-first recipe crawler
///
/// Recipe-Harvest crawls a recipe site breadth-first, extracts the title and
/// text of every recipe page it finds, and saves them to a text file once the
/// requested number of recipes has been collected.
#[derive(Parser, Debug)]
#[command(name = "recipe-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A breadth-first recipe crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Number of recipes to collect (prompted for when omitted)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    max_recipes: Option<u32>,

    /// Write recipes to this file instead of the configured path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (cfg, hash) = load_config_with_hash(path).map_err(|e| {
                tracing::error!("Failed to load configuration: {}", e);
                e
            })?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    if let Some(output) = &cli.output {
        config.output.recipes_path = output.display().to_string();
        validate(&config)?;
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let target = match cli.max_recipes {
        Some(n) => n as usize,
        None => {
            let stdin = std::io::stdin();
            read_max_recipes(stdin.lock(), std::io::stdout())?
        }
    };

    handle_crawl(&config, target).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("recipe_harvest=info,warn"),
            1 => EnvFilter::new("recipe_harvest=debug,info"),
            2 => EnvFilter::new("recipe_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Recipe-Harvest Dry Run ===\n");

    println!("Crawl Scope:");
    println!("  Allowed domain: {}", config.crawler.allowed_domain);
    println!("  Recipe path marker: {}", config.crawler.recipe_path_marker);
    println!("  Start URLs ({}):", config.crawler.start_urls.len());
    for url in &config.crawler.start_urls {
        println!("    * {}", url);
    }

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!("  Politeness delay: {}ms", config.http.politeness_delay);
    println!("  Request timeout: {}s", config.http.request_timeout);

    println!("\nOutput:");
    println!("  Recipes file: {}", config.output.recipes_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, target: usize) -> anyhow::Result<()> {
    tracing::info!(
        "Collecting {} recipes within '{}'",
        target,
        config.crawler.allowed_domain
    );

    let report = crawl(config, target)
        .await
        .map_err(|e| {
            tracing::error!("Crawl failed: {}", e);
            e
        })
        .with_context(|| format!("recipes were not saved to {}", config.output.recipes_path))?;

    print_summary(&report, Path::new(&config.output.recipes_path));
    Ok(())
}
