//! CLI Command Handlers
//!
//! Implementation of all CLI commands for DeFi Scout.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::adapters::github::GithubClient;
use crate::application::{OpportunityScanner, ScanDiagnostics, ScanReport};
use crate::config::{load_config_or_default, Config};

/// DeFi Scout - finds fresh DeFi repositories on GitHub and packages buy signals
#[derive(Parser, Debug)]
#[command(
    name = "defi-scout",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Scans GitHub for fresh DeFi repositories and packages buy signals",
    long_about = "DeFi Scout searches GitHub for recently created DeFi repositories, scores \
                  them with a recency/popularity/keyword/language heuristic, appends sample \
                  yield and arbitrage records and prints an intelligence package. \
                  Without a command it runs one scan with the built-in defaults."
)]
pub struct CliApp {
    /// The command to execute (defaults to `scan`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one full scan and print the intelligence package
    Scan(ScanCmd),

    /// Run a single search query and print scored results
    Search(SearchCmd),

    /// Print the effective configuration as TOML
    ShowConfig(ShowConfigCmd),
}

impl Command {
    /// Config file passed to the command, if any
    pub fn config_path(&self) -> Option<&Path> {
        match self {
            Command::Scan(cmd) => cmd.config.as_deref(),
            Command::Search(cmd) => cmd.config.as_deref(),
            Command::ShowConfig(cmd) => cmd.config.as_deref(),
        }
    }
}

/// Run a full scan
#[derive(Parser, Debug, Default)]
pub struct ScanCmd {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the whole package as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run one query
#[derive(Parser, Debug)]
pub struct SearchCmd {
    /// Search query, e.g. "restaking created:>2025-01-01"
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum results to score (defaults to search.per_query_limit)
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Print configuration
#[derive(Parser, Debug)]
pub struct ShowConfigCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Execute the CLI command
pub async fn execute(app: CliApp) -> Result<()> {
    let command = app.command.unwrap_or(Command::Scan(ScanCmd::default()));

    let config = load_config_or_default(command.config_path())
        .context("Failed to load configuration")?;

    init_logging(app.verbose, app.debug, &config.logging.level)?;

    match command {
        Command::Scan(cmd) => scan_command(cmd, &config).await,
        Command::Search(cmd) => search_command(cmd, &config).await,
        Command::ShowConfig(_) => show_config_command(&config),
    }
}

/// Initialize logging system
///
/// Logs go to stderr so stdout carries only command output (`scan --json`
/// must stay parseable).
fn init_logging(verbose: bool, debug: bool, configured_level: &str) -> Result<()> {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if debug {
        "debug".to_string()
    } else if verbose {
        "info".to_string()
    } else {
        configured_level.trim().to_ascii_lowercase()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Build the GitHub client; fails before any request when the token is missing
fn build_client(config: &Config) -> Result<GithubClient> {
    let token = config.search.resolve_token()?;
    let client = GithubClient::new(config.search.github_config(token))
        .context("Failed to create GitHub client")?;
    Ok(client)
}

/// Handle scan command
async fn scan_command(cmd: ScanCmd, config: &Config) -> Result<()> {
    let client = build_client(config)?;
    let scanner = OpportunityScanner::new(client, config);

    let report = scanner.scan().await;

    if cmd.json {
        let json = serde_json::to_string_pretty(&report.package)
            .context("Failed to serialize package")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Handle search command
async fn search_command(cmd: SearchCmd, config: &Config) -> Result<()> {
    let client = build_client(config)?;
    let scanner = OpportunityScanner::new(client, config);
    let limit = cmd.limit.unwrap_or(config.search.per_query_limit);

    let (scored, diagnostics) = scanner
        .search_and_score(&cmd.query, limit, Utc::now())
        .await
        .with_context(|| format!("Search failed for {:?}", cmd.query))?;

    println!("Results for {:?} ({} scored):", cmd.query, scored.len());
    for project in &scored {
        let marker = if scanner.scorer().is_gem(project.score) { "*" } else { " " };
        println!(
            " {} {:>3}  {:<40} {:>6} stars  {}",
            marker,
            project.score,
            project.name(),
            project.project.stars,
            project.project.url
        );
    }
    print_diagnostics(&diagnostics);

    Ok(())
}

/// Handle show-config command
fn show_config_command(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

fn print_report(report: &ScanReport) {
    let package = &report.package;

    println!("Intelligence package generated at {}", package.generated_at.to_rfc3339());
    println!("{}", package.value_proposition);
    println!();

    println!("Opportunities ({}):", package.opportunities.len());
    for opportunity in &package.opportunities {
        println!("  {}", opportunity);
    }
    println!();

    println!("Signals ({}):", package.signals.len());
    for signal in &package.signals {
        println!("  {}", signal);
    }
    println!();

    println!("Pricing:");
    for (tier, price) in &package.pricing {
        println!("  {:<16} {}", tier, price);
    }
    println!("Target market: {}", package.target_market);
    println!("Note: yield farm and arbitrage entries are sample data.");
    println!();

    print_diagnostics(&report.diagnostics);
}

fn print_diagnostics(diagnostics: &ScanDiagnostics) {
    println!(
        "Queries: {} run, {} failed | Projects: {} found, {} scored, {} skipped | Rejected items: {}",
        diagnostics.queries_run,
        diagnostics.failed_queries.len(),
        diagnostics.projects_found,
        diagnostics.projects_scored,
        diagnostics.skipped_projects.len(),
        diagnostics.rejected_records
    );
    for failure in &diagnostics.failed_queries {
        println!("  failed: {:?} - {}", failure.query, failure.error);
    }
    for skipped in &diagnostics.skipped_projects {
        println!("  skipped: {} - {}", skipped.name, skipped.reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        CliApp::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let app = CliApp::try_parse_from(["defi-scout"]).unwrap();
        assert!(app.command.is_none());
        assert!(!app.verbose);
    }

    #[test]
    fn test_parse_scan() {
        let app = CliApp::try_parse_from(["defi-scout", "--debug", "scan", "--json", "-c", "scout.toml"])
            .unwrap();
        assert!(app.debug);
        match app.command {
            Some(Command::Scan(cmd)) => {
                assert!(cmd.json);
                assert_eq!(cmd.config, Some(PathBuf::from("scout.toml")));
            }
            other => panic!("Expected scan command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_search() {
        let app = CliApp::try_parse_from(["defi-scout", "search", "dex amm", "--limit", "3"]).unwrap();
        match app.command {
            Some(Command::Search(cmd)) => {
                assert_eq!(cmd.query, "dex amm");
                assert_eq!(cmd.limit, Some(3));
                assert!(cmd.config.is_none());
            }
            other => panic!("Expected search command, got {:?}", other),
        }
    }

    #[test]
    fn test_config_path() {
        let app = CliApp::try_parse_from(["defi-scout", "show-config", "--config", "~/scout.toml"]).unwrap();
        let command = app.command.unwrap();
        assert_eq!(command.config_path(), Some(Path::new("~/scout.toml")));
    }

    #[test]
    fn test_build_client_requires_token() {
        let mut config = Config::default();
        config.search.token_env = "DEFI_SCOUT_CLI_TEST_TOKEN_UNSET".to_string();
        let err = build_client(&config).unwrap_err();
        assert!(err.to_string().contains("DEFI_SCOUT_CLI_TEST_TOKEN_UNSET"));
    }
}
