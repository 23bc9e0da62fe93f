//! loadlens CLI
//!
//! Universal search across the six record categories of the loadlens
//! logistics platform: shipments, bills, users, drivers, fleet, reports.

mod auth;
mod cli;
mod error;
mod format;
mod http;
mod search;
mod sources;
#[cfg(test)]
mod tests_pipeline;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let result = match cli.command {
        Some(Commands::Search(args)) => execute_search(args, &cli.api_base).await,
        Some(Commands::Suggest(args)) => execute_suggest(args),
        Some(Commands::Login(args)) => execute_login(args),
        Some(Commands::Logout) => execute_logout(),
        None => {
            eprintln!("Error: No command specified. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(get_exit_code(&e));
        }
    }
}

/// Execute the search command
async fn execute_search(args: cli::SearchArgs, api_base: &str) -> Result<String> {
    error::validate_query(&args.query).map_err(|e| anyhow::anyhow!(e.message()))?;

    let tokens = auth::TokenStore::new().map_err(|e| anyhow::anyhow!(e.message()))?;
    let client = http::client_with_timeout(http::DEFAULT_TIMEOUT);
    let shipments = sources::shipments::ShipmentApiSource::new(client, api_base, tokens);
    let service = search::SearchService::with_samples(Box::new(shipments));

    let outcome = service.universal_search_detailed(&args.query).await;

    if outcome.results.is_empty() && !outcome.degraded.is_empty() {
        let names: Vec<&str> = outcome.degraded.iter().map(|c| c.as_str()).collect();
        eprintln!(
            "Note: no matches, but these categories were unreachable: {}",
            names.join(", ")
        );
    }

    if args.json {
        Ok(serde_json::to_string_pretty(&outcome.results)?)
    } else {
        Ok(format::format_results(&outcome.results, args.query.trim()))
    }
}

/// Execute the suggest command
fn execute_suggest(args: cli::SuggestArgs) -> Result<String> {
    let suggestions = search::suggest::suggestions(&args.query);
    Ok(format::format_suggestions(&suggestions, args.query.trim()))
}

/// Execute the login command
fn execute_login(args: cli::LoginArgs) -> Result<String> {
    use std::io::{self, Write};

    let token = if let Some(t) = args.token {
        t
    } else {
        print!("API token: ");
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        input.trim().to_string()
    };

    if token.is_empty() {
        return Err(anyhow::anyhow!("Token is required"));
    }

    let store = auth::TokenStore::new().map_err(|e| anyhow::anyhow!(e.message()))?;
    store
        .store(&token)
        .map_err(|e| anyhow::anyhow!(e.message()))?;

    Ok(format!(
        "✓ Token stored ({})",
        match store.backend() {
            auth::StorageBackend::Keyring => "OS keyring",
            auth::StorageBackend::File => "file",
        }
    ))
}

/// Execute the logout command
fn execute_logout() -> Result<String> {
    let store = auth::TokenStore::new().map_err(|e| anyhow::anyhow!(e.message()))?;
    store.clear().map_err(|e| anyhow::anyhow!(e.message()))?;
    Ok("✓ Token removed".to_string())
}

/// Map error text to exit code
fn get_exit_code(err: &anyhow::Error) -> i32 {
    let err_str = err.to_string().to_lowercase();

    if err_str.contains("invalid") || err_str.contains("usage") {
        1 // Invalid arguments or usage error
    } else if err_str.contains("fetch") || err_str.contains("connection") {
        2 // Network or API error
    } else if err_str.contains("not found") || err_str.contains("token missing") {
        3 // Missing resource
    } else if err_str.contains("timeout") {
        4 // Timeout error
    } else {
        5 // Other application errors
    }
}
