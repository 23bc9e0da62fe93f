//! CLI argument types

use clap::{Parser, Subcommand};

/// Loadlens CLI
#[derive(Parser)]
#[command(name = "loadlens")]
#[command(about = "Universal search across the loadlens logistics platform", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// API base URL
    #[arg(long, global = true, env = "LOADLENS_API_BASE", default_value = "https://api.loadlens.io")]
    pub api_base: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search shipments, bills, users, drivers, fleet, and reports at once
    Search(SearchArgs),
    /// Suggestion lookup for in-progress queries
    Suggest(SuggestArgs),
    /// Store the API bearer token
    Login(LoginArgs),
    /// Remove the stored API token
    Logout,
}

/// Search command arguments
#[derive(Parser, Clone, Debug)]
pub struct SearchArgs {
    /// Search terms (case-insensitive)
    pub query: String,

    /// Emit raw JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Suggest command arguments
#[derive(Parser, Clone, Debug)]
pub struct SuggestArgs {
    /// In-progress query text
    pub query: String,
}

/// Login command arguments
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// API bearer token; prompted for when omitted
    #[arg(short = 't', long)]
    pub token: Option<String>,
}
