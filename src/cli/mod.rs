//! CLI module for the F1 Teams API
//!
//! - `serve`: run the HTTP API
//! - `migrate`: create the schema and exit

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// F1 Teams API - Formula 1 teams and drivers over HTTP
#[derive(Parser)]
#[command(name = "f1-teams-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Apply pending schema migrations to the configured MySQL database
    Migrate,
}
