//! Command-line front end for the forum store.
//!
//! This module plays the presentation layer: it parses arguments, builds a
//! store from the environment configuration, and renders posts as text or
//! JSON.

pub mod args;
pub mod commands;
pub mod utils;

use crate::config::ForumConfig;
use crate::forum::ForumStore;
use crate::Result;
use std::io;
use std::process;
use tracing::debug;

pub use args::{Command, SessionCommand};
pub use commands::*;
pub use utils::*;

/// Main entry point for the CLI application
pub fn run() -> Result<()> {
    // Parse command line arguments
    let command = match args::parse_args() {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("Error parsing arguments: {}", e);
            args::print_usage();
            process::exit(1);
        }
    };

    let config = ForumConfig::from_env()?;
    debug!(
        viewer_id = %config.viewer.id,
        sample_data = config.sample_data,
        "Loaded configuration"
    );
    let mut store = ForumStore::from_config(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Execute command
    let result = match command {
        Command::List {
            category,
            query,
            json,
        } => commands::list(&store, category, &query, json, &mut out),
        Command::Show { post_id, json } => commands::show(&store, &post_id, json, &mut out),
        Command::Categories => commands::categories(&store, &mut out),
        Command::Session => {
            let stdin = io::stdin();
            commands::session(&mut store, &config.viewer, stdin.lock(), &mut out)
        }
        Command::Help => {
            args::print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    Ok(())
}
