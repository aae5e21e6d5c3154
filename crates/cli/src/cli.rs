// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hierarchical permission-scope checking from the command line.
#[derive(Parser, Debug)]
#[command(name = "scopekit", version, about = "Hierarchical permission-scope checking")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a permission against a set of granted claims
    Check {
        /// The permission to check, e.g. "account:edit:settings"
        permission: String,

        /// A granted claim (repeatable)
        #[arg(long = "claim", value_name = "CLAIM")]
        claims: Vec<String>,

        /// JSON file holding an array of granted claims (repeatable)
        #[arg(long = "claims-file", value_name = "PATH")]
        claims_files: Vec<PathBuf>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical claim list for a set of granted claims
    Claims {
        /// A granted claim (repeatable)
        #[arg(long = "claim", value_name = "CLAIM")]
        claims: Vec<String>,

        /// JSON file holding an array of granted claims (repeatable)
        #[arg(long = "claims-file", value_name = "PATH")]
        claims_files: Vec<PathBuf>,

        /// Emit a JSON array instead of one claim per line
        #[arg(long)]
        json: bool,
    },

    /// Compute the claims granted by every given set at once
    Intersect {
        /// JSON files each holding one claim set
        #[arg(value_name = "CLAIMS_FILE")]
        files: Vec<PathBuf>,

        /// Inline claim set: whitespace-separated claims in one argument
        /// (repeatable)
        #[arg(long = "claim-set", value_name = "CLAIMS")]
        claim_sets: Vec<String>,

        /// Emit a JSON array instead of one claim per line
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
