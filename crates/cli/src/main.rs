// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scope-checking binary entry point.

use anyhow::Result;
use clap::Parser;
use scopekit::ScopeSet;

mod cli;
mod load;

use cli::{Cli, Command};

/// Process exit codes.
pub mod exit_codes {
    /// Permission granted / operation succeeded
    pub const GRANTED: i32 = 0;
    /// Permission denied
    pub const DENIED: i32 = 1;
    /// Bad usage or unreadable input
    pub const ERROR: i32 = 2;
}

fn main() {
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Check {
            permission,
            claims,
            claims_files,
            json,
        } => {
            let set = load::build_set(&claims, &claims_files)?;
            let granted = set.check(&permission);
            if json {
                let report = serde_json::json!({
                    "permission": permission,
                    "granted": granted,
                });
                println!("{report}");
            } else {
                println!("{}", if granted { "granted" } else { "denied" });
            }
            Ok(if granted {
                exit_codes::GRANTED
            } else {
                exit_codes::DENIED
            })
        }

        Command::Claims {
            claims,
            claims_files,
            json,
        } => {
            let set = load::build_set(&claims, &claims_files)?;
            print_claims(&set, json)?;
            Ok(exit_codes::GRANTED)
        }

        Command::Intersect {
            files,
            claim_sets,
            json,
        } => {
            let mut sets: Vec<ScopeSet> = Vec::new();
            for path in &files {
                sets.push(ScopeSet::from(load::claims_from_file(path)?));
            }
            for inline in &claim_sets {
                sets.push(inline.split_whitespace().collect());
            }
            let shared = ScopeSet::intersection(sets);
            print_claims(&shared, json)?;
            Ok(exit_codes::GRANTED)
        }
    }
}

fn print_claims(set: &ScopeSet, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(set)?);
    } else {
        for claim in set.claims() {
            println!("{claim}");
        }
    }
    Ok(())
}
