// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Claim-set loading.
//!
//! A claims file is a JSON array of claim strings. Entries the core would
//! reject (empty strings) are ignored there, matching the engine's
//! fail-closed input policy; an unreadable or unparseable file is an error.

use scopekit::ScopeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading claim sets from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read claims file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid claims file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read one claims file: a JSON array of claim strings.
pub fn claims_from_file(path: &Path) -> Result<Vec<String>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Build one scope set from inline claims plus any number of claims files.
pub fn build_set(claims: &[String], files: &[PathBuf]) -> Result<ScopeSet, LoadError> {
    let mut set = ScopeSet::new();
    set.extend(claims);
    for path in files {
        set.extend(claims_from_file(path)?);
    }
    Ok(set)
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
