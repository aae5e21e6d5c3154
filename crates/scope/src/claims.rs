// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical claim extraction.
//!
//! Walks a grant trie and emits the minimal list of claim strings that
//! reproduces it: re-inserting the list into an empty trie grants exactly
//! the same space, and no entry is implied by another entry.

use crate::parse::{normalize_claim, parse_path, WILDCARD};
use crate::trie::ScopeTrie;

/// Extract the canonical claim list for a trie.
pub fn extract(trie: &ScopeTrie) -> Vec<String> {
    let mut candidates = Vec::new();
    collect(trie, "", &mut candidates);
    minimize(candidates)
}

/// Collect raw claim candidates for the subtree reached with `prefix`.
///
/// The wildcard child is walked before its siblings so that the later
/// minimization pass sees general grants before the specific grants they
/// absorb. A child that resolves to a pure wildcard grant collapses to the
/// bare token, eliding the redundant trailing `*`.
fn collect(node: &ScopeTrie, prefix: &str, out: &mut Vec<String>) {
    match node {
        ScopeTrie::Terminal => out.push(format!("{prefix}{WILDCARD}")),
        ScopeTrie::Branch(children) => {
            let ordered = children
                .get(WILDCARD)
                .into_iter()
                .map(|child| (WILDCARD, child))
                .chain(
                    children
                        .iter()
                        .filter(|(token, _)| token.as_str() != WILDCARD)
                        .map(|(token, child)| (token.as_str(), child)),
                );
            for (token, child) in ordered {
                let child_prefix = format!("{prefix}{token}:");
                let mut sub = Vec::new();
                collect(child, &child_prefix, &mut sub);
                if sub.len() == 1 && sub[0] == format!("{child_prefix}{WILDCARD}") {
                    out.push(format!("{prefix}{token}"));
                } else {
                    out.append(&mut sub);
                }
            }
        }
    }
}

/// Drop candidates already implied by an earlier, more general one.
fn minimize(candidates: Vec<String>) -> Vec<String> {
    let mut accumulator = ScopeTrie::empty();
    let mut kept = Vec::new();
    for candidate in candidates {
        if accumulator.check(&parse_path(&candidate)) {
            continue;
        }
        accumulator.insert(&parse_path(normalize_claim(&candidate)));
        kept.push(candidate);
    }
    kept
}

#[cfg(test)]
#[path = "claims_tests.rs"]
mod tests;
