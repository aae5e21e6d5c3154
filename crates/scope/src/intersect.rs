// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Intersection of grant tries.
//!
//! Builds the trie granted by every input at once. Claims literally shared
//! between the inputs transfer directly; a wildcard in one input can also
//! pair with a concrete token another input names at the same depth, so
//! `*:b` intersected with `a:*` grants `a:b` even though neither input
//! states it.

use crate::claims;
use crate::parse::{normalize_claim, parse_path, WILDCARD};
use crate::trie::ScopeTrie;
use std::collections::BTreeSet;

/// Intersect any number of tries.
///
/// No inputs yield the empty trie (nothing granted); a single input passes
/// through unchanged.
pub fn intersect(inputs: &[ScopeTrie]) -> ScopeTrie {
    match inputs {
        [] => return ScopeTrie::empty(),
        [only] => return only.clone(),
        _ => {}
    }

    let claim_lists: Vec<Vec<String>> = inputs.iter().map(claims::extract).collect();
    let mut result = ScopeTrie::empty();
    let mut leftovers: Vec<(usize, String)> = Vec::new();

    // Phase 1: claims granted verbatim by every other input.
    for (origin, list) in claim_lists.iter().enumerate() {
        for claim in list {
            if result.check(&parse_path(claim)) {
                continue;
            }
            if granted_by_all(inputs, Some(origin), claim) {
                result.insert(&parse_path(normalize_claim(claim)));
            } else if claim.split(':').any(|token| token == WILDCARD) {
                leftovers.push((origin, claim.clone()));
            }
        }
    }

    // Phase 2: concretize leftover wildcards with tokens the other inputs
    // name at the same depth, and keep every substitution the inputs all
    // agree to grant.
    for (origin, claim) in leftovers {
        for candidate in expand(&claim, &claim_lists, origin) {
            if result.check(&parse_path(&candidate)) {
                continue;
            }
            if granted_by_all(inputs, None, &candidate) {
                result.insert(&parse_path(normalize_claim(&candidate)));
            }
        }
    }

    result
}

/// Whether every input grants `claim`, optionally exempting one input.
fn granted_by_all(inputs: &[ScopeTrie], except: Option<usize>, claim: &str) -> bool {
    let path = parse_path(claim);
    inputs
        .iter()
        .enumerate()
        .all(|(index, input)| Some(index) == except || input.check(&path))
}

/// Enumerate concrete(r) variants of a wildcard-bearing claim.
///
/// Each wildcard position may keep the wildcard or take any non-wildcard
/// token that appears at the same depth in another input's claim list; the
/// variants are the cartesian product across positions. Retaining the
/// wildcard matters when a position is unconstrained by the other inputs
/// (they are `Terminal` above it or wildcarded there themselves).
fn expand(claim: &str, claim_lists: &[Vec<String>], origin: usize) -> Vec<String> {
    let tokens: Vec<&str> = claim.split(':').collect();
    let mut alternatives: Vec<Vec<String>> = Vec::with_capacity(tokens.len());

    for (depth, token) in tokens.iter().enumerate() {
        if *token == WILDCARD {
            let mut options = BTreeSet::new();
            options.insert(WILDCARD.to_string());
            for (index, list) in claim_lists.iter().enumerate() {
                if index == origin {
                    continue;
                }
                for other in list {
                    if let Some(found) = other.split(':').nth(depth) {
                        if found != WILDCARD {
                            options.insert(found.to_string());
                        }
                    }
                }
            }
            alternatives.push(options.into_iter().collect());
        } else {
            alternatives.push(vec![(*token).to_string()]);
        }
    }

    cartesian(&alternatives)
}

/// Join every combination of per-position options back into claim strings.
fn cartesian(alternatives: &[Vec<String>]) -> Vec<String> {
    let mut paths: Vec<Vec<&str>> = vec![Vec::new()];
    for options in alternatives {
        let mut extended = Vec::with_capacity(paths.len() * options.len());
        for path in &paths {
            for option in options {
                let mut next = path.clone();
                next.push(option.as_str());
                extended.push(next);
            }
        }
        paths = extended;
    }
    paths.into_iter().map(|path| path.join(":")).collect()
}

#[cfg(test)]
#[path = "intersect_tests.rs"]
mod tests;
