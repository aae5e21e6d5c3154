// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The grant trie: storage, claim insertion, and the wildcard-aware check.

use crate::parse::{Segment, WILDCARD};
use std::collections::BTreeMap;

/// A node in the grant trie.
///
/// `Terminal` means this point and everything beneath it is granted.
/// `Branch` maps each granted token to the subtree it opens; the wildcard
/// token `*` is an ordinary key here and gains its meaning in [`check`].
///
/// [`check`]: ScopeTrie::check
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScopeTrie {
    Terminal,
    Branch(BTreeMap<String, ScopeTrie>),
}

impl ScopeTrie {
    /// A trie with no grants.
    pub fn empty() -> Self {
        Self::Branch(BTreeMap::new())
    }

    /// Whether the trie grants nothing at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Branch(children) if children.is_empty())
    }

    /// Merge one normalized claim path into the trie.
    ///
    /// Reaching the end of the path seals that point as `Terminal`; a node
    /// that is already `Terminal` absorbs any deeper insertion. Each token in
    /// a comma segment opens its own branch (a granted claim lists
    /// alternatives), and sibling branches not named by the path are never
    /// touched, so grants only ever widen.
    pub fn insert(&mut self, path: &[Segment]) {
        let Some((segment, rest)) = path.split_first() else {
            *self = Self::Terminal;
            return;
        };
        match self {
            Self::Terminal => {}
            Self::Branch(children) => {
                for token in segment.tokens() {
                    children
                        .entry(token.clone())
                        .or_insert_with(Self::empty)
                        .insert(rest);
                }
            }
        }
    }

    /// Test a requested permission path against the trie.
    ///
    /// A `Terminal` grants the request regardless of remaining depth. A
    /// request that runs out of segments at a `Branch` is denied: a deeper
    /// grant does not imply its own prefix. Every token of the current
    /// segment must be satisfied (a comma in a request means all listed
    /// alternatives are required), through either the wildcard child or the
    /// exact child.
    pub fn check(&self, path: &[Segment]) -> bool {
        match self {
            Self::Terminal => true,
            Self::Branch(children) => {
                let Some((segment, rest)) = path.split_first() else {
                    return false;
                };
                segment.tokens().iter().all(|token| {
                    children
                        .get(WILDCARD)
                        .is_some_and(|child| child.check(rest))
                        || children
                            .get(token.as_str())
                            .is_some_and(|child| child.check(rest))
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
