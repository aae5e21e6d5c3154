// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The public scope-set type.

use crate::claims;
use crate::intersect;
use crate::parse::{self, Segment};
use crate::trie::ScopeTrie;
use lru::LruCache;
use parking_lot::Mutex;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::num::NonZeroUsize;

/// Parsed permission strings kept per instance; repeated checks of the same
/// permission skip the split. Bounded so hostile or high-cardinality input
/// cannot grow the cache without limit.
const PARSE_CACHE_CAPACITY: usize = 256;

/// A set of granted permission scopes.
///
/// Claims are colon-delimited hierarchical paths with two pieces of sugar: a
/// comma segment grants each listed alternative, and the `*` token grants
/// any value at its depth. Checking inverts the comma: a requested
/// `a:read,write` requires both `a:read` and `a:write` to be granted.
///
/// Malformed input never fails loudly: empty claims are ignored on [`add`]
/// and empty permissions deny on [`check`], so a scope check can sit on a
/// request path without introducing a panic or error branch.
///
/// ```
/// use scopekit::ScopeSet;
///
/// let mut set = ScopeSet::from("account:edit:*");
/// set.add("printer:print,query");
///
/// assert!(set.check("account:edit:settings"));
/// assert!(set.check("printer:print:lobby"));
/// assert!(!set.check("printer:admin"));
/// ```
///
/// [`add`]: ScopeSet::add
/// [`check`]: ScopeSet::check
pub struct ScopeSet {
    trie: ScopeTrie,
    /// Canonical claim list, recomputed lazily after each mutation.
    claims_cache: Mutex<Option<Vec<String>>>,
    parse_cache: Mutex<LruCache<String, Vec<Segment>>>,
}

impl ScopeSet {
    /// An empty set granting nothing.
    pub fn new() -> Self {
        Self::from_trie(ScopeTrie::empty())
    }

    fn from_trie(trie: ScopeTrie) -> Self {
        Self {
            trie,
            claims_cache: Mutex::new(None),
            parse_cache: Mutex::new(new_parse_cache()),
        }
    }

    /// Grant one claim. Returns `self` for chaining.
    ///
    /// The claim is normalized before insertion: a redundant trailing `:*`
    /// run is stripped, and an all-wildcard claim grants everything. An
    /// empty claim is ignored.
    pub fn add(&mut self, claim: &str) -> &mut Self {
        if claim.is_empty() {
            return self;
        }
        let path = parse::parse_path(parse::normalize_claim(claim));
        self.trie.insert(&path);
        *self.claims_cache.lock() = None;
        self
    }

    /// Grant each claim in turn. Returns `self` for chaining.
    pub fn extend<I>(&mut self, claims: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for claim in claims {
            self.add(claim.as_ref());
        }
        self
    }

    /// Whether the requested permission is implied by the granted claims.
    ///
    /// Read-only; an empty permission is denied.
    pub fn check(&self, permission: &str) -> bool {
        if permission.is_empty() {
            return false;
        }
        let path = {
            let mut cache = self.parse_cache.lock();
            match cache.get(permission) {
                Some(parsed) => parsed.clone(),
                None => {
                    let parsed = parse::parse_path(permission);
                    cache.put(permission.to_string(), parsed.clone());
                    parsed
                }
            }
        };
        self.trie.check(&path)
    }

    /// The minimal claim list that exactly reproduces this set.
    ///
    /// Computed on first use and cached until the next [`add`].
    ///
    /// [`add`]: ScopeSet::add
    pub fn claims(&self) -> Vec<String> {
        let mut cache = self.claims_cache.lock();
        cache
            .get_or_insert_with(|| claims::extract(&self.trie))
            .clone()
    }

    /// Whether the set grants nothing at all.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// The set of scopes granted by every input at once.
    ///
    /// Accepts anything convertible into a `ScopeSet`, so existing sets and
    /// raw claim strings mix freely. Wildcards cross-pollinate: a `*` in one
    /// input combines with the concrete tokens other inputs name at the same
    /// depth.
    ///
    /// ```
    /// use scopekit::ScopeSet;
    ///
    /// let shared = ScopeSet::intersection(["*:b", "a:*"]);
    /// assert_eq!(shared.claims(), ["a:b"]);
    /// ```
    pub fn intersection<I>(sets: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ScopeSet>,
    {
        let tries: Vec<ScopeTrie> = sets.into_iter().map(|set| set.into().trie).collect();
        Self::from_trie(intersect::intersect(&tries))
    }
}

fn new_parse_cache() -> LruCache<String, Vec<Segment>> {
    LruCache::new(NonZeroUsize::new(PARSE_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN))
}

impl Default for ScopeSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ScopeSet {
    fn clone(&self) -> Self {
        Self {
            trie: self.trie.clone(),
            claims_cache: Mutex::new(self.claims_cache.lock().clone()),
            parse_cache: Mutex::new(new_parse_cache()),
        }
    }
}

impl fmt::Debug for ScopeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeSet")
            .field("claims", &self.claims())
            .finish_non_exhaustive()
    }
}

impl From<&str> for ScopeSet {
    fn from(claim: &str) -> Self {
        let mut set = Self::new();
        set.add(claim);
        set
    }
}

impl From<String> for ScopeSet {
    fn from(claim: String) -> Self {
        Self::from(claim.as_str())
    }
}

impl From<&ScopeSet> for ScopeSet {
    fn from(set: &ScopeSet) -> Self {
        set.clone()
    }
}

impl From<Vec<&str>> for ScopeSet {
    fn from(claims: Vec<&str>) -> Self {
        claims.into_iter().collect()
    }
}

impl From<Vec<String>> for ScopeSet {
    fn from(claims: Vec<String>) -> Self {
        claims.into_iter().collect()
    }
}

impl From<&[&str]> for ScopeSet {
    fn from(claims: &[&str]) -> Self {
        claims.iter().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ScopeSet {
    fn from_iter<I: IntoIterator<Item = S>>(claims: I) -> Self {
        let mut set = Self::new();
        set.extend(claims);
        set
    }
}

/// Serializes as the canonical claim list.
impl Serialize for ScopeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.claims().serialize(serializer)
    }
}

/// Deserializes from a sequence of claim strings.
impl<'de> Deserialize<'de> for ScopeSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let claims = Vec::<String>::deserialize(deserializer)?;
        Ok(claims.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
