// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Property-based tests for the scope engine.
//!
//! A deliberately tiny token alphabet forces collisions between claims,
//! wildcards, and requests, so the interesting interactions (absorption,
//! cross-wildcard intersection, canonicalization) actually occur.

use proptest::prelude::*;
use scopekit::ScopeSet;

fn arb_token() -> impl Strategy<Value = String> {
    "[abc]{1,2}"
}

/// A claim segment: a token, a wildcard, or a two-token alternative list.
fn arb_claim_segment() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => arb_token(),
        1 => Just("*".to_string()),
        1 => (arb_token(), arb_token()).prop_map(|(a, b)| format!("{a},{b}")),
    ]
}

fn arb_claim() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_claim_segment(), 1..4).prop_map(|segments| segments.join(":"))
}

fn arb_claims() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_claim(), 0..5)
}

/// A requested permission: may itself contain wildcards and comma lists.
fn arb_permission() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_claim_segment(), 1..5).prop_map(|segments| segments.join(":"))
}

proptest! {
    // Granting an exact claim implies every deeper extension of it, and
    // never its strict prefixes.
    #[test]
    fn depth_implication(
        tokens in prop::collection::vec(arb_token(), 2..5),
        extension in arb_permission(),
        cut in 1usize..4,
    ) {
        let claim = tokens.join(":");
        let set = ScopeSet::from(claim.as_str());

        prop_assert!(set.check(&claim));
        let extended = format!("{claim}:{extension}");
        prop_assert!(set.check(&extended));

        let cut = cut.min(tokens.len() - 1);
        let prefix = tokens[..cut].join(":");
        prop_assert!(!set.check(&prefix));
    }

    // A trailing wildcard grants the entire subtree and nothing outside it.
    #[test]
    fn wildcard_absorption(token in arb_token(), below in arb_permission()) {
        let set = ScopeSet::from(format!("{token}:*").as_str());
        let inside = format!("{token}:{below}");
        let outside = format!("{token}x:{below}");
        prop_assert!(set.check(&inside));
        prop_assert!(!set.check(&outside));
    }

    // Rebuilding a set from its own canonical claims changes nothing
    // observable.
    #[test]
    fn canonicalization_idempotent(claims in arb_claims(), permission in arb_permission()) {
        let set = ScopeSet::from_iter(claims);
        let rebuilt = ScopeSet::from_iter(set.claims());
        prop_assert_eq!(set.check(&permission), rebuilt.check(&permission));
        prop_assert_eq!(set.claims(), rebuilt.claims());
    }

    // No canonical claim is implied by another canonical claim.
    #[test]
    fn canonical_claims_minimal(claims in arb_claims()) {
        let canonical = ScopeSet::from_iter(claims).claims();
        for (i, claim) in canonical.iter().enumerate() {
            for (j, other) in canonical.iter().enumerate() {
                if i != j {
                    prop_assert!(
                        !ScopeSet::from(other.as_str()).check(claim),
                        "{other} implies {claim}",
                    );
                }
            }
        }
    }

    // Grants only ever widen: adding a claim never revokes anything.
    #[test]
    fn widening_is_monotonic(
        claims in arb_claims(),
        extra in arb_claim(),
        permission in arb_permission(),
    ) {
        let before = ScopeSet::from_iter(claims);
        let mut after = before.clone();
        after.add(&extra);
        if before.check(&permission) {
            prop_assert!(after.check(&permission));
        }
    }

    // The defining intersection property: a permission is granted by the
    // intersection exactly when every input grants it.
    #[test]
    fn intersection_matches_conjunction(
        left in arb_claims(),
        right in arb_claims(),
        permission in arb_permission(),
    ) {
        let a = ScopeSet::from_iter(left);
        let b = ScopeSet::from_iter(right);
        let shared = ScopeSet::intersection([&a, &b]);
        prop_assert_eq!(
            shared.check(&permission),
            a.check(&permission) && b.check(&permission),
        );
    }

    #[test]
    fn three_way_intersection_matches_conjunction(
        first in arb_claims(),
        second in arb_claims(),
        third in arb_claims(),
        permission in arb_permission(),
    ) {
        let a = ScopeSet::from_iter(first);
        let b = ScopeSet::from_iter(second);
        let c = ScopeSet::from_iter(third);
        let shared = ScopeSet::intersection([&a, &b, &c]);
        prop_assert_eq!(
            shared.check(&permission),
            a.check(&permission) && b.check(&permission) && c.check(&permission),
        );
    }

    // Intersection does not depend on input order.
    #[test]
    fn intersection_commutative(left in arb_claims(), right in arb_claims()) {
        let a = ScopeSet::from_iter(left);
        let b = ScopeSet::from_iter(right);
        let mut forward = ScopeSet::intersection([&a, &b]).claims();
        let mut reverse = ScopeSet::intersection([&b, &a]).claims();
        forward.sort();
        reverse.sort();
        prop_assert_eq!(forward, reverse);
    }
}
