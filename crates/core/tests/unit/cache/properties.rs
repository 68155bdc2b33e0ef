//! Randomized SRRIP Invariant Tests.
//!
//! Drives `SrripPolicy` with random operation sequences that respect the
//! host call contract and checks after every step that:
//! - every RRPV stays within `[0, rpv_max]`,
//! - a victim comes from its candidate set and is at `rpv_max` on return,
//! - earlier candidates in iteration order are below `rpv_max`,
//! - a search needs at most `rpv_max` aging passes.

use proptest::prelude::*;

use srrip_core::cache::policies::{Promotion, ReplacementPolicy, SrripPolicy};
use srrip_core::config::SuppressionScope;

#[derive(Clone, Debug)]
enum Op {
    /// Hit on a slot.
    Hit(usize),
    /// Miss in a set; candidates are scanned rotated by `shift`.
    Miss { set: usize, shift: usize },
}

fn op_strategy(num_sets: usize, ways: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..num_sets * ways).prop_map(Op::Hit),
        (0..num_sets, 0..ways).prop_map(|(set, shift)| Op::Miss { set, shift }),
    ]
}

fn scenario() -> impl Strategy<Value = (usize, usize, u32, bool, Vec<Op>)> {
    (1usize..5, 1usize..9, 1u32..8, any::<bool>()).prop_flat_map(
        |(num_sets, ways, rpv_max, scoped)| {
            (
                Just(num_sets),
                Just(ways),
                Just(rpv_max),
                Just(scoped),
                prop::collection::vec(op_strategy(num_sets, ways), 1..200),
            )
        },
    )
}

proptest! {
    #[test]
    fn srrip_invariants_hold((num_sets, ways, rpv_max, scoped, ops) in scenario()) {
        let scope = if scoped {
            SuppressionScope::InstalledLine
        } else {
            SuppressionScope::AnyLine
        };
        let mut policy = SrripPolicy::with_scope(num_sets * ways, rpv_max, scope).unwrap();
        prop_assert!(policy.rrpvs().iter().all(|&v| v == rpv_max));

        for op in ops {
            match op {
                Op::Hit(line) => {
                    let before = policy.rrpvs().to_vec();
                    let promotion = policy.promote_on_hit(line);
                    match promotion {
                        Promotion::Promoted => {
                            prop_assert_eq!(policy.rrpv(line), Some(0));
                        }
                        Promotion::Suppressed => {
                            prop_assert_eq!(policy.rrpvs(), &before[..]);
                        }
                    }
                }
                Op::Miss { set, shift } => {
                    let base = set * ways;
                    let candidates: Vec<usize> =
                        (0..ways).map(|i| base + (i + shift) % ways).collect();
                    let passes_before = policy.stats().aging_passes;

                    let victim = policy.select_victim(candidates.iter().copied()).unwrap();

                    prop_assert!(candidates.contains(&victim));
                    prop_assert_eq!(policy.rrpv(victim), Some(rpv_max));
                    for &earlier in candidates.iter().take_while(|&&c| c != victim) {
                        prop_assert!(policy.rrpv(earlier).unwrap() < rpv_max);
                    }
                    let passes = policy.stats().aging_passes - passes_before;
                    prop_assert!(passes <= u64::from(rpv_max));

                    policy.install_on_replace(victim);
                    prop_assert_eq!(policy.rrpv(victim), Some(rpv_max - 1));
                }
            }
            prop_assert!(policy.rrpvs().iter().all(|&v| v <= rpv_max));
        }
        prop_assert!(policy.stats().max_aging_passes <= rpv_max);
    }

    /// A search only ever raises candidate RRPVs and never touches other slots.
    #[test]
    fn aging_is_monotone_and_local(
        values in prop::collection::vec(prop::sample::select(vec![0u32, 2, 3]), 2..16),
        split in 1usize..16,
    ) {
        let n = values.len();
        let split = split.min(n - 1);
        let mut policy = SrripPolicy::new(n, 3).unwrap();

        // Promotions first: each install suppresses the promotion after it.
        for (line, _) in values.iter().enumerate().filter(|&(_, &v)| v == 0) {
            prop_assert_eq!(policy.promote_on_hit(line), Promotion::Promoted);
        }
        for (line, _) in values.iter().enumerate().filter(|&(_, &v)| v == 2) {
            policy.install_on_replace(line);
        }
        prop_assert_eq!(policy.rrpvs(), &values[..]);

        let victim = policy.select_victim(split..n).unwrap();
        let after = policy.rrpvs();

        prop_assert!((split..n).contains(&victim));
        for line in 0..split {
            prop_assert_eq!(after[line], values[line]);
        }
        for line in split..n {
            prop_assert!(after[line] >= values[line]);
            prop_assert!(after[line] <= 3);
        }
    }
}
