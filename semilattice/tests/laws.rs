/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Property tests: every instance and adapter satisfies the laws of
//! every capability it claims.

use std::collections::BTreeSet;
use std::collections::HashSet;

use proptest::prelude::*;
use semilattice::Comb;
use semilattice::Dual;
use semilattice::JoinSemilattice;
use semilattice::Max;
use semilattice::MeetSemilattice;
use semilattice::Min;
use semilattice::Monoid;
use semilattice::UpperBound;
use semilattice::laws;
use semilattice::reduce::ReduceOpts;
use semilattice::reduce::join_all_unordered;
use semilattice::reduce::tree_reduce;

fn btree_set() -> impl Strategy<Value = BTreeSet<u8>> {
    prop::collection::btree_set(any::<u8>(), 0..8)
}

fn hash_set() -> impl Strategy<Value = HashSet<u8>> {
    prop::collection::hash_set(any::<u8>(), 0..8)
}

fn max_i64() -> impl Strategy<Value = Max<i64>> {
    any::<i64>().prop_map(Max)
}

fn min_u8() -> impl Strategy<Value = Min<u8>> {
    any::<u8>().prop_map(Min)
}

/// A list of partial states and a shuffled copy with some of them
/// delivered twice.
fn deliveries() -> impl Strategy<Value = (Vec<BTreeSet<u8>>, Vec<BTreeSet<u8>>)> {
    prop::collection::vec(btree_set(), 0..12)
        .prop_flat_map(|parts| {
            let n = parts.len();
            (Just(parts.clone()), prop::sample::subsequence(parts, 0..=n))
        })
        .prop_flat_map(|(parts, redelivered)| {
            let mut replay = parts.clone();
            replay.extend(redelivered);
            (Just(parts), Just(replay).prop_shuffle())
        })
}

proptest! {
    // bool

    #[test]
    fn bool_laws(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
        prop_assert_eq!(laws::check_join(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_meet(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_join_identity(&a), Ok(()));
        prop_assert_eq!(laws::check_meet_identity(&a), Ok(()));
        prop_assert_eq!(laws::check_join_absorbing_top(&a), Ok(()));
        prop_assert_eq!(laws::check_meet_absorbing_bottom(&a), Ok(()));
    }

    // Max / Min

    #[test]
    fn max_laws(a in max_i64(), b in max_i64(), c in max_i64()) {
        prop_assert_eq!(laws::check_join(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_join_identity(&a), Ok(()));
        prop_assert_eq!(a.join(&b), Max(a.0.max(b.0)));
    }

    #[test]
    fn min_laws(a in min_u8(), b in min_u8(), c in min_u8()) {
        prop_assert_eq!(laws::check_meet(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_meet_identity(&a), Ok(()));
        prop_assert_eq!(a.meet(&b), Min(a.0.min(b.0)));
    }

    // Sets

    #[test]
    fn btree_set_laws(a in btree_set(), b in btree_set(), c in btree_set()) {
        prop_assert_eq!(laws::check_join(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_meet(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_join_identity(&a), Ok(()));
        prop_assert_eq!(laws::check_meet_absorbing_bottom(&a), Ok(()));
    }

    #[test]
    fn hash_set_laws(a in hash_set(), b in hash_set(), c in hash_set()) {
        prop_assert_eq!(laws::check_join(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_meet(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_join_identity(&a), Ok(()));
        prop_assert_eq!(laws::check_meet_absorbing_bottom(&a), Ok(()));
    }

    // Option / pairs

    #[test]
    fn option_laws(
        a in prop::option::of(min_u8()),
        b in prop::option::of(min_u8()),
        c in prop::option::of(min_u8()),
    ) {
        prop_assert_eq!(laws::check_meet(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_meet_identity(&a), Ok(()));
        prop_assert_eq!(laws::check_meet_absorbing_bottom(&a), Ok(()));

        let (x, y, z) = (a.map(|m| Max(m.0)), b.map(|m| Max(m.0)), c.map(|m| Max(m.0)));
        prop_assert_eq!(laws::check_join(&x, &y, &z), Ok(()));
        prop_assert_eq!(laws::check_join_identity(&x), Ok(()));
    }

    #[test]
    fn pair_laws(
        a in (max_i64(), any::<bool>()),
        b in (max_i64(), any::<bool>()),
        c in (max_i64(), any::<bool>()),
    ) {
        prop_assert_eq!(laws::check_join(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_join_identity(&a), Ok(()));
    }

    #[test]
    fn pair_meet_laws(
        a in (min_u8(), any::<bool>()),
        b in (min_u8(), any::<bool>()),
        c in (min_u8(), any::<bool>()),
    ) {
        prop_assert_eq!(laws::check_meet(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_meet_identity(&a), Ok(()));
        prop_assert_eq!(a.meet(&b), (a.0.meet(&b.0), a.1 && b.1));
    }

    #[test]
    fn pair_bounds_absorb(a in any::<(bool, bool)>()) {
        prop_assert_eq!(laws::check_join_absorbing_top(&a), Ok(()));
        prop_assert_eq!(laws::check_meet_absorbing_bottom(&a), Ok(()));
    }

    // Dual

    #[test]
    fn dual_wrap_unwrap(v in btree_set()) {
        prop_assert_eq!(Dual::wrap(v.clone()).unwrap(), v);
    }

    #[test]
    fn dual_swaps_roles(a in btree_set(), b in btree_set()) {
        prop_assert_eq!(laws::check_dual_join(&a, &b), Ok(()));
        prop_assert_eq!(laws::check_dual_meet(&a, &b), Ok(()));
    }

    #[test]
    fn dual_bool_laws(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
        let (a, b, c) = (Dual(a), Dual(b), Dual(c));
        prop_assert_eq!(laws::check_join(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_meet(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_join_identity(&a), Ok(()));
        prop_assert_eq!(laws::check_meet_identity(&a), Ok(()));
        prop_assert_eq!(laws::check_join_absorbing_top(&a), Ok(()));
        prop_assert_eq!(laws::check_meet_absorbing_bottom(&a), Ok(()));
    }

    #[test]
    fn dual_min_laws(a in min_u8(), b in min_u8(), c in min_u8()) {
        prop_assert_eq!(laws::check_dual_join(&a, &b), Ok(()));
        let (a, b, c) = (Dual(a), Dual(b), Dual(c));
        prop_assert_eq!(laws::check_join(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_join_identity(&a), Ok(()));
    }

    #[test]
    fn dual_set_laws(a in btree_set(), b in btree_set(), c in btree_set()) {
        let (a, b, c) = (Dual(a), Dual(b), Dual(c));
        prop_assert_eq!(laws::check_join(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_meet(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_meet_identity(&a), Ok(()));
        prop_assert_eq!(laws::check_join_absorbing_top(&a), Ok(()));
    }

    #[test]
    fn double_dual_behaves_like_base(a in max_i64(), b in max_i64(), c in max_i64()) {
        let (x, y, z) = (Dual(Dual(a)), Dual(Dual(b)), Dual(Dual(c)));
        prop_assert_eq!(laws::check_join(&x, &y, &z), Ok(()));
        prop_assert_eq!(laws::check_join_identity(&x), Ok(()));
        prop_assert_eq!(x.join(&y).unwrap().unwrap(), a.join(&b));
    }

    #[test]
    fn dual_max_meet_laws(a in max_i64(), b in max_i64(), c in max_i64()) {
        prop_assert_eq!(laws::check_dual_meet(&a, &b), Ok(()));
        let (a, b, c) = (Dual(a), Dual(b), Dual(c));
        prop_assert_eq!(laws::check_meet(&a, &b, &c), Ok(()));
        prop_assert_eq!(laws::check_meet_identity(&a), Ok(()));
        prop_assert_eq!(Dual::<Max<i64>>::top(), Dual(Max(i64::MIN)));
    }

    // Comb

    #[test]
    fn comb_is_commutative_monoid(a in btree_set(), b in btree_set(), c in btree_set()) {
        let (a, b, c) = (Comb::wrap(a), Comb::wrap(b), Comb::wrap(c));
        prop_assert_eq!(laws::check_commutative_monoid(&a, &b, &c), Ok(()));
    }

    #[test]
    fn comb_over_max_is_commutative_monoid(
        a in any::<u32>(),
        b in any::<u32>(),
        c in any::<u32>(),
    ) {
        let (a, b, c) = (Comb::wrap(Max(a)), Comb::wrap(Max(b)), Comb::wrap(Max(c)));
        prop_assert_eq!(laws::check_commutative_monoid(&a, &b, &c), Ok(()));
    }

    #[test]
    fn comb_over_dual_is_commutative_monoid(a in min_u8(), b in min_u8(), c in min_u8()) {
        let (a, b, c) = (Comb::wrap(Dual(a)), Comb::wrap(Dual(b)), Comb::wrap(Dual(c)));
        prop_assert_eq!(laws::check_commutative_monoid(&a, &b, &c), Ok(()));
    }

    #[test]
    fn reduction_ignores_order_grouping_and_duplicates(
        (parts, replay) in deliveries(),
        fan_in in 2usize..5,
    ) {
        let expected = Comb::concat(parts.iter().cloned().map(Comb::wrap));

        let tree = tree_reduce(replay.iter().cloned().map(Comb::wrap), &ReduceOpts { fan_in });
        prop_assert_eq!(tree, Ok(expected.clone()));
        prop_assert_eq!(join_all_unordered(replay), expected.unwrap());
    }
}

#[test]
fn unit_laws() {
    assert_eq!(laws::check_join(&(), &(), &()), Ok(()));
    assert_eq!(laws::check_meet(&(), &(), &()), Ok(()));
    assert_eq!(laws::check_join_identity(&()), Ok(()));
    assert_eq!(laws::check_meet_identity(&()), Ok(()));
}

#[test]
fn comb_over_sets_folds_to_union_in_any_grouping() {
    let parts: Vec<BTreeSet<i32>> = vec![[1].into(), [2].into(), [1, 2, 3].into()];
    let expected = BTreeSet::from([1, 2, 3]);

    for fan_in in 2..=4 {
        let items = parts.iter().cloned().map(Comb::wrap);
        let out = tree_reduce(items, &ReduceOpts { fan_in }).unwrap();
        assert_eq!(out.unwrap(), expected);
    }
    let reversed = Comb::concat(parts.into_iter().rev().map(Comb::wrap));
    assert_eq!(reversed.unwrap(), expected);
}
