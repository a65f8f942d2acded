/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Bridge from bounded join-semilattices to commutative monoids.

use serde::Deserialize;
use serde::Serialize;

use crate::CommutativeMonoid;
use crate::JoinSemilattice;
use crate::LowerBound;
use crate::Monoid;
use crate::Semigroup;

/// A bounded join-semilattice seen as a commutative monoid.
///
/// - `combine(Comb(a), Comb(b)) = Comb(a.join(b))`
/// - `empty() = Comb(S::bottom())`
///
/// Code that folds values through [`Monoid`] (tree reductions,
/// streaming accumulators, parallel folds) can take a `Comb<S>`
/// without knowing about joins. Because `join` is also idempotent,
/// such code gets more than the monoid laws promise: duplicated
/// inputs, in any order and any grouping, reduce to the same value.
///
/// A `Comb` can only be built when `S: JoinSemilattice + LowerBound`,
/// and that includes deserialization:
///
/// ```compile_fail
/// use semilattice::Comb;
///
/// let bytes = bincode::serialize("not a lattice").unwrap();
/// let _: Comb<String> = bincode::deserialize(&bytes).unwrap();
/// ```
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
///
/// use semilattice::Comb;
/// use semilattice::Monoid;
///
/// let parts = [[1], [2], [1]].map(|p| Comb::wrap(BTreeSet::from(p)));
/// let merged = Comb::concat(parts);
/// assert_eq!(Comb::unwrap(merged), BTreeSet::from([1, 2]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(deserialize = "S: Deserialize<'de> + JoinSemilattice + LowerBound"))]
pub struct Comb<S>(S);

impl<S: JoinSemilattice + LowerBound> Comb<S> {
    /// Wrap a value.
    pub fn wrap(value: S) -> Self {
        Comb(value)
    }

    /// Consume the wrapper and return the inner value.
    pub fn unwrap(self) -> S {
        self.0
    }

    /// Get the inner value.
    pub fn get(&self) -> &S {
        &self.0
    }
}

impl<S: JoinSemilattice + LowerBound> From<S> for Comb<S> {
    fn from(value: S) -> Self {
        Comb(value)
    }
}

impl<S: JoinSemilattice + LowerBound> Semigroup for Comb<S> {
    fn combine(&self, other: &Self) -> Self {
        Comb(self.0.join(&other.0))
    }

    fn combine_assign(&mut self, other: &Self) {
        self.0.join_assign(&other.0);
    }
}

impl<S: JoinSemilattice + LowerBound> Monoid for Comb<S> {
    fn empty() -> Self {
        Comb(S::bottom())
    }
}

impl<S: JoinSemilattice + LowerBound> CommutativeMonoid for Comb<S> {}

impl<S: JoinSemilattice + LowerBound> Default for Comb<S> {
    fn default() -> Self {
        Self::empty()
    }
}
