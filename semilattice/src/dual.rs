/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The order dual of a lattice.

use serde::Deserialize;
use serde::Serialize;

use crate::JoinSemilattice;
use crate::LowerBound;
use crate::MeetSemilattice;
use crate::UpperBound;

/// Newtype wrapper that flips the order of `S`.
///
/// Every capability of `Dual<S>` is a role swap of one capability of
/// `S`:
///
/// | `S` has | `Dual<S>` gets |
/// |---|---|
/// | `meet` | `join(Dual(a), Dual(b)) = Dual(a.meet(b))` |
/// | `join` | `meet(Dual(a), Dual(b)) = Dual(a.join(b))` |
/// | `top` | `bottom = Dual(top)` |
/// | `bottom` | `top = Dual(bottom)` |
///
/// Each impl exists only when `S` has the matching capability, so
/// `Dual<S>` offers exactly the mirror image of what `S` offers.
/// `Dual<Dual<S>>` behaves like `S` but is a different type; wrap
/// and unwrap explicitly to move between them.
///
/// # Example
///
/// ```
/// use semilattice::Dual;
/// use semilattice::JoinSemilattice;
/// use semilattice::LowerBound;
/// use semilattice::Min;
///
/// // A low-water mark: join is min, bottom is u64::MAX.
/// let a = Dual(Min(10u64));
/// let b = Dual(Min(3u64));
/// assert_eq!(a.join(&b), Dual(Min(3)));
/// assert_eq!(Dual::<Min<u64>>::bottom(), Dual(Min(u64::MAX)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dual<S>(pub S);

impl<S> Dual<S> {
    /// Wrap a value.
    pub fn wrap(value: S) -> Self {
        Dual(value)
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

impl<S> From<S> for Dual<S> {
    fn from(value: S) -> Self {
        Dual(value)
    }
}

impl<S: MeetSemilattice> JoinSemilattice for Dual<S> {
    fn join(&self, other: &Self) -> Self {
        Dual(self.0.meet(&other.0))
    }
}

impl<S: JoinSemilattice> MeetSemilattice for Dual<S> {
    fn meet(&self, other: &Self) -> Self {
        Dual(self.0.join(&other.0))
    }
}

impl<S: UpperBound> LowerBound for Dual<S> {
    fn bottom() -> Self {
        Dual(S::top())
    }
}

impl<S: LowerBound> UpperBound for Dual<S> {
    fn top() -> Self {
        Dual(S::bottom())
    }
}

/// The bottom of the dual order, i.e. `Dual(S::top())`.
impl<S: UpperBound> Default for Dual<S> {
    fn default() -> Self {
        Self::bottom()
    }
}
