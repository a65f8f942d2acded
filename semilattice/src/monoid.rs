/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Monoid: semigroup with identity element.

use crate::Semigroup;

/// An associative `combine` with an identity, `empty()`.
///
/// `empty().combine(a) == a == a.combine(empty())` is expected but not
/// checked; see [`crate::laws::check_monoid`].
///
/// Reduction code in this crate is written against `Monoid` only. A
/// bounded join-semilattice enters through [`Comb`](crate::Comb),
/// whose `empty()` is the lattice bottom:
///
/// ```
/// use semilattice::Comb;
/// use semilattice::Max;
/// use semilattice::Monoid;
///
/// let marks = [Max(3u64), Max(11), Max(7)].map(Comb::wrap);
/// assert_eq!(Comb::concat(marks).unwrap(), Max(11));
/// assert_eq!(Comb::<Max<u64>>::concat([]).unwrap(), Max(0));
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Left fold from `empty()`.
    fn concat<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iter.into_iter()
            .fold(Self::empty(), |acc, x| acc.combine(&x))
    }
}

/// Marker: `a.combine(b) == b.combine(a)`, so values can be combined
/// in whatever order they arrive.
pub trait CommutativeMonoid: Monoid {}
