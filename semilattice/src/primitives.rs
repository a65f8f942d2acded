/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Primitive instances.
//!
//! | Type | join | meet | bottom | top |
//! |---|---|---|---|---|
//! | `()` | `()` | `()` | `()` | `()` |
//! | `bool` | `\|\|` | `&&` | `false` | `true` |
//! | [`Max<T>`] | `max` | | `T::min_value()` | |
//! | [`Min<T>`] | | `min` | | `T::max_value()` |
//! | `HashSet<T>`, `BTreeSet<T>` | `∪` | `∩` | `∅` | |
//! | `Option<L>` | lifted | lifted | `None` | `Some(⊤)` |
//! | `(A, B)` | pointwise | pointwise | pointwise | pointwise |
//!
//! Sets have no top: a universal set would need a closed universe of
//! elements, which a generic `T` does not provide.

use std::collections::BTreeSet;
use std::collections::HashSet;
use std::hash::Hash;

use num_traits::Bounded;
use serde::Deserialize;
use serde::Serialize;

use crate::JoinSemilattice;
use crate::LowerBound;
use crate::MeetSemilattice;
use crate::UpperBound;

// Max<T>: join = max

/// Newtype wrapper for an `Ord` type where `join` is `max`.
///
/// - `join = max(a, b)`
/// - `bottom = T::min_value()` (when `T: Ord + Bounded`)
///
/// Floats are `Bounded` but not `Ord`: `f64::MIN` is not below
/// `-inf`, so `Max<f64>` gets no bottom.
///
/// ```compile_fail
/// use semilattice::LowerBound;
/// use semilattice::Max;
///
/// let _ = Max::<f64>::bottom();
/// ```
///
/// `Max` has no meet. Use [`Min`] for `min`, or `Dual<Max<T>>` to get
/// `min` as a meet with `T::min_value()` as top.
///
/// # Example
/// ```
/// use semilattice::JoinSemilattice;
/// use semilattice::Max;
///
/// let a = Max(5);
/// let b = Max(10);
/// assert_eq!(a.join(&b), Max(10));
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize
)]
pub struct Max<T>(pub T);

impl<T: Ord + Clone> JoinSemilattice for Max<T> {
    fn join(&self, other: &Self) -> Self {
        if self.0 >= other.0 {
            self.clone()
        } else {
            other.clone()
        }
    }
}

impl<T: Ord + Bounded> LowerBound for Max<T> {
    fn bottom() -> Self {
        Max(T::min_value())
    }
}

impl<T> From<T> for Max<T> {
    fn from(value: T) -> Self {
        Max(value)
    }
}

impl<T: Ord + Bounded> Default for Max<T> {
    fn default() -> Self {
        Self::bottom()
    }
}

impl<T> Max<T> {
    /// Get the inner value.
    pub fn get(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

// Min<T>: meet = min

/// Newtype wrapper for an `Ord` type where `meet` is `min`.
///
/// - `meet = min(a, b)`
/// - `top = T::max_value()` (when `T: Ord + Bounded`)
///
/// As with [`Max`], floats get no top:
///
/// ```compile_fail
/// use semilattice::Min;
/// use semilattice::UpperBound;
///
/// let _ = Min::<f64>::top();
/// ```
///
/// For a low-water mark that merges with `join`, use `Dual<Min<T>>`.
///
/// # Example
/// ```
/// use semilattice::MeetSemilattice;
/// use semilattice::Min;
///
/// let a = Min(5);
/// let b = Min(10);
/// assert_eq!(a.meet(&b), Min(5));
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize
)]
pub struct Min<T>(pub T);

impl<T: Ord + Clone> MeetSemilattice for Min<T> {
    fn meet(&self, other: &Self) -> Self {
        if self.0 <= other.0 {
            self.clone()
        } else {
            other.clone()
        }
    }
}

impl<T: Ord + Bounded> UpperBound for Min<T> {
    fn top() -> Self {
        Min(T::max_value())
    }
}

impl<T> From<T> for Min<T> {
    fn from(value: T) -> Self {
        Min(value)
    }
}

impl<T: Ord + Bounded> Default for Min<T> {
    fn default() -> Self {
        Self::top()
    }
}

impl<T> Min<T> {
    /// Get the inner value.
    pub fn get(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

// bool: join = OR, meet = AND

impl JoinSemilattice for bool {
    fn join(&self, other: &Self) -> Self {
        *self || *other
    }
}

impl MeetSemilattice for bool {
    fn meet(&self, other: &Self) -> Self {
        *self && *other
    }
}

impl LowerBound for bool {
    fn bottom() -> Self {
        false
    }
}

impl UpperBound for bool {
    fn top() -> Self {
        true
    }
}

// (): the one-element lattice

impl JoinSemilattice for () {
    fn join(&self, _other: &Self) -> Self {}
}

impl MeetSemilattice for () {
    fn meet(&self, _other: &Self) -> Self {}
}

impl LowerBound for () {
    fn bottom() -> Self {}
}

impl UpperBound for () {
    fn top() -> Self {}
}

// Sets: join = union, meet = intersection, bottom = ∅

impl<T: Eq + Hash + Clone> JoinSemilattice for HashSet<T> {
    fn join(&self, other: &Self) -> Self {
        self.union(other).cloned().collect()
    }
}

impl<T: Eq + Hash + Clone> MeetSemilattice for HashSet<T> {
    fn meet(&self, other: &Self) -> Self {
        self.intersection(other).cloned().collect()
    }
}

impl<T> LowerBound for HashSet<T> {
    fn bottom() -> Self {
        HashSet::new()
    }
}

/// Same semantics as `HashSet`, but uses `Ord` instead of `Hash`.
impl<T: Ord + Clone> JoinSemilattice for BTreeSet<T> {
    fn join(&self, other: &Self) -> Self {
        self.union(other).cloned().collect()
    }
}

impl<T: Ord + Clone> MeetSemilattice for BTreeSet<T> {
    fn meet(&self, other: &Self) -> Self {
        self.intersection(other).cloned().collect()
    }
}

impl<T> LowerBound for BTreeSet<T> {
    fn bottom() -> Self {
        BTreeSet::new()
    }
}

// Option<L>: lifted lattice with a fresh bottom

/// `None` sits below every `Some`: it is the identity for join and
/// absorbs meet. This is useful for values where absence is distinct
/// from any present value.
impl<L: JoinSemilattice + Clone> JoinSemilattice for Option<L> {
    fn join(&self, other: &Self) -> Self {
        match (self, other) {
            (None, x) | (x, None) => x.clone(),
            (Some(a), Some(b)) => Some(a.join(b)),
        }
    }
}

impl<L: MeetSemilattice> MeetSemilattice for Option<L> {
    fn meet(&self, other: &Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.meet(b)),
            _ => None,
        }
    }
}

impl<L> LowerBound for Option<L> {
    fn bottom() -> Self {
        None
    }
}

impl<L: UpperBound> UpperBound for Option<L> {
    fn top() -> Self {
        Some(L::top())
    }
}

// (A, B): product lattice

impl<A: JoinSemilattice, B: JoinSemilattice> JoinSemilattice for (A, B) {
    fn join(&self, other: &Self) -> Self {
        (self.0.join(&other.0), self.1.join(&other.1))
    }
}

impl<A: MeetSemilattice, B: MeetSemilattice> MeetSemilattice for (A, B) {
    fn meet(&self, other: &Self) -> Self {
        (self.0.meet(&other.0), self.1.meet(&other.1))
    }
}

impl<A: LowerBound, B: LowerBound> LowerBound for (A, B) {
    fn bottom() -> Self {
        (A::bottom(), B::bottom())
    }
}

impl<A: UpperBound, B: UpperBound> UpperBound for (A, B) {
    fn top() -> Self {
        (A::top(), B::top())
    }
}

// Tests
