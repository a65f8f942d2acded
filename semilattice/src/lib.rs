/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![deny(missing_docs)]

//! Capability traits for join- and meet-semilattices, their bound
//! witnesses, and adapters that turn one capability set into another.
//!
//! # Quick Start
//!
//! ```rust
//! use semilattice::JoinSemilattice;
//! use semilattice::LowerBound;
//! use semilattice::Max;
//!
//! // Max<T> wraps an ordered type where join = max
//! let a = Max(5);
//! let b = Max(3);
//! assert_eq!(a.join(&b), Max(5));
//!
//! // Bottom element is the identity for join
//! assert_eq!(Max::<i32>::bottom().join(&a), a);
//! ```
//!
//! # Capabilities
//!
//! Each capability is its own trait, so a type claims exactly the
//! structure it has:
//!
//! - [`JoinSemilattice`]: a commutative, associative and
//!   **idempotent** merge (`join`). `join` computes a **least upper
//!   bound** under the order it induces (`a ≤ b` iff `a.join(&b) ==
//!   b`). Idempotence (`a ⊔ a = a`) is what makes this safe under
//!   at-least-once delivery: re-merging the same update is a no-op.
//!
//! - [`MeetSemilattice`]: the dual merge (`meet`), a **greatest lower
//!   bound**, with the same three laws.
//!
//! - [`LowerBound`]: a bottom element (⊥). If the type also joins, ⊥
//!   is the identity for `join`; if it also meets, ⊥ absorbs `meet`.
//!
//! - [`UpperBound`]: a top element (⊤). If the type also meets, ⊤ is
//!   the identity for `meet`; if it also joins, ⊤ absorbs `join`.
//!
//! None of the laws are checked at call time. They are obligations
//! on the implementor; the [`laws`] module has checkers for use in
//! tests.
//!
//! # Adapters
//!
//! - [`Dual<S>`] swaps the roles of join/meet and bottom/top. For
//!   example `Dual<Min<T>>` joins with `min`.
//! - [`Comb<S>`] presents `S: JoinSemilattice + LowerBound` as a
//!   [`CommutativeMonoid`], the shape generic reduction code (see
//!   [`reduce`]) consumes.
//!
//! # Why Idempotence Matters for Distributed Systems
//!
//! With at-least-once delivery, messages may be delivered multiple
//! times due to retries, network partitions, or failover.
//! Non-idempotent operations (like addition) produce incorrect
//! results when applied multiple times:
//!
//! ```text
//! // Problem: sum accumulator with duplicates
//! sum(1, 2, 2, 3)  // Intended: 1+2+3=6, Actual: 1+2+2+3=8 ❌
//!
//! // Solution: max accumulator is idempotent
//! max(1, 2, 2, 3)  // Always 3, regardless of duplicates ✓
//! ```
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use semilattice::Dual;
//! use semilattice::JoinSemilattice;
//! use semilattice::MeetSemilattice;
//!
//! let a: BTreeSet<u32> = [1, 2].into();
//! let b: BTreeSet<u32> = [2, 3].into();
//!
//! assert_eq!(a.join(&b), BTreeSet::from([1, 2, 3]));
//! assert_eq!(a.meet(&b), BTreeSet::from([2]));
//!
//! // Joining duals meets the underlying sets.
//! let d = Dual(a.clone()).join(&Dual(b.clone()));
//! assert_eq!(d, Dual(a.meet(&b)));
//! ```

mod comb;
mod dual;
pub mod laws;
mod monoid;
mod primitives;
pub mod reduce;
mod semigroup;

pub use comb::Comb;
pub use dual::Dual;
pub use monoid::CommutativeMonoid;
pub use monoid::Monoid;
pub use primitives::Max;
pub use primitives::Min;
pub use semigroup::Semigroup;

// JoinSemilattice

/// A **join-semilattice**: a type with an associative, commutative,
/// and idempotent binary operation (the join).
///
/// Laws (not enforced by type system):
///
/// - **Associative**: `a.join(b).join(c) == a.join(b.join(c))`
/// - **Commutative**: `a.join(b) == b.join(a)`
/// - **Idempotent**: `a.join(a) == a`
///
/// If the type is also a [`LowerBound`], `bottom()` must be a
/// two-sided identity for `join`. If it is also an [`UpperBound`],
/// `top()` must absorb: `top().join(a) == top()`.
///
/// # Example
///
/// ```rust
/// use semilattice::JoinSemilattice;
/// use semilattice::Max;
///
/// let a = Max(3);
/// let b = Max(5);
///
/// // join = max
/// assert_eq!(a.join(&b), Max(5));
///
/// // Idempotent
/// assert_eq!(a.join(&a), a);
/// ```
pub trait JoinSemilattice: Sized {
    /// The join (least upper bound).
    fn join(&self, other: &Self) -> Self;

    /// In-place variant.
    fn join_assign(&mut self, other: &Self) {
        *self = self.join(other);
    }

    /// Derived partial order: x ≤ y iff x ⊔ y = y.
    fn leq(&self, other: &Self) -> bool
    where
        Self: PartialEq,
    {
        self.join(other) == *other
    }

    /// Join a finite iterator of values. Returns `None` for empty
    /// iterators.
    fn join_all<I>(it: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        it.into_iter().reduce(|acc, x| acc.join(&x))
    }
}

// MeetSemilattice

/// A **meet-semilattice**: the dual of [`JoinSemilattice`].
///
/// Laws (not enforced by type system):
///
/// - **Associative**: `a.meet(b).meet(c) == a.meet(b.meet(c))`
/// - **Commutative**: `a.meet(b) == b.meet(a)`
/// - **Idempotent**: `a.meet(a) == a`
///
/// If the type is also an [`UpperBound`], `top()` must be a
/// two-sided identity for `meet`. If it is also a [`LowerBound`],
/// `bottom()` must absorb: `bottom().meet(a) == bottom()`.
///
/// # Example
///
/// ```rust
/// use semilattice::MeetSemilattice;
/// use semilattice::Min;
///
/// assert_eq!(Min(3).meet(&Min(5)), Min(3));
/// assert_eq!(true.meet(&false), false);
/// ```
pub trait MeetSemilattice: Sized {
    /// The meet (greatest lower bound).
    fn meet(&self, other: &Self) -> Self;

    /// In-place variant.
    fn meet_assign(&mut self, other: &Self) {
        *self = self.meet(other);
    }

    /// Derived partial order: x ≥ y iff x ⊓ y = y.
    fn geq(&self, other: &Self) -> bool
    where
        Self: PartialEq,
    {
        self.meet(other) == *other
    }

    /// Meet a finite iterator of values. Returns `None` for empty
    /// iterators.
    fn meet_all<I>(it: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        it.into_iter().reduce(|acc, x| acc.meet(&x))
    }
}

// Bounds

/// A type with a least element (⊥).
///
/// For a totally ordered type, `bottom()` must compare ≤ every
/// value. Only types with a statically known minimum may implement
/// this; unbounded numbers must not.
pub trait LowerBound {
    /// The bottom element.
    fn bottom() -> Self;
}

/// A type with a greatest element (⊤).
///
/// For a totally ordered type, `top()` must compare ≥ every value.
pub trait UpperBound {
    /// The top element.
    fn top() -> Self;
}

/// A join-semilattice with a bottom element that is the identity for
/// join. Implemented for every `JoinSemilattice + LowerBound`.
pub trait BoundedJoinSemilattice: JoinSemilattice + LowerBound {
    /// Join a finite iterator of values, starting from ⊥.
    ///
    /// Never returns `None`: an empty iterator produces `bottom()`.
    fn join_all_from_bottom<I>(it: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        it.into_iter().fold(Self::bottom(), |acc, x| acc.join(&x))
    }
}

impl<T: JoinSemilattice + LowerBound> BoundedJoinSemilattice for T {}

/// A meet-semilattice with a top element that is the identity for
/// meet. Implemented for every `MeetSemilattice + UpperBound`.
pub trait BoundedMeetSemilattice: MeetSemilattice + UpperBound {
    /// Meet a finite iterator of values, starting from ⊤.
    fn meet_all_from_top<I>(it: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        it.into_iter().fold(Self::top(), |acc, x| acc.meet(&x))
    }
}

impl<T: MeetSemilattice + UpperBound> BoundedMeetSemilattice for T {}

// Free-function forms

/// `a ⊔ b`.
pub fn join<S: JoinSemilattice>(a: &S, b: &S) -> S {
    a.join(b)
}

/// `a ⊓ b`.
pub fn meet<S: MeetSemilattice>(a: &S, b: &S) -> S {
    a.meet(b)
}

/// ⊥ of `S`.
pub fn bottom<S: LowerBound>() -> S {
    S::bottom()
}

/// ⊤ of `S`.
pub fn top<S: UpperBound>() -> S {
    S::top()
}

// Tests
