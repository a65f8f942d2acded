/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Semigroup: the "associative combine" half of the shape reduction
//! code consumes.

/// A type with an associative binary operation.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `a.combine(b).combine(c) == a.combine(b.combine(c))`
///
/// Semilattices are not automatically semigroups. Wrap a
/// [`JoinSemilattice`](crate::JoinSemilattice) in [`Comb`](crate::Comb)
/// to hand it to code written against this trait.
///
/// # Example
///
/// ```rust
/// use semilattice::Semigroup;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// struct Concat(u64, u32);
///
/// // Decimal digit concatenation: (value, digit count).
/// impl Semigroup for Concat {
///     fn combine(&self, other: &Self) -> Self {
///         Concat(self.0 * 10u64.pow(other.1) + other.0, self.1 + other.1)
///     }
/// }
///
/// let x = Concat(1, 1);
/// let y = Concat(23, 2);
/// let z = Concat(4, 1);
/// assert_eq!(x.combine(&y).combine(&z), x.combine(&y.combine(&z)));
/// assert_eq!(x.combine(&y), Concat(123, 3));
/// ```
pub trait Semigroup: Sized {
    /// Combine two values associatively.
    fn combine(&self, other: &Self) -> Self;

    /// In-place variant of combine.
    fn combine_assign(&mut self, other: &Self) {
        *self = self.combine(other);
    }
}
