/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Law checkers for instance tests.
//!
//! The capability traits cannot enforce their laws, and nothing in
//! this crate checks them at call time. These functions check them on
//! sample values, so an instance's test suite (typically a `proptest`
//! property) can feed them arbitrary inputs:
//!
//! ```
//! use semilattice::Max;
//! use semilattice::laws;
//!
//! let (a, b, c) = (Max(1u8), Max(9), Max(4));
//! assert_eq!(laws::check_join(&a, &b, &c), Ok(()));
//! assert_eq!(laws::check_join_identity(&a), Ok(()));
//! ```
//!
//! | Law | Checker |
//! |---|---|
//! | idempotent, commutative, associative `join` | [`check_join`] |
//! | same for `meet` | [`check_meet`] |
//! | `bottom` is the identity for `join` | [`check_join_identity`] |
//! | `top` is the identity for `meet` | [`check_meet_identity`] |
//! | `top` absorbs `join` | [`check_join_absorbing_top`] |
//! | `bottom` absorbs `meet` | [`check_meet_absorbing_bottom`] |
//! | associative `combine` with two-sided `empty` | [`check_monoid`] |
//! | same, plus commutative | [`check_commutative_monoid`] |
//! | `Dual` join/meet agree with the base meet/join | [`check_dual_join`], [`check_dual_meet`] |

use std::fmt::Debug;

use crate::CommutativeMonoid;
use crate::Dual;
use crate::JoinSemilattice;
use crate::LowerBound;
use crate::MeetSemilattice;
use crate::Monoid;
use crate::UpperBound;

/// A law that failed on specific inputs. Inputs are rendered with
/// `Debug`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LawViolation {
    /// `op(a, a) != a`.
    #[error("{op} is not idempotent on {value}")]
    NotIdempotent {
        /// The operation.
        op: &'static str,
        /// The input.
        value: String,
    },

    /// `op(a, b) != op(b, a)`.
    #[error("{op} is not commutative on ({a}, {b})")]
    NotCommutative {
        /// The operation.
        op: &'static str,
        /// First input.
        a: String,
        /// Second input.
        b: String,
    },

    /// `op(op(a, b), c) != op(a, op(b, c))`.
    #[error("{op} is not associative on ({a}, {b}, {c})")]
    NotAssociative {
        /// The operation.
        op: &'static str,
        /// First input.
        a: String,
        /// Second input.
        b: String,
        /// Third input.
        c: String,
    },

    /// `op(identity, a) != a`.
    #[error("{identity} is not a left identity for {op} on {value}")]
    LeftIdentity {
        /// The operation.
        op: &'static str,
        /// The claimed identity element.
        identity: &'static str,
        /// The input.
        value: String,
    },

    /// `op(a, identity) != a`.
    #[error("{identity} is not a right identity for {op} on {value}")]
    RightIdentity {
        /// The operation.
        op: &'static str,
        /// The claimed identity element.
        identity: &'static str,
        /// The input.
        value: String,
    },

    /// `op(element, a) != element` or `op(a, element) != element`.
    #[error("{element} does not absorb {value} under {op}")]
    NotAbsorbing {
        /// The operation.
        op: &'static str,
        /// The claimed absorbing element.
        element: &'static str,
        /// The input.
        value: String,
    },

    /// `Dual(a) op Dual(b) != Dual(a op' b)` for the swapped `op'`.
    #[error("{op} on Dual disagrees with the base type on ({a}, {b})")]
    DualMismatch {
        /// The operation on the dual.
        op: &'static str,
        /// First input.
        a: String,
        /// Second input.
        b: String,
    },
}

fn show<T: Debug>(value: &T) -> String {
    format!("{:?}", value)
}

fn check_semilattice<S, F>(
    op: &'static str,
    f: F,
    a: &S,
    b: &S,
    c: &S,
) -> Result<(), LawViolation>
where
    S: PartialEq + Debug,
    F: Fn(&S, &S) -> S,
{
    for x in [a, b, c] {
        if f(x, x) != *x {
            return Err(LawViolation::NotIdempotent { op, value: show(x) });
        }
    }
    if f(a, b) != f(b, a) {
        return Err(LawViolation::NotCommutative {
            op,
            a: show(a),
            b: show(b),
        });
    }
    check_associative(op, f, a, b, c)
}

fn check_associative<S, F>(
    op: &'static str,
    f: F,
    a: &S,
    b: &S,
    c: &S,
) -> Result<(), LawViolation>
where
    S: PartialEq + Debug,
    F: Fn(&S, &S) -> S,
{
    if f(&f(a, b), c) != f(a, &f(b, c)) {
        return Err(LawViolation::NotAssociative {
            op,
            a: show(a),
            b: show(b),
            c: show(c),
        });
    }
    Ok(())
}

fn check_identity<S, F>(
    op: &'static str,
    identity: &'static str,
    f: F,
    e: &S,
    a: &S,
) -> Result<(), LawViolation>
where
    S: PartialEq + Debug,
    F: Fn(&S, &S) -> S,
{
    if f(e, a) != *a {
        return Err(LawViolation::LeftIdentity {
            op,
            identity,
            value: show(a),
        });
    }
    if f(a, e) != *a {
        return Err(LawViolation::RightIdentity {
            op,
            identity,
            value: show(a),
        });
    }
    Ok(())
}

fn check_absorbing<S, F>(
    op: &'static str,
    element: &'static str,
    f: F,
    z: &S,
    a: &S,
) -> Result<(), LawViolation>
where
    S: PartialEq + Debug,
    F: Fn(&S, &S) -> S,
{
    if f(z, a) != *z || f(a, z) != *z {
        return Err(LawViolation::NotAbsorbing {
            op,
            element,
            value: show(a),
        });
    }
    Ok(())
}

/// Check that `join` is idempotent on each input, commutative on
/// `(a, b)` and associative on `(a, b, c)`.
pub fn check_join<S>(a: &S, b: &S, c: &S) -> Result<(), LawViolation>
where
    S: JoinSemilattice + PartialEq + Debug,
{
    check_semilattice("join", S::join, a, b, c)
}

/// Check that `meet` is idempotent on each input, commutative on
/// `(a, b)` and associative on `(a, b, c)`.
pub fn check_meet<S>(a: &S, b: &S, c: &S) -> Result<(), LawViolation>
where
    S: MeetSemilattice + PartialEq + Debug,
{
    check_semilattice("meet", S::meet, a, b, c)
}

/// Check `bottom().join(a) == a == a.join(bottom())`.
pub fn check_join_identity<S>(a: &S) -> Result<(), LawViolation>
where
    S: JoinSemilattice + LowerBound + PartialEq + Debug,
{
    check_identity("join", "bottom", S::join, &S::bottom(), a)
}

/// Check `top().meet(a) == a == a.meet(top())`.
pub fn check_meet_identity<S>(a: &S) -> Result<(), LawViolation>
where
    S: MeetSemilattice + UpperBound + PartialEq + Debug,
{
    check_identity("meet", "top", S::meet, &S::top(), a)
}

/// Check `top().join(a) == top() == a.join(top())`.
pub fn check_join_absorbing_top<S>(a: &S) -> Result<(), LawViolation>
where
    S: JoinSemilattice + UpperBound + PartialEq + Debug,
{
    check_absorbing("join", "top", S::join, &S::top(), a)
}

/// Check `bottom().meet(a) == bottom() == a.meet(bottom())`.
pub fn check_meet_absorbing_bottom<S>(a: &S) -> Result<(), LawViolation>
where
    S: MeetSemilattice + LowerBound + PartialEq + Debug,
{
    check_absorbing("meet", "bottom", S::meet, &S::bottom(), a)
}

/// Check that `combine` is associative on `(a, b, c)` and that
/// `empty()` is a two-sided identity for each input.
pub fn check_monoid<M>(a: &M, b: &M, c: &M) -> Result<(), LawViolation>
where
    M: Monoid + PartialEq + Debug,
{
    check_associative("combine", M::combine, a, b, c)?;
    let empty = M::empty();
    for x in [a, b, c] {
        check_identity("combine", "empty", M::combine, &empty, x)?;
    }
    Ok(())
}

/// [`check_monoid`], plus commutativity of `combine` on `(a, b)`.
pub fn check_commutative_monoid<M>(a: &M, b: &M, c: &M) -> Result<(), LawViolation>
where
    M: CommutativeMonoid + PartialEq + Debug,
{
    check_monoid(a, b, c)?;
    if a.combine(b) != b.combine(a) {
        return Err(LawViolation::NotCommutative {
            op: "combine",
            a: show(a),
            b: show(b),
        });
    }
    Ok(())
}

/// Check `Dual(a).join(&Dual(b)) == Dual(a.meet(b))`.
pub fn check_dual_join<S>(a: &S, b: &S) -> Result<(), LawViolation>
where
    S: MeetSemilattice + Clone + PartialEq + Debug,
{
    if Dual(a.clone()).join(&Dual(b.clone())) != Dual(a.meet(b)) {
        return Err(LawViolation::DualMismatch {
            op: "join",
            a: show(a),
            b: show(b),
        });
    }
    Ok(())
}

/// Check `Dual(a).meet(&Dual(b)) == Dual(a.join(b))`.
pub fn check_dual_meet<S>(a: &S, b: &S) -> Result<(), LawViolation>
where
    S: JoinSemilattice + Clone + PartialEq + Debug,
{
    if Dual(a.clone()).meet(&Dual(b.clone())) != Dual(a.join(b)) {
        return Err(LawViolation::DualMismatch {
            op: "meet",
            a: show(a),
            b: show(b),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Max;
    use crate::Semigroup;

    /// Wrapping addition: a lawful monoid but not a semilattice.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Add(u8);

    impl JoinSemilattice for Add {
        fn join(&self, other: &Self) -> Self {
            Add(self.0.wrapping_add(other.0))
        }
    }

    impl Semigroup for Add {
        fn combine(&self, other: &Self) -> Self {
            Add(self.0.wrapping_add(other.0))
        }
    }

    impl Monoid for Add {
        fn empty() -> Self {
            Add(0)
        }
    }

    /// Left projection: idempotent and associative, not commutative.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct First(u8);

    impl JoinSemilattice for First {
        fn join(&self, _other: &Self) -> Self {
            *self
        }
    }

    /// Subtraction: not associative.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Sub(i32);

    impl Semigroup for Sub {
        fn combine(&self, other: &Self) -> Self {
            Sub(self.0 - other.0)
        }
    }

    impl Monoid for Sub {
        fn empty() -> Self {
            Sub(0)
        }
    }

    /// `max` with a bogus bottom.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct BadBottom(u8);

    impl JoinSemilattice for BadBottom {
        fn join(&self, other: &Self) -> Self {
            BadBottom(self.0.max(other.0))
        }
    }

    impl LowerBound for BadBottom {
        fn bottom() -> Self {
            BadBottom(5)
        }
    }

    #[test]
    fn lawful_instances_pass() {
        assert_eq!(check_join(&Max(1), &Max(3), &Max(2)), Ok(()));
        assert_eq!(check_meet(&true, &false, &true), Ok(()));
        assert_eq!(check_join_identity(&Max(7u8)), Ok(()));
        assert_eq!(check_meet_identity(&false), Ok(()));
        assert_eq!(check_join_absorbing_top(&false), Ok(()));
        assert_eq!(check_meet_absorbing_bottom(&true), Ok(()));
        assert_eq!(check_monoid(&Add(1), &Add(200), &Add(100)), Ok(()));
        assert_eq!(check_dual_join(&true, &false), Ok(()));
        assert_eq!(check_dual_meet(&Max(2), &Max(6)), Ok(()));
    }

    #[test]
    fn detects_non_idempotent_join() {
        assert_eq!(
            check_join(&Add(1), &Add(0), &Add(0)),
            Err(LawViolation::NotIdempotent {
                op: "join",
                value: "Add(1)".to_string(),
            })
        );
    }

    #[test]
    fn detects_non_commutative_join() {
        let err = check_join(&First(1), &First(2), &First(3)).unwrap_err();
        assert_eq!(
            err,
            LawViolation::NotCommutative {
                op: "join",
                a: "First(1)".to_string(),
                b: "First(2)".to_string(),
            }
        );
    }

    #[test]
    fn detects_non_associative_combine() {
        let err = check_monoid(&Sub(1), &Sub(2), &Sub(3)).unwrap_err();
        assert!(matches!(err, LawViolation::NotAssociative { op: "combine", .. }));
        assert_eq!(
            err.to_string(),
            "combine is not associative on (Sub(1), Sub(2), Sub(3))"
        );
    }

    #[test]
    fn detects_bad_identity() {
        assert_eq!(
            check_join_identity(&BadBottom(2)),
            Err(LawViolation::LeftIdentity {
                op: "join",
                identity: "bottom",
                value: "BadBottom(2)".to_string(),
            })
        );
        assert_eq!(check_join_identity(&BadBottom(9)), Ok(()));
    }

    #[test]
    fn detects_non_absorbing_element() {
        // bottom of BadBottom is 5, which does not absorb join.
        let err = check_absorbing("join", "bottom", BadBottom::join, &BadBottom(5), &BadBottom(7))
            .unwrap_err();
        assert_eq!(err.to_string(), "bottom does not absorb BadBottom(7) under join");
    }
}
