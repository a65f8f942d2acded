/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Order-independent reduction over monoids.
//!
//! Everything here is written against [`Monoid`] alone. To reduce a
//! bounded join-semilattice, wrap it in [`Comb`]; [`join_all_unordered`]
//! does that for you.

use std::mem;

use crate::Comb;
use crate::JoinSemilattice;
use crate::LowerBound;
use crate::Monoid;

/// Errors from reduction helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ReduceError {
    /// A tree reduction needs to combine at least two partial results
    /// per node to make progress.
    #[error("invalid fan-in {fan_in}: must be at least 2")]
    InvalidFanIn {
        /// The configured fan-in.
        fan_in: usize,
    },
}

/// Options for [`tree_reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceOpts {
    /// How many partial results are combined into one at each level
    /// of the tree.
    pub fan_in: usize,
}

impl Default for ReduceOpts {
    fn default() -> Self {
        Self { fan_in: 2 }
    }
}

/// Reduce `items` as a balanced tree: each level combines consecutive
/// chunks of `opts.fan_in` partial results, until one remains. Empty
/// input yields `M::empty()`.
///
/// The tree shape is fixed by the input length and fan-in. Since the
/// monoid is associative, the result equals a left fold over the
/// same items.
///
/// # Example
///
/// ```
/// use semilattice::Comb;
/// use semilattice::Max;
/// use semilattice::reduce::ReduceOpts;
/// use semilattice::reduce::tree_reduce;
///
/// let items = (1..=10u32).map(|x| Comb::wrap(Max(x)));
/// let out = tree_reduce(items, &ReduceOpts { fan_in: 3 }).unwrap();
/// assert_eq!(out.unwrap(), Max(10));
/// ```
pub fn tree_reduce<M, I>(items: I, opts: &ReduceOpts) -> Result<M, ReduceError>
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    let fan_in = opts.fan_in;
    if fan_in < 2 {
        return Err(ReduceError::InvalidFanIn { fan_in });
    }

    let mut level: Vec<M> = items.into_iter().collect();
    tracing::debug!(items = level.len(), fan_in, "starting tree reduction");

    let mut depth = 0usize;
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(fan_in));
        let mut rest = level.into_iter();
        while let Some(partial) = rest
            .by_ref()
            .take(fan_in)
            .reduce(|acc, x| acc.combine(&x))
        {
            next.push(partial);
        }
        depth += 1;
        tracing::trace!(level = depth, partials = next.len(), "reduced tree level");
        level = next;
    }

    Ok(level.pop().unwrap_or_else(M::empty))
}

/// Join any number of values in whatever order they come, starting
/// from bottom.
pub fn join_all_unordered<S, I>(values: I) -> S
where
    S: JoinSemilattice + LowerBound,
    I: IntoIterator<Item = S>,
{
    Comb::unwrap(Comb::concat(values.into_iter().map(Comb::wrap)))
}

/// A streaming accumulator: absorbs updates one at a time into a
/// running monoid state.
///
/// With a [`CommutativeMonoid`](crate::CommutativeMonoid) such as
/// [`Comb`], updates may arrive in any order; with `Comb` they may
/// also arrive more than once.
#[derive(Debug, Clone)]
pub struct Reducer<M> {
    state: M,
    absorbed: usize,
}

impl<M: Monoid> Reducer<M> {
    /// A reducer holding `M::empty()`.
    pub fn new() -> Self {
        Self {
            state: M::empty(),
            absorbed: 0,
        }
    }

    /// Combine `update` into the running state.
    pub fn accumulate(&mut self, update: M) {
        self.state.combine_assign(&update);
        self.absorbed += 1;
    }

    /// Number of updates absorbed since the last flush.
    pub fn len(&self) -> usize {
        self.absorbed
    }

    /// True if nothing was absorbed since the last flush.
    pub fn is_empty(&self) -> bool {
        self.absorbed == 0
    }

    /// The running state.
    pub fn state(&self) -> &M {
        &self.state
    }

    /// Take the running state, leaving `M::empty()` behind.
    pub fn flush(&mut self) -> M {
        tracing::debug!(updates = self.absorbed, "flushing reducer");
        self.absorbed = 0;
        mem::replace(&mut self.state, M::empty())
    }
}

impl<M: Monoid> Default for Reducer<M> {
    fn default() -> Self {
        Self::new()
    }
}
