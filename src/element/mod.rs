// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Semigroup element types.
//!
//! This module contains the concrete element kinds the engine is generic over:
//! - Transformation: total maps on `0..n`
//! - PartialPerm: injective partial maps on `0..n`
//! - BooleanMat: square matrices over the boolean semiring
//! - PointSet: bitset of points, shared by the orbit value types
//!
//! Products are written left to right: `product(x, y)` applies `x` first.

pub mod boolean_mat;
pub mod partial_perm;
pub mod point_set;
pub mod transformation;

use std::fmt::Debug;
use std::hash::Hash;

pub use boolean_mat::{BooleanMat, MAX_SEMIGROUP_DIM};
pub use partial_perm::PartialPerm;
pub use point_set::{PointSet, MAX_POINTS};
pub use transformation::Transformation;

/// Points of transformations and partial permutations are stored as `u8`,
/// which bounds their degree.
pub const MAX_DEGREE: usize = u8::MAX as usize + 1;

/// An element of a finite semigroup of fixed degree.
///
/// `Ord` is only used to give sets of elements a canonical order.
pub trait Element: Clone + Eq + Ord + Hash + Debug {
    /// The number of points the element acts on (or the matrix dimension).
    fn degree(&self) -> usize;

    /// The identity of the full monoid of the given degree.
    fn identity(degree: usize) -> Self;

    /// Overwrite `self` with the product `x * y`.
    ///
    /// `self` may not alias `x` or `y`, which the borrow checker enforces.
    fn redefine(&mut self, x: &Self, y: &Self);

    fn product(x: &Self, y: &Self) -> Self {
        let mut out = x.clone();
        out.redefine(x, y);
        out
    }

    fn is_idempotent(&self) -> bool {
        Self::product(self, self) == *self
    }
}

/// The inverse of `x` in the group H-class whose identity is `id`.
///
/// `x` must lie in that H-class, otherwise this never returns.
pub fn group_inverse<E: Element>(id: &E, x: &E) -> E {
    let mut tmp = x.clone();
    let mut y = x.clone();
    loop {
        y.clone_from(&tmp);
        tmp.redefine(x, &y);
        if tmp == *id {
            return y;
        }
    }
}

/// The idempotent power of `x`.
pub fn idempotent_power<E: Element>(x: &E) -> E {
    let mut tmp = x.clone();
    let mut square = x.clone();
    loop {
        square.redefine(&tmp, &tmp);
        if square == tmp {
            return tmp;
        }
        square.redefine(&tmp, x);
        std::mem::swap(&mut tmp, &mut square);
    }
}
