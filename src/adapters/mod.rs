// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lambda / Rho / rank adapters.
//!
//! For each element kind the engine needs:
//! - a Lambda value, invariant on L-classes of the full monoid, acted on from the right
//! - a Rho value, invariant on R-classes of the full monoid, acted on from the left
//! - a rank, constant on D-classes and non-increasing under products
//! - a test whether the H-class with given Rho and Lambda values is a group
//!
//! | kind           | Lambda          | Rho                      | rank             |
//! |----------------|-----------------|--------------------------|------------------|
//! | Transformation | image set       | kernel labelling         | image size       |
//! | PartialPerm    | image set       | domain set               | domain size      |
//! | BooleanMat     | row-space basis | column-space basis       | row-space size   |

pub mod boolean_mat;
pub mod partial_perm;
pub mod transformation;

use crate::element::{Element, MAX_POINTS};
use crate::errors::{KoniecznyError, Result};
use crate::orbit::Action;
use std::fmt::Debug;
use std::hash::Hash;

pub use boolean_mat::{ColumnSpaceAction, RowSpaceAction};
pub use partial_perm::{DomainAction, PartialImageAction};
pub use transformation::{ImageAction, KernelAction};

/// Everything the Konieczny engine needs to know about an element kind.
pub trait KoniecznyAdapter: Element {
    type Lambda: Clone + Eq + Hash + Debug + Default;
    type Rho: Clone + Eq + Hash + Debug + Default;
    type LambdaAction: Action<Self, Self::Lambda>;
    type RhoAction: Action<Self, Self::Rho>;

    fn lambda(x: &Self) -> Self::Lambda;

    fn rho(x: &Self) -> Self::Rho;

    fn rank(x: &Self) -> usize;

    /// True if the H-class of the full monoid with these values contains an idempotent.
    fn is_group_index(rho: &Self::Rho, lambda: &Self::Lambda) -> bool;

    /// Reject elements whose values do not fit the 64-point representation.
    fn validate(x: &Self) -> Result<()> {
        if x.degree() > MAX_POINTS {
            return Err(KoniecznyError::DegreeTooLarge {
                degree: x.degree(),
                max: MAX_POINTS,
            });
        }
        Ok(())
    }

    /// True if `x` has the rank of the identity.
    fn is_unit(x: &Self) -> bool {
        Self::rank(x) == Self::rank(&Self::identity(x.degree()))
    }
}
