// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for semigroup construction and queries.

use thiserror::Error;

/// Which of the two orbits a value was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitKind {
    Lambda,
    Rho,
}

/// Errors reported by element constructors, D-class constructors and the
/// [`Konieczny`](crate::engine::Konieczny) engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KoniecznyError {
    /// A semigroup needs at least one generator.
    #[error("no generators given")]
    EmptyGenerators,

    /// Generator `index` does not have the degree of the first generator.
    #[error("generator {index} has degree {found}, expected {expected}")]
    DegreeMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// The degree exceeds what the element type stores, or what the engine
    /// accepts for it.
    #[error("degree {degree} exceeds the maximum supported degree {max}")]
    DegreeTooLarge { degree: usize, max: usize },

    /// An element constructor was given an image outside `0..degree`.
    #[error("image {image} of point {point} is out of range for degree {degree}")]
    ImageOutOfRange {
        point: usize,
        image: usize,
        degree: usize,
    },

    /// A partial permutation maps two points to `image`.
    #[error("partial permutation is not injective: {image} is hit twice")]
    NotInjective { image: usize },

    /// A boolean matrix row has a bit set at or beyond the dimension.
    #[error("row {row} has entries outside dimension {dim}")]
    RowOutOfRange { row: usize, dim: usize },

    /// A regular D-class must be built from an idempotent.
    #[error("representative of a regular D-class must be idempotent")]
    NotIdempotent,

    /// A non-regular D-class cannot be built from an idempotent.
    #[error("representative of a non-regular D-class must not be idempotent")]
    UnexpectedIdempotent,

    /// The element does not belong to the semigroup.
    #[error("element does not belong to the semigroup")]
    NotInSemigroup,

    /// Bounds-checked orbit access.
    #[error("index {index} out of range for orbit of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The value of a semigroup element is missing from its orbit.
    #[error("{orbit:?} value is missing from its orbit")]
    ValueNotInOrbit { orbit: OrbitKind },

    /// No regular D-class provides an idempotent fixing a non-regular
    /// representative on the given side.
    #[error("no idempotent above the non-regular representative")]
    NoIdempotentAbove,
}

pub type Result<T> = std::result::Result<T, KoniecznyError>;
