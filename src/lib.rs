// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rust implementation of Konieczny's algorithm for the D-class structure of
//! finite semigroups.
//!
//! Given generators (transformations, partial permutations or boolean
//! matrices), the algorithm finds every D-class of the generated semigroup
//! together with its L-, R- and H-classes, without listing the elements.
//! Sizes, idempotent counts and membership then follow from the class
//! tables.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (fixed after the first step)
//!
//! - The working generators, with the identity adjoined when needed
//! - The Lambda orbit (right action, e.g. images) and Rho orbit (left
//!   action, e.g. kernels), with their strongly connected components and
//!   the multipliers moving each point to and from its component root
//!
//! ## Tier 2: DYNAMIC Data (grows during the run)
//!
//! - Group-index memo tables: which Lambda and Rho values form a group H-class
//! - The D-classes found so far and the pending covering representatives
//! - Statistics
//!
//! # Element kinds
//!
//! The engine is generic over [`adapters::KoniecznyAdapter`], which fixes
//! the Lambda and Rho values and actions of an element kind at compile time:
//! - [`Transformation`]: image set and kernel
//! - [`PartialPerm`]: image set and domain
//! - [`BooleanMat`]: row space and column space
//!
//! # Example
//!
//! ```
//! use konieczny::{Konieczny, PartialPerm};
//!
//! let pperm = |images: &[Option<u8>]| PartialPerm::new(images.to_vec()).unwrap();
//! let mut s = Konieczny::new(vec![
//!     pperm(&[Some(1), Some(0), Some(2)]),
//!     pperm(&[Some(1), Some(2), Some(0)]),
//!     pperm(&[None, Some(1), Some(2)]),
//! ])
//! .unwrap();
//! assert_eq!(s.size().unwrap(), 34);
//! ```
//!
//! # References
//!
//! - Konieczny, J. (1994). "Green's equivalences in finite semigroups of
//!   binary relations." Semigroup Forum 48, 235-252.
//! - East, J., Egri-Nagy, A., Mitchell, J. D., Péresse, Y. (2019). "Computing
//!   finite semigroups." Journal of Symbolic Computation 92, 110-155.

pub mod adapters;
pub mod config;
pub mod context;
pub mod dclass;
pub mod digraph;
pub mod element;
pub mod engine;
pub mod errors;
pub mod orbit;
pub mod statistics;

// Re-export commonly used types
pub use adapters::KoniecznyAdapter;
pub use config::{CoveringSide, KoniecznyConfig};
pub use dclass::{DClass, NonRegularDClass, RegularDClass};
pub use element::{BooleanMat, Element, PartialPerm, PointSet, Transformation};
pub use engine::{Konieczny, StepResult};
pub use errors::{KoniecznyError, Result};
pub use statistics::{Counters, Statistics};
