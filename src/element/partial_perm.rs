// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partial permutations: injective maps from a subset of `0..n` into `0..n`.

use crate::element::{Element, MAX_DEGREE};
use crate::errors::{KoniecznyError, Result};
use std::fmt;
use std::ops::Mul;

/// A partial permutation stored as its list of images, `None` where undefined.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartialPerm(Vec<Option<u8>>);

impl PartialPerm {
    /// Create a partial permutation, checking range and injectivity.
    pub fn new(images: Vec<Option<u8>>) -> Result<Self> {
        let degree = images.len();
        if degree > MAX_DEGREE {
            return Err(KoniecznyError::DegreeTooLarge {
                degree,
                max: MAX_DEGREE,
            });
        }
        let mut hit = vec![false; degree];
        for (point, image) in images.iter().enumerate() {
            let Some(image) = image.map(usize::from) else {
                continue;
            };
            if image >= degree {
                return Err(KoniecznyError::ImageOutOfRange {
                    point,
                    image,
                    degree,
                });
            }
            if hit[image] {
                return Err(KoniecznyError::NotInjective { image });
            }
            hit[image] = true;
        }
        Ok(Self(images))
    }

    pub fn images(&self) -> &[Option<u8>] {
        &self.0
    }

    pub fn apply(&self, point: usize) -> Option<usize> {
        self.0[point].map(usize::from)
    }

    /// Number of points in the domain.
    pub fn rank(&self) -> usize {
        self.0.iter().filter(|image| image.is_some()).count()
    }
}

impl Element for PartialPerm {
    fn degree(&self) -> usize {
        self.0.len()
    }

    fn identity(degree: usize) -> Self {
        debug_assert!(degree <= MAX_DEGREE);
        Self((0..degree).map(|i| Some(i as u8)).collect())
    }

    fn redefine(&mut self, x: &Self, y: &Self) {
        debug_assert_eq!(x.degree(), y.degree());
        self.0.clear();
        self.0
            .extend(x.0.iter().map(|image| image.and_then(|i| y.0[i as usize])));
    }
}

impl Mul for &PartialPerm {
    type Output = PartialPerm;

    fn mul(self, rhs: Self) -> PartialPerm {
        PartialPerm::product(self, rhs)
    }
}

impl fmt::Display for PartialPerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, image) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            match image {
                Some(image) => write!(f, "{}", image)?,
                None => write!(f, "-")?,
            }
        }
        write!(f, "]")
    }
}
