// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Transformations: total maps from `0..n` to itself.
//!
//! ```
//! use konieczny::element::{Element, Transformation};
//!
//! let x = Transformation::new(vec![1, 0, 2]).unwrap();
//! let y = Transformation::new(vec![0, 0, 2]).unwrap();
//! // x is applied first: 0 -> 1 -> 0, 1 -> 0 -> 0, 2 -> 2 -> 2.
//! assert_eq!(&x * &y, Transformation::new(vec![0, 0, 2]).unwrap());
//! ```

use crate::element::{Element, MAX_DEGREE};
use crate::errors::{KoniecznyError, Result};
use std::fmt;
use std::ops::Mul;

/// A transformation stored as its list of images.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transformation(Vec<u8>);

impl Transformation {
    /// Create a transformation, checking every image is below the degree.
    pub fn new(images: Vec<u8>) -> Result<Self> {
        let degree = images.len();
        if degree > MAX_DEGREE {
            return Err(KoniecznyError::DegreeTooLarge {
                degree,
                max: MAX_DEGREE,
            });
        }
        if let Some((point, &image)) = images
            .iter()
            .enumerate()
            .find(|&(_, &image)| image as usize >= degree)
        {
            return Err(KoniecznyError::ImageOutOfRange {
                point,
                image: image as usize,
                degree,
            });
        }
        Ok(Self(images))
    }

    pub fn images(&self) -> &[u8] {
        &self.0
    }

    /// Image of a single point.
    pub fn apply(&self, point: usize) -> usize {
        self.0[point] as usize
    }

    /// Number of distinct images.
    pub fn rank(&self) -> usize {
        let mut seen = vec![false; self.0.len()];
        let mut rank = 0;
        for &image in &self.0 {
            if !seen[image as usize] {
                seen[image as usize] = true;
                rank += 1;
            }
        }
        rank
    }
}

impl Element for Transformation {
    fn degree(&self) -> usize {
        self.0.len()
    }

    /// `degree` is at most [`MAX_DEGREE`].
    fn identity(degree: usize) -> Self {
        debug_assert!(degree <= MAX_DEGREE);
        Self((0..degree).map(|i| i as u8).collect())
    }

    fn redefine(&mut self, x: &Self, y: &Self) {
        debug_assert_eq!(x.degree(), y.degree());
        self.0.clear();
        self.0.extend(x.0.iter().map(|&i| y.0[i as usize]));
    }
}

impl Mul for &Transformation {
    type Output = Transformation;

    fn mul(self, rhs: Self) -> Transformation {
        Transformation::product(self, rhs)
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, image) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", image)?;
        }
        write!(f, "]")
    }
}
